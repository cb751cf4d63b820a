//! UI configuration.
//!
//! Grid tunables come from [`GridConfig`]; the host page can override them by
//! embedding JSON in a `<script type="application/json">` element. Everything
//! else here is fixed presentation behaviour.

use pixelgrid_core::GridConfig;

/// Coalesce redraw requests arriving within one frame
pub const REDRAW_DEBOUNCE_MS: u32 = 16;

/// Element holding a partial `GridConfig` as JSON
pub const CONFIG_ELEMENT_ID: &str = "pixelgrid-config";
/// Element holding the sold regions as a JSON array
pub const REGIONS_ELEMENT_ID: &str = "pixelgrid-regions";
/// Fetched when the page does not embed the regions
pub const DEFAULT_REGIONS_URL: &str = "/api/sold-regions.json";

/// Read the text content of an embedded JSON script element, if present.
pub fn embedded_json(element_id: &str) -> Option<String> {
    let element = gloo_utils::document().get_element_by_id(element_id)?;
    let text = element.text_content()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Grid configuration with any page-supplied overrides applied.
pub fn load_grid_config() -> GridConfig {
    let Some(json) = embedded_json(CONFIG_ELEMENT_ID) else {
        return GridConfig::DEFAULT;
    };

    match GridConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Loaded grid config override: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("Ignoring malformed grid config: {}", e);
            GridConfig::DEFAULT
        }
    }
}
