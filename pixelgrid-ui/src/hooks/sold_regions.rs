// pixelgrid-ui/src/hooks/sold_regions.rs
//! Loading the sold-region list from the host page.

use leptos::*;
use pixelgrid_core::{parse_regions, retain_valid_regions, SoldRegion};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config::{embedded_json, DEFAULT_REGIONS_URL, REGIONS_ELEMENT_ID};
use crate::error::CanvasError;

/// Where the sold regions come from.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionSource {
    /// JSON array embedded in the page
    Inline(String),
    /// JSON array served at a URL
    Url(String),
    /// Regions already in memory
    Static(Vec<SoldRegion>),
}

impl RegionSource {
    /// The page's embedded regions if present, otherwise the default URL.
    pub fn from_page() -> Self {
        match embedded_json(REGIONS_ELEMENT_ID) {
            Some(json) => RegionSource::Inline(json),
            None => RegionSource::Url(DEFAULT_REGIONS_URL.to_string()),
        }
    }
}

async fn fetch_text(url: &str) -> Result<String, CanvasError> {
    let fetch_error = |reason: String| CanvasError::Fetch {
        url: url.to_string(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| fetch_error("No window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fetch_error(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| fetch_error("Not a Response".into()))?;

    if !response.ok() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| fetch_error("Body is not text".into()))
}

async fn load_regions(source: RegionSource, grid_size: u32) -> Result<Vec<SoldRegion>, CanvasError> {
    match source {
        RegionSource::Inline(json) => Ok(parse_regions(&json, grid_size)?),
        RegionSource::Url(url) => {
            let json = fetch_text(&url).await?;
            Ok(parse_regions(&json, grid_size)?)
        }
        RegionSource::Static(regions) => Ok(retain_valid_regions(regions, grid_size)),
    }
}

/// Load regions from `source` into a signal. The signal starts empty and is
/// replaced once loading finishes; failures are logged and leave it empty.
pub fn use_sold_regions(source: RegionSource, grid_size: u32) -> ReadSignal<Vec<SoldRegion>> {
    let (regions, set_regions) = create_signal(Vec::new());

    // In-memory regions need no round trip through the executor
    if let RegionSource::Static(static_regions) = source {
        set_regions.set(retain_valid_regions(static_regions, grid_size));
        return regions;
    }

    wasm_bindgen_futures::spawn_local(async move {
        match load_regions(source, grid_size).await {
            Ok(loaded) => {
                log::info!("Loaded {} sold regions", loaded.len());
                set_regions.try_set(loaded);
            }
            Err(e) => log::warn!("Failed to load sold regions: {}", e),
        }
    });

    regions
}
