//! Grid configuration.
//!
//! Every tunable of the canvas view lives here. The host may override any
//! subset of fields by supplying JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::image_fit::FitMode;

/// Configuration for the pixel grid canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Side length of the square logical grid
    pub grid_size: u32,
    /// Granularity selections are rounded to
    pub snap_unit: u32,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplier applied by the toolbar "zoom in" button
    pub zoom_in_step: f64,
    /// Multiplier applied by the toolbar "zoom out" button
    pub zoom_out_step: f64,
    /// Multiplier for a wheel tick scrolling up (negative deltaY)
    pub wheel_zoom_in: f64,
    /// Multiplier for a wheel tick scrolling down (positive deltaY)
    pub wheel_zoom_out: f64,
    /// Fraction of the viewport the grid occupies after fit-to-view
    pub fit_shrink: f64,
    /// Smallest grid-line spacing in logical units
    pub base_line_spacing: u32,
    /// Largest grid-line spacing in logical units
    pub max_line_spacing: u32,
    /// Grid lines closer than this on screen are coarsened
    pub min_screen_line_spacing: f64,
    /// Below this zoom no grid lines are drawn at all
    pub line_min_zoom: f64,
    /// Screen pixels of grid that must stay visible when panning
    pub pan_padding: f64,
    pub panning_enabled: bool,
    pub image_fit: FitMode,
}

impl GridConfig {
    pub const DEFAULT: GridConfig = GridConfig {
        grid_size: 1000,
        snap_unit: 10,
        min_zoom: 0.1,
        max_zoom: 50.0,
        zoom_in_step: 1.25,
        zoom_out_step: 0.8,
        wheel_zoom_in: 1.1,
        wheel_zoom_out: 0.9,
        fit_shrink: 0.9,
        base_line_spacing: 10,
        max_line_spacing: 1000,
        min_screen_line_spacing: 50.0,
        line_min_zoom: 0.01,
        pan_padding: 50.0,
        panning_enabled: true,
        image_fit: FitMode::Contain,
    };

    pub fn grid_size_f64(&self) -> f64 {
        self.grid_size as f64
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        if zoom.is_nan() {
            return self.min_zoom;
        }
        zoom.max(self.min_zoom).min(self.max_zoom)
    }

    /// Parse a partial override. Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: GridConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Repair inconsistent overrides instead of rejecting them.
    fn sanitized(mut self) -> Self {
        let defaults = Self::DEFAULT;
        if self.grid_size == 0 {
            self.grid_size = defaults.grid_size;
        }
        if self.snap_unit == 0 {
            self.snap_unit = defaults.snap_unit;
        }
        if self.min_zoom.is_nan() || self.min_zoom <= 0.0 {
            self.min_zoom = defaults.min_zoom;
        }
        if self.max_zoom.is_nan() || self.max_zoom < self.min_zoom {
            self.max_zoom = self.min_zoom.max(defaults.max_zoom);
        }
        if self.base_line_spacing == 0 {
            self.base_line_spacing = defaults.base_line_spacing;
        }
        if self.max_line_spacing < self.base_line_spacing {
            self.max_line_spacing = self.base_line_spacing;
        }
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
