use serde::{Deserialize, Serialize};

use crate::{GridConfig, Point};

/// Zoom/pan transform mapping logical grid space onto the canvas.
///
/// `screen = logical * zoom + pan`, with screen coordinates relative to the
/// canvas element's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub zoom: f64,
    pub pan: Point,
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        zoom: 1.0,
        pan: Point::ORIGIN,
    };

    pub fn new(zoom: f64, pan: Point) -> Self {
        Self { zoom, pan }
    }

    /// Map a canvas-local screen point to logical grid space, clamped to the grid.
    pub fn screen_to_logical(&self, screen: Point, grid_size: f64) -> Point {
        self.screen_to_logical_unclamped(screen).clamp(0.0, grid_size)
    }

    pub fn screen_to_logical_unclamped(&self, screen: Point) -> Point {
        (screen - self.pan).div_scalar(self.zoom)
    }

    pub fn logical_to_screen(&self, logical: Point) -> Point {
        logical.mul_scalar(self.zoom) + self.pan
    }

    /// Zoom by `factor`, keeping the logical point under `anchor` fixed on screen.
    ///
    /// The resulting zoom is clamped to the configured bounds, so the applied
    /// factor may be smaller than requested. The anchor stays fixed regardless.
    pub fn zoom_at(&self, factor: f64, anchor: Point, config: &GridConfig) -> Self {
        let new_zoom = config.clamp_zoom(self.zoom * factor);
        if new_zoom == self.zoom {
            return *self;
        }

        let logical_under_anchor = self.screen_to_logical_unclamped(anchor);
        Self {
            zoom: new_zoom,
            pan: anchor - logical_under_anchor.mul_scalar(new_zoom),
        }
    }

    /// Keep at least `pan_padding` screen pixels of the grid inside the viewport.
    ///
    /// Unknown viewport sizes (zero) leave the pan untouched. When the viewport
    /// is too small for the padding on both sides, the pan is pinned to the
    /// middle of the (inverted) range.
    pub fn clamp_pan(&self, canvas_size: (u32, u32), config: &GridConfig) -> Self {
        let (width, height) = canvas_size;
        if width == 0 || height == 0 {
            return *self;
        }

        let scaled_grid = config.grid_size_f64() * self.zoom;
        let padding = config.pan_padding;
        let clamp_axis = |pan: f64, extent: f64| {
            let min = padding - scaled_grid;
            let max = extent - padding;
            if min > max {
                (min + max) / 2.0
            } else {
                pan.clamp(min, max)
            }
        };

        Self {
            zoom: self.zoom,
            pan: Point::new(
                clamp_axis(self.pan.x, width as f64),
                clamp_axis(self.pan.y, height as f64),
            ),
        }
    }

    /// Zoom so the whole grid fits the canvas with a margin, then centre it.
    pub fn fit_to_view(canvas_size: (u32, u32), config: &GridConfig) -> Self {
        let (width, height) = (canvas_size.0 as f64, canvas_size.1 as f64);
        let grid = config.grid_size_f64();
        let zoom = config.clamp_zoom(width.min(height) / grid * config.fit_shrink);

        Self {
            zoom,
            pan: Point::new(
                (width - grid * zoom) / 2.0,
                (height - grid * zoom) / 2.0,
            ),
        }
    }

    /// Zoom as a whole-number percentage for display.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
