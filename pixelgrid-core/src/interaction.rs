//! Pan/zoom/select state machine for the canvas view.
//!
//! All transitions are synchronous and driven by the host's pointer and wheel
//! handlers. Every method that can change what is on screen returns whether
//! it did, so the host only schedules a redraw when needed.

use crate::{region_at, snap_selection, GridConfig, GridRect, Point, SoldRegion, ViewTransform};

/// Current pointer interaction. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionMode {
    Idle,
    /// Dragging the view. `grab_offset` is the pointer position minus the pan
    /// at the moment the drag started.
    Panning { grab_offset: Point },
    /// Drag-selecting. `anchor` is the logical point where the drag started;
    /// `selection` is the snapped rect for the latest pointer position.
    Selecting { anchor: Point, selection: GridRect },
}

impl InteractionMode {
    /// CSS cursor matching the mode.
    pub fn cursor(&self) -> &'static str {
        match self {
            InteractionMode::Idle => "grab",
            InteractionMode::Panning { .. } => "grabbing",
            InteractionMode::Selecting { .. } => "crosshair",
        }
    }
}

/// What a pointer-down turned into.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerDown {
    StartedPan,
    StartedSelection,
    /// The pointer landed on a sold region with a link; the host opens it.
    OpenLink(String),
    /// Another interaction is active, or panning is disabled.
    Ignored,
}

/// The canvas view's interaction and transform state.
#[derive(Clone, Debug)]
pub struct CanvasView {
    config: GridConfig,
    transform: ViewTransform,
    mode: InteractionMode,
    canvas_size: (u32, u32),
    has_fitted: bool,
}

impl CanvasView {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            transform: ViewTransform::IDENTITY,
            mode: InteractionMode::Idle,
            canvas_size: (0, 0),
            has_fitted: false,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    /// The in-progress selection, if a drag-select is active.
    pub fn selection(&self) -> Option<GridRect> {
        match self.mode {
            InteractionMode::Selecting { selection, .. } => Some(selection),
            _ => None,
        }
    }

    pub fn screen_to_logical(&self, screen: Point) -> Point {
        self.transform
            .screen_to_logical(screen, self.config.grid_size_f64())
    }

    /// Record a new canvas size. The first non-zero size fits the grid to the
    /// view; later sizes only re-apply the pan clamp.
    pub fn resize(&mut self, canvas_size: (u32, u32)) -> bool {
        if canvas_size == self.canvas_size {
            return false;
        }
        self.canvas_size = canvas_size;
        if canvas_size.0 == 0 || canvas_size.1 == 0 {
            return false;
        }

        if self.has_fitted {
            self.transform = self.transform.clamp_pan(canvas_size, &self.config);
        } else {
            self.has_fitted = true;
            self.transform = ViewTransform::fit_to_view(canvas_size, &self.config);
            log::debug!(
                "Initial fit for {}x{}: zoom={:.3}",
                canvas_size.0,
                canvas_size.1,
                self.transform.zoom
            );
        }
        true
    }

    pub fn pointer_down(
        &mut self,
        screen: Point,
        select_modifier: bool,
        regions: &[SoldRegion],
    ) -> PointerDown {
        if self.mode != InteractionMode::Idle {
            return PointerDown::Ignored;
        }

        if select_modifier {
            let anchor = self.screen_to_logical(screen);
            self.mode = InteractionMode::Selecting {
                anchor,
                selection: snap_selection(anchor, anchor, &self.config),
            };
            return PointerDown::StartedSelection;
        }

        // Unclamped, so a press just outside the grid never hits an edge region
        let logical = self.transform.screen_to_logical_unclamped(screen);
        if let Some(url) = region_at(regions, logical).and_then(|r| r.link_url.clone()) {
            return PointerDown::OpenLink(url);
        }

        if !self.config.panning_enabled {
            return PointerDown::Ignored;
        }

        self.mode = InteractionMode::Panning {
            grab_offset: screen - self.transform.pan,
        };
        PointerDown::StartedPan
    }

    pub fn pointer_move(&mut self, screen: Point) -> bool {
        match self.mode {
            InteractionMode::Idle => false,
            InteractionMode::Panning { grab_offset } => {
                let moved = ViewTransform::new(self.transform.zoom, screen - grab_offset)
                    .clamp_pan(self.canvas_size, &self.config);
                let changed = moved != self.transform;
                self.transform = moved;
                changed
            }
            InteractionMode::Selecting { anchor, selection } => {
                let current = self.screen_to_logical(screen);
                let snapped = snap_selection(anchor, current, &self.config);
                self.mode = InteractionMode::Selecting {
                    anchor,
                    selection: snapped,
                };
                snapped != selection
            }
        }
    }

    /// End the current interaction. Returns the finished selection when a
    /// drag-select with non-zero area just completed.
    pub fn pointer_up(&mut self) -> Option<GridRect> {
        let finished = std::mem::replace(&mut self.mode, InteractionMode::Idle);
        match finished {
            InteractionMode::Selecting { selection, .. } if !selection.is_empty() => {
                log::debug!("Selection complete: {:?}", selection);
                Some(selection)
            }
            _ => None,
        }
    }

    /// Leaving the canvas ends the interaction exactly like releasing the pointer.
    pub fn pointer_leave(&mut self) -> Option<GridRect> {
        self.pointer_up()
    }

    /// Wheel zoom anchored at the pointer. Only the sign of `delta_y` matters.
    pub fn wheel(&mut self, screen: Point, delta_y: f64) -> bool {
        let factor = if delta_y > 0.0 {
            self.config.wheel_zoom_out
        } else if delta_y < 0.0 {
            self.config.wheel_zoom_in
        } else {
            return false;
        };
        self.zoom_at(factor, screen)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_at(self.config.zoom_in_step, self.viewport_center())
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_at(self.config.zoom_out_step, self.viewport_center())
    }

    pub fn fit_to_view(&mut self) -> bool {
        if self.canvas_size.0 == 0 || self.canvas_size.1 == 0 {
            return false;
        }
        let fitted = ViewTransform::fit_to_view(self.canvas_size, &self.config);
        self.replace_transform(fitted)
    }

    /// Back to 100% at the origin, dropping any in-progress interaction.
    pub fn reset_view(&mut self) -> bool {
        let mode_changed = self.mode != InteractionMode::Idle;
        self.mode = InteractionMode::Idle;
        let reset = ViewTransform::IDENTITY.clamp_pan(self.canvas_size, &self.config);
        self.replace_transform(reset) || mode_changed
    }

    fn zoom_at(&mut self, factor: f64, anchor: Point) -> bool {
        let zoomed = self
            .transform
            .zoom_at(factor, anchor, &self.config)
            .clamp_pan(self.canvas_size, &self.config);
        self.replace_transform(zoomed)
    }

    fn replace_transform(&mut self, transform: ViewTransform) -> bool {
        if transform == self.transform {
            return false;
        }
        self.transform = transform;
        true
    }

    fn viewport_center(&self) -> Point {
        Point::new(
            self.canvas_size.0 as f64 / 2.0,
            self.canvas_size.1 as f64 / 2.0,
        )
    }
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new(GridConfig::DEFAULT)
    }
}
