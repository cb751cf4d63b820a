// pixelgrid-ui/src/hooks/canvas_view.rs
use leptos::*;
use pixelgrid_core::{CanvasView, GridConfig};

/// Reactive wrapper around [`CanvasView`].
///
/// The view itself lives in a `StoredValue` so event handlers can mutate it
/// without cloning; `changed` fires whenever a mutation reports a visible
/// change.
#[derive(Clone, Copy)]
pub struct CanvasViewHandle {
    view: StoredValue<CanvasView>,
    changed: Trigger,
}

impl CanvasViewHandle {
    /// Run a mutation. Subscribers are notified when it returns true.
    pub fn modify<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut CanvasView) -> bool,
    {
        let changed = self.view.try_update_value(f).unwrap_or(false);
        if changed {
            self.changed.notify();
        }
        changed
    }

    /// Run a mutation that returns a value, notifying subscribers
    /// unconditionally.
    pub fn update<T>(&self, f: impl FnOnce(&mut CanvasView) -> T) -> Option<T> {
        let result = self.view.try_update_value(f);
        self.changed.notify();
        result
    }

    /// Read the view without subscribing.
    pub fn with_untracked<T>(&self, f: impl FnOnce(&CanvasView) -> T) -> Option<T> {
        self.view.try_with_value(f)
    }

    /// Read the view and subscribe to its changes.
    pub fn with<T>(&self, f: impl FnOnce(&CanvasView) -> T) -> Option<T> {
        self.changed.track();
        self.view.try_with_value(f)
    }
}

pub fn use_canvas_view(config: GridConfig) -> CanvasViewHandle {
    CanvasViewHandle {
        view: store_value(CanvasView::new(config)),
        changed: create_trigger(),
    }
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use pixelgrid_core::{InteractionMode, Point};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn modify_notifies_only_on_change() {
        let runtime = create_runtime();
        let view = use_canvas_view(GridConfig::DEFAULT);
        let zoom = create_memo(move |_| view.with(|v| v.transform().zoom).unwrap_or(0.0));

        assert!(view.modify(|v| v.resize((800, 600))));
        assert!((zoom.get() - 0.54).abs() < 1e-9);

        // Same size again: nothing changes
        assert!(!view.modify(|v| v.resize((800, 600))));
        assert!(view.modify(|v| v.zoom_in()));
        assert!((zoom.get() - 0.675).abs() < 1e-9);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn update_exposes_interaction_mode() {
        let runtime = create_runtime();
        let view = use_canvas_view(GridConfig::DEFAULT);
        view.modify(|v| v.resize((800, 600)));

        view.update(|v| v.pointer_down(Point::new(10.0, 10.0), true, &[]));
        let mode = view.with_untracked(|v| v.mode());
        assert!(matches!(mode, Some(InteractionMode::Selecting { .. })));

        runtime.dispose();
    }
}
