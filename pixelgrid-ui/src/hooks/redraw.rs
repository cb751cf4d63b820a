// pixelgrid-ui/src/hooks/redraw.rs
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;

/// Handle for requesting a debounced redraw.
#[derive(Clone, Copy)]
pub struct RedrawHandle {
    pending: StoredValue<Option<Timeout>>,
    draw: StoredValue<Rc<dyn Fn()>>,
    delay_ms: u32,
}

impl RedrawHandle {
    /// Schedule a redraw. Requests arriving before the timer fires replace it,
    /// so a burst of changes produces one draw.
    pub fn request(&self) {
        let draw = self.draw;
        let pending = self.pending;
        let timeout = Timeout::new(self.delay_ms, move || {
            pending.try_set_value(None);
            draw.try_with_value(|draw| draw());
        });
        // Dropping the previous Timeout cancels it
        self.pending.try_set_value(Some(timeout));
    }

    /// Draw synchronously, dropping any pending request.
    pub fn flush(&self) {
        self.pending.try_set_value(None);
        self.draw.try_with_value(|draw| draw());
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .try_with_value(|pending| pending.is_some())
            .unwrap_or(false)
    }
}

/// Debounce calls to `draw` by `delay_ms`. The pending timer is cancelled when
/// the owning component is torn down.
pub fn use_debounced_redraw<F>(delay_ms: u32, draw: F) -> RedrawHandle
where
    F: Fn() + 'static,
{
    let pending = store_value::<Option<Timeout>>(None);
    let draw = store_value::<Rc<dyn Fn()>>(Rc::new(draw));

    on_cleanup(move || {
        pending.try_set_value(None);
    });

    RedrawHandle {
        pending,
        draw,
        delay_ms,
    }
}
