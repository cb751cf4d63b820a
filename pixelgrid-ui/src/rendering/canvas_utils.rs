use pixelgrid_core::Point;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, MouseEvent};

use crate::error::CanvasError;

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
    canvas
        .get_context("2d")?
        .ok_or(CanvasError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| CanvasError::NoContext)
}

/// Pointer position relative to the canvas element's top-left corner.
///
/// Pointer and wheel events both derive from `MouseEvent`.
pub fn canvas_local_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}

/// Resize the drawing buffer to match the element's CSS size. Returns whether
/// the buffer changed (which also clears it).
pub fn sync_canvas_buffer(canvas: &HtmlCanvasElement, size: (u32, u32)) -> bool {
    if canvas.width() == size.0 && canvas.height() == size.1 {
        return false;
    }
    canvas.set_width(size.0);
    canvas.set_height(size.1);
    true
}

/// Open a sold region's link in a new tab.
pub fn open_in_new_tab(url: &str) -> Result<(), CanvasError> {
    let window = web_sys::window().ok_or_else(|| CanvasError::Js("No window".into()))?;
    window.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

/// Remove an event listener, logging if the browser rejects it.
pub fn detach_listener(target: &EventTarget, event: &str, callback: &js_sys::Function) -> bool {
    match target.remove_event_listener_with_callback(event, callback) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Could not remove {} listener: {:?}", event, e);
            false
        }
    }
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn detached_listener_no_longer_fires() {
        let canvas: HtmlCanvasElement = gloo_utils::document()
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        let fired = Rc::new(Cell::new(0));
        let fired_clone = Rc::clone(&fired);
        let handler = Closure::wrap(Box::new(move |_: web_sys::Event| {
            fired_clone.set(fired_clone.get() + 1);
        }) as Box<dyn Fn(web_sys::Event)>);

        canvas
            .add_event_listener_with_callback("wheel", handler.as_ref().unchecked_ref())
            .unwrap();
        let event = web_sys::Event::new("wheel").unwrap();
        canvas.dispatch_event(&event).unwrap();
        assert_eq!(fired.get(), 1);

        assert!(detach_listener(&canvas, "wheel", handler.as_ref().unchecked_ref()));
        canvas.dispatch_event(&event).unwrap();
        assert_eq!(fired.get(), 1);
    }
}
