pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod rendering;

use wasm_bindgen::prelude::*;

pub use app::App;
pub use components::PixelCanvas;
pub use error::CanvasError;
pub use hooks::RegionSource;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(App);
}
