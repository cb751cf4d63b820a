//! Browser-side error types.

use pixelgrid_core::RegionError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("No 2d context")]
    NoContext,

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error(transparent)]
    Region(#[from] RegionError),
}

impl From<JsValue> for CanvasError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        CanvasError::Js(message)
    }
}
