//! Error types for the burst engine.
//!
//! The simulation itself cannot fail. Everything here comes from acquiring
//! a drawing surface at startup or from the native frame renderer's I/O.

use thiserror::Error;

/// Errors raised while setting up or driving a surface
#[derive(Debug, Error)]
pub enum EngineError {
    /// No global `window` object (not running in a browser)
    #[error("no window available")]
    NoWindow,

    /// The window has no document
    #[error("no document available")]
    NoDocument,

    /// No element matched the canvas selector
    #[error("no element matches selector '{0}'")]
    CanvasNotFound(String),

    /// The selected element is not a `<canvas>`
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),

    /// The canvas refused to hand out a 2D context
    #[error("2d rendering context unavailable")]
    ContextUnavailable,

    /// A browser API call threw
    #[error("javascript error: {0}")]
    Js(String),

    /// An I/O error occurred
    #[cfg(not(target_arch = "wasm32"))]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a frame image failed
    #[cfg(not(target_arch = "wasm32"))]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Type alias for Results from engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for EngineError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        EngineError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<EngineError> for wasm_bindgen::JsValue {
    fn from(err: EngineError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
