//! Platform abstraction layer
//!
//! Startup checks for the browser host. The frame loop must not start unless
//! a drawable surface was found and configured.

use thiserror::Error;

/// Reasons the game cannot start
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no browser window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("canvas element #{0} not found")]
    MissingCanvas(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("could not create render surface: {0}")]
    Surface(String),
    #[error("no suitable GPU adapter: {0}")]
    NoAdapter(String),
    #[error("could not open GPU device: {0}")]
    Device(String),
}

/// Browser lookups (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub mod web {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlCanvasElement, Window};

    use super::StartupError;

    pub fn window() -> Result<Window, StartupError> {
        web_sys::window().ok_or(StartupError::NoWindow)
    }

    pub fn document(window: &Window) -> Result<Document, StartupError> {
        window.document().ok_or(StartupError::NoDocument)
    }

    /// Find the game canvas by element id
    pub fn canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, StartupError> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| StartupError::MissingCanvas(id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| StartupError::NotACanvas(id.to_owned()))
    }

    /// Text content of an optional inline element (e.g. a JSON `<script>`)
    pub fn inline_text(document: &Document, id: &str) -> Option<String> {
        document
            .get_element_by_id(id)
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty())
    }

    /// Monotonic milliseconds since page load
    pub fn now_ms(window: &Window) -> f64 {
        window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}
