use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures reaching the browser environment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("canvas 2d context unavailable")]
    NoCanvasContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
