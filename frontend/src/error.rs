use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("local storage is not available")]
    NoStorage,
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
