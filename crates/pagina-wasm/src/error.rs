//! Errors raised while wiring the page

use pagina::PageError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BindError {
    #[error(transparent)]
    Page(#[from] PageError),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("no window or document")]
    NoDocument,
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
