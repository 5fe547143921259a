use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no <{0}>")]
    MissingElement(&'static str),
    #[error("responsive layer not started")]
    NotStarted,
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        WebError::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WebError> for wasm_bindgen::JsValue {
    fn from(value: WebError) -> Self {
        wasm_bindgen::JsValue::from_str(&value.to_string())
    }
}
