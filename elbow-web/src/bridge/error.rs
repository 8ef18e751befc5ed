use wasm_bindgen::JsValue;

use crate::renderer::RenderError;

/// Errors crossing the JS boundary
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("video has no frame yet")]
    EmptyFrame,

    #[error("invalid options: {0}")]
    Options(#[source] serde_json::Error),

    #[error("javascript error: {0}")]
    Js(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
