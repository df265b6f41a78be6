//! Errors raised at the browser boundary

use thiserror::Error;
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("No window found")]
    NoWindow,
    #[error("Could not read viewport size: {0}")]
    ViewportUnavailable(String),
    #[error("Failed to open {url}: {reason}")]
    OpenFailed { url: String, reason: String },
    #[error("Popup blocked for {0}")]
    PopupBlocked(String),
    #[error("Invalid landmark data length: {0} (expected 0 or 99)")]
    InvalidPoseLength(usize),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
