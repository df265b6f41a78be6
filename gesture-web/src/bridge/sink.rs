//! Browser action sink - opens zone links in a new tab

use super::error::BridgeError;
use crate::zones::ActionSink;

pub struct BrowserSink;

impl BrowserSink {
    fn open_in_new_tab(url: &str) -> Result<(), BridgeError> {
        let window = web_sys::window().ok_or(BridgeError::NoWindow)?;
        let opened = window
            .open_with_url_and_target(url, "_blank")
            .map_err(|e| BridgeError::OpenFailed {
                url: url.to_string(),
                reason: format!("{:?}", e),
            })?;
        opened
            .map(|_| ())
            .ok_or_else(|| BridgeError::PopupBlocked(url.to_string()))
    }
}

impl ActionSink for BrowserSink {
    fn open(&mut self, url: &str) {
        if let Err(e) = Self::open_in_new_tab(url) {
            log::warn!("{}", e);
        }
    }
}
