//! Opening game links outside the app window.

use dioxus::prelude::*;

/// Script that opens `url` in a new browsing context.
///
/// The URL is embedded as a JSON string literal, so quotes and
/// backslashes in it cannot break out of the call.
pub fn open_script(url: &str) -> Result<String, serde_json::Error> {
    let quoted = serde_json::to_string(url)?;
    Ok(format!("window.open({}, '_blank');", quoted))
}

/// Open `url` in a new tab/window of the system browser.
pub fn open_link(url: &str) {
    match open_script(url) {
        Ok(script) => {
            tracing::debug!(url, "opening game link");
            document::eval(&script);
        }
        Err(e) => tracing::error!("Failed to build open script for {}: {}", url, e),
    }
}
