//! Async text fetch over web-sys.

use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch a text resource from the app origin.
///
/// Any failure -- network error, non-2xx status, unreadable body -- comes
/// back as a display string. Callers treat a failed data fetch as fatal to
/// the visualization; there are no retries.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    info!("fetching {}", url);
    let window = web_sys::window().ok_or_else(|| "no window object".to_string())?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| format!("network error fetching {}", url))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| format!("unexpected fetch result for {}", url))?;
    if !response.ok() {
        return Err(format!("HTTP {} fetching {}", response.status(), url));
    }
    let body = response
        .text()
        .map_err(|_| format!("unreadable body from {}", url))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|_| format!("failed reading body of {}", url))?;
    text.as_string()
        .ok_or_else(|| format!("non-text body from {}", url))
}
