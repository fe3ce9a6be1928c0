// Fetch wrappers (WASM / browser)

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, FetchError> {
    let window = window().ok_or_else(|| FetchError::Network("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Network(format!("{e:?}")))?;
    let response: web_sys::Response = resp
        .dyn_into()
        .map_err(|_| FetchError::Network("not a response".into()))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let text = JsFuture::from(
        response
            .text()
            .map_err(|e| FetchError::Network(format!("{e:?}")))?,
    )
    .await
    .map_err(|e| FetchError::Network(format!("{e:?}")))?;
    let body = text
        .as_string()
        .ok_or_else(|| FetchError::Decode("body is not a string".into()))?;
    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
