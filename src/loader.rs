//! Fetching a certification's question resource off the UI thread.

use crate::data::parse_questions;
use crate::error::ResourceLoadError;
use crate::model::Question;
use crate::task::Task;

pub type LoadResult = Result<Vec<Question>, ResourceLoadError>;

#[cfg(not(target_arch = "wasm32"))]
pub fn start_loading(url: String) -> Task<LoadResult> {
    Task::spawn(move || fetch_questions(&url))
}

#[cfg(target_arch = "wasm32")]
pub fn start_loading(url: String) -> Task<LoadResult> {
    Task::spawn_local(async move { fetch_questions(&url).await })
}

/// Reads a local path, or GETs an http(s) URL.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(url: &str) -> LoadResult {
    let body = if url.starts_with("http://") || url.starts_with("https://") {
        let response = reqwest::blocking::get(url).map_err(|err| ResourceLoadError::Network {
            url: url.to_string(),
            message: err.to_string(),
        })?;
        if !response.status().is_success() {
            return Err(ResourceLoadError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        response.text().map_err(|err| ResourceLoadError::Network {
            url: url.to_string(),
            message: err.to_string(),
        })?
    } else {
        std::fs::read_to_string(url).map_err(|source| ResourceLoadError::Io {
            path: url.to_string(),
            source,
        })?
    };
    parse_questions(&body)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(url: &str) -> LoadResult {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    let network = |message: String| ResourceLoadError::Network {
        url: url.to_string(),
        message,
    };

    let window = web_sys::window().ok_or_else(|| network("no window".into()))?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| network(format!("{err:?}")))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| network("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(ResourceLoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let promise = response.text().map_err(|err| network(format!("{err:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| network(format!("{err:?}")))?
        .as_string()
        .ok_or_else(|| network("body is not text".into()))?;

    parse_questions(&text)
}
