//! Client for the generative-text service behind "explain this question".
//!
//! The call is best-effort: it never touches the quiz session, and every
//! failure ends up as an [`ExplainError`] for the dialog to show.

use serde::{Deserialize, Serialize};

use crate::error::ExplainError;
use crate::task::Task;
use crate::view_models::option_letter;

pub type ExplainResult = Result<String, ExplainError>;

const INSTRUCTION: &str = "Explain this in 1 brief short sentence.";

/// Builds the prompt; options are listed in the order the user sees them.
pub fn build_prompt(question: &str, shuffled_options: Option<&[String]>) -> String {
    let mut prompt = question.to_string();
    if let Some(options) = shuffled_options.filter(|o| !o.is_empty()) {
        prompt.push_str("\n\nOptions:");
        for (i, option) in options.iter().enumerate() {
            prompt.push_str(&format!("\n{}. {}", option_letter(i), option));
        }
    }
    prompt.push_str("\n\n");
    prompt.push_str(INSTRUCTION);
    prompt
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(default)]
    message: Option<String>,
}

fn request_body(prompt: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: Some(prompt.to_string()),
            }],
        }],
    }
}

/// Extracts `candidates[0].content.parts[0].text`, else the service error.
pub fn parse_response(body: &str) -> ExplainResult {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|_| ExplainError::Malformed)?;

    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|c| c.parts.first())
        .and_then(|p| p.text.clone());

    match (text, response.error.and_then(|e| e.message)) {
        (Some(text), _) => Ok(text),
        (None, Some(message)) => Err(ExplainError::Service(message)),
        (None, None) => Err(ExplainError::Malformed),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn start_explanation(endpoint: String, api_key: String, prompt: String) -> Task<ExplainResult> {
    Task::spawn(move || request_explanation(&endpoint, &api_key, &prompt))
}

#[cfg(target_arch = "wasm32")]
pub fn start_explanation(endpoint: String, api_key: String, prompt: String) -> Task<ExplainResult> {
    Task::spawn_local(async move { request_explanation(&endpoint, &api_key, &prompt).await })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn request_explanation(endpoint: &str, api_key: &str, prompt: &str) -> ExplainResult {
    if api_key.trim().is_empty() {
        return Err(ExplainError::MissingCredential);
    }
    let client = reqwest::blocking::Client::new();
    let response = client
        .post(endpoint)
        .header("X-goog-api-key", api_key)
        .json(&request_body(prompt))
        .send()
        .map_err(|err| ExplainError::Network(err.to_string()))?;

    // error payloads come with 4xx statuses, so the body is read either way
    let status = response.status();
    let body = response
        .text()
        .map_err(|err| ExplainError::Network(err.to_string()))?;
    let result = parse_response(&body);
    if let Err(err) = &result {
        log::warn!("explanation request failed (HTTP {status}): {err}");
    }
    result
}

#[cfg(target_arch = "wasm32")]
pub async fn request_explanation(endpoint: &str, api_key: &str, prompt: &str) -> ExplainResult {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    if api_key.trim().is_empty() {
        return Err(ExplainError::MissingCredential);
    }
    let network = |err: JsValue| ExplainError::Network(format!("{err:?}"));

    let payload = serde_json::to_string(&request_body(prompt))
        .map_err(|err| ExplainError::Network(err.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(network)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(network)?;
    request
        .headers()
        .set("X-goog-api-key", api_key)
        .map_err(network)?;

    let window = web_sys::window().ok_or(ExplainError::Network("no window".into()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?;
    let response: Response = value.dyn_into().map_err(|_| ExplainError::Malformed)?;
    let promise = response.text().map_err(network)?;
    let body = JsFuture::from(promise)
        .await
        .map_err(network)?
        .as_string()
        .ok_or(ExplainError::Malformed)?;

    let result = parse_response(&body);
    if let Err(err) = &result {
        log::warn!("explanation request failed (HTTP {}): {err}", response.status());
    }
    result
}
