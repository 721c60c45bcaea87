use crate::config::Config;
use crate::error::SearchError;
use serde::Serialize;
use tracing::{debug, error};

/// Token limit for a completion; five short records fit comfortably
pub const MAX_TOKENS: u32 = 500;

/// Sampling temperature for a completion
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

/// True iff the API key, base URL and model name are all non-empty
pub fn validate_config(config: &Config) -> bool {
    config.missing_fields().is_empty()
}

fn completions_url(api_base: &str) -> String {
    format!("{}/chat/completions", api_base.trim_end_matches('/'))
}

/// Send `prompt` as a single user message and return the decoded reply.
///
/// The JSON envelope is returned as-is; picking the content out of it is
/// the parser's job. No retry is attempted.
pub async fn complete(
    client: &reqwest::Client,
    config: &Config,
    prompt: &str,
) -> Result<serde_json::Value, SearchError> {
    let request = ChatRequest {
        model: config.model_name.clone(),
        messages: vec![Message {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    };

    let url = completions_url(&config.api_base);
    debug!("Sending completion request to {} (model {})", url, config.model_name);

    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", config.api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            error!("Completion request failed: {}", e);
            SearchError::Transport(e)
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        error!("Completion API error ({}): {}", status, body);
        return Err(SearchError::UpstreamHttp {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        });
    }

    let body = response.bytes().await.map_err(|e| {
        error!("Failed to read completion response body: {}", e);
        SearchError::Transport(e)
    })?;

    serde_json::from_slice(&body).map_err(|e| {
        error!("Failed to decode completion response: {}", e);
        SearchError::InvalidEnvelope(e)
    })
}
