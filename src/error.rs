use thiserror::Error;

/// Failures surfaced by an emoji search.
///
/// Unusable model output is never an error: the parser turns it into a
/// fallback result list instead.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Missing API key, base URL or model name; no request was sent
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The provider could not be reached or the reply was cut off
    #[error("failed to communicate with the completion API")]
    Transport(#[source] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("completion API error: {status} {status_text} - {body}")]
    UpstreamHttp {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The provider answered with a success status but a body that is not JSON
    #[error("completion API returned a body that is not JSON")]
    InvalidEnvelope(#[source] serde_json::Error),
}

impl SearchError {
    /// HTTP status of an upstream error response, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::UpstreamHttp { status, .. } => Some(*status),
            _ => None,
        }
    }
}
