use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the resolution service.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
