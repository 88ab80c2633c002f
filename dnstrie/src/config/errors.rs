use thiserror::Error;

/// Errors emitted while reading client settings.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("settings file could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
