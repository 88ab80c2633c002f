use std::time::Duration;

use serde_json::Value;

pub(crate) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable replacing the configured service address.
pub(crate) const API_URL_ENV: &str = "DNSTRIE_API_URL";

/// Client settings read from the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ClientSettings {
    pub(crate) api: ApiSettings,
}

/// Location and request policy of the resolution service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiSettings {
    base_url: String,
    timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiSettings {
    /// Base URL without trailing slashes.
    pub(crate) fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Per-request timeout; `None` when disabled with `0`.
    pub(crate) fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl ClientSettings {
    /// Build settings from JSON, keeping defaults for missing or ill-typed
    /// fields.
    pub(crate) fn from_json(value: &Value) -> Self {
        let mut settings = ClientSettings::default();

        if let Some(api) = value.get("api") {
            if let Some(base_url) = api
                .get("base_url")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|value| !value.is_empty())
            {
                settings.api.base_url = base_url.to_string();
            }

            if let Some(timeout_secs) =
                api.get("timeout_secs").and_then(Value::as_u64)
            {
                settings.api.timeout_secs = timeout_secs;
            }
        }

        settings
    }

    /// Replace the base URL with a non-blank override.
    pub(crate) fn with_base_url_override(
        mut self,
        base_url: Option<String>,
    ) -> Self {
        if let Some(base_url) = base_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            self.api.base_url = base_url.to_string();
        }

        self
    }
}
