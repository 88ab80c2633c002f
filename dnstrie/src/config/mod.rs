mod errors;
mod model;
mod storage;

use model::API_URL_ENV;
pub(crate) use model::{ApiSettings, ClientSettings};

/// Load client settings, falling back to defaults on any problem.
///
/// Nothing is written back. The [`API_URL_ENV`] variable overrides the
/// configured base URL.
pub(crate) fn load() -> ClientSettings {
    let path = storage::settings_path();

    let settings = match storage::read_settings(&path) {
        Ok(Some(settings)) => {
            log::info!("settings loaded from {}", path.display());
            settings
        },
        Ok(None) => {
            log::info!("no settings at {}, using defaults", path.display());
            ClientSettings::default()
        },
        Err(err) => {
            log::warn!("ignoring {}: {err}", path.display());
            ClientSettings::default()
        },
    };

    settings.with_base_url_override(std::env::var(API_URL_ENV).ok())
}
