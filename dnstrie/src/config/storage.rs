use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs};

use serde_json::Value;

use super::errors::ConfigError;
use super::model::ClientSettings;

/// Location of the settings file.
///
/// `$HOME/.config/dnstrie/settings.json`, or the same relative path under
/// the temp dir when `HOME` is unset.
pub(crate) fn settings_path() -> PathBuf {
    let base = match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".config"),
        None => env::temp_dir(),
    };

    base.join("dnstrie").join("settings.json")
}

/// Read settings from `path`.
///
/// `Ok(None)` means there is no file. Fields that are missing or of the
/// wrong type fall back to their defaults one by one.
pub(crate) fn read_settings(
    path: &Path,
) -> Result<Option<ClientSettings>, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let value: Value = serde_json::from_str(&raw)?;
    Ok(Some(ClientSettings::from_json(&value)))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::read_settings;
    use crate::config::errors::ConfigError;
    use crate::config::model::{ClientSettings, DEFAULT_BASE_URL};

    /// Fresh directory under the temp dir, removed on drop.
    struct Scratch(PathBuf);

    impl Scratch {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "dnstrie-config-{name}-{}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).expect("scratch dir should be created");
            Self(dir)
        }

        fn write(&self, contents: &str) -> PathBuf {
            let path = self.0.join("settings.json");
            fs::write(&path, contents).expect("settings should be written");
            path
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn given_partial_file_when_read_then_missing_fields_keep_defaults() {
        let scratch = Scratch::new("partial");
        let path = scratch.write(r#"{ "api": { "timeout_secs": 0 } }"#);

        let settings = read_settings(&path)
            .expect("read should succeed")
            .expect("settings should be present");

        assert_eq!(settings.api.base_url(), DEFAULT_BASE_URL);
        assert_eq!(settings.api.timeout(), None);
    }

    #[test]
    fn given_no_file_when_read_then_nothing_is_returned() {
        let scratch = Scratch::new("absent");

        let result = read_settings(&scratch.0.join("settings.json"))
            .expect("absent file is not an error");

        assert!(result.is_none());
    }

    #[test]
    fn given_file_that_is_not_json_when_read_then_json_error_is_returned() {
        let scratch = Scratch::new("garbled");
        let path = scratch.write("api = { base_url = 1 }");

        let result = read_settings(&path);

        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn given_directory_at_settings_path_when_read_then_io_error_is_returned() {
        let scratch = Scratch::new("directory");

        let result = read_settings(&scratch.0);

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn given_unknown_top_level_keys_when_read_then_they_are_ignored() {
        let scratch = Scratch::new("unknown");
        let path = scratch.write(r#"{ "theme": "dark", "api": {} }"#);

        let settings = read_settings(&path)
            .expect("read should succeed")
            .expect("settings should be present");

        assert_eq!(settings, ClientSettings::default());
    }
}
