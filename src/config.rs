//! Application configuration.
//!
//! The backend base URL is explicit configuration handed to
//! [`SignupClient::new`](crate::api::SignupClient::new) at construction;
//! nothing in the crate reads it from global state.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Backend used when neither the config file nor the environment names one.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable overriding the configured `api_url`.
pub const API_URL_ENV: &str = "ENROLL_API_URL";

const DEFAULT_LOG_FILTER: &str = "enroll=info";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML.
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The platform does not provide a config directory.
    #[error("could not determine XDG config directory")]
    NoConfigDir,
}

/// User-editable settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the registration backend.
    pub api_url: String,
    /// Default tracing filter; `RUST_LOG` takes precedence at runtime.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Loads `~/.config/enroll/config.toml`, then applies the
    /// [`API_URL_ENV`] override. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        let mut config = Self::from_file(config_dir.join("enroll").join("config.toml"))?;
        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.is_empty()
        {
            config.api_url = url;
        }
        Ok(config)
    }

    /// Reads a config file; a missing file yields the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.log_filter, "enroll=info");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn full_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "api_url = \"https://api.campus.example\"\nlog_filter = \"enroll=debug\"\n",
        );
        let config = Config::from_file(path).unwrap();
        assert_eq!(config.api_url, "https://api.campus.example");
        assert_eq!(config.log_filter, "enroll=debug");
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "api_url = \"https://api.campus.example\"\n");
        let config = Config::from_file(path).unwrap();
        assert_eq!(config.api_url, "https://api.campus.example");
        assert_eq!(config.log_filter, "enroll=info");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "api_url = [not toml");
        assert!(matches!(
            Config::from_file(path),
            Err(ConfigError::Parse(_))
        ));
    }
}
