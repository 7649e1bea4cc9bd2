#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hardcoded default origin, used when nothing else supplies a base URL.
pub const DEFAULT_BASE_URL: &str = "http://travelairwings.com/api";

/// Environment override for the base URL.
pub const ENV_BASE_URL: &str = "AIRWINGS_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Re-poll interval for watch mode.
    #[serde(default = "default_poll_seconds")]
    pub poll_seconds: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_poll_seconds() -> u64 {
    30
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            poll_seconds: default_poll_seconds(),
        }
    }
}

impl CatalogConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies the `AIRWINGS_API_URL` environment override, which sits
    /// between the config file and explicit CLI flags.
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
        self
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        validate_positive_number("poll_seconds", self.poll_seconds, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.poll_seconds, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_with_partial_settings() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://localhost:3001/api\"").unwrap();
        writeln!(file, "poll_seconds = 10").unwrap();

        let config = CatalogConfig::from_file(file.path()).unwrap();

        assert_eq!(config.base_url, "http://localhost:3001/api");
        assert_eq!(config.poll_seconds, 10);
        // Unspecified fields keep their defaults.
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_from_file_rejects_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not valid").unwrap();

        assert!(CatalogConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_env_override_wins_over_file_value() {
        std::env::set_var(ENV_BASE_URL, "http://staging.example.com/api");

        let config = CatalogConfig::default().apply_env();
        assert_eq!(config.base_url, "http://staging.example.com/api");

        std::env::remove_var(ENV_BASE_URL);
    }

    #[test]
    fn test_validate_rejects_zero_poll_interval() {
        let config = CatalogConfig {
            poll_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
