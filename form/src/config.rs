//! Registration client configuration.
//!
//! The only setting is the API base URL, taken from `API_URL`.

use crate::error::ConfigError;
use reqwest::Url;

/// Environment variable holding the API base URL
pub const API_URL_VAR: &str = "API_URL";

/// Base URL used when `API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where the registration endpoint lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL; `/register` is appended to it
    pub api_url: String,
}

impl ClientConfig {
    /// Create a configuration for `api_url`
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Load from the `API_URL` environment variable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable holds an unusable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(std::env::var(API_URL_VAR).ok())
    }

    /// Build from an optional raw value, defaulting when absent or blank
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the value is not an absolute http(s) URL.
    pub fn resolve(value: Option<String>) -> Result<Self, ConfigError> {
        let api_url = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let config = Self::new(api_url);
        config.validate()?;
        Ok(config)
    }

    /// Replace the API base URL
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Check that the base URL is an absolute http(s) URL
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] or [`ConfigError::UnsupportedScheme`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Full URL of the registration endpoint
    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}/register", self.api_url.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_when_unset_or_blank() {
        assert_eq!(ClientConfig::resolve(None), Ok(ClientConfig::default()));
        assert_eq!(
            ClientConfig::resolve(Some("  ".into())),
            Ok(ClientConfig::default())
        );
    }

    #[test]
    fn test_register_url_tolerates_trailing_slash() {
        let config = ClientConfig::new("https://api.example.com/v1/");
        assert_eq!(config.register_url(), "https://api.example.com/v1/register");

        let config = config.with_api_url("http://localhost:3000");
        assert_eq!(config.register_url(), "http://localhost:3000/register");
    }

    #[test]
    fn test_rejects_unusable_urls() {
        assert!(matches!(
            ClientConfig::resolve(Some("not a url".into())),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert_eq!(
            ClientConfig::new("ftp://files.example.com").validate(),
            Err(ConfigError::UnsupportedScheme("ftp".into()))
        );
    }
}
