//! AIP client configuration
//!
//! This module provides configuration structures and builders for the AIP client.

use std::time::Duration;

use derive_builder::Builder;
use url::Url;

use crate::error::{Error, Result};

/// Default Baidu AI Cloud API host.
pub const DEFAULT_BASE_URL: &str = "https://aip.baidubce.com";

/// Default request and connect timeout, matching the vendor SDK.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the AIP client
///
/// Endpoint paths are joined onto `base_url`, which makes the client usable
/// against a local stand-in server.
#[derive(Debug, Clone, Builder)]
#[builder(
    name = "AipConfigBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate_config", error = "Error")
)]
pub struct AipConfig {
    /// Base URL for the API host
    #[builder(setter(custom), default = "AipConfig::default_base_url()")]
    pub base_url: Url,
    /// Request timeout duration
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub timeout: Duration,
    /// Connection timeout duration
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub connect_timeout: Duration,
    /// User agent string for requests
    #[builder(default = "AipConfig::default_user_agent()")]
    pub user_agent: String,
}

impl Default for AipConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_TIMEOUT,
            user_agent: Self::default_user_agent(),
        }
    }
}

impl AipConfig {
    /// Create a new configuration builder
    pub fn builder() -> AipConfigBuilder {
        AipConfigBuilder::default()
    }

    fn default_base_url() -> Url {
        Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
    }

    fn default_user_agent() -> String {
        format!("aip-ocr/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Resolves an endpoint path against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| {
            Error::configuration()
                .with_message(format!("Invalid endpoint URL for '{path}'"))
                .with_source(e)
        })
    }
}

impl AipConfigBuilder {
    /// Set the base URL for the API host
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| {
            Error::configuration()
                .with_message(format!("Invalid base URL '{url}'"))
                .with_source(e)
        })?;
        self.base_url = Some(parsed);
        Ok(self)
    }

    fn validate_config(&self) -> std::result::Result<(), String> {
        if let Some(timeout) = &self.timeout
            && timeout.is_zero()
        {
            return Err("Timeout must be greater than 0".to_string());
        }

        if let Some(connect_timeout) = &self.connect_timeout
            && connect_timeout.is_zero()
        {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(error: derive_builder::UninitializedFieldError) -> Self {
        Error::configuration().with_message(error.to_string())
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::configuration().with_message(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default_config() {
        let config = AipConfig::default();

        assert_eq!(config.base_url.as_str(), "https://aip.baidubce.com/");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(60));
        assert!(config.user_agent.starts_with("aip-ocr/"));
    }

    #[test]
    fn test_config_builder() {
        let config = AipConfig::builder()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("custom/1.0")
            .build()
            .expect("Valid config");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.user_agent, "custom/1.0");
    }

    #[test]
    fn test_custom_base_url() {
        let config = AipConfig::builder()
            .with_base_url("http://127.0.0.1:8080")
            .expect("Valid URL")
            .build()
            .expect("Valid config");

        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(
            config.endpoint("/oauth/2.0/token").unwrap().as_str(),
            "http://127.0.0.1:8080/oauth/2.0/token"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = AipConfig::builder().with_base_url("not-a-valid-url");
        assert!(matches!(result, Err(e) if e.kind == ErrorKind::Configuration));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let result = AipConfig::builder()
            .with_timeout(Duration::ZERO)
            .build();

        assert_eq!(result.unwrap_err().kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_validation_zero_connect_timeout() {
        let result = AipConfig::builder()
            .with_connect_timeout(Duration::ZERO)
            .build();

        assert!(result.is_err());
    }
}
