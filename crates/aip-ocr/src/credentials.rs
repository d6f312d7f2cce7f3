//! Application credentials and the TOML file they are loaded from.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::TRACING_TARGET_CONFIG;

/// Default credentials file name.
pub const DEFAULT_CONFIG_FILE: &str = "ocr.toml";

/// Credential triple issued by the Baidu AI Cloud console.
///
/// The API key and secret key are exchanged for an access token; the
/// application id only identifies the application.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// Application identifier.
    #[serde(rename = "APP_ID")]
    pub app_id: String,
    /// API key (OAuth client id).
    #[serde(rename = "API_KEY")]
    pub api_key: String,
    /// Secret key (OAuth client secret).
    #[serde(rename = "SECRET_KEY")]
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Creates credentials from their three parts.
    pub fn new(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Parses credentials from TOML text with `APP_ID`, `API_KEY` and
    /// `SECRET_KEY` string keys. Other keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`](crate::ErrorKind::Configuration) error if
    /// the text is not valid TOML or a key is missing or not a string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            Error::configuration()
                .with_message(e.message().to_owned())
                .with_source(e)
        })
    }

    /// Loads credentials from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`](crate::ErrorKind::Configuration) error if
    /// the file cannot be read or does not hold valid credentials. The error
    /// context names the path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            path = %path.display(),
            "Loading credentials"
        );

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration()
                .with_message("Failed to read credentials file")
                .with_context(format!("path: {}", path.display()))
                .with_source(e)
        })?;

        let credentials = Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("path: {}", path.display())))?;

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            app_id = %credentials.app_id,
            "Credentials loaded"
        );

        Ok(credentials)
    }
}

/// Resolves a credentials path against a base directory.
///
/// Absolute paths are returned unchanged; relative paths are joined onto
/// `base_dir`.
pub fn resolve_config_path(base_dir: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
