//! Structured error handling for OCR operations.

use std::path::Path;

use hipstr::HipStr;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors that can occur while recognizing an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Credentials file or client configuration is missing or malformed.
    Configuration,
    /// Image file could not be read.
    FileAccess,
    /// Request parameters were rejected by the service.
    InvalidInput,
    /// Network-related error occurred.
    Network,
    /// Timeout occurred.
    Timeout,
    /// Credentials or access token were rejected.
    Authentication,
    /// The application has no permission for the requested operation.
    Authorization,
    /// Daily, QPS or total request quota exceeded.
    RateLimited,
    /// Image is empty, too large or could not be decoded by the service.
    InvalidImage,
    /// Image format is not supported by the service.
    UnsupportedFormat,
    /// Service temporarily unavailable.
    ServiceUnavailable,
    /// Any other error reported by the service.
    External,
    /// Response did not match the expected schema.
    ResponseShape,
    /// Unknown error occurred.
    #[default]
    Unknown,
}

impl ErrorKind {
    /// Check if this error kind is typically retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network | Self::Timeout | Self::ServiceUnavailable | Self::RateLimited
        )
    }

    /// Classifies an `error_code` from a vendor error payload.
    #[must_use]
    pub const fn from_vendor_code(code: i64) -> Self {
        match code {
            13 | 14 | 15 | 110 | 111 | 216110 => Self::Authentication,
            3 | 6 => Self::Authorization,
            4 | 17 | 18 | 19 => Self::RateLimited,
            216200 | 216202 | 282810 => Self::InvalidImage,
            216201 => Self::UnsupportedFormat,
            100 | 216100 | 216101 | 216103 | 282003 => Self::InvalidInput,
            2 => Self::ServiceUnavailable,
            _ => Self::External,
        }
    }
}

/// Structured error type with classification and context tracking.
#[must_use]
#[derive(Debug, Error)]
#[error("[{kind}]{}{}",
    message.as_ref().map(|m| format!(": {m}")).unwrap_or_default(),
    context.as_ref().map(|c| format!(" ({c})")).unwrap_or_default()
)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Primary error message.
    pub message: Option<HipStr<'static>>,
    /// Underlying source error, if any.
    #[source]
    pub source: Option<BoxedError>,
    /// Additional context information.
    pub context: Option<HipStr<'static>>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
            context: None,
        }
    }

    /// Creates a new error from a source error.
    pub fn from_source(kind: ErrorKind, source: impl Into<BoxedError>) -> Self {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
            context: None,
        }
    }

    /// Creates a configuration error.
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Creates a file access error naming the offending path.
    pub fn file_access(path: &Path) -> Self {
        Self::new(ErrorKind::FileAccess).with_context(format!("path: {}", path.display()))
    }

    /// Creates a response shape error.
    pub fn response_shape() -> Self {
        Self::new(ErrorKind::ResponseShape)
    }

    /// Creates an authentication error.
    pub fn authentication() -> Self {
        Self::new(ErrorKind::Authentication)
    }

    /// Creates an error from a vendor `error_code`/`error_msg` pair.
    pub fn vendor(code: i64, message: impl Into<HipStr<'static>>) -> Self {
        Self::new(ErrorKind::from_vendor_code(code))
            .with_message(message)
            .with_context(format!("error_code: {code}"))
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<HipStr<'static>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the source of the error.
    pub fn with_source(mut self, source: impl Into<BoxedError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds context to the error.
    pub fn with_context(mut self, context: impl Into<HipStr<'static>>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Check if this error is retryable based on its kind.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::from_source(ErrorKind::Timeout, error).with_message("Request timed out")
        } else if error.is_connect() {
            Self::from_source(ErrorKind::Network, error).with_message("Connection failed")
        } else {
            let message = error.to_string();
            Self::from_source(ErrorKind::Network, error).with_message(message)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        let message = error.to_string();
        Self::from_source(ErrorKind::ResponseShape, error).with_message(message)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_error_new() {
        let error = Error::new(ErrorKind::Unknown);
        assert_eq!(error.kind, ErrorKind::Unknown);
        assert!(error.message.is_none());
        assert!(error.source.is_none());
        assert!(error.context.is_none());
    }

    #[test]
    fn test_error_display() {
        let error = Error::configuration()
            .with_message("missing key APP_ID")
            .with_context("path: /etc/ocr.toml");

        let display_str = error.to_string();
        assert_eq!(
            display_str,
            "[configuration]: missing key APP_ID (path: /etc/ocr.toml)"
        );
    }

    #[test]
    fn test_file_access_names_path() {
        let error = Error::file_access(Path::new("/tmp/missing.png"));
        assert_eq!(error.kind, ErrorKind::FileAccess);
        assert!(error.to_string().contains("/tmp/missing.png"));
    }

    #[test]
    fn test_vendor_classification() {
        assert_eq!(ErrorKind::from_vendor_code(110), ErrorKind::Authentication);
        assert_eq!(ErrorKind::from_vendor_code(111), ErrorKind::Authentication);
        assert_eq!(ErrorKind::from_vendor_code(6), ErrorKind::Authorization);
        assert_eq!(ErrorKind::from_vendor_code(17), ErrorKind::RateLimited);
        assert_eq!(ErrorKind::from_vendor_code(18), ErrorKind::RateLimited);
        assert_eq!(ErrorKind::from_vendor_code(216200), ErrorKind::InvalidImage);
        assert_eq!(
            ErrorKind::from_vendor_code(216201),
            ErrorKind::UnsupportedFormat
        );
        assert_eq!(ErrorKind::from_vendor_code(282003), ErrorKind::InvalidInput);
        assert_eq!(ErrorKind::from_vendor_code(2), ErrorKind::ServiceUnavailable);
        assert_eq!(ErrorKind::from_vendor_code(282000), ErrorKind::External);
    }

    #[test]
    fn test_vendor_error_keeps_code_and_message() {
        let error = Error::vendor(17, "Open api daily request limit reached");
        assert_eq!(error.kind, ErrorKind::RateLimited);
        assert_eq!(
            error.message.as_deref(),
            Some("Open api daily request limit reached")
        );
        assert_eq!(error.context.as_deref(), Some("error_code: 17"));
        assert!(error.is_retryable());
    }

    #[test]
    fn test_retryable() {
        assert!(ErrorKind::Network.is_retryable());
        assert!(ErrorKind::Timeout.is_retryable());
        assert!(ErrorKind::ServiceUnavailable.is_retryable());
        assert!(ErrorKind::RateLimited.is_retryable());

        assert!(!ErrorKind::Configuration.is_retryable());
        assert!(!ErrorKind::Authentication.is_retryable());
        assert!(!ErrorKind::ResponseShape.is_retryable());
        assert!(!ErrorKind::Unknown.is_retryable());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            ErrorKind::from_str("response_shape").unwrap(),
            ErrorKind::ResponseShape
        );
        assert_eq!(
            ErrorKind::from_str("file_access").unwrap(),
            ErrorKind::FileAccess
        );
        assert!(ErrorKind::from_str("invalid").is_err());
    }

    #[test]
    fn test_from_serde_json() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = Error::from(source);
        assert_eq!(error.kind, ErrorKind::ResponseShape);
        assert!(error.source.is_some());
    }
}
