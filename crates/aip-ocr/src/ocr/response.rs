//! Response schema for accurate basic recognition.

use serde::Deserialize;
use serde_json::Value;

use super::TRACING_TARGET;
use crate::error::{Error, Result};

/// One recognized text region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordsResult {
    /// Recognized text of the region.
    pub words: String,
}

/// Successful recognition payload.
///
/// Regions keep the order the service returned them in. Fields other than
/// those named here (locations, probabilities) are ignored. Only
/// `words_result` is validated; the bookkeeping fields are kept as sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecognitionResponse {
    /// Request identifier assigned by the service, as a number or a string.
    #[serde(default)]
    pub log_id: Option<Value>,
    /// Region count as reported by the service.
    #[serde(default)]
    pub words_result_num: Option<Value>,
    /// Recognized regions.
    pub words_result: Vec<WordsResult>,
}

/// Error payload the service returns in place of a result.
#[derive(Debug, Deserialize)]
struct VendorError {
    error_code: i64,
    #[serde(default)]
    error_msg: String,
    #[serde(default)]
    log_id: Option<Value>,
}

impl RecognitionResponse {
    /// Validates a raw service payload.
    ///
    /// # Errors
    ///
    /// A payload carrying `error_code` becomes the matching classified vendor
    /// error. A payload lacking a well-formed `words_result` is a
    /// [`ResponseShape`](crate::ErrorKind::ResponseShape) error.
    pub fn from_value(value: Value) -> Result<Self> {
        if value.get("error_code").is_some() {
            let vendor: VendorError = serde_json::from_value(value)?;
            tracing::debug!(
                target: TRACING_TARGET,
                error_code = vendor.error_code,
                log_id = ?vendor.log_id,
                "Service returned an error payload"
            );
            return Err(Error::vendor(vendor.error_code, vendor.error_msg));
        }

        if value.get("words_result").is_none() {
            return Err(Error::response_shape().with_message("Response lacks words_result"));
        }

        serde_json::from_value(value).map_err(|e| {
            Error::response_shape()
                .with_message(format!("Malformed words_result: {e}"))
                .with_source(e)
        })
    }

    /// Returns the number of recognized regions.
    pub fn len(&self) -> usize {
        self.words_result.len()
    }

    /// Returns whether no text was recognized.
    pub fn is_empty(&self) -> bool {
        self.words_result.is_empty()
    }

    /// Iterates over the recognized lines in response order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.words_result.iter().map(|r| r.words.as_str())
    }

    /// Joins every region's text with newlines, in response order.
    pub fn to_text(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }
}
