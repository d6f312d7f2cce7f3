//! Optical Character Recognition (OCR) abstractions.
//!
//! This module defines the recognition seam, [`OcrProvider`], together with
//! the request options and the validated response it works with.

mod image;
mod options;
mod response;

pub use image::read_image;
pub use options::{LanguageType, RecognitionOptions};
pub use response::{RecognitionResponse, WordsResult};

use crate::error::Result;

/// Tracing target for OCR operations.
pub const TRACING_TARGET: &str = "aip_ocr::ocr";

/// Core trait for text recognition.
#[async_trait::async_trait]
pub trait OcrProvider: Send + Sync {
    /// Recognizes the text in `image` with the accurate basic model.
    ///
    /// Makes exactly one recognition request. Failures are returned as-is
    /// and never retried.
    async fn basic_accurate(
        &self,
        image: &[u8],
        options: &RecognitionOptions,
    ) -> Result<RecognitionResponse>;
}
