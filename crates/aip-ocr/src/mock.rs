//! Mock recognition provider for testing.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::ocr::{OcrProvider, RecognitionOptions, RecognitionResponse};

/// Mock provider that answers every call with a canned service payload.
///
/// The payload goes through the same validation as a real response, so
/// vendor error payloads and malformed bodies behave like the live service.
/// Calls are counted, which lets tests assert that no request was made.
#[derive(Clone, Debug)]
pub struct MockOcrProvider {
    payload: Value,
    calls: Arc<AtomicUsize>,
}

impl MockOcrProvider {
    /// Creates a provider answering with `payload`.
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            calls: Arc::default(),
        }
    }

    /// Creates a provider whose response has one region per line.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words_result: Vec<Value> = lines
            .into_iter()
            .map(|line| {
                let words: String = line.into();
                serde_json::json!({ "words": words })
            })
            .collect();
        Self::new(serde_json::json!({ "words_result": words_result }))
    }

    /// Returns how many recognition calls were made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl OcrProvider for MockOcrProvider {
    async fn basic_accurate(
        &self,
        image: &[u8],
        _options: &RecognitionOptions,
    ) -> Result<RecognitionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if image.is_empty() {
            return Err(Error::vendor(216200, "empty image"));
        }

        RecognitionResponse::from_value(self.payload.clone())
    }
}
