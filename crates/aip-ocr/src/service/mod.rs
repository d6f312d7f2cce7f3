//! Recognition service implementation.
//!
//! This module implements the [`OcrProvider`] trait for [`AipClient`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use jiff::Timestamp;

use crate::TRACING_TARGET_CLIENT;
use crate::client::{AipClient, status_error};
use crate::error::Result;
use crate::ocr::{OcrProvider, RecognitionOptions, RecognitionResponse};

/// Path of the accurate basic recognition endpoint.
const ACCURATE_BASIC_PATH: &str = "/rest/2.0/ocr/v1/accurate_basic";

#[async_trait::async_trait]
impl OcrProvider for AipClient {
    async fn basic_accurate(
        &self,
        image: &[u8],
        options: &RecognitionOptions,
    ) -> Result<RecognitionResponse> {
        let url = self.config().endpoint(ACCURATE_BASIC_PATH)?;
        let access_token = self.access_token().await?;
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            url = %url,
            image_size = image.len(),
            language_type = %options.language_type,
            "Sending recognition request"
        );

        let encoded = STANDARD.encode(image);
        let mut form = vec![("image", encoded.as_str())];
        form.extend(options.to_form_fields());

        let response = self
            .http()
            .post(url)
            .query(&[("access_token", access_token.as_str())])
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let processing_time = Timestamp::now().duration_since(started_at);

        if !status.is_success() {
            let error = status_error(status, &body);
            tracing::debug!(
                target: TRACING_TARGET_CLIENT,
                status = status.as_u16(),
                processing_time_ms = processing_time.as_millis(),
                error = %error,
                "Recognition request failed"
            );
            return Err(error);
        }

        let value: serde_json::Value = serde_json::from_slice(&body)?;
        let response = RecognitionResponse::from_value(value)?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            log_id = ?response.log_id,
            regions = response.len(),
            processing_time_ms = processing_time.as_millis(),
            "Recognition request completed"
        );

        Ok(response)
    }
}
