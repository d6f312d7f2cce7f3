//! Reqwest-based client for the Baidu AI Cloud API.

use std::sync::Arc;

use jiff::Timestamp;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;

use super::AipConfig;
use super::token::{AccessToken, TOKEN_PATH, TokenResponse};
use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::{TRACING_TARGET_AUTH, TRACING_TARGET_CLIENT};

/// Longest response excerpt kept in an HTTP status error.
const BODY_EXCERPT_LEN: usize = 256;

/// Inner client that holds the HTTP client, configuration and token cache.
struct AipClientInner {
    http: Client,
    config: AipConfig,
    credentials: Credentials,
    token: Mutex<Option<AccessToken>>,
}

/// Authenticated client for Baidu AI Cloud endpoints.
///
/// Construction performs no network I/O. The first call that needs an
/// access token exchanges the API key and secret key for one, and later calls
/// reuse it until it is about to expire. Cloning is cheap and clones share
/// the token cache.
///
/// # Examples
///
/// ```rust,ignore
/// use aip_ocr::{AipClient, AipConfig, Credentials, OcrProvider, RecognitionOptions};
///
/// let credentials = Credentials::new("app-id", "api-key", "secret-key");
/// let client = AipClient::new(AipConfig::default(), credentials)?;
///
/// let response = client
///     .basic_accurate(&image, &RecognitionOptions::auto_detect())
///     .await?;
/// ```
#[derive(Clone)]
pub struct AipClient {
    inner: Arc<AipClientInner>,
}

impl std::fmt::Debug for AipClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AipClient")
            .field("config", &self.inner.config)
            .field("credentials", &self.inner.credentials)
            .finish_non_exhaustive()
    }
}

impl AipClient {
    /// Creates a new client with the given configuration and credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`](ErrorKind::Configuration) error if the
    /// HTTP client cannot be created.
    pub fn new(config: AipConfig, credentials: Credentials) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %config.base_url,
            timeout_ms = config.timeout.as_millis(),
            app_id = %credentials.app_id,
            "Creating AIP client"
        );

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                Error::configuration()
                    .with_message("Failed to create HTTP client")
                    .with_source(e)
            })?;

        let inner = AipClientInner {
            http,
            config,
            credentials,
            token: Mutex::new(None),
        };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Gets the underlying HTTP client.
    pub(crate) fn http(&self) -> &Client {
        &self.inner.http
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &AipConfig {
        &self.inner.config
    }

    /// Gets the credentials the client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Returns a valid access token, exchanging credentials if needed.
    ///
    /// The cache lock is held across the exchange, so concurrent callers
    /// wait for a single token request.
    ///
    /// # Errors
    ///
    /// Returns an [`Authentication`](ErrorKind::Authentication) error if the
    /// credentials are rejected, or a transport error if the token endpoint
    /// cannot be reached.
    pub async fn access_token(&self) -> Result<String> {
        let mut cached = self.inner.token.lock().await;

        if let Some(token) = cached.as_ref()
            && !token.is_expired(Timestamp::now())
        {
            return Ok(token.value().to_owned());
        }

        let token = self.fetch_token().await?;
        let value = token.value().to_owned();
        *cached = Some(token);

        Ok(value)
    }

    /// Exchanges the API key and secret key for a fresh token.
    async fn fetch_token(&self) -> Result<AccessToken> {
        let url = self.config().endpoint(TOKEN_PATH)?;
        let credentials = self.credentials();

        tracing::debug!(
            target: TRACING_TARGET_AUTH,
            url = %url,
            "Requesting access token"
        );

        let response = self
            .http()
            .get(url)
            .query(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.api_key.as_str()),
                ("client_secret", credentials.secret_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        let token = match serde_json::from_slice::<TokenResponse>(&body) {
            Ok(token) if status.is_success() || token.is_rejection() => {
                token.into_token(Timestamp::now())
            }
            Err(e) if status.is_success() => Err(Error::from(e)),
            _ => Err(status_error(status, &body)),
        };

        match &token {
            Ok(token) => tracing::debug!(
                target: TRACING_TARGET_AUTH,
                expires_at = %token.expires_at(),
                "Access token obtained"
            ),
            Err(error) => tracing::warn!(
                target: TRACING_TARGET_AUTH,
                status = status.as_u16(),
                error = %error,
                "Access token request failed"
            ),
        }

        token
    }
}

/// Builds the error for a non-success HTTP status.
pub(crate) fn status_error(status: StatusCode, body: &[u8]) -> Error {
    let kind = if status.is_server_error() {
        ErrorKind::ServiceUnavailable
    } else {
        ErrorKind::External
    };

    let excerpt = String::from_utf8_lossy(&body[..body.len().min(BODY_EXCERPT_LEN)]);
    Error::new(kind)
        .with_message(format!("Unexpected HTTP status {status}"))
        .with_context(format!("body: {excerpt}"))
}
