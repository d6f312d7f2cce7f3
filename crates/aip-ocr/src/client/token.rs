//! OAuth access token exchange.

use jiff::{SignedDuration, Timestamp};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Path of the OAuth token endpoint.
pub(crate) const TOKEN_PATH: &str = "/oauth/2.0/token";

/// Tokens are refreshed this long before the server-side expiry.
pub const EXPIRY_MARGIN: SignedDuration = SignedDuration::from_secs(30);

/// Raw body returned by the token endpoint.
///
/// A successful exchange carries `access_token` and `expires_in`; a rejected
/// one carries `error` and `error_description` instead.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<i64>,
    scope: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

impl TokenResponse {
    /// Returns whether the endpoint rejected the credentials.
    pub(crate) fn is_rejection(&self) -> bool {
        self.error.is_some()
    }

    /// Converts the raw body into a cached token, issued at `now`.
    pub(crate) fn into_token(self, now: Timestamp) -> Result<AccessToken> {
        if let Some(error) = self.error {
            let message = self.error_description.unwrap_or_else(|| error.clone());
            return Err(Error::authentication()
                .with_message(message)
                .with_context(format!("error: {error}")));
        }

        let (Some(value), Some(expires_in)) = (self.access_token, self.expires_in) else {
            return Err(Error::response_shape()
                .with_message("Token response lacks access_token or expires_in"));
        };

        let expires_at = Some(expires_in)
            .filter(|secs| *secs >= 0)
            .and_then(|secs| now.checked_add(SignedDuration::from_secs(secs)).ok())
            .ok_or_else(|| {
                Error::response_shape()
                    .with_message("expires_in out of range")
                    .with_context(format!("expires_in: {expires_in}"))
            })?;

        Ok(AccessToken {
            value,
            expires_at,
            scope: self.scope,
        })
    }
}

/// Access token with its absolute expiry instant.
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    expires_at: Timestamp,
    scope: Option<String>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("expires_at", &self.expires_at)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl AccessToken {
    /// Returns the bearer value sent as `access_token`.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns when the server stops accepting this token.
    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    /// Returns the space separated scopes granted to the token.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Returns whether the token must be refreshed before use at `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at
            .checked_sub(EXPIRY_MARGIN)
            .map_or(true, |refresh_at| now >= refresh_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn parse(body: &str) -> TokenResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_successful_exchange() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();
        let token = parse(
            r#"{"access_token":"24.abc","expires_in":2592000,"scope":"public brain_all_scope","session_key":"x"}"#,
        )
        .into_token(now)
        .unwrap();

        assert_eq!(token.value(), "24.abc");
        assert_eq!(token.scope(), Some("public brain_all_scope"));
        assert_eq!(
            token.expires_at(),
            Timestamp::from_second(1_700_000_000 + 2_592_000).unwrap()
        );
    }

    #[test]
    fn test_rejected_exchange_is_authentication_error() {
        let error = parse(
            r#"{"error":"invalid_client","error_description":"unknown client id"}"#,
        )
        .into_token(Timestamp::now())
        .unwrap_err();

        assert_eq!(error.kind, ErrorKind::Authentication);
        assert_eq!(error.message.as_deref(), Some("unknown client id"));
    }

    #[test]
    fn test_incomplete_body_is_shape_error() {
        let error = parse(r#"{"scope":"public"}"#)
            .into_token(Timestamp::now())
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::ResponseShape);
    }

    #[test]
    fn test_expiry_margin() {
        let issued = Timestamp::from_second(1_000).unwrap();
        let token = parse(r#"{"access_token":"t","expires_in":100}"#)
            .into_token(issued)
            .unwrap();

        assert!(!token.is_expired(Timestamp::from_second(1_069).unwrap()));
        assert!(token.is_expired(Timestamp::from_second(1_070).unwrap()));
        assert!(token.is_expired(Timestamp::from_second(1_200).unwrap()));
    }

    #[test]
    fn test_out_of_range_lifetime_is_shape_error() {
        let now = Timestamp::from_second(1_700_000_000).unwrap();

        for body in [
            r#"{"access_token":"t","expires_in":9223372036854775807}"#,
            r#"{"access_token":"t","expires_in":-1}"#,
        ] {
            let error = parse(body).into_token(now).unwrap_err();
            assert_eq!(error.kind, ErrorKind::ResponseShape);
            assert_eq!(error.message.as_deref(), Some("expires_in out of range"));
        }
    }

    #[test]
    fn test_expiry_near_minimum_timestamp() {
        let token = parse(r#"{"access_token":"t","expires_in":0}"#)
            .into_token(Timestamp::MIN)
            .unwrap();
        assert!(token.is_expired(Timestamp::MIN));
    }

    #[test]
    fn test_debug_hides_token_value() {
        let token = parse(r#"{"access_token":"secret-token","expires_in":100}"#)
            .into_token(Timestamp::now())
            .unwrap();
        assert!(!format!("{token:?}").contains("secret-token"));
    }
}
