//! AIP client module.
//!
//! This module provides the authenticated HTTP client, its configuration and
//! the OAuth access token it caches.

mod aip_client;
mod config;
mod token;

pub(crate) use aip_client::status_error;
pub use aip_client::AipClient;
pub use config::{AipConfig, AipConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use token::{AccessToken, EXPIRY_MARGIN};
