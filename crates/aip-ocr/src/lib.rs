#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for client operations.
pub const TRACING_TARGET_CLIENT: &str = "aip_ocr::client";

/// Tracing target for access token exchange.
pub const TRACING_TARGET_AUTH: &str = "aip_ocr::auth";

/// Tracing target for credentials loading.
pub const TRACING_TARGET_CONFIG: &str = "aip_ocr::config";

mod client;
mod credentials;
mod error;
pub mod ocr;
mod service;

#[cfg(feature = "mock")]
#[cfg_attr(docsrs, doc(cfg(feature = "mock")))]
pub mod mock;

pub use crate::client::{
    AccessToken, AipClient, AipConfig, AipConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
    EXPIRY_MARGIN,
};
pub use crate::credentials::{Credentials, DEFAULT_CONFIG_FILE, resolve_config_path};
pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::ocr::{
    LanguageType, OcrProvider, RecognitionOptions, RecognitionResponse, WordsResult, read_image,
};
