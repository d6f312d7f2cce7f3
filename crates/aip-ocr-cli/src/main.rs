#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod driver;
mod telemetry;

use std::process;

use aip_ocr::{AipClient, AipConfig};
use clap::Parser;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "aip_ocr_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "aip_ocr_cli::shutdown";
pub const TRACING_TARGET_DRIVER: &str = "aip_ocr_cli::driver";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let Err(error) = run().await else {
        process::exit(0);
    };

    if tracing::enabled!(target: TRACING_TARGET_SHUTDOWN, tracing::Level::ERROR) {
        let error = format!("{error:#}");
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "recognition failed"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing()?;
    cli.log();

    let config_path = cli.config_path()?;
    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        config_path = %config_path.display(),
        "Resolved credentials file"
    );

    let mut stdout = std::io::stdout().lock();
    driver::run(
        &config_path,
        &cli.image,
        |credentials| AipClient::new(AipConfig::default(), credentials),
        &mut stdout,
    )
    .await
}
