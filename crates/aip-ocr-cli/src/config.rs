//! CLI configuration management.
//!
//! The command line carries only the image path. Credentials come from
//! [`DEFAULT_CONFIG_FILE`] next to the executable, and log filtering from
//! `RUST_LOG`.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use aip_ocr::{DEFAULT_CONFIG_FILE, resolve_config_path};
use clap::Parser;

use crate::TRACING_TARGET_STARTUP;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "aip-ocr")]
#[command(about = "Print the text recognized in an image by Baidu AI Cloud OCR")]
#[command(version)]
pub struct Cli {
    /// Path to the image file to recognize.
    pub image: PathBuf,
}

impl Cli {
    /// Returns the credentials file path for this executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable's location cannot be determined.
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        let executable = std::env::current_exe().context("failed to locate the executable")?;
        let base_dir = executable.parent().unwrap_or_else(|| Path::new("."));
        Ok(resolve_config_path(base_dir, DEFAULT_CONFIG_FILE))
    }

    /// Logs build information at debug level.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            image = %self.image.display(),
            "Build information"
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_positional_argument() {
        let cli = Cli::try_parse_from(["aip-ocr", "scan.png"]).unwrap();
        assert_eq!(cli.image, PathBuf::from("scan.png"));
    }

    #[test]
    fn test_image_is_required() {
        assert!(Cli::try_parse_from(["aip-ocr"]).is_err());
    }

    #[test]
    fn test_unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["aip-ocr", "--config", "x.toml", "scan.png"]).is_err());
        assert!(Cli::try_parse_from(["aip-ocr", "a.png", "b.png"]).is_err());
    }

    #[test]
    fn test_config_path_is_next_to_executable() {
        let cli = Cli::try_parse_from(["aip-ocr", "scan.png"]).unwrap();
        let path = cli.config_path().unwrap();
        let executable = std::env::current_exe().unwrap();

        assert_eq!(path.file_name().unwrap(), DEFAULT_CONFIG_FILE);
        assert_eq!(path.parent(), executable.parent());
    }
}
