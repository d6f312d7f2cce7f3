//! Image payload loading.

use std::path::Path;

use bytes::Bytes;

use super::TRACING_TARGET;
use crate::error::{Error, Result};

/// Reads the whole image file into memory.
///
/// The file is closed before this returns, so no handle outlives the read.
///
/// # Errors
///
/// Returns a [`FileAccess`](crate::ErrorKind::FileAccess) error naming the
/// path if it does not exist, is a directory, or cannot be read.
pub async fn read_image(path: impl AsRef<Path>) -> Result<Bytes> {
    let path = path.as_ref();

    let data = tokio::fs::read(path).await.map_err(|e| {
        Error::file_access(path)
            .with_message(format!("Failed to read image: {e}"))
            .with_source(e)
    })?;

    tracing::debug!(
        target: TRACING_TARGET,
        path = %path.display(),
        image_size = data.len(),
        "Image loaded"
    );

    Ok(Bytes::from(data))
}
