//! Single-pass recognition driver.

use std::io::Write;
use std::path::Path;

use aip_ocr::{Credentials, OcrProvider, RecognitionOptions, read_image};
use anyhow::Context;

use crate::TRACING_TARGET_DRIVER;

/// Runs one recognition pass and writes the text to `out`.
///
/// Steps run strictly in order: load credentials, build the provider with
/// `connect`, read the image, make one recognition call, write the joined
/// lines followed by a newline. Any failure stops the pass; nothing is
/// written to `out` unless every step succeeded.
pub async fn run<P, F, W>(
    config_path: &Path,
    image_path: &Path,
    connect: F,
    out: &mut W,
) -> anyhow::Result<()>
where
    P: OcrProvider,
    F: FnOnce(Credentials) -> aip_ocr::Result<P>,
    W: Write,
{
    let credentials = Credentials::from_file(config_path).context("failed to load credentials")?;
    let provider = connect(credentials).context("failed to create OCR client")?;
    let image = read_image(image_path)
        .await
        .context("failed to read image")?;

    let options = RecognitionOptions::auto_detect();
    let response = provider
        .basic_accurate(&image, &options)
        .await
        .context("text recognition failed")?;
    drop(image);

    tracing::info!(
        target: TRACING_TARGET_DRIVER,
        regions = response.len(),
        "Text recognized"
    );

    writeln!(out, "{}", response.to_text()).context("failed to write output")?;
    out.flush().context("failed to write output")?;

    Ok(())
}
