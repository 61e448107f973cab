//! HTTP utilities for fetching bootstrap scripts.

use crate::bundler::error::Result;

/// Downloads a file from a URL.
///
/// Returns the file contents as a byte vector. Non-2xx responses are errors.
///
/// Used by:
/// - pip bootstrap (`get-pip.py`)
pub async fn download(url: &str) -> Result<Vec<u8>> {
    log::info!("Downloading {}", url);

    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;

    log::debug!("Downloaded {} bytes from {}", bytes.len(), url);
    Ok(bytes.to_vec())
}
