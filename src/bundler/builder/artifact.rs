//! Summary of a finished bundle.
//!
//! Walks the output tree once, counting files and bytes and computing a
//! SHA-256 digest that identifies the exact bundle contents.

use crate::bundler::{Error, Result, error::ErrorExt};
use sha2::{Digest, Sha256};
use std::{
    io::Read,
    path::{Path, PathBuf},
};

/// A completed bundle directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledArtifact {
    /// Bundle root.
    pub path: PathBuf,
    /// Number of regular files in the bundle.
    pub files: usize,
    /// Total size of those files in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the tree.
    pub checksum: String,
}

/// Describes the bundle rooted at `dir`.
pub async fn summarize(dir: &Path) -> Result<BundledArtifact> {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || summarize_blocking(&dir))
        .await
        .map_err(|e| Error::GenericError(format!("bundle summary task panicked: {}", e)))?
}

/// Recursively traverses the directory, hashing each file's relative path and
/// content in sorted order so the result is deterministic.
fn summarize_blocking(dir: &Path) -> Result<BundledArtifact> {
    let mut entries = Vec::new();
    for entry in walkdir::WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|e| Error::GenericError(format!("walking bundle: {}", e)))?;
        if entry.file_type().is_file() {
            entries.push(entry.into_path());
        }
    }
    entries.sort();

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];
    let mut size = 0u64;

    for path in &entries {
        if let Ok(rel_path) = path.strip_prefix(dir) {
            // separators normalized so the digest does not depend on the host
            hasher.update(rel_path.to_string_lossy().replace('\\', "/").as_bytes());
        }

        let mut file =
            std::fs::File::open(path).fs_context("opening file for hashing", path)?;
        loop {
            let n = file
                .read(&mut buffer)
                .fs_context("reading file for hash calculation", path)?;
            if n == 0 {
                break;
            }
            size += n as u64;
            hasher.update(&buffer[..n]);
        }
    }

    Ok(BundledArtifact {
        path: dir.to_path_buf(),
        files: entries.len(),
        size,
        checksum: format!("{:x}", hasher.finalize()),
    })
}
