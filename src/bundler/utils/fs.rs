//! File system utilities for bundling.
//!
//! Thin async wrappers that attach the operation and path to every error.

use crate::bundler::error::{ErrorExt, Result};
use std::path::Path;
use tokio::fs;

/// Creates all of the directories of the specified path.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes a single file.
pub async fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).await.fs_context("removing file", path)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        crate::bail!("{:?} does not exist", from);
    }
    if !from.is_file() {
        crate::bail!("{:?} is not a file", from);
    }
    if let Some(dest_dir) = to.parent() {
        create_dir_all(dest_dir).await?;
    }
    fs::copy(from, to).await.fs_context("copying file to", to)?;
    Ok(())
}

/// Writes a file, creating its parent directories.
pub async fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).await?;
    }
    fs::write(path, contents).await.fs_context("writing file", path)
}
