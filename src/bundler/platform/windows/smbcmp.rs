//! smbcmp sources.

use crate::bundler::{
    Error, Result,
    error::ErrorExt,
    settings::Settings,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Copies the allow-listed smbcmp files into `<out>/smbcmp`.
pub async fn copy_sources(settings: &Settings) -> Result<()> {
    log::info!("installing smbcmp");
    copy_tree(
        settings.smbcmp_source(),
        &settings.smbcmp_dir(),
        &settings.smbcmp_files(),
    )
    .await
}

/// Copies `files` (relative to `root`) below `dest`, keeping their layout.
///
/// Every file is checked before the first copy, so a missing file leaves
/// `dest` untouched.
pub async fn copy_tree(root: &Path, dest: &Path, files: &[String]) -> Result<()> {
    for file in files {
        let src = root.join(file);
        if !tokio::fs::try_exists(&src)
            .await
            .fs_context("checking source file", &src)?
        {
            return Err(Error::SourceFileMissing(src));
        }
    }

    for file in files {
        log::info!("copying {}", file);
        let dst: PathBuf = dest.join(file);
        fs::copy_file(&root.join(file), &dst).await?;
    }
    Ok(())
}
