//! Embedded Python runtime.

use crate::bundler::{
    Error, Result,
    error::ErrorExt,
    settings::Settings,
    utils::{fs, listing},
};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Path configuration file shipped with the embedded distribution
/// (`python38._pth` and friends). While it exists the interpreter ignores
/// `site-packages`, so pip-installed packages would not be importable.
const PTH_PATTERN: &str = r"^python\d+\._pth";

/// Unpacks the runtime into `<out>/python` and removes its `._pth` file.
pub async fn embed_python(settings: &Settings) -> Result<()> {
    log::info!("extracting python");

    let python_dir = settings.python_dir();
    fs::create_dir_all(&python_dir).await?;
    unzip(settings.python_archive(), &python_dir).await?;

    let pth = find_pth(&python_dir).await?;
    log::debug!("removing {}", pth.display());
    fs::remove_file(&pth).await
}

/// Finds the `python??._pth` file at the top of `python_dir`.
pub async fn find_pth(python_dir: &Path) -> Result<PathBuf> {
    let names = listing::list_dir(python_dir).await?;
    let pattern = Regex::new(PTH_PATTERN)?;
    listing::find_first(&names, &pattern)
        .map(|name| python_dir.join(name))
        .ok_or_else(|| Error::PthNotFound(python_dir.to_path_buf()))
}

/// Extracts a zip archive into `dest`.
pub async fn unzip(archive: &Path, dest: &Path) -> Result<()> {
    let archive = archive.to_path_buf();
    let dest = dest.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<()> {
        let file = std::fs::File::open(&archive).fs_context("opening archive", &archive)?;
        let mut zip = zip::ZipArchive::new(file)?;
        log::debug!("unpacking {} entries into {}", zip.len(), dest.display());
        zip.extract(&dest)?;
        Ok(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("archive extraction task panicked: {}", e)))?
}
