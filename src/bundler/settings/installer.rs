//! Wireshark installer format detection.

use crate::bundler::{Error, Result};
use std::path::Path;

/// Format of the Wireshark installer, chosen from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallerKind {
    /// Windows Installer package, unpacked with `msiextract`.
    Msi,
    /// NSIS self-extracting executable, unpacked with `7z`.
    Exe,
}

impl InstallerKind {
    /// Classifies an installer by its extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedInstaller`] for anything other than `.msi` or `.exe`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("msi") => Ok(Self::Msi),
            Some("exe") => Ok(Self::Exe),
            _ => Err(Error::UnsupportedInstaller(path.to_path_buf())),
        }
    }
}
