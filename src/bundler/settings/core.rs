//! Core Settings struct and implementations.

use super::{AllowEntry, InstallerKind, allow_list};
use std::path::{Path, PathBuf};

/// Where `get-pip.py` comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipBootstrap {
    /// Fetch the script from this URL.
    Download(String),
    /// Copy a local copy of the script (offline builds).
    Local(PathBuf),
}

/// Settings for one bundle run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). All paths are
/// absolute so that tools can be run from any working directory.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Wireshark installer.
    installer: PathBuf,

    /// Installer format, derived from the installer extension.
    installer_kind: InstallerKind,

    /// Windows embedded Python release (.zip).
    python_archive: PathBuf,

    /// Root of the smbcmp checkout.
    smbcmp_source: PathBuf,

    /// Bundle output directory. Must not exist before the run.
    out_dir: PathBuf,

    /// Source of the pip bootstrap script.
    pip_bootstrap: PipBootstrap,

    /// Packages installed into the embedded Python, in order.
    pip_packages: Vec<String>,
}

impl Settings {
    pub fn installer(&self) -> &Path {
        &self.installer
    }

    pub fn installer_kind(&self) -> InstallerKind {
        self.installer_kind
    }

    pub fn python_archive(&self) -> &Path {
        &self.python_archive
    }

    pub fn smbcmp_source(&self) -> &Path {
        &self.smbcmp_source
    }

    /// Returns the bundle output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Directory receiving the tshark files.
    pub fn tshark_dir(&self) -> PathBuf {
        self.out_dir.join("tshark")
    }

    /// Directory receiving the embedded Python runtime.
    pub fn python_dir(&self) -> PathBuf {
        self.out_dir.join("python")
    }

    /// Directory receiving the smbcmp sources.
    pub fn smbcmp_dir(&self) -> PathBuf {
        self.out_dir.join("smbcmp")
    }

    pub fn pip_bootstrap(&self) -> &PipBootstrap {
        &self.pip_bootstrap
    }

    pub fn pip_packages(&self) -> &[String] {
        &self.pip_packages
    }

    /// Allow-list applied to the Wireshark installer payload.
    pub fn tshark_files(&self) -> Vec<AllowEntry> {
        allow_list::parse(allow_list::TSHARK_FILES)
    }

    /// Relative paths copied from the smbcmp checkout.
    pub fn smbcmp_files(&self) -> Vec<String> {
        allow_list::smbcmp_files()
    }

    /// Input paths that must exist before the run starts.
    pub fn inputs(&self) -> [&Path; 3] {
        [&self.installer, &self.python_archive, &self.smbcmp_source]
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        installer: PathBuf,
        installer_kind: InstallerKind,
        python_archive: PathBuf,
        smbcmp_source: PathBuf,
        out_dir: PathBuf,
        pip_bootstrap: PipBootstrap,
        pip_packages: Vec<String>,
    ) -> Self {
        Self {
            installer,
            installer_kind,
            python_archive,
            smbcmp_source,
            out_dir,
            pip_bootstrap,
            pip_packages,
        }
    }
}
