//! Builder for constructing Settings.

use super::{InstallerKind, PipBootstrap, Settings};
use crate::bundler::error::{Context, ErrorExt};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Default location of the pip bootstrap script.
pub const GET_PIP_URL: &str = "https://bootstrap.pypa.io/get-pip.py";

/// Packages installed into the embedded Python by default.
pub const DEFAULT_PIP_PACKAGES: [&str; 2] = ["windows-curses", "wxpython"];

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use smbcmp_win_bundle::bundler::SettingsBuilder;
///
/// # fn example() -> smbcmp_win_bundle::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .installer("Wireshark-win64-3.2.0.exe")
///     .python_archive("python-3.8.1-embed-amd64.zip")
///     .smbcmp_source("../smbcmp")
///     .out_dir("dist/smbcmp-win64")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    installer: Option<PathBuf>,
    python_archive: Option<PathBuf>,
    smbcmp_source: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    pip_bootstrap: Option<PipBootstrap>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the Wireshark installer (`.exe` or `.msi`).
    ///
    /// # Required
    pub fn installer<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.installer = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the Windows embedded Python release (`.zip`).
    ///
    /// # Required
    pub fn python_archive<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.python_archive = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the root of the smbcmp checkout.
    ///
    /// # Required
    pub fn smbcmp_source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.smbcmp_source = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output directory.
    ///
    /// # Required
    pub fn out_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.out_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets where `get-pip.py` comes from.
    ///
    /// Default: download from [`GET_PIP_URL`]
    pub fn pip_bootstrap(mut self, bootstrap: PipBootstrap) -> Self {
        self.pip_bootstrap = Some(bootstrap);
        self
    }

    /// Builds the settings.
    ///
    /// Paths are made absolute against the current directory and the
    /// installer kind is derived from its extension.
    ///
    /// # Errors
    ///
    /// - a required path was not set
    /// - the installer is neither `.exe` nor `.msi`
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let installer = absolute(self.installer.context("installer is required")?)?;
        let installer_kind = InstallerKind::from_path(&installer)?;

        let pip_bootstrap = match self.pip_bootstrap {
            Some(PipBootstrap::Local(path)) => PipBootstrap::Local(absolute(path)?),
            Some(other) => other,
            None => PipBootstrap::Download(GET_PIP_URL.to_string()),
        };

        let pip_packages = DEFAULT_PIP_PACKAGES.iter().map(|p| p.to_string()).collect();

        Ok(Settings::new(
            installer,
            installer_kind,
            absolute(self.python_archive.context("python_archive is required")?)?,
            absolute(self.smbcmp_source.context("smbcmp_source is required")?)?,
            absolute(self.out_dir.context("out_dir is required")?)?,
            pip_bootstrap,
            pip_packages,
        ))
    }
}

fn absolute(path: PathBuf) -> crate::bundler::Result<PathBuf> {
    let abs = path
        .absolutize()
        .fs_context("resolving absolute path", &path)?
        .into_owned();
    Ok(abs)
}
