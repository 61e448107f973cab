//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs the Windows
//! bundle phases in order and owns the output directory while they run.

use super::{
    artifact::{BundledArtifact, summarize},
    guard::OutputGuard,
    tool_detection::{Tool, Toolchain},
};
use crate::bundler::{
    Error, Result, Settings,
    error::ErrorExt,
    platform::windows::{finalize, launcher, pip, python, smbcmp, wireshark},
    utils::fs,
};
use std::path::Path;

/// Main bundler orchestrator.
///
/// # Examples
///
/// ```no_run
/// use smbcmp_win_bundle::bundler::{Bundler, SettingsBuilder};
///
/// # async fn example() -> smbcmp_win_bundle::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .installer("Wireshark-win64-3.2.0.exe")
///     .python_archive("python-3.8.1-embed-amd64.zip")
///     .smbcmp_source("../smbcmp")
///     .out_dir("dist/smbcmp")
///     .build()?;
///
/// let bundler = Bundler::detect(settings)?;
/// let artifact = bundler.bundle().await?;
/// println!("{} files, {} bytes", artifact.files, artifact.size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
    toolchain: Toolchain,
}

impl Bundler {
    /// Creates a bundler from settings and an already resolved toolchain.
    pub fn new(settings: Settings, toolchain: Toolchain) -> Self {
        Self {
            settings,
            toolchain,
        }
    }

    /// Creates a bundler, resolving every tool the settings need.
    ///
    /// # Errors
    ///
    /// [`Error::MissingDependencies`] listing all unavailable tools. Nothing
    /// has been written at that point.
    pub fn detect(settings: Settings) -> Result<Self> {
        let toolchain = Toolchain::detect(&Tool::required_for(settings.installer_kind()))?;
        Ok(Self::new(settings, toolchain))
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Builds the bundle.
    ///
    /// Inputs are checked first. Once the output directory has been created,
    /// any failure removes it again before the error is returned.
    pub async fn bundle(&self) -> Result<BundledArtifact> {
        self.verify_inputs().await?;

        let out = self.settings.out_dir();
        create_output_dir(out).await?;
        let guard = OutputGuard::new(out);

        self.run_phases().await?;

        guard.commit();
        log::info!("all done!");
        summarize(out).await
    }

    /// Checks that the output does not exist and that every input does.
    pub async fn verify_inputs(&self) -> Result<()> {
        let out = self.settings.out_dir();
        if exists(out).await? {
            return Err(Error::OutputExists(out.to_path_buf()));
        }

        for input in self.settings.inputs() {
            if !exists(input).await? {
                return Err(Error::InputMissing(input.to_path_buf()));
            }
        }
        Ok(())
    }

    async fn run_phases(&self) -> Result<()> {
        let settings = &self.settings;
        let tools = &self.toolchain;

        let copied = wireshark::extract_tshark(settings, tools).await?;
        log::debug!("{} tshark files bundled", copied.len());

        python::embed_python(settings).await?;
        pip::install_packages(settings, tools).await?;
        smbcmp::copy_sources(settings).await?;
        launcher::compile_launcher(settings, tools).await?;
        finalize::finalize(settings).await
    }
}

async fn exists(path: &Path) -> Result<bool> {
    tokio::fs::try_exists(path).await.fs_context("checking path", path)
}

/// Creates `out`, failing if it appeared since the input check.
async fn create_output_dir(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent).await?;
    }
    match tokio::fs::create_dir(out).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(Error::OutputExists(out.to_path_buf()))
        }
        Err(e) => Err(Error::Fs {
            context: "creating output directory",
            path: out.to_path_buf(),
            error: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::SettingsBuilder;

    struct Inputs {
        _tmp: tempfile::TempDir,
        root: std::path::PathBuf,
    }

    fn inputs() -> Inputs {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().to_path_buf();
        std::fs::write(root.join("ws.exe"), "").unwrap();
        std::fs::write(root.join("py.zip"), "").unwrap();
        std::fs::create_dir(root.join("smbcmp")).unwrap();
        Inputs { _tmp: tmp, root }
    }

    fn bundler(inputs: &Inputs, out: &str) -> Bundler {
        let settings = SettingsBuilder::new()
            .installer(inputs.root.join("ws.exe"))
            .python_archive(inputs.root.join("py.zip"))
            .smbcmp_source(inputs.root.join("smbcmp"))
            .out_dir(inputs.root.join(out))
            .build()
            .unwrap();
        Bundler::new(settings, Toolchain::default())
    }

    #[tokio::test]
    async fn existing_output_is_rejected() {
        let inputs = inputs();
        std::fs::create_dir(inputs.root.join("out")).unwrap();

        let err = bundler(&inputs, "out").bundle().await.unwrap_err();
        assert!(matches!(err, Error::OutputExists(_)));
        assert!(inputs.root.join("out").exists());
    }

    #[tokio::test]
    async fn missing_input_is_rejected_before_output_creation() {
        let inputs = inputs();
        std::fs::remove_file(inputs.root.join("py.zip")).unwrap();

        let err = bundler(&inputs, "out").bundle().await.unwrap_err();
        assert!(matches!(err, Error::InputMissing(ref p) if p.ends_with("py.zip")));
        assert!(!inputs.root.join("out").exists());
    }

    #[tokio::test]
    async fn failing_phase_clears_output() {
        // empty toolchain: the extractor lookup fails inside the first phase
        let inputs = inputs();

        let err = bundler(&inputs, "nested/out").bundle().await.unwrap_err();
        assert!(err.to_string().contains("was not checked during preflight"));
        assert!(!inputs.root.join("nested/out").exists());
    }
}
