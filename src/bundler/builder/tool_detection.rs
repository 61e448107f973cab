//! External tool detection and availability checking.
//!
//! Every program the bundler runs is resolved once, up front, into a
//! [`Toolchain`]. A tool can be forced to a specific binary through an
//! environment variable named after it (`CC`, `WINE`, ...); otherwise it is
//! searched for in `PATH`.

use crate::bundler::{
    Error, MissingTool, MissingTools, Result, settings::InstallerKind,
};
use std::{
    collections::BTreeMap,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// An external program used while bundling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tool {
    /// Runs the Windows Python interpreter and pip.
    Wine,
    /// MinGW cross compiler building the launcher.
    Compiler,
    /// Unpacks `.msi` installers.
    MsiExtract,
    /// Unpacks NSIS `.exe` installers.
    SevenZip,
}

impl Tool {
    /// Program name searched for in `PATH`.
    pub fn program(self) -> &'static str {
        match self {
            Self::Wine => "wine",
            Self::Compiler => "x86_64-w64-mingw32-gcc",
            Self::MsiExtract => "msiextract",
            Self::SevenZip => "7z",
        }
    }

    /// Environment variable overriding the lookup.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Wine => "WINE",
            Self::Compiler => "CC",
            Self::MsiExtract => "MSIEXTRACT",
            Self::SevenZip => "7Z",
        }
    }

    /// Distribution package usually providing the program.
    pub fn package(self) -> &'static str {
        match self {
            Self::Wine => "wine",
            Self::Compiler => "mingw64-gcc",
            Self::MsiExtract => "msitools",
            Self::SevenZip => "p7zip",
        }
    }

    /// Extractor needed for an installer format.
    pub fn extractor(kind: InstallerKind) -> Self {
        match kind {
            InstallerKind::Msi => Self::MsiExtract,
            InstallerKind::Exe => Self::SevenZip,
        }
    }

    /// Every tool a run with this installer format needs.
    pub fn required_for(kind: InstallerKind) -> Vec<Self> {
        vec![Self::Wine, Self::Compiler, Self::extractor(kind)]
    }
}

/// Resolved paths of the external programs for one run.
#[derive(Debug, Clone, Default)]
pub struct Toolchain {
    bins: BTreeMap<Tool, PathBuf>,
}

impl Toolchain {
    /// Resolves `tools` from the process environment.
    ///
    /// All tools are checked before returning, so the error lists every
    /// missing program at once.
    pub fn detect(tools: &[Tool]) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(Error::IoError)?;
        Self::detect_with(
            tools,
            |name| std::env::var_os(name),
            std::env::var_os("PATH"),
            &cwd,
        )
    }

    /// Resolves `tools` using `env` for overrides and `search_path` as `PATH`.
    pub fn detect_with<F>(
        tools: &[Tool],
        env: F,
        search_path: Option<OsString>,
        cwd: &Path,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut bins = BTreeMap::new();
        let mut missing = Vec::new();

        for &tool in tools {
            match resolve(tool, &env, search_path.as_ref(), cwd) {
                Ok(path) => {
                    log::debug!("Found {} at: {}", tool.program(), path.display());
                    bins.insert(tool, path);
                }
                Err(m) => {
                    log::debug!("{}", m);
                    missing.push(m);
                }
            }
        }

        if !missing.is_empty() {
            return Err(Error::MissingDependencies(MissingTools(missing)));
        }
        Ok(Self { bins })
    }

    /// Path of a resolved tool.
    ///
    /// # Errors
    ///
    /// The tool was not part of the preflight.
    pub fn path(&self, tool: Tool) -> Result<&Path> {
        self.bins.get(&tool).map(PathBuf::as_path).ok_or_else(|| {
            Error::GenericError(format!("{} was not checked during preflight", tool.program()))
        })
    }
}

fn resolve<F>(
    tool: Tool,
    env: &F,
    search_path: Option<&OsString>,
    cwd: &Path,
) -> std::result::Result<PathBuf, MissingTool>
where
    F: Fn(&str) -> Option<OsString>,
{
    log::info!("checking for {}", tool.program());

    let overridden = env(tool.env_var()).filter(|v| !v.is_empty());
    let program = match &overridden {
        Some(value) => {
            log::info!(
                "using env var {} -> {}",
                tool.env_var(),
                value.to_string_lossy()
            );
            value.clone()
        }
        None => OsString::from(tool.program()),
    };

    which::which_in(&program, search_path, cwd).map_err(|_| MissingTool {
        program: program.to_string_lossy().into_owned(),
        env_var: tool.env_var(),
        package: tool.package(),
        from_env: overridden.is_some(),
    })
}
