//! Error types for bundle assembly.
//!
//! Every phase returns [`Result`]. I/O failures carry the operation and the
//! path they touched via [`ErrorExt::fs_context`], and free-form failures can
//! be raised with the [`bail!`](crate::bail) macro.

use std::{
    fmt::{self, Display},
    io,
    path::PathBuf,
    process::ExitStatus,
};
use thiserror::Error;

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A required external program that could not be resolved during preflight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTool {
    /// Program name that was searched for.
    pub program: String,
    /// Environment variable that can override the lookup.
    pub env_var: &'static str,
    /// Distribution package usually providing the program.
    pub package: &'static str,
    /// Whether the lookup came from the override variable.
    pub from_env: bool,
}

impl Display for MissingTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot find prog {}", self.program)?;
        if !self.from_env {
            write!(f, " (you can provide a path via the env var {})", self.env_var)?;
        }
        write!(f, ", try installing {}", self.package)
    }
}

/// The complete list of tools missing after preflight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTools(pub Vec<MissingTool>);

impl Display for MissingTools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|t| t.program.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Main error type for bundle assembly.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// One or more required external programs are unavailable.
    #[error("missing dependencies: {0}")]
    MissingDependencies(MissingTools),

    /// The output directory exists before the run.
    #[error("{} already exist", .0.display())]
    OutputExists(PathBuf),

    /// An input path given on the command line does not exist.
    #[error("{} doesn't exist", .0.display())]
    InputMissing(PathBuf),

    /// The installer is neither an `.msi` nor an `.exe`.
    #[error("require .exe or .msi wireshark installer, got {}", .0.display())]
    UnsupportedInstaller(PathBuf),

    /// A required allow-list pattern matched nothing in the installer payload.
    #[error("cannot find file {0}")]
    PatternNotFound(String),

    /// A file of the application allow-list is absent from the source tree.
    #[error("{} doesn't exist", .0.display())]
    SourceFileMissing(PathBuf),

    /// The embedded runtime archive contains no `python??._pth` file.
    #[error("no python??._pth file in {}", .0.display())]
    PthNotFound(PathBuf),

    /// An external program ran and exited unsuccessfully.
    #[error("`{command}` failed with {status}")]
    ToolFailed { command: String, status: ExitStatus },

    /// An external program could not be started.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        command: String,
        #[source]
        error: io::Error,
    },

    /// File system failure with the operation and path that caused it.
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        context: &'static str,
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    /// Invalid allow-list pattern.
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    /// Runtime archive could not be read or unpacked.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Bootstrap download failure.
    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    GenericError(String),

    #[error("{0}")]
    IoError(#[from] io::Error),
}

/// Turn a `None` into an error carrying a message.
pub trait Context<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Attach the failing operation and path to an I/O error.
pub trait ErrorExt<T> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Return early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError($msg.into()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_keeps_path_and_operation() {
        let err = std::fs::read("/definitely/not/here")
            .fs_context("reading manifest", "/definitely/not/here")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("reading manifest /definitely/not/here:"), "{msg}");
    }

    #[test]
    fn option_context_becomes_generic_error() {
        let err = None::<u8>.context("nothing there").unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m == "nothing there"));
    }

    #[test]
    fn missing_tool_mentions_override_only_when_not_from_env() {
        let mut tool = MissingTool {
            program: "wine".into(),
            env_var: "WINE",
            package: "wine",
            from_env: false,
        };
        assert_eq!(
            tool.to_string(),
            "cannot find prog wine (you can provide a path via the env var WINE), try installing wine"
        );
        tool.from_env = true;
        assert_eq!(tool.to_string(), "cannot find prog wine, try installing wine");
    }
}
