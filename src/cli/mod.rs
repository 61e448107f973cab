//! Command line interface for the smbcmp Windows bundler.
//!
//! Parses arguments, runs the dependency preflight, then the bundler, and
//! maps the outcome to an exit code.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::bundler::{Bundler, Error, MissingTools};
use crate::error::{CliError, Result};

/// Default log filter for a run; `--quiet` keeps only warnings and errors.
pub fn log_filter(args: &Args) -> &'static str {
    if args.quiet { "warn" } else { "info" }
}

/// Main CLI entry point
pub async fn run(args: &Args) -> Result<i32> {
    execute(args).await
}

/// Runs a bundle for already parsed arguments.
pub async fn execute(args: &Args) -> Result<i32> {
    let output = OutputManager::new(args.quiet);

    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    let settings = args.settings_builder().build()?;

    let bundler = match Bundler::detect(settings) {
        Ok(bundler) => bundler,
        Err(Error::MissingDependencies(MissingTools(missing))) => {
            for tool in &missing {
                output.warn(&tool.to_string())?;
            }
            output.error("missing dependencies, stopping");
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };

    output.info(&format!(
        "bundling {} into {}",
        bundler.settings().installer().display(),
        bundler.settings().out_dir().display()
    ))?;

    let artifact = bundler.bundle().await?;

    output.success("all done!")?;
    output.indent(&format!(
        "{}: {} files, {} bytes",
        artifact.path.display(),
        artifact.files,
        artifact.size
    ))?;
    output.indent(&format!("sha256 {}", artifact.checksum))?;

    Ok(0)
}
