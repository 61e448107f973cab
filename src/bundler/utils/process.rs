//! External program execution.

use crate::bundler::error::{Error, Result};
use std::{ffi::OsStr, path::Path};

/// Runs `program` with `args` and waits for it to finish.
///
/// Output is inherited so tool progress shows up in the terminal. When
/// `cwd` is given the program runs in that directory. A non-zero exit is
/// reported as [`Error::ToolFailed`].
pub async fn run<I, S>(program: &Path, args: I, cwd: Option<&Path>) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<S> = args.into_iter().collect();
    let command = render(program, &args);

    let mut cmd = tokio::process::Command::new(program);
    cmd.args(&args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
        log::debug!("running `{}` in {}", command, dir.display());
    } else {
        log::debug!("running `{}`", command);
    }

    let status = cmd.status().await.map_err(|error| Error::CommandFailed {
        command: command.clone(),
        error,
    })?;

    if !status.success() {
        return Err(Error::ToolFailed { command, status });
    }
    Ok(())
}

fn render<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> String {
    let mut parts = vec![program.to_string_lossy().into_owned()];
    parts.extend(
        args.iter()
            .map(|a| AsRef::<OsStr>::as_ref(a).to_string_lossy().into_owned()),
    );
    parts.join(" ")
}
