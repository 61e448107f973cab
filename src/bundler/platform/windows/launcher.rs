//! Native launcher compilation.
//!
//! `smbcmp.exe` sits at the bundle root and starts the GUI with the bundled
//! interpreter. It is linked for the windows subsystem so no console window
//! opens, and against shlwapi for the path helpers it uses.

use crate::bundler::{
    Error, Result, Tool, Toolchain, resources,
    settings::Settings,
    utils::{fs, process},
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// File name of the compiled launcher.
pub const LAUNCHER_NAME: &str = "smbcmp.exe";

/// Compiles the embedded launcher source into `<out>/smbcmp.exe`.
pub async fn compile_launcher(settings: &Settings, tools: &Toolchain) -> Result<PathBuf> {
    log::info!("compiling launcher");

    let workdir = tempfile::Builder::new()
        .prefix("smbcmp-launcher-")
        .tempdir()
        .map_err(|e| Error::GenericError(format!("creating launcher build directory: {}", e)))?;

    let source = workdir.path().join("launcher.c");
    fs::write_file(&source, resources::LAUNCHER_C).await?;

    let exe = settings.out_dir().join(LAUNCHER_NAME);
    process::run(tools.path(Tool::Compiler)?, compiler_args(&source, &exe), None).await?;

    Ok(exe)
}

/// Compiler command line building `output` from `source`.
pub fn compiler_args(source: &Path, output: &Path) -> Vec<OsString> {
    vec![
        source.as_os_str().to_owned(),
        "-Wl,-subsystem,windows".into(),
        "-lshlwapi".into(),
        "-o".into(),
        output.as_os_str().to_owned(),
    ]
}
