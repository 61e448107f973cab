//! pip and Python package installation into the embedded runtime.
//!
//! Both steps run the Windows interpreter through wine. Paths passed to it
//! are relative to the working directory so they resolve inside the wine
//! prefix mapping.

use crate::bundler::{
    Result, Tool, Toolchain,
    settings::{PipBootstrap, Settings},
    utils::{fs, http, process},
};

const GET_PIP: &str = "get-pip.py";

/// Installs pip, then every configured package, into `<out>/python`.
pub async fn install_packages(settings: &Settings, tools: &Toolchain) -> Result<()> {
    let wine = tools.path(Tool::Wine)?;
    let script = settings.out_dir().join(GET_PIP);

    log::info!("getting pip");
    match settings.pip_bootstrap() {
        PipBootstrap::Download(url) => {
            let data = http::download(url).await?;
            fs::write_file(&script, data).await?;
        }
        PipBootstrap::Local(path) => fs::copy_file(path, &script).await?,
    }

    log::info!("installing pip");
    process::run(wine, ["python/python.exe", GET_PIP], Some(settings.out_dir())).await?;
    fs::remove_file(&script).await?;

    let python_dir = settings.python_dir();
    for package in settings.pip_packages() {
        log::info!("pip install {}", package);
        process::run(
            wine,
            ["Scripts/pip.exe", "install", package.as_str()],
            Some(python_dir.as_path()),
        )
        .await?;
    }

    Ok(())
}
