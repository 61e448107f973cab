//! License files and the generated `conf.ini`.

use crate::bundler::{Result, resources, settings::Settings, utils::fs};

/// Name of the generated configuration file.
pub const CONF_NAME: &str = "conf.ini";

/// Location of tshark relative to the bundle root, as smbcmp reads it on Windows.
pub const TSHARK_REL_PATH: &str = r".\tshark\tshark.exe";

/// Contents of `conf.ini`.
pub fn conf_ini() -> String {
    format!("[global]\ntshark_path = {}\n", TSHARK_REL_PATH)
}

/// Writes the license files and `conf.ini` into the bundle root.
pub async fn finalize(settings: &Settings) -> Result<()> {
    log::info!("copying licenses...");
    for (name, text) in resources::LICENSES {
        fs::write_file(&settings.out_dir().join(name), text).await?;
    }

    log::info!("writing conf");
    fs::write_file(&settings.out_dir().join(CONF_NAME), conf_ini()).await
}
