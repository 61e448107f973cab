//! Command line argument parsing and validation.

use crate::bundler::settings::{GET_PIP_URL, PipBootstrap, SettingsBuilder};
use clap::Parser;
use std::path::PathBuf;

/// Package smbcmp for Windows
#[derive(Parser, Debug)]
#[command(
    name = "smbcmp_win_bundle",
    version,
    about = "Package smbcmp for windows",
    long_about = "Assembles a self-contained Windows directory for smbcmp: tshark from a \
Wireshark installer, an embedded Python with windows-curses and wxPython, the smbcmp \
sources and a smbcmp.exe launcher.

Requires wine, x86_64-w64-mingw32-gcc and msiextract (.msi) or 7z (.exe). Each tool
can be overridden with an environment variable: WINE, CC, MSIEXTRACT, 7Z.

Usage:
  smbcmp_win_bundle Wireshark-win64-3.2.0.exe python-3.8.1-embed-amd64.zip ../smbcmp dist/smbcmp

Exit code 0 = the output directory is complete. On failure it is removed."
)]
pub struct Args {
    /// Path to a Wireshark installer (.exe or .msi)
    #[arg(value_name = "WSHARK")]
    pub wshark: PathBuf,

    /// Path to a Windows embedded python release (.zip)
    #[arg(value_name = "PYTHON")]
    pub python: PathBuf,

    /// Path to smbcmp git repo
    #[arg(value_name = "SMBCMP")]
    pub smbcmp: PathBuf,

    /// Path to output directory (must not exist)
    #[arg(value_name = "OUT")]
    pub out: PathBuf,

    /// Use a local get-pip.py instead of downloading it
    #[arg(long, value_name = "PATH", env = "SMBCMP_PIP_BOOTSTRAP")]
    pub pip_bootstrap: Option<PathBuf>,

    /// URL of the pip bootstrap script
    #[arg(long, value_name = "URL", env = "SMBCMP_GET_PIP_URL", default_value = GET_PIP_URL)]
    pub get_pip_url: String,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.out.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }

        for (name, path) in [
            ("WSHARK", &self.wshark),
            ("PYTHON", &self.python),
            ("SMBCMP", &self.smbcmp),
        ] {
            if path == &self.out {
                return Err(format!("{} and OUT are the same path", name));
            }
        }

        Ok(())
    }

    /// Settings builder populated from the arguments.
    pub fn settings_builder(&self) -> SettingsBuilder {
        let bootstrap = match &self.pip_bootstrap {
            Some(path) => PipBootstrap::Local(path.clone()),
            None => PipBootstrap::Download(self.get_pip_url.clone()),
        };

        SettingsBuilder::new()
            .installer(&self.wshark)
            .python_archive(&self.python)
            .smbcmp_source(&self.smbcmp)
            .out_dir(&self.out)
            .pip_bootstrap(bootstrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["smbcmp_win_bundle", "ws.exe", "py.zip", "smbcmp", "out"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn four_positionals() {
        let args = parse(&[]);
        assert_eq!(args.wshark, PathBuf::from("ws.exe"));
        assert_eq!(args.out, PathBuf::from("out"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn missing_positional_is_a_parse_error() {
        assert!(Args::try_parse_from(["smbcmp_win_bundle", "ws.exe", "py.zip", "smbcmp"]).is_err());
    }

    #[test]
    fn local_bootstrap_takes_precedence() {
        let args = parse(&["--pip-bootstrap", "get-pip.py"]);
        let settings = args.settings_builder().build().unwrap();
        assert!(matches!(
            settings.pip_bootstrap(),
            PipBootstrap::Local(p) if p.ends_with("get-pip.py")
        ));
    }

    #[test]
    fn quiet_lowers_default_log_level() {
        assert_eq!(crate::cli::log_filter(&parse(&[])), "info");
        assert_eq!(crate::cli::log_filter(&parse(&["--quiet"])), "warn");
        assert_eq!(crate::cli::log_filter(&parse(&["-q"])), "warn");
    }

    #[test]
    fn output_equal_to_input_is_rejected() {
        let args = Args::try_parse_from(["smbcmp_win_bundle", "ws.exe", "py.zip", "same", "same"])
            .unwrap();
        assert!(args.validate().unwrap_err().contains("SMBCMP"));
    }
}
