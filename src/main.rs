//! smbcmp Windows bundle builder.
//!
//! Builds the Windows distribution directory of smbcmp from a Wireshark
//! installer, an embedded Python release and an smbcmp checkout.

use smbcmp_win_bundle::cli::{self, Args, OutputManager};
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli::log_filter(&args)))
        .init();

    // Run CLI and get exit code
    let exit_code = match cli::run(&args).await {
        Ok(code) => code,
        Err(e) => {
            OutputManager::default().error(&e.to_string());
            1
        }
    };

    process::exit(exit_code);
}
