//! Windows bundle builder for smbcmp.
//!
//! This library assembles a self-contained Windows directory holding:
//! - tshark and its libraries, taken from a Wireshark installer
//! - an embedded Python with pip, windows-curses and wxPython
//! - the smbcmp sources and a native `smbcmp.exe` launcher
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
