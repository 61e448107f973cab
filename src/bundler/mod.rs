//! Windows bundle assembly for smbcmp.
//!
//! The bundler turns a Wireshark installer, an embedded Python release and
//! an smbcmp checkout into a self-contained directory that runs on Windows:
//!
//! ```text
//! <out>/
//!   smbcmp.exe            launcher (GUI subsystem)
//!   conf.ini              points smbcmp at the bundled tshark
//!   LICENSE*.txt
//!   tshark/               allow-listed files from the Wireshark installer
//!   python/               embedded Python with pip, windows-curses, wxpython
//!   smbcmp/               allow-listed files from the smbcmp tree
//! ```
//!
//! # Module Organization
//!
//! - [`builder`] - [`Bundler`] orchestrator, tool preflight, failure cleanup
//! - [`settings`] - run configuration and allow-lists
//! - [`platform`] - the individual assembly phases
//! - [`resources`] - files embedded in the binary (launcher source, licenses)
//! - [`utils`] - fs, process, download and listing helpers

pub mod builder;
pub mod error;
pub mod platform;
pub mod resources;
pub mod settings;
pub mod utils;

pub use builder::{BundledArtifact, Bundler, Tool, Toolchain};
pub use error::{Error, MissingTool, MissingTools, Result};
pub use settings::{AllowEntry, InstallerKind, Settings, SettingsBuilder};
