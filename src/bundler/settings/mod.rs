//! Configuration for a bundle run.
//!
//! [`SettingsBuilder`] validates and normalizes the command line inputs into
//! an immutable [`Settings`]; [`allow_list`] holds the fixed file selections.

pub mod allow_list;
mod builder;
mod core;
mod installer;

// Re-export all public types
pub use allow_list::AllowEntry;
pub use builder::{DEFAULT_PIP_PACKAGES, GET_PIP_URL, SettingsBuilder};
pub use self::core::{PipBootstrap, Settings};
pub use installer::InstallerKind;
