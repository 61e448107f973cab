//! Helpers shared by the bundling phases.

pub mod fs;
pub mod http;
pub mod listing;
pub mod process;
