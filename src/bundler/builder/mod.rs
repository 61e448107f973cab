//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that runs the
//! Windows bundle phases.
//!
//! # Overview
//!
//! The bundler:
//! 1. Resolves external tools into a [`Toolchain`] (all-or-nothing)
//! 2. Checks inputs and that the output directory does not exist
//! 3. Runs the phases in [`platform::windows`](crate::bundler::platform::windows)
//! 4. Removes the output directory if anything fails
//! 5. Returns a [`BundledArtifact`] summary
//!
//! # Module Organization
//!
//! - [`artifact`] - file count, size and SHA-256 of the finished bundle
//! - [`guard`] - output directory cleanup on failure
//! - [`orchestrator`] - Main [`Bundler`] struct
//! - [`tool_detection`] - external tool lookup

mod artifact;
mod guard;
mod orchestrator;
mod tool_detection;

pub use artifact::{BundledArtifact, summarize};
pub use guard::OutputGuard;
pub use orchestrator::Bundler;
pub use tool_detection::{Tool, Toolchain};
