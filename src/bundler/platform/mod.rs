//! Target platform specific assembly.
//!
//! Only Windows bundles are produced; the phases run on any host that has
//! wine and a MinGW cross compiler.

pub mod windows;
