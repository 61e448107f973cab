//! RAII guard removing a partially built bundle.

use std::path::{Path, PathBuf};

/// Deletes the output directory on drop unless the build was committed.
///
/// Covers early returns through `?` as well as panics, so an interrupted
/// build never leaves a complete-looking directory behind.
#[derive(Debug)]
pub struct OutputGuard {
    path: PathBuf,
    armed: bool,
}

impl OutputGuard {
    /// Starts guarding `path`.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            armed: true,
        }
    }

    /// Keeps the directory: the build finished.
    pub fn commit(mut self) {
        self.armed = false;
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        log::warn!(
            "bundle did not complete, clearing output dir {}",
            self.path.display()
        );
        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::error!("failed to remove {}: {}", self.path.display(), e),
        }
    }
}
