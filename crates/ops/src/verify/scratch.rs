//! Scratch directory guard

use std::path::{Path, PathBuf};

use pkgverify_errors::{Error, VerifyError};
use tokio::fs;

/// Owns the scratch directory for one verification run
///
/// Call [`ScratchDir::release`] on every path. If the guard is dropped while
/// still armed (a panic, a cancelled future) the directory is removed
/// synchronously.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
    removed_stale: bool,
    armed: bool,
}

impl ScratchDir {
    /// Remove anything at `path` and create an empty directory there
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::ScratchDirectory` if the stale entry cannot be
    /// removed or the directory cannot be created.
    pub async fn prepare(path: PathBuf) -> Result<Self, Error> {
        let removed_stale = match fs::symlink_metadata(&path).await {
            Ok(meta) => {
                let removed = if meta.is_dir() {
                    fs::remove_dir_all(&path).await
                } else {
                    fs::remove_file(&path).await
                };
                removed.map_err(|e| scratch_error(&path, &e))?;
                true
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => return Err(scratch_error(&path, &e)),
        };

        fs::create_dir(&path)
            .await
            .map_err(|e| scratch_error(&path, &e))?;

        Ok(Self {
            path,
            removed_stale,
            armed: true,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a leftover from an earlier run had to be removed
    #[must_use]
    pub fn removed_stale(&self) -> bool {
        self.removed_stale
    }

    /// Remove the directory and disarm the guard
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::ScratchDirectory` if removal fails for any
    /// reason other than the directory already being gone.
    pub async fn release(mut self) -> Result<PathBuf, Error> {
        self.armed = false;
        match fs::remove_dir_all(&self.path).await {
            Ok(()) => Ok(self.path.clone()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(self.path.clone()),
            Err(e) => Err(scratch_error(&self.path, &e)),
        }
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = std::fs::remove_dir_all(&self.path) {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to remove scratch directory");
            }
        }
    }
}

fn scratch_error(path: &Path, err: &std::io::Error) -> Error {
    VerifyError::ScratchDirectory {
        path: path.display().to_string(),
        message: err.to_string(),
    }
    .into()
}
