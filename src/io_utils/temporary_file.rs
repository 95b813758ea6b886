//! Remove a file via `Drop` unless it was persisted.

//! Used for writing the chart image next to its final location and
//! renaming it into place once complete, so that a failed render does
//! not leave a partial image behind. Relying on `Drop` means that
//! being killed by a signal leaves the temporary file in place.

use std::path::{Path, PathBuf};

use crate::{debug, info};

#[derive(Debug)]
pub struct TemporaryFile {
    path: PathBuf,
}

impl TemporaryFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rename the file to `target` (replacing whatever is there) and
    /// disarm the cleanup.
    pub fn persist(self, target: &Path) -> std::io::Result<()> {
        std::fs::rename(&self.path, target)?;
        debug!("renamed {:?} to {target:?}", self.path);
        // The path is gone now; `drop` sees NotFound and stays quiet.
        Ok(())
    }
}

impl From<PathBuf> for TemporaryFile {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Drop for TemporaryFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => info!("deleted temporary file {:?}", self.path),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => (),
                _ => info!("error deleting temporary file {:?}: {e:#}", self.path),
            },
        }
    }
}
