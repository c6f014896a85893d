//! Per-tileset advisory lock
//!
//! Serializes runs that target the same tileset. Uses `flock`-style locks via
//! `fs2`; the lock file stays on disk, only the lock is released.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::value_objects::TilesetName;
use crate::error::{TilerError, TilerResult};

/// Held for the duration of a run; released on drop
#[derive(Debug)]
pub struct TilesetLock {
    file: File,
    path: PathBuf,
}

impl TilesetLock {
    /// Take the lock without waiting.
    ///
    /// Returns `TilesetLocked` if another process (or another handle in this
    /// process) already holds it.
    pub fn acquire(path: &Path, tileset: &TilesetName) -> TilerResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                tracing::debug!(lock = %path.display(), "acquired tileset lock");
                Ok(Self {
                    file,
                    path: path.to_path_buf(),
                })
            }
            Err(e) if is_contended(&e) => Err(TilerError::TilesetLocked {
                tileset: tileset.to_string(),
                lock: path.to_path_buf(),
            }),
            Err(e) => Err(TilerError::Io(e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TilesetLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
        tracing::debug!(lock = %self.path.display(), "released tileset lock");
    }
}

fn is_contended(err: &io::Error) -> bool {
    err.kind() == fs2::lock_contended_error().kind()
        || err.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}
