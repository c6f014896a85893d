//! Staged publish
//!
//! Tiles are cut into a hidden sibling of the output directory and renamed
//! into place once they verify. Staging and output share a parent, so the
//! rename never crosses a filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::domain::value_objects::TilesetName;
use crate::error::TilerResult;

/// A staging directory that is removed on drop unless published
#[derive(Debug)]
pub struct StagingDir {
    dir: TempDir,
}

impl StagingDir {
    /// Create `.<tileset>.staging-XXXX` inside `tiles_root`
    pub fn create_in(tiles_root: &Path, tileset: &TilesetName) -> TilerResult<Self> {
        fs::create_dir_all(tiles_root)?;
        let dir = tempfile::Builder::new()
            .prefix(&format!(".{}.staging-", tileset))
            .tempdir_in(tiles_root)?;
        tracing::debug!(staging = %dir.path().display(), "created staging directory");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Rename the staged tree onto `output_dir`.
    ///
    /// `output_dir` must not exist; the caller removes a previous tileset
    /// before any stage runs.
    pub fn publish(self, output_dir: &Path) -> TilerResult<PathBuf> {
        // On failure the TempDir drop discards the staged tree; on success
        // its cleanup finds nothing left to remove.
        fs::rename(self.dir.path(), output_dir)?;
        tracing::debug!(output = %output_dir.display(), "published staged tiles");
        Ok(output_dir.to_path_buf())
    }
}
