//! Project filesystem layout
//!
//! The tile path shape is load-bearing: the viewer's URL template is
//! hard-wired to `/cesium/tiles/<tileset>/{z}/{x}/{y}.<ext>`.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ImageFormat, TilesetName};

/// Working artifacts, relative to the project root
pub const WORKING_DIR: &str = "data/working";

/// Published tilesets, relative to the project root
pub const TILES_DIR: &str = "public/cesium/tiles";

/// URL prefix the web client requests tiles under
pub const TILES_URL_PREFIX: &str = "/cesium/tiles";

/// Derived paths for a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn working_dir(&self) -> PathBuf {
        self.root.join(WORKING_DIR)
    }

    /// Reprojected and pyramided raster, kept between runs
    pub fn intermediate_raster(&self, tileset: &TilesetName) -> PathBuf {
        self.working_dir().join(format!("{}_3857.tif", tileset))
    }

    /// Advisory lock serializing runs of the same tileset
    pub fn lock_file(&self, tileset: &TilesetName) -> PathBuf {
        self.working_dir().join(format!("{}.lock", tileset))
    }

    /// JSON record of the last successful build
    pub fn build_record(&self, tileset: &TilesetName) -> PathBuf {
        self.working_dir().join(format!("{}.build.json", tileset))
    }

    /// Parent of every published tileset
    pub fn tiles_root(&self) -> PathBuf {
        self.root.join(TILES_DIR)
    }

    pub fn output_dir(&self, tileset: &TilesetName) -> PathBuf {
        self.tiles_root().join(tileset.as_str())
    }

    /// Request path template for the tile server
    pub fn url_template(tileset: &TilesetName, format: ImageFormat) -> String {
        format!(
            "{}/{}/{{z}}/{{x}}/{{y}}.{}",
            TILES_URL_PREFIX,
            tileset,
            format.extension()
        )
    }
}
