//! Tile image encoding

use std::fmt;

use serde::{Deserialize, Serialize};

/// Encoding of the published tiles
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossy, no alpha; smallest files for photographic basemaps
    #[default]
    #[value(name = "jpg", alias = "jpeg")]
    #[serde(rename = "jpg", alias = "jpeg")]
    Jpeg,
    /// Lossless with alpha; use when transparency matters
    #[value(name = "png")]
    Png,
}

impl ImageFormat {
    /// File extension of each tile, also used in the access URL
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
        }
    }

    /// GDAL raster driver that encodes the tiles
    pub fn gdal_driver(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
        }
    }

    pub fn is_lossy(&self) -> bool {
        matches!(self, ImageFormat::Jpeg)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
