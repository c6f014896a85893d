//! Build Request Entity
//!
//! `RawRequest` is what the command line hands over; `BuildRequest` only
//! exists once every field has been validated.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::{
    ImageFormat, JpegQuality, TilesetName, ZoomRange, DEFAULT_JPEG_QUALITY, DEFAULT_ZOOM_RANGE,
};
use crate::error::TilerResult;

/// Unvalidated configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequest {
    pub input: PathBuf,
    pub tileset: String,
    pub zoom: String,
    pub format: ImageFormat,
    pub jpeg_quality: i64,
    pub overwrite: bool,
}

impl RawRequest {
    pub fn new(input: impl Into<PathBuf>, tileset: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            tileset: tileset.into(),
            zoom: DEFAULT_ZOOM_RANGE.to_string(),
            format: ImageFormat::default(),
            jpeg_quality: i64::from(DEFAULT_JPEG_QUALITY),
            overwrite: false,
        }
    }

    pub fn with_zoom(mut self, zoom: impl Into<String>) -> Self {
        self.zoom = zoom.into();
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_jpeg_quality(mut self, quality: i64) -> Self {
        self.jpeg_quality = quality;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Validate every field and resolve the input against `project_root`.
    ///
    /// Only checks the shape of the request; whether the input file exists
    /// is a precondition checked by the orchestrator.
    pub fn validate(&self, project_root: &Path) -> TilerResult<BuildRequest> {
        let tileset = TilesetName::parse(&self.tileset)?;
        let zoom: ZoomRange = self.zoom.parse()?;
        let jpeg_quality = match self.format {
            ImageFormat::Jpeg => JpegQuality::new(self.jpeg_quality)?,
            ImageFormat::Png => JpegQuality::default(),
        };

        Ok(BuildRequest {
            input: project_root.join(&self.input),
            tileset,
            zoom,
            format: self.format,
            jpeg_quality,
            overwrite: self.overwrite,
        })
    }
}

/// Validated, immutable configuration for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildRequest {
    input: PathBuf,
    tileset: TilesetName,
    zoom: ZoomRange,
    format: ImageFormat,
    jpeg_quality: JpegQuality,
    overwrite: bool,
}

impl BuildRequest {
    /// Source raster, resolved against the project root
    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn tileset(&self) -> &TilesetName {
        &self.tileset
    }

    pub fn zoom(&self) -> ZoomRange {
        self.zoom
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Only meaningful when `format()` is JPEG
    pub fn jpeg_quality(&self) -> JpegQuality {
        self.jpeg_quality
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }
}
