//! Domain Value Objects
//!
//! Immutable, validated values that make up a build request.

mod image_format;
mod jpeg_quality;
mod stage_kind;
mod tileset_name;
mod zoom_range;

pub use image_format::ImageFormat;
pub use jpeg_quality::{JpegQuality, DEFAULT_JPEG_QUALITY};
pub use stage_kind::StageKind;
pub use tileset_name::TilesetName;
pub use zoom_range::{ZoomRange, DEFAULT_ZOOM_RANGE, MAX_ZOOM_LEVEL};
