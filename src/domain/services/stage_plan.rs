//! Stage parameter construction
//!
//! Derives the input contract of every stage from a validated request.
//! The constants here are the fixed parts of that contract.

use std::path::{Path, PathBuf};

use crate::domain::entities::BuildRequest;
use crate::domain::services::ProjectLayout;
use crate::domain::value_objects::{ImageFormat, JpegQuality, ZoomRange};

/// Target coordinate reference system (Web Mercator)
pub const TARGET_SRS: &str = "EPSG:3857";

/// CRS the framing extent is expressed in
pub const EXTENT_SRS: &str = "EPSG:4326";

/// Latitude limit of Web Mercator; clamping avoids the polar singularities
pub const WEB_MERCATOR_MAX_LATITUDE: f64 = 85.05112878;

/// Overview decimation ladder. Covers every zoom the cutter may be asked for.
pub const OVERVIEW_FACTORS: [u32; 8] = [2, 4, 8, 16, 32, 64, 128, 256];

pub const DEFAULT_WARP_MEMORY_MB: u32 = 2048;

pub const DEFAULT_TILE_PROCESSES: u32 = 8;

/// Geographic bounding box (`min_x min_y max_x max_y`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoExtent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl GeoExtent {
    /// The valid Web Mercator band in degrees
    pub const WEB_MERCATOR_BAND: GeoExtent = GeoExtent {
        min_x: -180.0,
        min_y: -WEB_MERCATOR_MAX_LATITUDE,
        max_x: 180.0,
        max_y: WEB_MERCATOR_MAX_LATITUDE,
    };
}

/// Resampling kernels used by the stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resampling {
    /// Continuous interpolation for photographic imagery
    Bilinear,
    /// Area average, avoids aliasing in overviews
    Average,
}

impl Resampling {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resampling::Bilinear => "bilinear",
            Resampling::Average => "average",
        }
    }
}

/// Stage 1 input contract
#[derive(Debug, Clone, PartialEq)]
pub struct ReprojectParams {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub target_srs: &'static str,
    pub extent_srs: &'static str,
    pub extent: GeoExtent,
    pub resampling: Resampling,
    pub multithreaded: bool,
    pub warp_memory_mb: u32,
    /// Replace an intermediate raster left by a previous run
    pub overwrite_intermediate: bool,
    /// GeoTIFF creation options: tiled, compressed, large-file safe
    pub creation_options: Vec<(&'static str, &'static str)>,
}

/// Stage 2 input contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewParams {
    /// Raster mutated in place
    pub raster: PathBuf,
    pub resampling: Resampling,
    pub factors: Vec<u32>,
}

/// Stage 3 input contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileCutParams {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub zoom: ZoomRange,
    pub format: ImageFormat,
    pub jpeg_quality: JpegQuality,
    pub processes: u32,
}

/// Resource knobs that come from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTuning {
    pub warp_memory_mb: u32,
    pub tile_processes: u32,
}

impl Default for StageTuning {
    fn default() -> Self {
        Self {
            warp_memory_mb: DEFAULT_WARP_MEMORY_MB,
            tile_processes: DEFAULT_TILE_PROCESSES,
        }
    }
}

/// Parameters for all three stages of one run
#[derive(Debug, Clone, PartialEq)]
pub struct StagePlan {
    pub reproject: ReprojectParams,
    pub overviews: OverviewParams,
    pub tiles: TileCutParams,
}

impl StagePlan {
    /// `tile_dir` is where stage 3 writes; the output directory itself or a
    /// staging directory that is renamed onto it later.
    pub fn derive(
        request: &BuildRequest,
        layout: &ProjectLayout,
        tuning: StageTuning,
        tile_dir: &Path,
    ) -> Self {
        let intermediate = layout.intermediate_raster(request.tileset());

        Self {
            reproject: ReprojectParams {
                source: request.input().to_path_buf(),
                destination: intermediate.clone(),
                target_srs: TARGET_SRS,
                extent_srs: EXTENT_SRS,
                extent: GeoExtent::WEB_MERCATOR_BAND,
                resampling: Resampling::Bilinear,
                multithreaded: true,
                warp_memory_mb: tuning.warp_memory_mb,
                overwrite_intermediate: true,
                creation_options: vec![
                    ("TILED", "YES"),
                    ("COMPRESS", "DEFLATE"),
                    ("BIGTIFF", "YES"),
                ],
            },
            overviews: OverviewParams {
                raster: intermediate.clone(),
                resampling: Resampling::Average,
                factors: OVERVIEW_FACTORS.to_vec(),
            },
            tiles: TileCutParams {
                source: intermediate,
                output_dir: tile_dir.to_path_buf(),
                zoom: request.zoom(),
                format: request.format(),
                jpeg_quality: request.jpeg_quality(),
                processes: tuning.tile_processes,
            },
        }
    }
}
