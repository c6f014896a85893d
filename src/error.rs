//! Error types for tilebake
//!
//! Uses `thiserror` for library errors. Every variant is terminal: the
//! pipeline has no notion of partial success.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StageFailure;

/// Result type alias for tilebake operations
pub type TilerResult<T> = Result<T, TilerError>;

/// Main error type for tilebake operations
#[derive(Error, Debug)]
pub enum TilerError {
    /// A required external tool could not be resolved on the search path
    #[error("missing dependency: '{tool}' not found in PATH")]
    MissingDependency { tool: String, hint: String },

    /// Source raster does not exist
    #[error("input not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// Source raster exists but is not a regular file
    #[error("input is not a regular file: {}", path.display())]
    InputNotAFile { path: PathBuf },

    /// Source raster cannot be opened for reading
    #[error("input is not readable: {}: {source}", path.display())]
    InputNotReadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Tileset name cannot be used as a directory segment
    #[error("invalid tileset name '{name}': {reason}")]
    InvalidTilesetName { name: String, reason: String },

    /// Zoom range string is malformed or out of order
    #[error("invalid zoom range '{input}': {reason}")]
    InvalidZoomRange { input: String, reason: String },

    /// JPEG quality outside 1..=100
    #[error("invalid JPEG quality {value}: must be between 1 and 100")]
    InvalidJpegQuality { value: i64 },

    /// Output directory exists and overwrite was not requested
    #[error("output already exists: {}", path.display())]
    OutputAlreadyExists { path: PathBuf },

    /// Another run holds the advisory lock for this tileset
    #[error("tileset '{tileset}' is locked by another run ({})", lock.display())]
    TilesetLocked { tileset: String, lock: PathBuf },

    /// Stage 1 failed
    #[error("reprojection failed: {0}")]
    ReprojectionFailed(StageFailure),

    /// Stage 2 failed
    #[error("overview build failed: {0}")]
    OverviewBuildFailed(StageFailure),

    /// Stage 3 failed
    #[error("tile cutting failed: {0}")]
    TileCutFailed(StageFailure),

    /// The produced tile tree does not match the request
    #[error("tileset verification failed for {}: {} problem(s)", path.display(), problems.len())]
    TilesetVerificationFailed { path: PathBuf, problems: Vec<String> },

    /// Configuration file could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TilerError {
    /// One-line remediation shown under the error message
    pub fn hint(&self) -> Option<String> {
        match self {
            TilerError::MissingDependency { hint, .. } => Some(hint.clone()),
            TilerError::InputNotFound { .. } => Some(
                "Check --input; relative paths are resolved from the project root.".to_string(),
            ),
            TilerError::InputNotAFile { .. } => {
                Some("--input must point at a raster file such as a GeoTIFF.".to_string())
            }
            TilerError::InputNotReadable { .. } => {
                Some("Check the file permissions of --input.".to_string())
            }
            TilerError::InvalidTilesetName { .. } => Some(
                "Use letters, digits, '-', '_' or '.', e.g. --tileset blue-marble.".to_string(),
            ),
            TilerError::InvalidZoomRange { .. } => {
                Some("Use the form <min>-<max>, e.g. --zoom 0-8.".to_string())
            }
            TilerError::InvalidJpegQuality { .. } => {
                Some("Pass --jpeg-quality with a value from 1 to 100 (default 85).".to_string())
            }
            TilerError::OutputAlreadyExists { .. } => {
                Some("Use --overwrite to replace it.".to_string())
            }
            TilerError::TilesetLocked { .. } => Some(
                "Wait for the other build of this tileset to finish, then retry.".to_string(),
            ),
            TilerError::ReprojectionFailed(_)
            | TilerError::OverviewBuildFailed(_)
            | TilerError::TileCutFailed(_) => Some(
                "See the tool output above. The intermediate raster is kept in data/working/."
                    .to_string(),
            ),
            TilerError::TilesetVerificationFailed { .. } => {
                Some("The tileset was not published. Inspect the tool output and retry.".to_string())
            }
            TilerError::InvalidConfig { .. } => {
                Some("Fix or remove the setting named above in tilebake.toml.".to_string())
            }
            TilerError::Io(_) => None,
        }
    }

    /// Stable identifier used in machine-readable output
    pub fn kind(&self) -> &'static str {
        match self {
            TilerError::MissingDependency { .. } => "missing_dependency",
            TilerError::InputNotFound { .. } => "input_not_found",
            TilerError::InputNotAFile { .. } => "input_not_a_file",
            TilerError::InputNotReadable { .. } => "input_not_readable",
            TilerError::InvalidTilesetName { .. } => "invalid_tileset_name",
            TilerError::InvalidZoomRange { .. } => "invalid_zoom_range",
            TilerError::InvalidJpegQuality { .. } => "invalid_jpeg_quality",
            TilerError::OutputAlreadyExists { .. } => "output_already_exists",
            TilerError::TilesetLocked { .. } => "tileset_locked",
            TilerError::ReprojectionFailed(_) => "reprojection_failed",
            TilerError::OverviewBuildFailed(_) => "overview_build_failed",
            TilerError::TileCutFailed(_) => "tile_cut_failed",
            TilerError::TilesetVerificationFailed { .. } => "tileset_verification_failed",
            TilerError::InvalidConfig { .. } => "invalid_config",
            TilerError::Io(_) => "io",
        }
    }

    /// Captured tool output for stage failures
    pub fn stage_failure(&self) -> Option<&StageFailure> {
        match self {
            TilerError::ReprojectionFailed(f)
            | TilerError::OverviewBuildFailed(f)
            | TilerError::TileCutFailed(f) => Some(f),
            _ => None,
        }
    }
}
