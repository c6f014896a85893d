//! tilebake - raster to XYZ web tile pipeline
//!
//! Converts one georeferenced raster into a pyramid of `z/x/y` image tiles
//! for a web globe viewer. Reprojection, overview building and tile cutting
//! are delegated to the GDAL command line tools; this crate owns the
//! ordering, the parameter contract between the stages and the rules that
//! keep partial tilesets out of the served directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod project_root;

// Re-exports for convenience
pub use application::{BuildOptions, BuildResult, BuildUseCase};
pub use config::Config;
pub use domain::entities::{BuildRequest, RawRequest};
pub use error::{TilerError, TilerResult};
pub use project_root::discover_project_root;
