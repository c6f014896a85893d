//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and all filesystem side effects.
//!
//! ## Structure
//!
//! - `tools/` - GDAL process adapters and `PATH` lookup
//! - `lock` - per-tileset advisory lock
//! - `staging` - staged publish directory
//! - `build_record` - JSON record of the last successful build

pub mod build_record;
pub mod lock;
pub mod staging;
pub mod tools;

pub use build_record::{BuildRecord, StageTiming};
pub use lock::TilesetLock;
pub use staging::StagingDir;
pub use tools::{Gdal2Tiles, GdalAddo, GdalWarp, PathToolLocator, ToolCommand, ToolOutput};
