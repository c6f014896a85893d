//! Build Module
//!
//! Orchestrates a tileset build.
//!
//! ## Structure
//!
//! - `options` - Run-level switches (`BuildOptions`)
//! - `result` - Result types (`BuildResult`, `PlannedStage`)
//! - `use_case` - Core use case logic (`BuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use tilebake::application::build::{BuildOptions, BuildUseCase};
//!
//! let use_case = BuildUseCase::new(layout, PathToolLocator, GdalWarp::default(),
//!     GdalAddo::default(), Gdal2Tiles::default());
//! let result = use_case.execute(&raw_request, &BuildOptions::default())?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::{BuildResult, PlannedStage};
pub use use_case::BuildUseCase;
