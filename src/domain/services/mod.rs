//! Domain Services
//!
//! Stateless logic: path derivation, tool resolution, stage parameters and
//! tile addressing.

mod layout;
mod stage_plan;
mod toolchain;
pub mod xyz;

pub use layout::{ProjectLayout, TILES_DIR, TILES_URL_PREFIX, WORKING_DIR};
pub use stage_plan::{
    GeoExtent, OverviewParams, ReprojectParams, Resampling, StagePlan, StageTuning,
    TileCutParams, DEFAULT_TILE_PROCESSES, DEFAULT_WARP_MEMORY_MB, EXTENT_SRS, OVERVIEW_FACTORS,
    TARGET_SRS, WEB_MERCATOR_MAX_LATITUDE,
};
pub use toolchain::{ToolRequirement, ToolRequirements};
