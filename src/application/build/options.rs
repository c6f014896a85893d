//! Build Options
//!
//! Run-level switches that are not part of the request itself.

use crate::config::Config;
use crate::domain::services::StageTuning;

/// Options for the build use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Validate, resolve tools and plan; touch nothing on disk
    pub dry_run: bool,
    /// Cut into a staging directory and rename it into place on success
    pub staged_publish: bool,
    /// Resource knobs passed through to the tools
    pub tuning: StageTuning,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self {
            dry_run: false,
            staged_publish: true,
            tuning: StageTuning::default(),
        }
    }

    /// Options as configured in `tilebake.toml` (and its env overrides)
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_staged_publish(config.publish.staged)
            .with_tuning(StageTuning {
                warp_memory_mb: config.reproject.warp_memory_mb,
                tile_processes: config.tiling.processes,
            })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_staged_publish(mut self, staged: bool) -> Self {
        self.staged_publish = staged;
        self
    }

    pub fn with_tuning(mut self, tuning: StageTuning) -> Self {
        self.tuning = tuning;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new()
    }
}
