//! Build Result

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::{BuildRequest, TilesetReport};
use crate::domain::ports::Toolchain;
use crate::domain::value_objects::StageKind;
use crate::infrastructure::StageTiming;

/// A stage command as it would run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStage {
    pub stage: StageKind,
    pub command: String,
}

/// Result of a successful build (or dry run)
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub request: BuildRequest,
    pub tools: Toolchain,
    /// Published tileset directory
    pub output_dir: PathBuf,
    /// `/cesium/tiles/<tileset>/{z}/{x}/{y}.<ext>`
    pub url_template: String,
    pub dry_run: bool,
    /// Planned commands; filled in for dry runs only
    pub planned: Vec<PlannedStage>,
    /// Stages that ran, in order
    pub stages: Vec<StageTiming>,
    /// `None` for dry runs
    pub report: Option<TilesetReport>,
    /// Where the build record was written, if it was
    pub record: Option<PathBuf>,
}

impl BuildResult {
    pub fn total_tiles(&self) -> usize {
        self.report.as_ref().map_or(0, TilesetReport::total_tiles)
    }
}
