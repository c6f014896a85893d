//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::{
    ToolRequirement, ToolRequirements, DEFAULT_TILE_PROCESSES, DEFAULT_WARP_MEMORY_MB,
};
use crate::domain::value_objects::StageKind;
use crate::error::TilerResult;

use super::loader::{self, ConfigWarning};

/// Config file name, looked up at the project root
pub const CONFIG_FILE: &str = "tilebake.toml";

/// Executable names to try, first found wins.
///
/// Accepts a single name:
///   tiler = "gdal2tiles"
///
/// Or a list:
///   tiler = ["gdal2tiles.py", "gdal2tiles"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToolCandidates(pub Vec<String>);

impl ToolCandidates {
    fn of(names: &[&str]) -> Self {
        Self(names.iter().map(|n| n.to_string()).collect())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ToolCandidatesDe {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for ToolCandidates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match ToolCandidatesDe::deserialize(deserializer)? {
            ToolCandidatesDe::One(name) => Ok(Self(vec![name])),
            ToolCandidatesDe::Many(names) => Ok(Self(names)),
        }
    }
}

/// `[tools]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_warp")]
    pub warp: ToolCandidates,

    #[serde(default = "default_overviews")]
    pub overviews: ToolCandidates,

    #[serde(default = "default_tiler")]
    pub tiler: ToolCandidates,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            warp: default_warp(),
            overviews: default_overviews(),
            tiler: default_tiler(),
        }
    }
}

impl ToolsConfig {
    pub fn requirements(&self) -> ToolRequirements {
        ToolRequirements {
            warp: ToolRequirement::new(StageKind::Reproject, self.warp.0.clone()),
            overviews: ToolRequirement::new(StageKind::BuildOverviews, self.overviews.0.clone()),
            tiler: ToolRequirement::new(StageKind::CutTiles, self.tiler.0.clone()),
        }
    }
}

fn default_warp() -> ToolCandidates {
    ToolCandidates::of(&["gdalwarp"])
}

fn default_overviews() -> ToolCandidates {
    ToolCandidates::of(&["gdaladdo"])
}

fn default_tiler() -> ToolCandidates {
    ToolCandidates::of(&["gdal2tiles.py", "gdal2tiles"])
}

/// `[reproject]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReprojectConfig {
    /// gdalwarp `-wm` budget in MB
    #[serde(default = "default_warp_memory_mb")]
    pub warp_memory_mb: u32,
}

impl Default for ReprojectConfig {
    fn default() -> Self {
        Self {
            warp_memory_mb: default_warp_memory_mb(),
        }
    }
}

fn default_warp_memory_mb() -> u32 {
    DEFAULT_WARP_MEMORY_MB
}

/// `[tiling]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilingConfig {
    /// gdal2tiles worker processes
    #[serde(default = "default_processes")]
    pub processes: u32,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            processes: default_processes(),
        }
    }
}

fn default_processes() -> u32 {
    DEFAULT_TILE_PROCESSES
}

/// `[publish]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Cut into a staging directory and rename it into place
    #[serde(default = "default_true")]
    pub staged: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            staged: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub reproject: ReprojectConfig,

    #[serde(default)]
    pub tiling: TilingConfig,

    #[serde(default)]
    pub publish: PublishConfig,
}

impl Config {
    /// Load `tilebake.toml` from the project root (defaults when absent),
    /// then apply environment overrides
    pub fn load_or_default(project_root: &Path) -> TilerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }
}
