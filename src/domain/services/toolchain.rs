//! Tool availability check
//!
//! Turns configured executable candidates into a [`Toolchain`], failing
//! with `MissingDependency` on the first stage whose tool is absent.

use crate::domain::ports::{ToolLocator, Toolchain};
use crate::domain::value_objects::StageKind;
use crate::error::{TilerError, TilerResult};

/// Candidate executable names for one stage, first match wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequirement {
    pub stage: StageKind,
    pub candidates: Vec<String>,
}

impl ToolRequirement {
    pub fn new(stage: StageKind, candidates: Vec<String>) -> Self {
        Self { stage, candidates }
    }

    /// Name used in error messages
    pub fn display_name(&self) -> String {
        if self.candidates.is_empty() {
            self.stage.to_string()
        } else {
            self.candidates.join(" or ")
        }
    }

    fn resolve(&self, locator: &impl ToolLocator) -> TilerResult<std::path::PathBuf> {
        self.candidates
            .iter()
            .find_map(|candidate| locator.locate(candidate))
            .ok_or_else(|| TilerError::MissingDependency {
                tool: self.display_name(),
                hint: format!("Install GDAL so '{}' is available.", self.display_name()),
            })
    }
}

/// The three tools a build needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequirements {
    pub warp: ToolRequirement,
    pub overviews: ToolRequirement,
    pub tiler: ToolRequirement,
}

impl Default for ToolRequirements {
    fn default() -> Self {
        Self {
            warp: ToolRequirement::new(StageKind::Reproject, vec!["gdalwarp".to_string()]),
            overviews: ToolRequirement::new(
                StageKind::BuildOverviews,
                vec!["gdaladdo".to_string()],
            ),
            tiler: ToolRequirement::new(
                StageKind::CutTiles,
                vec!["gdal2tiles.py".to_string(), "gdal2tiles".to_string()],
            ),
        }
    }
}

impl ToolRequirements {
    /// Resolve every tool, in stage order
    pub fn resolve(&self, locator: &impl ToolLocator) -> TilerResult<Toolchain> {
        Ok(Toolchain {
            warp: self.warp.resolve(locator)?,
            overviews: self.overviews.resolve(locator)?,
            tiler: self.tiler.resolve(locator)?,
        })
    }
}
