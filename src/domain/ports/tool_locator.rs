//! Tool Locator Port
//!
//! Resolves external executables. Queried once per run; the resolved
//! [`Toolchain`] is then handed to every stage.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::StageKind;

/// Finds executables by name
///
/// Implementations:
/// - `PathToolLocator` - searches the process `PATH`
/// - test fakes that answer from a fixed table
pub trait ToolLocator {
    /// Absolute path of `program`, or `None` when it cannot be found
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

impl<T: ToolLocator + ?Sized> ToolLocator for &T {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        (**self).locate(program)
    }
}

/// Resolved executables for the three stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toolchain {
    pub warp: PathBuf,
    pub overviews: PathBuf,
    pub tiler: PathBuf,
}

impl Toolchain {
    /// Executable that runs `stage`
    pub fn program(&self, stage: StageKind) -> &Path {
        match stage {
            StageKind::Reproject => &self.warp,
            StageKind::BuildOverviews => &self.overviews,
            StageKind::CutTiles => &self.tiler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_maps_stages() {
        let tools = Toolchain {
            warp: PathBuf::from("/usr/bin/gdalwarp"),
            overviews: PathBuf::from("/usr/bin/gdaladdo"),
            tiler: PathBuf::from("/usr/bin/gdal2tiles.py"),
        };
        assert_eq!(tools.program(StageKind::Reproject), Path::new("/usr/bin/gdalwarp"));
        assert_eq!(
            tools.program(StageKind::BuildOverviews),
            Path::new("/usr/bin/gdaladdo")
        );
        assert_eq!(
            tools.program(StageKind::CutTiles),
            Path::new("/usr/bin/gdal2tiles.py")
        );
    }
}
