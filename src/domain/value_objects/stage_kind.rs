//! Pipeline stage identifiers

use std::fmt;

use serde::Serialize;

/// The three ordered stages of a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Stage 1: warp the source into Web Mercator
    Reproject,
    /// Stage 2: add the overview ladder in place
    BuildOverviews,
    /// Stage 3: cut the XYZ tile tree
    CutTiles,
}

impl StageKind {
    /// Execution order
    pub const ORDERED: [StageKind; 3] = [
        StageKind::Reproject,
        StageKind::BuildOverviews,
        StageKind::CutTiles,
    ];

    /// Position in the pipeline, starting at 1
    pub fn number(&self) -> usize {
        match self {
            StageKind::Reproject => 1,
            StageKind::BuildOverviews => 2,
            StageKind::CutTiles => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StageKind::Reproject => "Reproject to EPSG:3857",
            StageKind::BuildOverviews => "Build overviews",
            StageKind::CutTiles => "Cut XYZ tiles",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StageKind::Reproject => "reproject",
            StageKind::BuildOverviews => "build_overviews",
            StageKind::CutTiles => "cut_tiles",
        })
    }
}
