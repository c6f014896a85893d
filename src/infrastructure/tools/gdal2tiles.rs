//! Stage 3 adapter: `gdal2tiles`
//!
//! Always XYZ addressing (`--xyz`) and no HTML viewer (`-w none`); the
//! globe client lives elsewhere.

use crate::domain::ports::{RasterStage, StageOutcome, Toolchain};
use crate::domain::services::TileCutParams;
use crate::domain::value_objects::StageKind;

use super::process::{ToolCommand, ToolOutput};

/// Cuts the pyramided raster into `z/x/y` tiles
#[derive(Debug, Clone, Copy, Default)]
pub struct Gdal2Tiles {
    output: ToolOutput,
}

impl Gdal2Tiles {
    pub fn new(output: ToolOutput) -> Self {
        Self { output }
    }

    pub fn command(&self, tools: &Toolchain, params: &TileCutParams) -> ToolCommand {
        let mut cmd = ToolCommand::new(&tools.tiler)
            .args(["-z".to_string(), params.zoom.to_string()])
            .arg("--xyz")
            .args(["-w", "none"])
            .arg(format!("--processes={}", params.processes))
            .args(["--tiledriver", params.format.gdal_driver()]);

        if params.format.is_lossy() {
            cmd = cmd.args([
                "--config".to_string(),
                "JPEG_QUALITY".to_string(),
                params.jpeg_quality.to_string(),
            ]);
        }

        cmd.arg(&params.source).arg(&params.output_dir)
    }
}

impl RasterStage<TileCutParams> for Gdal2Tiles {
    fn kind(&self) -> StageKind {
        StageKind::CutTiles
    }

    fn describe(&self, tools: &Toolchain, params: &TileCutParams) -> String {
        self.command(tools, params).command_line()
    }

    fn run(&self, tools: &Toolchain, params: &TileCutParams) -> StageOutcome {
        self.command(tools, params).run(self.output)
    }
}
