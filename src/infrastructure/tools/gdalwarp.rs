//! Stage 1 adapter: `gdalwarp`

use crate::domain::ports::{RasterStage, StageOutcome, Toolchain};
use crate::domain::services::ReprojectParams;
use crate::domain::value_objects::StageKind;

use super::process::{ToolCommand, ToolOutput};

/// Reprojects the source raster with `gdalwarp`
#[derive(Debug, Clone, Copy, Default)]
pub struct GdalWarp {
    output: ToolOutput,
}

impl GdalWarp {
    pub fn new(output: ToolOutput) -> Self {
        Self { output }
    }

    pub fn command(&self, tools: &Toolchain, params: &ReprojectParams) -> ToolCommand {
        let extent = params.extent;
        let mut cmd = ToolCommand::new(&tools.warp);
        if params.overwrite_intermediate {
            cmd = cmd.arg("-overwrite");
        }
        cmd = cmd
            .args(["-t_srs", params.target_srs])
            .args(["-te_srs", params.extent_srs])
            .arg("-te")
            .args([
                extent.min_x.to_string(),
                extent.min_y.to_string(),
                extent.max_x.to_string(),
                extent.max_y.to_string(),
            ])
            .args(["-r", params.resampling.as_str()]);

        if params.multithreaded {
            cmd = cmd.arg("-multi");
        }

        cmd = cmd.args(["-wm".to_string(), params.warp_memory_mb.to_string()]);
        for (key, value) in &params.creation_options {
            cmd = cmd.args(["-co".to_string(), format!("{}={}", key, value)]);
        }

        cmd.arg(&params.source).arg(&params.destination)
    }
}

impl RasterStage<ReprojectParams> for GdalWarp {
    fn kind(&self) -> StageKind {
        StageKind::Reproject
    }

    fn describe(&self, tools: &Toolchain, params: &ReprojectParams) -> String {
        self.command(tools, params).command_line()
    }

    fn run(&self, tools: &Toolchain, params: &ReprojectParams) -> StageOutcome {
        self.command(tools, params).run(self.output)
    }
}
