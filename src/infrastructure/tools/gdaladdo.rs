//! Stage 2 adapter: `gdaladdo`

use crate::domain::ports::{RasterStage, StageOutcome, Toolchain};
use crate::domain::services::OverviewParams;
use crate::domain::value_objects::StageKind;

use super::process::{ToolCommand, ToolOutput};

/// Adds the overview ladder to the intermediate raster in place
#[derive(Debug, Clone, Copy, Default)]
pub struct GdalAddo {
    output: ToolOutput,
}

impl GdalAddo {
    pub fn new(output: ToolOutput) -> Self {
        Self { output }
    }

    pub fn command(&self, tools: &Toolchain, params: &OverviewParams) -> ToolCommand {
        ToolCommand::new(&tools.overviews)
            .args(["-r", params.resampling.as_str()])
            .arg(&params.raster)
            .args(params.factors.iter().map(u32::to_string))
    }
}

impl RasterStage<OverviewParams> for GdalAddo {
    fn kind(&self) -> StageKind {
        StageKind::BuildOverviews
    }

    fn describe(&self, tools: &Toolchain, params: &OverviewParams) -> String {
        self.command(tools, params).command_line()
    }

    fn run(&self, tools: &Toolchain, params: &OverviewParams) -> StageOutcome {
        self.command(tools, params).run(self.output)
    }
}
