//! Raster Stage Port
//!
//! One pipeline stage with a single operation. Concrete stages either wrap
//! an external tool or run in-process; the orchestrator only sees the
//! aggregate outcome.

use std::fmt;

use crate::domain::ports::Toolchain;
use crate::domain::value_objects::StageKind;

/// Outcome of running a stage
pub type StageOutcome = Result<(), StageFailure>;

/// Why a stage did not complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFailure {
    /// Tool (or engine) name
    pub tool: String,
    /// Exit status; `None` when the process was killed or never started
    pub exit_code: Option<i32>,
    /// Verbatim diagnostic output captured from the tool
    pub diagnostics: String,
}

impl StageFailure {
    pub fn exited(
        tool: impl Into<String>,
        exit_code: Option<i32>,
        diagnostics: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.into(),
            exit_code,
            diagnostics: diagnostics.into(),
        }
    }

    /// The tool could not be spawned at all
    pub fn spawn(tool: impl Into<String>, err: &std::io::Error) -> Self {
        Self {
            tool: tool.into(),
            exit_code: None,
            diagnostics: format!("failed to start: {}", err),
        }
    }
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exit_code {
            Some(code) => write!(f, "{} exited with status {}", self.tool, code),
            None if self.diagnostics.starts_with("failed to start") => {
                write!(f, "{} {}", self.tool, self.diagnostics)
            }
            None => write!(f, "{} was terminated by a signal", self.tool),
        }
    }
}

impl std::error::Error for StageFailure {}

/// A pipeline stage parameterized by its input contract `P`
pub trait RasterStage<P> {
    /// Which stage this is
    fn kind(&self) -> StageKind;

    /// Human-readable description of what `run` would do (dry runs, logs)
    fn describe(&self, tools: &Toolchain, params: &P) -> String;

    /// Run to completion; blocks until the stage is done
    fn run(&self, tools: &Toolchain, params: &P) -> StageOutcome;
}
