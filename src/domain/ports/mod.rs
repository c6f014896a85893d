//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod pipeline_events;
pub mod raster_stage;
pub mod tool_locator;

pub use pipeline_events::{NoopEventSink, PipelineEvent, PipelineEventSink};
pub use raster_stage::{RasterStage, StageFailure, StageOutcome};
pub use tool_locator::{ToolLocator, Toolchain};
