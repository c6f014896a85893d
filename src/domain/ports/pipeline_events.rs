//! Pipeline Event Port
//!
//! Observable progress of a build. Enables console progress, NDJSON event
//! streams and recording sinks in tests.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::entities::TilesetReport;
use crate::domain::value_objects::{ImageFormat, StageKind, ZoomRange};

/// Event emitted during a build
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    /// Request validated, about to check preconditions
    Started {
        tileset: String,
        input: PathBuf,
        zoom: ZoomRange,
        format: ImageFormat,
    },

    /// An external tool was resolved
    ToolResolved { stage: StageKind, path: PathBuf },

    /// A previous tileset was removed because `--overwrite` was given
    OutputRemoved { path: PathBuf },

    /// Dry run: what the stage would execute
    StagePlanned { stage: StageKind, command: String },

    /// A stage is about to run
    StageStarted { stage: StageKind, command: String },

    /// A stage exited successfully
    StageCompleted { stage: StageKind, elapsed: Duration },

    /// The produced tile tree was inspected
    Verified { report: TilesetReport },

    /// Staged tiles were moved into the served directory
    Published { output_dir: PathBuf },

    /// Non-fatal problem worth surfacing
    Warning { message: String },

    /// Build finished successfully
    Completed {
        output_dir: PathBuf,
        url_template: String,
        dry_run: bool,
    },
}

/// Trait for receiving pipeline events
///
/// Implementations:
/// - `ConsoleEventSink`: human-readable progress
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait PipelineEventSink: Send + Sync {
    fn on_event(&self, event: PipelineEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PipelineEventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}
}
