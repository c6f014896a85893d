//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use tilebake::domain::ports::{PipelineEvent, PipelineEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = write_event(&mut *writer, &event);
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

pub fn to_json(event: PipelineEvent) -> serde_json::Value {
    match event {
        PipelineEvent::Started {
            tileset,
            input,
            zoom,
            format,
        } => serde_json::json!({
            "event": "start",
            "tileset": tileset,
            "input": input.display().to_string(),
            "zoom": zoom,
            "format": format,
        }),

        PipelineEvent::ToolResolved { stage, path } => serde_json::json!({
            "event": "tool_resolved",
            "stage": stage,
            "path": path.display().to_string(),
        }),

        PipelineEvent::OutputRemoved { path } => serde_json::json!({
            "event": "output_removed",
            "path": path.display().to_string(),
        }),

        PipelineEvent::StagePlanned { stage, command } => serde_json::json!({
            "event": "stage_planned",
            "stage": stage,
            "command": command,
        }),

        PipelineEvent::StageStarted { stage, command } => serde_json::json!({
            "event": "stage_start",
            "stage": stage,
            "command": command,
        }),

        PipelineEvent::StageCompleted { stage, elapsed } => serde_json::json!({
            "event": "stage_complete",
            "stage": stage,
            "elapsed_ms": elapsed.as_millis() as u64,
        }),

        PipelineEvent::Verified { report } => serde_json::json!({
            "event": "verified",
            "total_tiles": report.total_tiles(),
            "report": report,
        }),

        PipelineEvent::Published { output_dir } => serde_json::json!({
            "event": "published",
            "output_dir": output_dir.display().to_string(),
        }),

        PipelineEvent::Warning { message } => serde_json::json!({
            "event": "warning",
            "message": message,
        }),

        PipelineEvent::Completed {
            output_dir,
            url_template,
            dry_run,
        } => serde_json::json!({
            "event": "complete",
            "output_dir": output_dir.display().to_string(),
            "url_template": url_template,
            "dry_run": dry_run,
        }),
    }
}

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        self.write_event(to_json(event));
    }
}
