//! Console Event Sink
//!
//! Human-readable progress on stdout. Tool output is interleaved as the tools
//! run, so every line here stands on its own.

use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use tilebake::domain::ports::{PipelineEvent, PipelineEventSink};
use tilebake::domain::value_objects::StageKind;

use super::terminal::Icons;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    icons: Icons,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn stdout(verbose: bool) -> Self {
        Self::with_writer(io::stdout(), Icons::detect(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, icons: Icons, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            icons,
            verbose,
        }
    }

    fn render(&self, event: &PipelineEvent) -> Option<String> {
        let i = &self.icons;
        let text = match event {
            PipelineEvent::Started {
                tileset,
                input,
                zoom,
                format,
            } => format!(
                "Building tileset '{}' from {} (zoom {}, {})",
                tileset,
                input.display(),
                zoom,
                format
            ),
            PipelineEvent::ToolResolved { stage, path } => {
                if !self.verbose {
                    return None;
                }
                format!("  {} {}: {}", i.arrow, stage, path.display())
            }
            PipelineEvent::OutputRemoved { path } => {
                format!("{} Removed existing tileset {}", i.warn, path.display())
            }
            PipelineEvent::StagePlanned { stage, command } => {
                format!("{}\n  $ {}", stage_header(*stage), command)
            }
            PipelineEvent::StageStarted { stage, command } => {
                format!("\n{}\n$ {}", stage_header(*stage), command)
            }
            PipelineEvent::StageCompleted { stage, elapsed } => format!(
                "{} {} ({})",
                i.ok,
                stage.label(),
                format_elapsed(*elapsed)
            ),
            PipelineEvent::Verified { report } => format!(
                "{} Verified {} tiles across {} zoom level(s), {}",
                i.ok,
                report.total_tiles(),
                report.tiles_per_zoom.len(),
                format_bytes(report.total_bytes)
            ),
            PipelineEvent::Published { output_dir } => {
                format!("{} Published {}", i.ok, output_dir.display())
            }
            PipelineEvent::Warning { message } => format!("{} {}", i.warn, message),
            PipelineEvent::Completed {
                output_dir,
                url_template,
                dry_run: false,
            } => format!(
                "\nDone.\nTiles written to: {}\nTile URL template: {}",
                output_dir.display(),
                url_template
            ),
            PipelineEvent::Completed {
                output_dir,
                url_template,
                dry_run: true,
            } => format!(
                "\nDry run: nothing was changed.\nTiles would be written to: {}\nTile URL template: {}",
                output_dir.display(),
                url_template
            ),
        };
        Some(text)
    }
}

impl PipelineEventSink for ConsoleEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let Some(text) = self.render(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

fn stage_header(stage: StageKind) -> String {
    format!(
        "[{}/{}] {}",
        stage.number(),
        StageKind::ORDERED.len(),
        stage.label()
    )
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let whole = elapsed.as_secs();
        format!("{}m {:02}s", whole / 60, whole % 60)
    }
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
