//! tilebake CLI
//!
//! Usage: tilebake --input <PATH> --tileset <NAME> [--zoom 0-8] [--format jpg|png]

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use tilebake::domain::ports::{PipelineEvent, PipelineEventSink};
use tilebake::domain::services::ProjectLayout;
use tilebake::infrastructure::{Gdal2Tiles, GdalAddo, GdalWarp, PathToolLocator, ToolOutput};
use tilebake::{discover_project_root, BuildOptions, BuildUseCase, Config};

mod presentation;

use presentation::{print_error, Cli, ConsoleEventSink, JsonEventSink};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostic logs go to stderr; `RUST_LOG` overrides `-v`
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let project_root = resolve_project_root(cli.project_root.as_ref(), &cwd);
    tracing::debug!(root = %project_root.display(), "using project root");

    let (config, warnings) = Config::load_or_default(&project_root)?;

    let events: Arc<dyn PipelineEventSink> = if cli.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(cli.verbose > 0))
    };
    for warning in warnings {
        events.on_event(PipelineEvent::Warning {
            message: warning.to_string(),
        });
    }

    // Keep stdout pure NDJSON in JSON mode
    let tool_output = if cli.json {
        ToolOutput::Diagnostics
    } else {
        ToolOutput::Console
    };

    let use_case = BuildUseCase::new(
        ProjectLayout::new(project_root),
        PathToolLocator,
        GdalWarp::new(tool_output),
        GdalAddo::new(tool_output),
        Gdal2Tiles::new(tool_output),
    )
    .with_requirements(config.tools.requirements())
    .with_events(events);

    let options = BuildOptions::from_config(&config).with_dry_run(cli.dry_run);
    use_case.execute(&cli.raw_request(), &options)?;
    Ok(())
}

fn resolve_project_root(flag: Option<&PathBuf>, cwd: &std::path::Path) -> PathBuf {
    match flag {
        Some(root) => cwd.join(root),
        None => discover_project_root(cwd),
    }
}
