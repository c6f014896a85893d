//! Build Use Case
//!
//! Orchestrates one tileset build:
//! 1. Validate the request
//! 2. Resolve the toolchain
//! 3. Check the input and the output collision policy
//! 4. Lock the tileset and clear a previous output (`--overwrite`)
//! 5. Reproject, build overviews, cut tiles
//! 6. Verify the tile tree and publish it
//! 7. Write the build record
//!
//! Every failure is terminal. Nothing on disk changes before step 4.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::application::verify::verify_tileset;
use crate::domain::entities::{BuildRequest, RawRequest};
use crate::domain::ports::{
    NoopEventSink, PipelineEvent, PipelineEventSink, RasterStage, StageFailure, ToolLocator,
    Toolchain,
};
use crate::domain::services::{
    OverviewParams, ProjectLayout, ReprojectParams, StagePlan, TileCutParams, ToolRequirements,
};
use crate::domain::value_objects::StageKind;
use crate::error::{TilerError, TilerResult};
use crate::infrastructure::{BuildRecord, StageTiming, StagingDir, TilesetLock};

use super::options::BuildOptions;
use super::result::{BuildResult, PlannedStage};

/// Build use case - runs the three-stage pipeline for one tileset
///
/// Parameterized by the tool locator and the three stages so tests can
/// substitute fakes for the GDAL toolchain.
pub struct BuildUseCase<L, R, O, T>
where
    L: ToolLocator,
    R: RasterStage<ReprojectParams>,
    O: RasterStage<OverviewParams>,
    T: RasterStage<TileCutParams>,
{
    layout: ProjectLayout,
    locator: L,
    requirements: ToolRequirements,
    reproject: R,
    overviews: O,
    tiles: T,
    events: Arc<dyn PipelineEventSink>,
}

impl<L, R, O, T> BuildUseCase<L, R, O, T>
where
    L: ToolLocator,
    R: RasterStage<ReprojectParams>,
    O: RasterStage<OverviewParams>,
    T: RasterStage<TileCutParams>,
{
    pub fn new(layout: ProjectLayout, locator: L, reproject: R, overviews: O, tiles: T) -> Self {
        Self {
            layout,
            locator,
            requirements: ToolRequirements::default(),
            reproject,
            overviews,
            tiles,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_requirements(mut self, requirements: ToolRequirements) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn with_events(mut self, events: Arc<dyn PipelineEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Execute the build
    pub fn execute(&self, raw: &RawRequest, options: &BuildOptions) -> TilerResult<BuildResult> {
        let started_at = Utc::now();

        let request = raw.validate(self.layout.root())?;
        self.emit(PipelineEvent::Started {
            tileset: request.tileset().to_string(),
            input: request.input().to_path_buf(),
            zoom: request.zoom(),
            format: request.format(),
        });

        let tools = self.requirements.resolve(&self.locator)?;
        for stage in StageKind::ORDERED {
            self.emit(PipelineEvent::ToolResolved {
                stage,
                path: tools.program(stage).to_path_buf(),
            });
        }

        check_input(request.input())?;

        let output_dir = self.layout.output_dir(request.tileset());
        if exists(&output_dir) && !request.overwrite() {
            return Err(TilerError::OutputAlreadyExists { path: output_dir });
        }

        let url_template = ProjectLayout::url_template(request.tileset(), request.format());
        let mut plan = StagePlan::derive(&request, &self.layout, options.tuning, &output_dir);

        if options.dry_run {
            return Ok(self.dry_run(request, tools, plan, url_template));
        }

        let tileset = request.tileset();
        fs::create_dir_all(self.layout.working_dir())?;
        let _lock = TilesetLock::acquire(&self.layout.lock_file(tileset), tileset)?;

        // Re-check under the lock; another run may have published meanwhile.
        if exists(&output_dir) {
            if !request.overwrite() {
                return Err(TilerError::OutputAlreadyExists { path: output_dir });
            }
            remove_output(&output_dir)?;
            tracing::info!(output = %output_dir.display(), "removed previous tileset");
            self.emit(PipelineEvent::OutputRemoved {
                path: output_dir.clone(),
            });
        }
        fs::create_dir_all(self.layout.tiles_root())?;

        let mut stages = Vec::with_capacity(StageKind::ORDERED.len());
        self.run_stage(
            &self.reproject,
            &tools,
            &plan.reproject,
            TilerError::ReprojectionFailed,
            &mut stages,
        )?;
        self.run_stage(
            &self.overviews,
            &tools,
            &plan.overviews,
            TilerError::OverviewBuildFailed,
            &mut stages,
        )?;

        let staging = if options.staged_publish {
            let staging = StagingDir::create_in(&self.layout.tiles_root(), tileset)?;
            plan.tiles.output_dir = staging.path().to_path_buf();
            Some(staging)
        } else {
            None
        };

        self.run_stage(
            &self.tiles,
            &tools,
            &plan.tiles,
            TilerError::TileCutFailed,
            &mut stages,
        )?;

        let report = verify_tileset(&plan.tiles.output_dir, request.zoom(), request.format())?;
        if !report.missing_zooms.is_empty() {
            self.emit(PipelineEvent::Warning {
                message: format!(
                    "no tiles were produced for zoom level(s) {}",
                    join(&report.missing_zooms)
                ),
            });
        }
        self.emit(PipelineEvent::Verified {
            report: report.clone(),
        });

        if let Some(staging) = staging {
            staging.publish(&output_dir)?;
            self.emit(PipelineEvent::Published {
                output_dir: output_dir.clone(),
            });
        }

        let record_path = self.layout.build_record(tileset);
        let record = BuildRecord {
            request: request.clone(),
            tools: tools.clone(),
            output_dir: output_dir.clone(),
            url_template: url_template.clone(),
            started_at,
            finished_at: Utc::now(),
            stages: stages.clone(),
            report: report.clone(),
        };
        let record = match record.write(&record_path) {
            Ok(()) => Some(record_path),
            Err(e) => {
                tracing::warn!(error = %e, "could not write build record");
                self.emit(PipelineEvent::Warning {
                    message: format!(
                        "could not write build record {}: {}",
                        record_path.display(),
                        e
                    ),
                });
                None
            }
        };

        self.emit(PipelineEvent::Completed {
            output_dir: output_dir.clone(),
            url_template: url_template.clone(),
            dry_run: false,
        });

        Ok(BuildResult {
            request,
            tools,
            output_dir,
            url_template,
            dry_run: false,
            planned: Vec::new(),
            stages,
            report: Some(report),
            record,
        })
    }

    fn dry_run(
        &self,
        request: BuildRequest,
        tools: Toolchain,
        plan: StagePlan,
        url_template: String,
    ) -> BuildResult {
        let planned = vec![
            PlannedStage {
                stage: self.reproject.kind(),
                command: self.reproject.describe(&tools, &plan.reproject),
            },
            PlannedStage {
                stage: self.overviews.kind(),
                command: self.overviews.describe(&tools, &plan.overviews),
            },
            PlannedStage {
                stage: self.tiles.kind(),
                command: self.tiles.describe(&tools, &plan.tiles),
            },
        ];
        for step in &planned {
            self.emit(PipelineEvent::StagePlanned {
                stage: step.stage,
                command: step.command.clone(),
            });
        }

        let output_dir = plan.tiles.output_dir;
        self.emit(PipelineEvent::Completed {
            output_dir: output_dir.clone(),
            url_template: url_template.clone(),
            dry_run: true,
        });

        BuildResult {
            request,
            tools,
            output_dir,
            url_template,
            dry_run: true,
            planned,
            stages: Vec::new(),
            report: None,
            record: None,
        }
    }

    fn run_stage<P, S: RasterStage<P>>(
        &self,
        stage: &S,
        tools: &Toolchain,
        params: &P,
        on_failure: fn(StageFailure) -> TilerError,
        timings: &mut Vec<StageTiming>,
    ) -> TilerResult<()> {
        let kind = stage.kind();
        let command = stage.describe(tools, params);
        tracing::info!(stage = %kind, "starting stage {}", kind.number());
        self.emit(PipelineEvent::StageStarted {
            stage: kind,
            command: command.clone(),
        });

        let started = Instant::now();
        stage.run(tools, params).map_err(on_failure)?;
        let elapsed = started.elapsed();

        tracing::info!(stage = %kind, elapsed_ms = elapsed.as_millis() as u64, "stage finished");
        self.emit(PipelineEvent::StageCompleted {
            stage: kind,
            elapsed,
        });
        timings.push(StageTiming {
            stage: kind,
            command,
            elapsed,
        });
        Ok(())
    }

    fn emit(&self, event: PipelineEvent) {
        self.events.on_event(event);
    }
}

fn check_input(path: &Path) -> TilerResult<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => match fs::File::open(path) {
            Ok(_) => Ok(()),
            Err(source) => Err(TilerError::InputNotReadable {
                path: path.to_path_buf(),
                source,
            }),
        },
        Ok(_) => Err(TilerError::InputNotAFile {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(TilerError::InputNotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(TilerError::InputNotReadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Dangling symlinks count as existing output
fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn remove_output(path: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

fn join(levels: &[u32]) -> String {
    levels
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
