//! Build record
//!
//! `data/working/<tileset>.build.json` describes the last successful build:
//! what was asked for, which tools ran, how long each stage took and what
//! ended up on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::domain::entities::{BuildRequest, TilesetReport};
use crate::domain::ports::Toolchain;
use crate::domain::value_objects::StageKind;
use crate::error::TilerResult;

/// Wall-clock time of one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageTiming {
    pub stage: StageKind,
    pub command: String,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildRecord {
    pub request: BuildRequest,
    pub tools: Toolchain,
    pub output_dir: PathBuf,
    pub url_template: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub stages: Vec<StageTiming>,
    pub report: TilesetReport,
}

impl BuildRecord {
    /// Write as pretty JSON, replacing any previous record atomically
    pub fn write(&self, path: &Path) -> TilerResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.persist(path).map_err(|e| e.error)?;

        tracing::debug!(record = %path.display(), "wrote build record");
        Ok(())
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
