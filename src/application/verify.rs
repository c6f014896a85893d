//! Tileset verification
//!
//! Inspects a freshly cut tile tree before it is published. The tree must be
//! `<z>/<x>/<y>.<ext>` with every zoom inside the requested range, every
//! address on the XYZ grid and every tile encoded in the requested format.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use crate::domain::entities::TilesetReport;
use crate::domain::services::xyz;
use crate::domain::value_objects::{ImageFormat, ZoomRange};
use crate::error::{TilerError, TilerResult};

/// Problems beyond this are summarized in one line
const MAX_REPORTED_PROBLEMS: usize = 20;

/// Enough bytes for any magic number `image` recognizes for our formats
const HEADER_LEN: u64 = 16;

/// Verify the tile tree under `root`.
///
/// Files at the top level are tool metadata and are ignored, as are GDAL
/// `.aux.xml` sidecars anywhere in the tree.
pub fn verify_tileset(
    root: &Path,
    zoom: ZoomRange,
    format: ImageFormat,
) -> TilerResult<TilesetReport> {
    let mut report = TilesetReport::default();
    let mut problems = Vec::new();

    for entry in sorted_entries(root)? {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type()?.is_dir() {
            continue;
        }

        match name.parse::<u32>() {
            Ok(z) if zoom.contains(z) => {
                verify_zoom_dir(&path, z, format, &mut report, &mut problems)?
            }
            Ok(z) => problems.push(format!(
                "zoom level {} is outside the requested range {}",
                z, zoom
            )),
            Err(_) => problems.push(format!("unexpected directory '{}'", name)),
        }
    }

    report.missing_zooms = zoom
        .levels()
        .filter(|z| !report.tiles_per_zoom.contains_key(z))
        .collect();

    if report.total_tiles() == 0 {
        problems.push("no tiles were produced".to_string());
    }

    if problems.is_empty() {
        tracing::debug!(
            tiles = report.total_tiles(),
            bytes = report.total_bytes,
            "tileset verified"
        );
        return Ok(report);
    }

    if problems.len() > MAX_REPORTED_PROBLEMS {
        let extra = problems.len() - MAX_REPORTED_PROBLEMS;
        problems.truncate(MAX_REPORTED_PROBLEMS);
        problems.push(format!("... and {} more", extra));
    }

    Err(TilerError::TilesetVerificationFailed {
        path: root.to_path_buf(),
        problems,
    })
}

fn verify_zoom_dir(
    dir: &Path,
    z: u32,
    format: ImageFormat,
    report: &mut TilesetReport,
    problems: &mut Vec<String>,
) -> TilerResult<()> {
    for entry in sorted_entries(dir)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type()?.is_dir() {
            if !is_sidecar(&name) {
                problems.push(format!("unexpected file '{}/{}'", z, name));
            }
            continue;
        }

        match name.parse::<u64>() {
            Ok(x) if xyz::is_addressable(z, x, 0) => {
                verify_column_dir(&entry.path(), z, x, format, report, problems)?
            }
            Ok(x) => problems.push(format!("column {}/{} is off the zoom {} grid", z, x, z)),
            Err(_) => problems.push(format!("unexpected directory '{}/{}'", z, name)),
        }
    }
    Ok(())
}

fn verify_column_dir(
    dir: &Path,
    z: u32,
    x: u64,
    format: ImageFormat,
    report: &mut TilesetReport,
    problems: &mut Vec<String>,
) -> TilerResult<()> {
    for entry in sorted_entries(dir)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let tile = format!("{}/{}/{}", z, x, name);

        if is_sidecar(&name) {
            continue;
        }
        if !entry.file_type()?.is_file() {
            problems.push(format!("unexpected entry '{}'", tile));
            continue;
        }

        let Some((stem, ext)) = name.rsplit_once('.') else {
            problems.push(format!("tile '{}' has no extension", tile));
            continue;
        };
        if ext != format.extension() {
            problems.push(format!(
                "tile '{}' has extension '.{}', expected '.{}'",
                tile,
                ext,
                format.extension()
            ));
            continue;
        }
        match stem.parse::<u64>() {
            Ok(y) if xyz::is_addressable(z, x, y) => {}
            Ok(_) => {
                problems.push(format!("tile '{}' is off the zoom {} grid", tile, z));
                continue;
            }
            Err(_) => {
                problems.push(format!("tile '{}' is not named <y>.{}", tile, ext));
                continue;
            }
        }

        let path = entry.path();
        if !has_magic(&path, format)? {
            problems.push(format!(
                "tile '{}' is not a {} image",
                tile,
                format.gdal_driver()
            ));
            continue;
        }

        report.record_tile(z, entry.metadata()?.len());
    }
    Ok(())
}

fn has_magic(path: &Path, format: ImageFormat) -> TilerResult<bool> {
    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    File::open(path)?.take(HEADER_LEN).read_to_end(&mut header)?;

    let expected = match format {
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFormat::Png => image::ImageFormat::Png,
    };
    Ok(image::guess_format(&header).is_ok_and(|found| found == expected))
}

fn is_sidecar(name: &str) -> bool {
    name.ends_with(".aux.xml")
}

fn sorted_entries(dir: &Path) -> TilerResult<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}
