//! CLI Argument Parsing
//!
//! A single command without subcommands; every run builds one tileset.

use std::path::PathBuf;

use clap::Parser;
use tilebake::domain::entities::RawRequest;
use tilebake::domain::value_objects::{ImageFormat, DEFAULT_JPEG_QUALITY, DEFAULT_ZOOM_RANGE};

/// tilebake - build an XYZ tile pyramid for the globe viewer from one raster
#[derive(Parser, Debug)]
#[command(name = "tilebake")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Tiles are written to public/cesium/tiles/<tileset>/{z}/{x}/{y}.<format>."
)]
pub struct Cli {
    /// Source raster, relative to the project root
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Tileset name (output directory under public/cesium/tiles)
    #[arg(long, value_name = "NAME")]
    pub tileset: String,

    /// Zoom range as <min>-<max>
    #[arg(long, value_name = "MIN-MAX", default_value = DEFAULT_ZOOM_RANGE, allow_hyphen_values = true)]
    pub zoom: String,

    /// Tile image format
    #[arg(long, value_enum, default_value_t = ImageFormat::Jpeg)]
    pub format: ImageFormat,

    /// JPEG quality 1-100 (ignored for png)
    #[arg(long, value_name = "1-100", default_value_t = i64::from(DEFAULT_JPEG_QUALITY), allow_negative_numbers = true)]
    pub jpeg_quality: i64,

    /// Replace an existing tileset of the same name
    #[arg(long)]
    pub overwrite: bool,

    /// Validate and print the planned commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI (NDJSON events on stdout)
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Project root (default: nearest directory with tilebake.toml, package.json or .git)
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,
}

impl Cli {
    pub fn raw_request(&self) -> RawRequest {
        RawRequest::new(&self.input, &self.tileset)
            .with_zoom(&self.zoom)
            .with_format(self.format)
            .with_jpeg_quality(self.jpeg_quality)
            .with_overwrite(self.overwrite)
    }
}
