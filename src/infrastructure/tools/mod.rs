//! GDAL toolchain adapters
//!
//! Each stage shells out to one GDAL utility through [`ToolCommand`].

mod gdal2tiles;
mod gdaladdo;
mod gdalwarp;
mod locator;
mod process;

pub use gdal2tiles::Gdal2Tiles;
pub use gdaladdo::GdalAddo;
pub use gdalwarp::GdalWarp;
pub use locator::PathToolLocator;
pub use process::{ToolCommand, ToolOutput};
