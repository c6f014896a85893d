//! Domain Layer
//!
//! Pure pipeline logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Validated values (ZoomRange, ImageFormat, TilesetName)
//! - `entities/` - BuildRequest and TilesetReport
//! - `services/` - Layout, tool resolution, stage parameters, XYZ addressing
//! - `ports/` - Interfaces implemented by infrastructure (ToolLocator, RasterStage)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
