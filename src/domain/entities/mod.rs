//! Domain Entities

mod build_request;
mod tileset_report;

pub use build_request::{BuildRequest, RawRequest};
pub use tileset_report::TilesetReport;
