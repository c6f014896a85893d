//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - validate, run the three stages, verify and publish
//! - `verify_tileset` - inspect a cut tile tree before it is published

pub mod build;
pub mod verify;

pub use build::{BuildOptions, BuildResult, BuildUseCase, PlannedStage};
pub use verify::verify_tileset;
