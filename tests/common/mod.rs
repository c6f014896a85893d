//! Common test utilities for tilebake CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus a private `PATH` of fake GDAL tools
//! - `fake_gdal`: shell-script stand-ins for gdalwarp, gdaladdo and gdal2tiles
//! - Assertion helpers for tile trees

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fake_gdal;

pub use assertions::*;
pub use env::*;
