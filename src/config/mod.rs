//! Configuration module for tilebake
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TILEBAKE_*)
//! 3. Project config (`tilebake.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    Config, PublishConfig, ReprojectConfig, TilingConfig, ToolCandidates, ToolsConfig,
    CONFIG_FILE,
};
