//! Presentation Layer
//!
//! CLI parsing and everything the operator sees.
//!
//! ## Structure
//!
//! - `cli` - clap argument definitions
//! - `console` - human-readable event sink
//! - `json` - NDJSON event sink (`--json`)
//! - `error` - error block rendering
//! - `terminal` - icon selection for the current terminal

pub mod cli;
pub mod console;
pub mod error;
pub mod json;
pub mod terminal;

pub use cli::Cli;
pub use console::ConsoleEventSink;
pub use error::print_error;
pub use json::JsonEventSink;
