//! Search-path tool locator

use std::path::PathBuf;

use crate::domain::ports::ToolLocator;

/// Resolves programs on the process `PATH` (or as explicit paths)
#[derive(Debug, Clone, Copy, Default)]
pub struct PathToolLocator;

impl ToolLocator for PathToolLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        match which::which(program) {
            Ok(path) => {
                tracing::debug!(program, path = %path.display(), "resolved tool");
                Some(path)
            }
            Err(err) => {
                tracing::debug!(program, error = %err, "tool not found");
                None
            }
        }
    }
}
