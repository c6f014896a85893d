//! Assertion helpers for tile trees.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

use super::env::relative;

/// List all files in a directory recursively, relative and sorted
pub fn list_all_files(dir: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    walk(root, &path, out);
                } else {
                    out.push(relative(root, &path));
                }
            }
        }
    }

    let mut files = Vec::new();
    walk(dir, dir, &mut files);
    files.sort();
    files
}

/// Names of the immediate subdirectories, sorted
pub fn list_dirs(dir: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .filter(|e| e.path().is_dir())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

/// Number of tiles in a full XYZ pyramid over `min..=max`
pub fn full_pyramid(min: u32, max: u32) -> usize {
    (min..=max).map(|z| 1usize << (2 * z)).sum()
}

/// Assert that a tile exists at `<tileset>/<path>` in the published tree.
///
/// # Example
/// ```ignore
/// assert_tile!(env, "world", "0/0/0.jpg");
/// ```
#[macro_export]
macro_rules! assert_tile {
    ($env:expr, $tileset:expr, $path:expr) => {
        let dir = $env.tiles_path($tileset);
        assert!(
            dir.join($path).is_file(),
            "Expected tile '{}' in {:?}, but it doesn't exist.\n\
             Files found:\n  {}",
            $path,
            dir,
            $crate::common::list_all_files(&dir).join("\n  ")
        );
    };
}

/// Assert that output contains a substring, printing the full output otherwise.
#[macro_export]
macro_rules! assert_output_contains {
    ($output:expr, $needle:expr) => {
        assert!(
            $output.contains($needle),
            "Expected output to contain '{}'.\nActual output:\n{}",
            $needle,
            $output
        );
    };
}
