//! Test environment builder for isolated tilebake runs.
//!
//! Provides `TestEnv` - a temp project directory with a source raster and a
//! private bin directory of fake GDAL tools, plus helpers to run the CLI.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fake_gdal;

/// Environment variables stripped from every run
const SCRUBBED_VARS: &[&str] = &[
    "RUST_LOG",
    "TILEBAKE_WARP_MEMORY_MB",
    "TILEBAKE_PROCESSES",
    "TILEBAKE_STAGED_PUBLISH",
    "FAKE_GDALWARP_FAIL",
    "FAKE_GDALADDO_FAIL",
    "FAKE_GDAL2TILES_FAIL",
];

/// Result of running the tilebake CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

/// Isolated test environment.
///
/// Provides:
/// - Project directory with `package.json` and `data/source/world.tif`
/// - Bin directory holding the fake GDAL tools (the only `PATH` entry)
/// - A log of every tool invocation
pub struct TestEnv {
    pub project_root: TempDir,
    pub bin_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Project with the full fake toolchain installed
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Published tileset directory
    pub fn tiles_path(&self, tileset: &str) -> PathBuf {
        self.project_path("public/cesium/tiles").join(tileset)
    }

    pub fn tool_log_path(&self) -> PathBuf {
        self.bin_dir.path().join("calls.log")
    }

    /// One line per tool invocation, in order
    pub fn tool_calls(&self) -> Vec<String> {
        fs::read_to_string(self.tool_log_path())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run tilebake from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run tilebake from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("PATH", self.bin_dir.path())
            .env("FAKE_GDAL_LOG", self.tool_log_path())
            .env("TERM", "dumb");
        for key in SCRUBBED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute tilebake");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Builder for `TestEnv`
pub struct TestEnvBuilder {
    tools: Vec<(&'static str, &'static str)>,
    files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            tools: vec![
                ("gdalwarp", fake_gdal::GDALWARP),
                ("gdaladdo", fake_gdal::GDALADDO),
                ("gdal2tiles.py", fake_gdal::GDAL2TILES),
            ],
            files: Vec::new(),
        }
    }

    /// Leave a tool out of the bin directory
    pub fn without_tool(mut self, name: &str) -> Self {
        self.tools.retain(|(tool, _)| *tool != name);
        self
    }

    /// Write `tilebake.toml`
    pub fn with_config(self, content: &str) -> Self {
        self.with_project_file("tilebake.toml", content)
    }

    pub fn with_project_file(mut self, path: &str, content: &str) -> Self {
        self.files.push((path.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let bin_dir = TempDir::new().expect("Failed to create bin dir");

        for (name, script) in &self.tools {
            fake_gdal::install(bin_dir.path(), name, script);
        }

        let env = TestEnv {
            project_root,
            bin_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_tilebake")),
        };
        env.write_project_file("package.json", "{}\n");
        env.write_project_file("data/source/world.tif", "II*\0fake raster");
        for (path, content) in &self.files {
            env.write_project_file(path, content);
        }
        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Relative path of `path` under `root`, `/`-separated
pub fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
