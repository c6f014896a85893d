//! External process invocation
//!
//! Runs one tool to completion. Output is streamed to the operator while
//! stderr is also captured so a failing stage can report it verbatim.

use std::ffi::{OsStr, OsString};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::{StageFailure, StageOutcome};

/// Where tool stdout goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolOutput {
    /// Inherit the terminal (progress bars render as usual)
    #[default]
    Console,
    /// Forward stdout to our stderr, keeping our stdout clean for NDJSON
    Diagnostics,
}

/// A fully built tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Short tool name for messages (`gdalwarp`, not `/usr/bin/gdalwarp`)
    pub fn tool_name(&self) -> String {
        self.program
            .file_name()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    /// Shell-style rendering for echoing and dry runs
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|part| shell_quote(&part.to_string_lossy()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion, blocking the caller
    pub fn run(&self, output: ToolOutput) -> StageOutcome {
        let tool = self.tool_name();
        tracing::debug!(tool = %tool, command = %self.command_line(), "spawning tool");

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::piped());
        match output {
            ToolOutput::Console => cmd.stdout(Stdio::inherit()),
            ToolOutput::Diagnostics => cmd.stdout(Stdio::piped()),
        };

        let mut child = cmd.spawn().map_err(|e| StageFailure::spawn(&tool, &e))?;
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let captured = std::thread::scope(|scope| {
            if let Some(out) = stdout {
                scope.spawn(move || {
                    let _ = io::copy(&mut BufReader::new(out), &mut io::stderr().lock());
                });
            }
            let tee = stderr.map(|err| scope.spawn(move || tee_to_stderr(err)));
            tee.and_then(|handle| handle.join().ok()).unwrap_or_default()
        });

        let status = child.wait().map_err(|e| StageFailure::spawn(&tool, &e))?;
        let diagnostics = String::from_utf8_lossy(&captured).into_owned();

        if status.success() {
            tracing::debug!(tool = %tool, "tool finished");
            Ok(())
        } else {
            tracing::warn!(tool = %tool, code = ?status.code(), "tool failed");
            Err(StageFailure::exited(tool, status.code(), diagnostics))
        }
    }
}

/// Copy a stream to our stderr line by line and keep a copy
fn tee_to_stderr(stream: impl Read) -> Vec<u8> {
    let mut reader = BufReader::new(stream);
    let mut captured = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let mut err = io::stderr().lock();
                let _ = err.write_all(&line);
                let _ = err.flush();
                captured.extend_from_slice(&line);
            }
        }
    }
    captured
}

fn shell_quote(s: &str) -> String {
    let safe = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%{}".contains(c));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_quotes_when_needed() {
        let cmd = ToolCommand::new("gdalwarp")
            .args(["-t_srs", "EPSG:3857"])
            .arg("/data/my raster.tif")
            .arg("it's.tif");
        assert_eq!(
            cmd.command_line(),
            "gdalwarp -t_srs EPSG:3857 '/data/my raster.tif' 'it'\\''s.tif'"
        );
    }

    #[test]
    fn tool_name_strips_directory() {
        let cmd = ToolCommand::new("/usr/local/bin/gdal2tiles.py");
        assert_eq!(cmd.tool_name(), "gdal2tiles.py");
    }

    #[cfg(unix)]
    #[test]
    fn run_success() {
        let cmd = ToolCommand::new("sh").args(["-c", "exit 0"]);
        assert!(cmd.run(ToolOutput::Diagnostics).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn run_failure_captures_stderr_verbatim() {
        let cmd = ToolCommand::new("sh").args(["-c", "echo 'ERROR 1: boom' >&2; exit 3"]);
        let failure = cmd.run(ToolOutput::Diagnostics).unwrap_err();
        assert_eq!(failure.tool, "sh");
        assert_eq!(failure.exit_code, Some(3));
        assert_eq!(failure.diagnostics, "ERROR 1: boom\n");
    }

    #[test]
    fn spawn_failure_is_reported() {
        let cmd = ToolCommand::new("/nonexistent/tilebake-missing-tool");
        let failure = cmd.run(ToolOutput::Diagnostics).unwrap_err();
        assert_eq!(failure.exit_code, None);
        assert!(failure.to_string().contains("failed to start"));
    }
}
