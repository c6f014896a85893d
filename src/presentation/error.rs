//! Error rendering for the terminal and for `--json`

use tilebake::TilerError;

use super::json;
use super::terminal::Icons;

/// Tool output is streamed live; the summary repeats only its tail
const DIAGNOSTIC_TAIL_LINES: usize = 12;

pub fn format_error(err: &anyhow::Error, icons: Icons) -> String {
    let Some(tiler) = err.downcast_ref::<TilerError>() else {
        return format!("{} Error: {:#}\n", icons.error, err);
    };

    let mut out = format!("{} Error: {}\n", icons.error, tiler);

    if let Some(failure) = tiler.stage_failure() {
        let lines: Vec<&str> = failure.diagnostics.lines().collect();
        if !lines.is_empty() {
            let skip = lines.len().saturating_sub(DIAGNOSTIC_TAIL_LINES);
            out.push_str(&format!("  {} output:\n", failure.tool));
            for line in &lines[skip..] {
                out.push_str(&format!("    | {}\n", line));
            }
        }
    }

    if let TilerError::TilesetVerificationFailed { problems, .. } = tiler {
        for problem in problems {
            out.push_str(&format!("  - {}\n", problem));
        }
    }

    if let Some(hint) = tiler.hint() {
        out.push_str(&format!("  Hint: {}\n", hint));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = json::write_event(&mut std::io::stdout().lock(), &error_event(err));
        return;
    }
    eprint!("{}", format_error(err, Icons::detect_stderr()));
}

fn error_event(err: &anyhow::Error) -> serde_json::Value {
    let Some(tiler) = err.downcast_ref::<TilerError>() else {
        return serde_json::json!({
            "event": "error",
            "kind": "internal",
            "message": format!("{:#}", err),
        });
    };

    let mut event = serde_json::json!({
        "event": "error",
        "kind": tiler.kind(),
        "message": tiler.to_string(),
        "hint": tiler.hint(),
    });
    if let Some(failure) = tiler.stage_failure() {
        event["tool"] = serde_json::json!(failure.tool);
        event["exit_code"] = serde_json::json!(failure.exit_code);
        event["diagnostics"] = serde_json::json!(failure.diagnostics);
    }
    if let TilerError::TilesetVerificationFailed { problems, .. } = tiler {
        event["problems"] = serde_json::json!(problems);
    }
    event
}
