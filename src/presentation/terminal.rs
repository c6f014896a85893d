//! Terminal detection
//!
//! Icons are unicode only on an interactive, non-dumb terminal; piped output
//! and CI logs get plain ASCII markers.

use is_terminal::IsTerminal;

/// Status markers used by the console output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub ok: &'static str,
    pub warn: &'static str,
    pub error: &'static str,
    pub arrow: &'static str,
}

impl Icons {
    pub const UNICODE: Icons = Icons {
        ok: "✓",
        warn: "⚠",
        error: "✗",
        arrow: "→",
    };

    pub const ASCII: Icons = Icons {
        ok: "[OK]",
        warn: "[WARN]",
        error: "[ERROR]",
        arrow: "->",
    };

    /// Icons for stdout
    pub fn detect() -> Self {
        Self::for_stream(std::io::stdout().is_terminal())
    }

    /// Icons for stderr
    pub fn detect_stderr() -> Self {
        Self::for_stream(std::io::stderr().is_terminal())
    }

    fn for_stream(is_tty: bool) -> Self {
        if supports_unicode(|key| std::env::var(key).ok(), is_tty) {
            Self::UNICODE
        } else {
            Self::ASCII
        }
    }
}

fn supports_unicode(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    let term = get_env("TERM").unwrap_or_default();
    if !is_tty || term.eq_ignore_ascii_case("dumb") {
        return false;
    }

    // An explicit non-UTF-8 locale wins; otherwise assume a modern terminal.
    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Some(val) = get_env(key).filter(|v| !v.is_empty()) {
            let v = val.to_lowercase();
            return v.contains("utf-8") || v.contains("utf8");
        }
    }
    true
}
