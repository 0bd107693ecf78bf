//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output that only appears with `--verbose`
//!
//! Command output owns stdout (`query` prints JSON there), so the
//! `config`, `warning` and `error` prefixes go to stderr.
//!
//! # Example
//!
//! ```ignore
//! log!("validate"; "checking {} files", count);
//! debug!("build"; "payload written to {}", path.display());
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let to_stderr = is_diagnostic(&module_lower);
    let stream = if to_stderr { Stream::Stderr } else { Stream::Stdout };
    let prefix = colorize_prefix(module, &module_lower, stream);

    if to_stderr {
        let mut stderr = stderr().lock();
        writeln!(stderr, "{prefix} {message}").ok();
        stderr.flush().ok();
    } else {
        let mut stdout = stdout().lock();
        execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
        writeln!(stdout, "{prefix} {message}").ok();
        stdout.flush().ok();
    }
}

/// Diagnostics that are not command output.
#[inline]
fn is_diagnostic(module_lower: &str) -> bool {
    matches!(module_lower, "config" | "warning" | "error")
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str, stream: Stream) -> String {
    let prefix = format!("[{module}]");
    let style = match module_lower {
        "build" => Style::new().bright_blue(),
        "validate" => Style::new().bright_green(),
        "error" => Style::new().bright_red(),
        "warning" => Style::new().yellow(),
        _ => Style::new().bright_yellow(),
    }
    .bold();
    prefix
        .if_supports_color(stream, |p| p.style(style))
        .to_string()
}

/// Print a success line (✓ prefix, green).
pub fn status_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Drop terminal color codes from rendered output.
#[cfg(test)]
pub(crate) fn strip_ansi(text: &str) -> String {
    use regex::Regex;
    use std::sync::LazyLock;

    static RE_ANSI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());
    RE_ANSI.replace_all(text, "").into_owned()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }

    #[test]
    fn test_prefix_contains_module_name() {
        let build = colorize_prefix("build", "build", Stream::Stdout);
        assert_eq!(strip_ansi(&build), "[build]");
        let query = colorize_prefix("Query", "query", Stream::Stdout);
        assert_eq!(strip_ansi(&query), "[Query]");
    }

    #[test]
    fn test_diagnostics_go_to_stderr() {
        assert!(is_diagnostic("config"));
        assert!(is_diagnostic("warning"));
        assert!(is_diagnostic("error"));
        assert!(!is_diagnostic("build"));
        assert!(!is_diagnostic("validate"));
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\u{1b}[94m`a.b`\u{1b}[39m"), "`a.b`");
    }
}
