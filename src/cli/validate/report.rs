//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field path or asset reference that failed.
    pub target: String,
    /// Error reason/message.
    pub reason: String,
    pub hint: Option<String>,
}

type ByFile = BTreeMap<String, Vec<ValidationError>>;

/// Validation findings grouped by content file
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Schema violations and unreadable files.
    pub content: ByFile,
    /// Asset references that do not exist.
    pub assets: ByFile,
    /// Non-fatal findings (section lint, asset findings at `warn` level).
    pub warnings: ByFile,
}

fn push(map: &mut ByFile, source: &str, target: String, reason: String, hint: Option<String>) {
    map.entry(source.to_string())
        .or_default()
        .push(ValidationError {
            target,
            reason,
            hint,
        });
}

impl ValidationReport {
    pub fn add_content(&mut self, source: &str, target: String, reason: String, hint: Option<String>) {
        push(&mut self.content, source, target, reason, hint);
    }

    pub fn add_asset(&mut self, source: &str, target: String, reason: String) {
        push(&mut self.assets, source, target, reason, None);
    }

    pub fn add_warning(&mut self, source: &str, target: String, reason: String) {
        push(&mut self.warnings, source, target, reason, None);
    }

    /// Count of files with content errors.
    pub fn content_file_count(&self) -> usize {
        self.content.len()
    }

    /// Count of files with asset errors.
    pub fn asset_file_count(&self) -> usize {
        self.assets.len()
    }

    pub fn content_error_count(&self) -> usize {
        self.content.values().map(Vec::len).sum()
    }

    pub fn asset_error_count(&self) -> usize {
        self.assets.values().map(Vec::len).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.values().map(Vec::len).sum()
    }

    pub fn has_errors(&self) -> bool {
        !self.content.is_empty() || !self.assets.is_empty()
    }

    /// Print the full report to stderr (content -> assets -> warnings).
    pub fn print(&self) {
        print_section("content", &self.content, false);
        print_section("assets", &self.assets, false);
        print_section("warnings", &self.warnings, true);
    }
}

fn print_section(name: &str, findings: &ByFile, warning: bool) {
    if findings.is_empty() {
        return;
    }
    eprintln!();

    let file_count = findings.len();
    let count: usize = findings.values().map(Vec::len).sum();
    let noun = if warning { "warning" } else { "error" };
    let counts = format!(
        "({file_count} file{}, {count} {noun}{})",
        plural_s(file_count),
        plural_s(count)
    );

    if warning {
        eprintln!("{} {}", name.yellow().bold(), counts.dimmed());
    } else {
        eprintln!("{} {}", name.red().bold(), counts.dimmed());
    }

    for (path, errs) in findings {
        eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
        for e in errs {
            let arrow = if warning {
                "→".yellow().to_string()
            } else {
                "→".red().to_string()
            };
            eprintln!("{arrow} {} {}", e.target, e.reason);
            if let Some(hint) = &e.hint {
                eprintln!("  {} {}", "hint:".yellow(), hint);
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.content_error_count() + self.asset_error_count();
        let warnings = self.warning_count();

        if total == 0 {
            write!(f, "{}", "all checks passed".green())?;
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{}", plural_s(total)).dimmed()
            )?;
        }
        if warnings > 0 {
            write!(
                f,
                " {}",
                format!("({warnings} warning{})", plural_s(warnings)).yellow()
            )?;
        }
        Ok(())
    }
}
