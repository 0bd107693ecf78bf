//! Content loading and validation errors.

use std::fmt;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use super::schema::Violation;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("YAML syntax error in `{0}`: {1}")]
    Yaml(PathBuf, #[source] serde_yaml::Error),

    #[error("`{0}` is not part of a content collection")]
    Unclassified(PathBuf),

    // NOTE: no #[source]: diagnostics print themselves in full
    #[error("{0}")]
    Invalid(ContentDiagnostics),
}

/// Schema errors and lint warnings for one content file.
#[derive(Debug, Clone, Default)]
pub struct ContentDiagnostics {
    /// Display path of the source file (relative to the content root).
    pub source: String,
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

impl ContentDiagnostics {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

fn write_violation(f: &mut fmt::Formatter<'_>, violation: &Violation) -> fmt::Result {
    write!(
        f,
        "{} {} {}",
        "→".red(),
        violation.path.to_string().cyan(),
        violation.constraint
    )?;
    if let Some(hint) = violation.hint() {
        write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
    }
    Ok(())
}

impl fmt::Display for ContentDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", "[".dimmed(), self.source.cyan(), "]".dimmed())?;
        for violation in &self.errors {
            writeln!(f)?;
            write_violation(f, violation)?;
        }
        for violation in &self.warnings {
            write!(f, "\n{} ", "warning:".yellow())?;
            write!(f, "{} {}", violation.path, violation.constraint)?;
        }
        Ok(())
    }
}

impl std::error::Error for ContentDiagnostics {}
