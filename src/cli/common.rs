//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::content::{
    Collection, ContentError, ValidateOptions, ValidatedDocument, collect_content_files,
    load_document, route_conflicts,
};
use crate::utils::path::{display_relative, resolve_path};

use super::validate::ValidationReport;

/// Collect content files based on CLI paths.
///
/// No paths means the whole content directory. Directories are expanded to
/// the collection files they contain; a file outside both collections is an
/// error.
pub fn collect_files(paths: &[PathBuf], content_dir: &Path) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    if paths.is_empty() {
        return Ok(files_only(collect_content_files(content_dir)));
    }

    let mut all_files = Vec::new();
    for path in &paths {
        let resolved = resolve_path(path, content_dir);

        if resolved.is_file() {
            if Collection::classify(&resolved, content_dir).is_some() {
                all_files.push(resolved);
            } else {
                anyhow::bail!("Not a content collection file: {}", path.display());
            }
        } else if resolved.is_dir() {
            all_files.extend(
                collect_content_files(content_dir)
                    .into_iter()
                    .map(|(_, file)| file)
                    .filter(|file| file.starts_with(&resolved)),
            );
        } else {
            let content_relative = content_dir.join(path);
            anyhow::bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                content_relative.display()
            );
        }
    }

    all_files.sort();
    all_files.dedup();
    Ok(all_files)
}

fn files_only(files: Vec<(Collection, PathBuf)>) -> Vec<PathBuf> {
    files.into_iter().map(|(_, file)| file).collect()
}

/// Read file paths from stdin, one per line
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

/// Documents that validated, plus a report of everything that did not.
pub struct LoadedContent {
    pub documents: Vec<ValidatedDocument>,
    pub report: ValidationReport,
}

/// Load and validate `files` in parallel.
///
/// Results keep the order of `files`; every failure and lint warning is
/// recorded in the report under the file's content-relative path.
pub fn load_content(files: &[PathBuf], config: &SiteConfig) -> LoadedContent {
    let content_dir = &config.build.content;
    let options = ValidateOptions {
        strict_sections: config.validate.strict_sections,
    };

    let results: Vec<_> = files
        .par_iter()
        .map(|file| load_document(file, content_dir, options))
        .collect();

    let mut report = ValidationReport::default();
    let mut documents = Vec::with_capacity(files.len());
    for (file, result) in files.iter().zip(results) {
        let source = display_relative(file, content_dir);
        match result {
            Ok(doc) => {
                for warning in &doc.warnings {
                    report.add_warning(&source, warning.path.to_string(), warning.constraint.to_string());
                }
                documents.push(doc);
            }
            Err(ContentError::Invalid(diag)) => {
                for violation in &diag.errors {
                    report.add_content(
                        &source,
                        violation.path.to_string(),
                        violation.constraint.to_string(),
                        violation.hint().map(str::to_string),
                    );
                }
                for warning in &diag.warnings {
                    report.add_warning(&source, warning.path.to_string(), warning.constraint.to_string());
                }
            }
            Err(err) => report.add_content(&source, "(document)".to_string(), err.to_string(), None),
        }
    }

    for (route, sources) in route_conflicts(content_dir) {
        let sources: Vec<String> = sources
            .iter()
            .map(|source| display_relative(source, content_dir))
            .collect();
        for file in files.iter().map(|file| display_relative(file, content_dir)) {
            if !sources.contains(&file) {
                continue;
            }
            let others: Vec<&str> = sources
                .iter()
                .filter(|other| **other != file)
                .map(String::as_str)
                .collect();
            report.add_content(
                &file,
                "(document)".to_string(),
                format!("route `{route}` is also produced by {}", others.join(", ")),
                Some("keep one file per route".to_string()),
            );
        }
    }
    documents.retain(|doc| !report.content.contains_key(&display_relative(&doc.source, content_dir)));

    LoadedContent { documents, report }
}
