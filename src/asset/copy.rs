//! Static assets directory handling.
//!
//! Everything under `[build] assets` is served verbatim from the site root,
//! so `public/images/logo.png` is referenced as `/images/logo.png`.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;

use crate::debug;
use crate::utils::path::display_relative;
use crate::utils::path::route::strip_query_fragment;

/// Files that never belong in the output.
const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db", ".gitkeep"];

fn walk_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect()
}

/// Set of site-root URL paths provided by the static assets directory.
#[derive(Debug, Default, Clone)]
pub struct AssetIndex {
    paths: BTreeSet<String>,
}

impl AssetIndex {
    /// Index every file under `dir`. A missing directory yields an empty index.
    pub fn scan(dir: &Path) -> Self {
        if !dir.is_dir() {
            return Self::default();
        }
        let paths = walk_files(dir)
            .iter()
            .map(|path| display_relative(path, dir))
            .collect();
        Self { paths }
    }

    /// Whether a root-absolute reference like `/images/a.png?v=1` exists.
    pub fn contains(&self, reference: &str) -> bool {
        let path = strip_query_fragment(reference).trim_start_matches('/');
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Copy the static assets directory into `output`, preserving layout.
///
/// Returns the number of files copied.
pub fn copy_static_assets(assets: &Path, output: &Path) -> Result<usize> {
    if !assets.is_dir() {
        debug!("assets"; "no assets directory at {}", assets.display());
        return Ok(0);
    }

    let files = walk_files(assets);
    for file in &files {
        let rel = file.strip_prefix(assets)?;
        let target = output.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(file, &target)
            .with_context(|| format!("failed to copy asset {}", rel.display()))?;
        debug!("assets"; "{}", display_relative(file, assets));
    }
    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_index_contains_root_absolute_reference() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "images/logo.png");
        write(tmp.path(), "favicon.ico");

        let index = AssetIndex::scan(tmp.path());
        assert_eq!(index.len(), 2);
        assert!(index.contains("/images/logo.png"));
        assert!(index.contains("/images/logo.png?v=3"));
        assert!(index.contains("/favicon.ico"));
        assert!(!index.contains("/images/missing.png"));
    }

    #[test]
    fn test_index_missing_dir_is_empty() {
        let index = AssetIndex::scan(Path::new("/definitely/not/here"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_copy_static_assets() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write(src.path(), "images/hero/desktop.jpg");
        write(src.path(), ".DS_Store");

        let copied = copy_static_assets(src.path(), out.path()).unwrap();
        assert_eq!(copied, 1);
        assert!(out.path().join("images/hero/desktop.jpg").exists());
        assert!(!out.path().join(".DS_Store").exists());
    }
}
