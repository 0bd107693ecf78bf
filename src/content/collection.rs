//! Collection membership and content file discovery.
//!
//! ```text
//! content/
//! ├── index.yml            legacy   → /
//! ├── pricing.yml          legacy   → /pricing
//! └── landing/
//!     └── sant-cugat.yml   landing  → /landing/sant-cugat
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use jwalk::WalkDir;
use serde::Serialize;

use super::landing::landing_schema;
use super::legacy::legacy_schema;
use super::schema::Schema;

/// Subdirectory holding the landing collection.
pub const LANDING_DIR: &str = "landing";

const EXTENSIONS: &[&str] = &["yml", "yaml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Landing,
    Legacy,
}

impl Collection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Legacy => "legacy",
        }
    }

    pub fn schema(self) -> Schema {
        match self {
            Self::Landing => landing_schema(),
            Self::Legacy => legacy_schema(),
        }
    }

    /// Classify a file by its location under the content root.
    ///
    /// Returns `None` for files outside both collections (nested deeper,
    /// other extensions, or outside `root`).
    pub fn classify(path: &Path, root: &Path) -> Option<Self> {
        if !has_content_extension(path) {
            return None;
        }
        let rel = path.strip_prefix(root).ok()?;
        let parts: Vec<_> = rel.components().collect();
        match parts.as_slice() {
            [Component::Normal(_)] => Some(Self::Legacy),
            [Component::Normal(dir), Component::Normal(_)] if *dir == LANDING_DIR => {
                Some(Self::Landing)
            }
            _ => None,
        }
    }

    /// Site route for a document of this collection with file stem `stem`.
    pub fn route_for(self, stem: &str) -> String {
        match (self, stem) {
            (Self::Legacy, "index") => "/".to_string(),
            (Self::Legacy, stem) => format!("/{stem}"),
            (Self::Landing, stem) => format!("/{LANDING_DIR}/{stem}"),
        }
    }

    /// Inverse of [`Collection::route_for`]: source file for a route.
    pub fn source_for_route(route: &str, root: &Path) -> Option<(Self, PathBuf)> {
        let trimmed = route.trim_matches('/');
        let (collection, rel) = match trimmed.split('/').collect::<Vec<_>>().as_slice() {
            [""] => (Self::Legacy, "index".to_string()),
            [stem] => (Self::Legacy, (*stem).to_string()),
            [dir, stem] if *dir == LANDING_DIR => (Self::Landing, format!("{LANDING_DIR}/{stem}")),
            _ => return None,
        };
        EXTENSIONS
            .iter()
            .map(|ext| root.join(format!("{rel}.{ext}")))
            .find(|path| path.is_file())
            .map(|path| (collection, path))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn has_content_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
}

/// Collect every collection file under `root`, sorted by path.
pub fn collect_content_files(root: &Path) -> Vec<(Collection, PathBuf)> {
    let mut files: Vec<_> = WalkDir::new(root)
        .max_depth(2)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter_map(|path| Collection::classify(&path, root).map(|c| (c, path)))
        .collect();
    files.sort_by(|a, b| a.1.cmp(&b.1));
    files
}

/// Routes produced by more than one file under `root` (`index.yml` next to
/// `index.yaml`), each with its sources in path order.
pub fn route_conflicts(root: &Path) -> BTreeMap<String, Vec<PathBuf>> {
    let mut by_route: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for (collection, path) in collect_content_files(root) {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        by_route
            .entry(collection.route_for(&stem))
            .or_default()
            .push(path);
    }
    by_route.retain(|_, sources| sources.len() > 1);
    by_route
}
