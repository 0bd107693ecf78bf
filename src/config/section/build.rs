//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"             # YAML content root (relative to site root)
//! output = ".output/public"       # Build output directory
//! assets = "public"               # Static files copied verbatim into output
//! minify = true                   # Compact JSON payloads
//! sourcemap = false               # Passed through to the asset pipeline
//! compress = false                # Passed through to the asset pipeline
//! prerender = ["/", "/landing/sant-cugat"]
//! ```

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source directory (YAML files).
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Static assets directory, served from the site root.
    pub assets: PathBuf,

    /// Write compact instead of pretty-printed payloads.
    pub minify: bool,

    /// Emit source maps for bundled assets.
    pub sourcemap: bool,

    /// Precompress emitted files.
    pub compress: bool,

    /// Routes baked at build time.
    pub prerender: Vec<String>,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: ".output/public".into(),
            assets: "public".into(),
            minify: true,
            sourcemap: false,
            compress: false,
            prerender: vec!["/".into()],
            clean: false,
        }
    }
}

impl BuildSectionConfig {
    /// Check prerender routes: root-absolute and unique.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("build.prerender");
        let mut seen = BTreeSet::new();
        for route in &self.prerender {
            if !route.starts_with('/') {
                diag.error_with_hint(
                    field,
                    format!("route `{route}` must start with `/`"),
                    format!("write it as `/{route}`"),
                );
            } else if !seen.insert(route.trim_end_matches('/')) {
                diag.error(field, format!("route `{route}` is listed more than once"));
            }
        }
        if self.output == self.content {
            diag.error(
                FieldPath::new("build.output"),
                "output directory must differ from the content directory",
            );
        }
    }
}
