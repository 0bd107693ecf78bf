//! Site building orchestration.
//!
//! Build phases:
//! - **Validate** - Load every content file; any error aborts before writing
//! - **Plan** - Map each prerendered route to its validated document
//! - **Write** - Bake payloads in parallel, then the route manifest
//! - **Assets** - Copy the static assets directory into the output

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;

use super::common::{collect_files, load_content};
use super::validate::ValidationReport;
use crate::asset::{AssetResolver, BasePath, copy_static_assets};
use crate::config::{ModulesConfig, SiteConfig};
use crate::content::{Collection, ValidatedDocument};
use crate::core::BuildMode;
use crate::page::{PAYLOAD_FILE, bake};
use crate::utils::path::display_relative;
use crate::utils::path::route::{normalize_route, route_dir};
use crate::utils::plural_count;
use crate::{debug, log};

/// File name of the route manifest at the output root.
pub const MANIFEST_FILE: &str = "_routes.json";

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub routes: usize,
    pub assets: usize,
    /// Non-fatal findings printed before writing.
    pub warnings: usize,
}

/// A route scheduled for baking.
struct PlannedRoute<'a> {
    route: String,
    doc: &'a ValidatedDocument,
}

#[derive(Debug, Serialize)]
struct RouteEntry {
    route: String,
    collection: Collection,
    source: String,
    payload: String,
}

#[derive(Debug, Serialize)]
struct RouteManifest<'a> {
    base: &'a BasePath,
    mode: BuildMode,
    sourcemap: bool,
    compress: bool,
    routes: Vec<RouteEntry>,
    modules: &'a ModulesConfig,
}

/// Build the site: validate, bake every prerendered route, copy assets.
///
/// Nothing is written unless every content file validates and every
/// prerendered route has a document.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let base = config.base_path();
    log!("build"; "{} build, base path {}", config.mode, base);

    let files = collect_files(&[], &config.build.content)?;
    let loaded = load_content(&files, config);
    if loaded.report.has_errors() {
        fail_with_report(&loaded.report)?;
    }
    let warnings = loaded.report.warning_count();
    if warnings > 0 {
        loaded.report.print();
        log!("warning"; "{} in content, building anyway", plural_count(warnings, "warning"));
    }
    debug!("build"; "validated {}", plural_count(files.len(), "file"));

    let planned = plan_routes(&config.build.prerender, &loaded.documents, &config.build.content)?;

    prepare_output(&config.build.output, config.build.clean)?;

    let resolver = AssetResolver::new(base.clone());
    let entries = planned
        .par_iter()
        .map(|planned| write_payload(planned, &resolver, config))
        .collect::<Result<Vec<_>>>()?;

    write_manifest(config, &base, entries)?;

    let assets = copy_static_assets(&config.build.assets, &config.build.output)?;
    let summary = BuildSummary {
        routes: planned.len(),
        assets,
        warnings,
    };
    log!(
        "build"; "baked {}, copied {}",
        plural_count(summary.routes, "route"),
        plural_count(summary.assets, "asset")
    );
    Ok(summary)
}

fn fail_with_report(report: &ValidationReport) -> Result<()> {
    report.print();
    bail!(
        "build aborted: {} with content errors",
        plural_count(report.content_file_count(), "file")
    )
}

/// Map prerender routes to validated documents, in configuration order.
fn plan_routes<'a>(
    prerender: &[String],
    documents: &'a [ValidatedDocument],
    content_dir: &Path,
) -> Result<Vec<PlannedRoute<'a>>> {
    let by_source: HashMap<&Path, &ValidatedDocument> = documents
        .iter()
        .map(|doc| (doc.source.as_path(), doc))
        .collect();

    let mut planned = Vec::with_capacity(prerender.len());
    let mut missing = Vec::new();
    for route in prerender {
        let route = normalize_route(route);
        let doc = Collection::source_for_route(&route, content_dir)
            .and_then(|(_, source)| by_source.get(source.as_path()).copied());
        match doc {
            Some(doc) => planned.push(PlannedRoute { route, doc }),
            None => missing.push(route),
        }
    }

    if !missing.is_empty() {
        bail!(
            "no content for prerendered route{}: {}",
            if missing.len() == 1 { "" } else { "s" },
            missing.join(", ")
        );
    }
    Ok(planned)
}

/// Create the output directory, wiping it first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean output directory {}", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))
}

fn payload_path(output: &Path, route: &str) -> PathBuf {
    output.join(route_dir(route)).join(PAYLOAD_FILE)
}

fn to_json<T: Serialize>(value: &T, minify: bool) -> Result<String> {
    let json = if minify {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

fn write_payload(
    planned: &PlannedRoute<'_>,
    resolver: &AssetResolver,
    config: &SiteConfig,
) -> Result<RouteEntry> {
    let mut payload = bake(planned.doc, resolver, &config.site);
    payload.route = planned.route.clone();

    let path = payload_path(&config.build.output, &planned.route);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, to_json(&payload, config.build.minify)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("build"; "{} -> {}", planned.route, path.display());

    Ok(RouteEntry {
        route: planned.route.clone(),
        collection: planned.doc.document.collection(),
        source: display_relative(&planned.doc.source, &config.build.content),
        payload: display_relative(&path, &config.build.output),
    })
}

fn write_manifest(config: &SiteConfig, base: &BasePath, routes: Vec<RouteEntry>) -> Result<()> {
    let manifest = RouteManifest {
        base,
        mode: config.mode,
        sourcemap: config.build.sourcemap,
        compress: config.build.compress,
        routes,
        modules: &config.modules,
    };
    let path = config.build.output.join(MANIFEST_FILE);
    fs::write(&path, to_json(&manifest, config.build.minify)?)
        .with_context(|| format!("Failed to write {}", path.display()))
}
