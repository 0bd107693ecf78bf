//! Routes command: list every content route.
//!
//! ```text
//! /                       index.yml               legacy   prerender
//! /landing/sant-cugat     landing/sant-cugat.yml  landing  prerender
//! /pricing                pricing.yml             legacy
//! ```

use std::collections::BTreeSet;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::SiteConfig;
use crate::content::{Collection, collect_content_files};
use crate::log;
use crate::utils::path::display_relative;
use crate::utils::path::route::normalize_route;
use crate::utils::plural_count;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub route: String,
    pub source: Option<String>,
    pub collection: Option<Collection>,
    pub prerender: bool,
}

/// Every route with a content file, plus prerendered routes that have none.
pub fn collect_routes(config: &SiteConfig) -> Vec<RouteInfo> {
    let content_dir = &config.build.content;
    let prerender: BTreeSet<String> = config
        .build
        .prerender
        .iter()
        .map(|r| normalize_route(r))
        .collect();

    let mut routes: Vec<RouteInfo> = collect_content_files(content_dir)
        .into_iter()
        .map(|(collection, path)| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let route = collection.route_for(&stem);
            RouteInfo {
                prerender: prerender.contains(&route),
                source: Some(display_relative(&path, content_dir)),
                collection: Some(collection),
                route,
            }
        })
        .collect();

    for route in &prerender {
        if !routes.iter().any(|r| &r.route == route) {
            routes.push(RouteInfo {
                route: route.clone(),
                source: None,
                collection: None,
                prerender: true,
            });
        }
    }

    routes.sort_by(|a, b| a.route.cmp(&b.route));
    routes
}

pub fn list_routes(config: &SiteConfig) -> Result<()> {
    let routes = collect_routes(config);
    let width = routes.iter().map(|r| r.route.len()).max().unwrap_or(0);
    let source_width = routes
        .iter()
        .filter_map(|r| r.source.as_ref().map(String::len))
        .max()
        .unwrap_or(0);

    let duplicates = duplicate_routes(&routes);
    for info in &routes {
        let source = info.source.as_deref().unwrap_or("-");
        let collection = info.collection.map_or("-", Collection::name);
        let line = format!("{:<width$}  {:<source_width$}  {:<8}", info.route, source, collection);
        if duplicates.contains(info.route.as_str()) {
            println!("{line} {}", "duplicate route".red());
            continue;
        }
        match (info.prerender, info.source.is_some()) {
            (true, true) => println!("{line} {}", "prerender".green()),
            (true, false) => println!("{line} {}", "missing content".red()),
            _ => println!("{}", line.trim_end()),
        }
    }

    let missing = routes.iter().filter(|r| r.source.is_none()).count();
    log!("routes"; "{}, {} prerendered", plural_count(routes.len(), "route"),
        routes.iter().filter(|r| r.prerender).count());
    if missing > 0 {
        anyhow::bail!("{} without content", plural_count(missing, "prerendered route"));
    }
    if !duplicates.is_empty() {
        anyhow::bail!(
            "{} produced by more than one file",
            plural_count(duplicates.len(), "route")
        );
    }
    Ok(())
}

/// Routes listed more than once (one row per source file).
fn duplicate_routes(routes: &[RouteInfo]) -> BTreeSet<&str> {
    routes
        .windows(2)
        .filter(|pair| pair[0].route == pair[1].route)
        .map(|pair| pair[0].route.as_str())
        .collect()
}
