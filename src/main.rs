//! Vitrine - content validator and static builder for YAML landing pages.

#![allow(dead_code)]

mod asset;
mod cli;
mod config;
mod content;
mod core;
mod logger;
mod markdown;
mod page;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Validate { args } => cli::validate::validate_site(&config, args),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Routes => cli::routes::list_routes(&config),
    }
}
