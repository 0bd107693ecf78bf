//! Site configuration management for `vitrine.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── deploy     # [deploy]
//! │   ├── modules    # [modules.*]
//! │   ├── site       # [site]
//! │   └── validate   # [validate]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! A missing config file is not an error: every section has defaults, so a
//! bare `content/` directory builds as-is.

pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

pub use section::{
    BuildSectionConfig, DeployConfig, ImageProvider, ModulesConfig, SiteSectionConfig,
    ValidateConfig, ValidateLevel,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    asset::BasePath,
    cli::{BuildArgs, Cli, Commands, ValidateArgs},
    core::BuildMode,
    log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vitrine.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (empty when running on defaults)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory, parent of the config file
    #[serde(skip)]
    pub root: PathBuf,

    /// Deployment mode for this invocation
    #[serde(skip)]
    pub mode: BuildMode,

    /// `--base` override, wins over `[deploy]`
    #[serde(skip)]
    pub base_override: Option<String>,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub modules: ModulesConfig,

    #[serde(default)]
    pub validate: ValidateConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when no file is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                log!("config"; "{} not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(cwd);
        config.finalize(cli, &root);
        config.validate()?;
        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli, root: &Path) {
        self.mode = cli.mode.unwrap_or(if cli.is_build() {
            BuildMode::Production
        } else {
            BuildMode::Development
        });
        self.base_override = cli.base.clone();

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.normalize_paths(root);
        self.apply_command_options(cli);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Base path the site is served under in the current mode.
    ///
    /// `--base` wins; otherwise `[deploy]` decides, falling back to the
    /// path of `[site] url` in production.
    pub fn base_path(&self) -> BasePath {
        if let Some(base) = &self.base_override {
            return BasePath::new(base.clone());
        }
        let url_prefix = self.site.url.as_deref().and_then(extract_url_path);
        self.deploy.base_path(self.mode, url_prefix.as_deref())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Validate { args } => self.apply_validate_args(args),
            Commands::Query { .. } | Commands::Routes => {}
        }
    }

    /// Apply validate arguments from CLI.
    fn apply_validate_args(&mut self, args: &ValidateArgs) {
        Self::update_option(&mut self.validate.assets.enable, args.assets.as_ref());
        if args.strict {
            self.validate.strict_sections = true;
        }
        if args.warn_only {
            self.validate.assets.level = ValidateLevel::Warn;
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        self.build.clean = args.clean;
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        use crate::utils::path::normalize_path;

        let root = normalize_path(root);
        self.root = root.clone();

        if !self.config_path.as_os_str().is_empty() {
            self.config_path = normalize_path(&self.config_path);
        }
        self.build.content = normalize_path(&root.join(&self.build.content));
        self.build.output = normalize_path(&root.join(&self.build.output));
        self.build.assets = normalize_path(&root.join(&self.build.assets));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        self.deploy.validate(&mut diag);
        self.modules.validate(&mut diag);
        if let Some(base) = &self.base_override
            && !base.starts_with('/')
        {
            diag.error_with_hint(
                FieldPath::new("--base"),
                format!("base path `{base}` must start with `/`"),
                format!("use `/{base}`"),
            );
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("vitrine").chain(args.iter().copied()))
    }

    fn finalized(toml: &str, args: &[&str]) -> SiteConfig {
        let mut config = test_parse_config(toml);
        config.finalize(&cli(args), Path::new("/site"));
        config
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[base\ntitle = \"x\"").is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert!(config.build.minify);
        assert_eq!(config.deploy.dev_base, "/");
        assert_eq!(config.mode, BuildMode::Development);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_paths_normalized_against_root() {
        let config = finalized("[build]\noutput = \"dist\"", &["routes"]);
        assert_eq!(config.build.output, PathBuf::from("/site/dist"));
        assert_eq!(config.build.content, PathBuf::from("/site/content"));
        assert_eq!(config.build.assets, PathBuf::from("/site/public"));
    }

    #[test]
    fn test_cli_path_overrides() {
        let config = finalized("", &["-c", "pages", "-o", "out", "routes"]);
        assert_eq!(config.build.content, PathBuf::from("/site/pages"));
        assert_eq!(config.build.output, PathBuf::from("/site/out"));
    }

    #[test]
    fn test_build_defaults_to_production_base() {
        let toml = "[deploy]\nbase = \"/marketing-landing/\"";

        let build = finalized(toml, &["build"]);
        assert_eq!(build.mode, BuildMode::Production);
        assert_eq!(build.base_path().as_str(), "/marketing-landing/");

        let routes = finalized(toml, &["routes"]);
        assert_eq!(routes.mode, BuildMode::Development);
        assert!(routes.base_path().is_root());

        let forced = finalized(toml, &["--mode", "production", "routes"]);
        assert_eq!(forced.base_path().as_str(), "/marketing-landing/");
    }

    #[test]
    fn test_base_derived_from_site_url() {
        let config = finalized(
            "[site]\nurl = \"https://example.github.io/marketing-landing/\"",
            &["build"],
        );
        assert_eq!(config.base_path().as_str(), "/marketing-landing/");
    }

    #[test]
    fn test_base_override_wins() {
        let config = finalized(
            "[deploy]\nbase = \"/marketing-landing/\"",
            &["--base", "/preview/", "build"],
        );
        assert_eq!(config.base_path().as_str(), "/preview/");
    }

    #[test]
    fn test_validate_args_override() {
        let config = finalized("", &["validate", "--strict", "--warn-only", "--assets=false"]);
        assert!(config.validate.strict_sections);
        assert!(!config.validate.assets.enable);
        assert_eq!(config.validate.assets.level, ValidateLevel::Warn);
    }

    #[test]
    fn test_build_args_override() {
        let config = finalized("", &["build", "--clean", "--minify=false"]);
        assert!(config.build.clean);
        assert!(!config.build.minify);
    }

    #[test]
    fn test_relative_base_override_rejected() {
        let config = finalized("", &["--base", "preview/", "build"]);
        assert!(config.validate().is_err());
    }
}
