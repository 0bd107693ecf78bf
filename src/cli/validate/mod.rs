//! Content validation command.

mod assets;
mod report;

use anyhow::Result;

use super::ValidateArgs;
use super::common::{collect_files, load_content};
use crate::asset::AssetIndex;
use crate::config::{SiteConfig, ValidateLevel};
use crate::content::ValidatedDocument;
use crate::log;
use crate::logger::status_success;
use crate::utils::path::display_relative;
use crate::utils::{plural_count, plural_s};

pub use assets::{AssetRef, asset_refs};
pub use report::{ValidationError, ValidationReport};

/// Validate content files and their asset references.
pub fn validate_site(config: &SiteConfig, args: &ValidateArgs) -> Result<()> {
    let files = collect_files(&args.paths, &config.build.content)?;

    if files.is_empty() {
        log!("validate"; "no content files found");
        return Ok(());
    }

    log!("validate"; "validating {}", plural_count(files.len(), "file"));

    let mut loaded = load_content(&files, config);
    let content_errors = loaded.report.content_error_count();
    if content_errors > 0 {
        log!("validate"; "found {} schema error{}", content_errors, plural_s(content_errors));
    } else {
        log!("validate"; "all documents match their collection");
    }

    if config.validate.assets.enable {
        let index = AssetIndex::scan(&config.build.assets);
        check_assets(&loaded.documents, &index, config, &mut loaded.report);

        let count = loaded.report.asset_error_count();
        if count > 0 {
            log!("validate"; "found {} missing asset{}", count, plural_s(count));
        } else {
            log!("validate"; "all asset references valid");
        }
    }

    let report = loaded.report;
    report.print();
    if !report.has_errors() {
        status_success(&report.to_string());
    }
    print_summary(report.content_file_count(), report.asset_file_count())
}

/// Check every root-absolute asset reference against the assets directory.
///
/// Findings are errors or warnings depending on `[validate.assets] level`.
pub fn check_assets(
    documents: &[ValidatedDocument],
    index: &AssetIndex,
    config: &SiteConfig,
    report: &mut ValidationReport,
) {
    let level = config.validate.assets.level;
    for doc in documents {
        let source = display_relative(&doc.source, &config.build.content);
        for AssetRef { path, url } in asset_refs(&doc.document) {
            if index.contains(url) {
                continue;
            }
            let target = format!("{path} `{url}`");
            let reason = "not found in assets directory".to_string();
            match level {
                ValidateLevel::Error => report.add_asset(&source, target, reason),
                ValidateLevel::Warn => report.add_warning(&source, target, reason),
            }
        }
    }
}

fn print_summary(content_errors: usize, asset_errors: usize) -> Result<()> {
    if content_errors > 0 || asset_errors > 0 {
        let mut parts = Vec::new();
        if content_errors > 0 {
            parts.push(format!(
                "{} with content errors",
                plural_count(content_errors, "file")
            ));
        }
        if asset_errors > 0 {
            parts.push(format!(
                "{} with missing assets",
                plural_count(asset_errors, "file")
            ));
        }
        anyhow::bail!("found {}", parts.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::path::normalize_path;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const LANDING: &str = "header:\n  logo: /images/logo.svg\nsections:\n  - type: vertical\n    background_image: /images/missing.jpg\n";

    fn site() -> (TempDir, SiteConfig) {
        let tmp = TempDir::new().unwrap();
        let root = normalize_path(tmp.path());
        fs::create_dir_all(root.join("content/landing")).unwrap();
        fs::create_dir_all(root.join("public/images")).unwrap();
        fs::write(root.join("content/landing/a.yml"), LANDING).unwrap();
        fs::write(root.join("public/images/logo.svg"), "<svg/>").unwrap();

        let mut config = SiteConfig::default();
        config.build.content = root.join("content");
        config.build.assets = root.join("public");
        (tmp, config)
    }

    fn args() -> ValidateArgs {
        ValidateArgs {
            paths: Vec::new(),
            assets: None,
            strict: false,
            warn_only: false,
        }
    }

    #[test]
    fn test_missing_asset_fails() {
        let (_tmp, config) = site();
        let err = validate_site(&config, &args()).unwrap_err();
        assert!(err.to_string().contains("1 file with missing assets"));
    }

    #[test]
    fn test_check_assets_levels() {
        let (_tmp, mut config) = site();
        let files = vec![config.build.content.join("landing/a.yml")];
        let index = AssetIndex::scan(&config.build.assets);

        let loaded = load_content(&files, &config);
        let mut report = ValidationReport::default();
        check_assets(&loaded.documents, &index, &config, &mut report);
        assert_eq!(report.asset_error_count(), 1);
        let finding = &report.assets["landing/a.yml"][0];
        assert_eq!(finding.target, "sections[0].background_image `/images/missing.jpg`");

        config.validate.assets.level = ValidateLevel::Warn;
        let mut report = ValidationReport::default();
        check_assets(&loaded.documents, &index, &config, &mut report);
        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_assets_check_disabled() {
        let (_tmp, mut config) = site();
        config.validate.assets.enable = false;
        assert!(validate_site(&config, &args()).is_ok());
    }

    #[test]
    fn test_schema_error_fails() {
        let (_tmp, config) = site();
        fs::write(config.build.content.join("index.yml"), "hero: {}\n").unwrap();
        let only_index = ValidateArgs {
            paths: vec![PathBuf::from("index.yml")],
            ..args()
        };
        let err = validate_site(&config, &only_index).unwrap_err();
        assert!(err.to_string().contains("1 file with content errors"));
    }
}
