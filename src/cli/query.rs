//! Query command: print the baked payload of content files.
//!
//! Output is a JSON array with one payload per file, in path order, using
//! the base path of the current mode.

use std::io::Write;

use anyhow::Result;

use super::args::QueryArgs;
use super::common::{collect_files, load_content};
use crate::asset::AssetResolver;
use crate::config::SiteConfig;
use crate::page::{PagePayload, bake};

/// Execute query command
///
/// Stdout carries only the JSON array; logs and reports go to stderr.
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_payloads(args, config, &mut stdout)
}

fn write_payloads(args: &QueryArgs, config: &SiteConfig, out: &mut impl Write) -> Result<()> {
    let payloads = query_payloads(args, config)?;

    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &payloads)?;
    } else {
        serde_json::to_writer(&mut *out, &payloads)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn query_payloads(args: &QueryArgs, config: &SiteConfig) -> Result<Vec<PagePayload>> {
    let files = collect_files(&args.paths, &config.build.content)?;
    let loaded = load_content(&files, config);
    if loaded.report.has_errors() {
        loaded.report.print();
        anyhow::bail!("{}", loaded.report);
    }

    let resolver = AssetResolver::new(config.base_path());
    Ok(loaded
        .documents
        .iter()
        .map(|doc| bake(doc, &resolver, &config.site))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::path::normalize_path;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_query_uses_mode_base() {
        let tmp = TempDir::new().unwrap();
        let content = normalize_path(tmp.path()).join("content");
        fs::create_dir_all(content.join("landing")).unwrap();
        fs::write(
            content.join("landing/a.yml"),
            "header:\n  logo: /images/logo.svg\n",
        )
        .unwrap();

        let mut config = SiteConfig::default();
        config.build.content = content;
        config.base_override = Some("/preview/".into());

        let args = QueryArgs {
            paths: vec![PathBuf::from("landing/a.yml")],
            pretty: false,
        };
        let payloads = query_payloads(&args, &config).unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].route, "/landing/a");

        let json = serde_json::to_value(&payloads[0]).unwrap();
        assert_eq!(json["data"]["header"]["logo"], "/preview/images/logo.svg");
    }

    #[test]
    fn test_output_is_a_json_array_without_config() {
        let tmp = TempDir::new().unwrap();
        let content = normalize_path(tmp.path()).join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("index.yml"), "hero:\n  links: []\n").unwrap();

        let mut config = SiteConfig::default();
        assert!(config.config_path.as_os_str().is_empty());
        config.build.content = content;

        for pretty in [false, true] {
            let args = QueryArgs {
                paths: vec![PathBuf::from("index.yml")],
                pretty,
            };
            let mut out = Vec::new();
            write_payloads(&args, &config, &mut out).unwrap();

            let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
            assert_eq!(json[0]["route"], "/");
            assert_eq!(json[0]["collection"], "legacy");
        }
    }

    #[test]
    fn test_query_invalid_file_fails() {
        let tmp = TempDir::new().unwrap();
        let content = normalize_path(tmp.path()).join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("index.yml"), "cta:\n  title: ''\n").unwrap();

        let mut config = SiteConfig::default();
        config.build.content = content;
        let args = QueryArgs {
            paths: vec![PathBuf::from("index.yml")],
            pretty: true,
        };
        assert!(query_payloads(&args, &config).is_err());
    }
}
