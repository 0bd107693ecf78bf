//! `[deploy]` section configuration.
//!
//! The base path is environment-conditioned: production builds are served
//! from a sub-path (GitHub Pages project sites), development from root.
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! base = "/marketing-landing/"   # production base path
//! dev_base = "/"                 # development base path
//! ```

use serde::{Deserialize, Serialize};

use crate::asset::BasePath;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::BuildMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Production base path. Derived from `[site] url` when unset.
    pub base: Option<String>,

    /// Development base path.
    pub dev_base: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            base: None,
            dev_base: "/".to_string(),
        }
    }
}

impl DeployConfig {
    /// Base path for `mode`. `url_prefix` is the path extracted from
    /// `[site] url` and only used in production when `base` is unset.
    pub fn base_path(&self, mode: BuildMode, url_prefix: Option<&str>) -> BasePath {
        match mode {
            BuildMode::Development => BasePath::new(self.dev_base.clone()),
            BuildMode::Production => match (&self.base, url_prefix) {
                (Some(base), _) => BasePath::new(base.clone()),
                (None, Some(prefix)) if !prefix.is_empty() => BasePath::new(format!("/{prefix}/")),
                _ => BasePath::root(),
            },
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let checks = [
            (FieldPath::new("deploy.base"), self.base.as_deref()),
            (FieldPath::new("deploy.dev_base"), Some(self.dev_base.as_str())),
        ];
        for (field, value) in checks {
            if let Some(base) = value
                && !base.is_empty()
                && !base.starts_with('/')
            {
                diag.error_with_hint(
                    field,
                    format!("base path `{base}` must start with `/`"),
                    format!("use `/{base}`"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_uses_dev_base() {
        let deploy = DeployConfig {
            base: Some("/marketing-landing/".into()),
            ..Default::default()
        };
        assert!(deploy.base_path(BuildMode::Development, None).is_root());
        assert_eq!(
            deploy.base_path(BuildMode::Production, None).as_str(),
            "/marketing-landing/"
        );
    }

    #[test]
    fn test_production_falls_back_to_url_prefix() {
        let deploy = DeployConfig::default();
        assert_eq!(
            deploy
                .base_path(BuildMode::Production, Some("marketing-landing"))
                .as_str(),
            "/marketing-landing/"
        );
        assert!(deploy.base_path(BuildMode::Production, Some("")).is_root());
        assert!(deploy.base_path(BuildMode::Production, None).is_root());
    }

    #[test]
    fn test_relative_base_rejected() {
        let deploy = DeployConfig {
            base: Some("marketing-landing/".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        deploy.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "deploy.base");
    }
}
