//! `[validate]` section: how strict `validate` and `build` are.
//!
//! # Example
//!
//! ```toml
//! [validate]
//! strict_sections = false     # unused section attributes fail instead of warn
//!
//! [validate.assets]
//! enable = true               # check root-absolute asset references exist
//! level = "error"             # error | warn
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Report section attributes the section type does not render as errors.
    pub strict_sections: bool,

    /// Asset reference validation.
    pub assets: AssetsValidateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsValidateConfig {
    /// Check references such as `/images/logo.svg` against `[build] assets`.
    pub enable: bool,

    /// Severity of a missing asset.
    pub level: ValidateLevel,
}

impl Default for AssetsValidateConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: ValidateLevel::default(),
        }
    }
}

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Reported under `assets`; the command exits non-zero.
    #[default]
    Error,
    /// Reported under `warnings` only.
    Warn,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_defaults_check_assets_as_errors() {
        let config = test_parse_config("");
        assert!(!config.validate.strict_sections);
        assert!(config.validate.assets.enable);
        assert_eq!(config.validate.assets.level, ValidateLevel::Error);
    }

    #[test]
    fn test_assets_subtable() {
        let config = test_parse_config(
            r#"[validate]
strict_sections = true

[validate.assets]
enable = false
level = "warn""#,
        );
        assert!(config.validate.strict_sections);
        assert!(!config.validate.assets.enable);
        assert_eq!(config.validate.assets.level, ValidateLevel::Warn);
    }

    #[test]
    fn test_misspelled_key_is_reported() {
        let content = "[validate]\nstrict_section = true";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored == ["validate.strict_section"]);
    }
}
