//! `[modules]` section: optional site modules.
//!
//! These settings are not interpreted by the builder itself; they are
//! checked and written to the route manifest for the template layer.
//!
//! # Example
//!
//! ```toml
//! [modules.image]
//! provider = "none"             # none | ipx
//!
//! [modules.analytics]
//! id = "G-XXXXXXX"
//!
//! [modules.lint]
//! comma_dangle = "never"
//! brace_style = "1tbs"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    pub image: ImageModuleConfig,
    pub analytics: AnalyticsConfig,
    pub lint: LintConfig,
}

/// Image optimization provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageProvider {
    /// Serve images as authored (static hosting has no optimizer).
    #[default]
    None,
    Ipx,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageModuleConfig {
    pub provider: ImageProvider,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Analytics tag ID. Analytics is disabled when unset.
    pub id: Option<String>,
}

/// Stylistic lint rules for the template sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    pub comma_dangle: String,
    pub brace_style: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            comma_dangle: "never".into(),
            brace_style: "1tbs".into(),
        }
    }
}

impl ModulesConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(id) = &self.analytics.id
            && id.trim().is_empty()
        {
            diag.error_with_hint(
                FieldPath::new("modules.analytics.id"),
                "analytics id is empty",
                "remove the field to disable analytics",
            );
        }
    }
}
