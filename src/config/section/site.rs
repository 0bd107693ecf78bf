//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Fisioterapia Sant Cugat"
//! description = "Landing pages"
//! url = "https://example.github.io/marketing-landing/"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, used as the fallback page title.
    pub title: String,

    /// Site description, used as the fallback page description.
    pub description: String,

    /// Public URL of the deployed site. Its path component is the
    /// production base path when `[deploy] base` is not set.
    pub url: Option<String>,
}

impl SiteSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && url::Url::parse(url).is_err()
        {
            diag.error_with_hint(
                FieldPath::new("site.url"),
                format!("invalid URL `{url}`"),
                "use an absolute URL such as https://example.github.io/site/",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_reported() {
        let site = SiteSectionConfig {
            url: Some("example.github.io".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.url");
    }

    #[test]
    fn test_valid_url_accepted() {
        let site = SiteSectionConfig {
            url: Some("https://example.github.io/marketing-landing/".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
