//! Page baking: validated documents to presentation-ready payloads.
//!
//! A payload is everything the template layer needs to render one route:
//! asset URLs already carry the deployment base path and inline markdown is
//! already HTML.
//!
//! ```json
//! {
//!   "route": "/landing/sant-cugat",
//!   "base": "/marketing-landing/",
//!   "seo": { "title": "...", "description": "..." },
//!   "collection": "landing",
//!   "data": { "header": {...}, "sections": [...], "final_cta": {...} }
//! }
//! ```

mod landing;
mod legacy;

pub use landing::{BakedFinalCta, BakedLanding, BakedSection, ItemMarkdown, SectionMarkdown};

use serde::Serialize;

use crate::asset::{AssetResolver, BasePath};
use crate::config::SiteSectionConfig;
use crate::content::{ContentDocument, LegacyContent, Seo, ValidatedDocument};

/// File name of a route's payload inside its output directory.
pub const PAYLOAD_FILE: &str = "_payload.json";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "collection", content = "data", rename_all = "lowercase")]
pub enum BakedPage {
    Landing(BakedLanding),
    Legacy(LegacyContent),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagePayload {
    pub route: String,
    pub base: BasePath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
    #[serde(flatten)]
    pub page: BakedPage,
}

/// Bake one validated document.
///
/// Landing pages use their own `seo` block; pages without one fall back to
/// the `[site]` title and description when a title is configured.
pub fn bake(
    doc: &ValidatedDocument,
    resolver: &AssetResolver,
    site: &SiteSectionConfig,
) -> PagePayload {
    let (seo, page) = match &doc.document {
        ContentDocument::Landing(content) => (
            content.seo.clone(),
            BakedPage::Landing(landing::bake_landing(content, resolver)),
        ),
        ContentDocument::Legacy(content) => (
            None,
            BakedPage::Legacy(legacy::bake_legacy(content, resolver)),
        ),
    };

    let seo = seo.or_else(|| {
        (!site.title.is_empty()).then(|| Seo {
            title: site.title.clone(),
            description: site.description.clone(),
        })
    });

    PagePayload {
        route: doc.route.clone(),
        base: resolver.base().clone(),
        seo,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LandingContent;
    use std::path::PathBuf;

    fn doc(route: &str, document: ContentDocument) -> ValidatedDocument {
        ValidatedDocument {
            source: PathBuf::from("content/x.yml"),
            route: route.into(),
            document,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_payload_shape() {
        let landing = LandingContent {
            seo: Some(Seo {
                title: "Fisio".into(),
                description: "Sant Cugat".into(),
            }),
            ..LandingContent::default()
        };
        let payload = bake(
            &doc("/landing/sant-cugat", ContentDocument::Landing(landing)),
            &AssetResolver::new(BasePath::new("/ml/")),
            &SiteSectionConfig::default(),
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["route"], "/landing/sant-cugat");
        assert_eq!(json["base"], "/ml/");
        assert_eq!(json["seo"]["title"], "Fisio");
        assert_eq!(json["collection"], "landing");
        assert_eq!(json["data"]["sections"], serde_json::json!([]));
    }

    #[test]
    fn test_seo_falls_back_to_site() {
        let site = SiteSectionConfig {
            title: "Marketing".into(),
            description: "Landing pages".into(),
            url: None,
        };
        let payload = bake(
            &doc("/", ContentDocument::Legacy(LegacyContent::default())),
            &AssetResolver::default(),
            &site,
        );
        assert_eq!(payload.seo.unwrap().title, "Marketing");

        let payload = bake(
            &doc("/", ContentDocument::Legacy(LegacyContent::default())),
            &AssetResolver::default(),
            &SiteSectionConfig::default(),
        );
        assert!(payload.seo.is_none());
    }
}
