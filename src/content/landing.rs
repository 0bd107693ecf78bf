//! The `landing` collection: one YAML file per campaign page under
//! `content/landing/`.

use serde::{Deserialize, Serialize};

use super::schema::{DocPath, Field, Schema, Violation};
use super::section::{Section, section_schema};

pub fn landing_schema() -> Schema {
    let seo = Schema::object([
        Field::required("title", Schema::non_empty()),
        Field::required("description", Schema::non_empty()),
    ]);

    let language = Schema::object([
        Field::required("code", Schema::non_empty()),
        Field::optional("flag", Schema::string()),
        Field::required("label", Schema::non_empty()),
    ]);
    let header = Schema::object([
        Field::optional("logo", Schema::string()),
        Field::optional("cta_text", Schema::string()),
        Field::optional("cta_link", Schema::string()),
        Field::optional("languages", Schema::array(language)),
    ]);

    let cta_button = Schema::object([
        Field::required("text", Schema::non_empty()),
        Field::required("link", Schema::non_empty()),
        Field::optional("style", Schema::string()),
        Field::optional("target", Schema::string()),
    ]);
    let final_cta = Schema::object([
        Field::optional("title", Schema::string()),
        Field::optional("content", Schema::string()),
        Field::optional("buttons", Schema::array(cta_button)),
    ]);

    Schema::object([
        Field::optional("seo", seo),
        Field::optional("header", header),
        Field::optional("sections", Schema::array(section_schema())),
        Field::optional("final_cta", final_cta),
    ])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaButton {
    pub text: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalCta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<CtaButton>>,
}

/// A validated landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_cta: Option<FinalCta>,
}

impl LandingContent {
    pub fn sections(&self) -> &[Section] {
        self.sections.as_deref().unwrap_or_default()
    }

    /// Section attributes that the section's kind does not render.
    pub fn lint_sections(&self) -> Vec<Violation> {
        self.sections()
            .iter()
            .enumerate()
            .flat_map(|(i, section)| section.lint(&DocPath::root().key("sections").index(i)))
            .collect()
    }
}
