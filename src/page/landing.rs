//! Baking of landing pages.
//!
//! Sections keep their authored attributes; the spans that render as inline
//! markdown are added alongside under `markdown`, so the template layer
//! never re-parses copy.

use serde::Serialize;

use crate::asset::AssetResolver;
use crate::content::{FinalCta, Header, LandingContent, Section};
use crate::markdown::{InlineContent, inline_content};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BakedLanding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    pub sections: Vec<BakedSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_cta: Option<BakedFinalCta>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BakedSection {
    #[serde(flatten)]
    pub section: Section,
    #[serde(skip_serializing_if = "SectionMarkdown::is_empty")]
    pub markdown: SectionMarkdown,
}

/// Rendered markdown spans of one section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionMarkdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<InlineContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<InlineContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<InlineContent>,
    /// One entry per item, in item order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemMarkdown>,
}

impl SectionMarkdown {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.content.is_none()
            && self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemMarkdown {
    pub content: InlineContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<InlineContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BakedFinalCta {
    #[serde(flatten)]
    pub cta: FinalCta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<InlineContent>,
}

fn render(text: Option<&str>) -> Option<InlineContent> {
    text.map(inline_content)
}

pub fn bake_landing(page: &LandingContent, resolver: &AssetResolver) -> BakedLanding {
    let header = page.header.clone().map(|mut header| {
        header.logo = resolver.resolve_opt(header.logo.as_deref());
        header
    });

    let sections = page
        .sections()
        .iter()
        .map(|section| bake_section(section, resolver))
        .collect();

    let final_cta = page.final_cta.clone().map(|cta| BakedFinalCta {
        markdown: render(cta.content.as_deref()),
        cta,
    });

    BakedLanding {
        header,
        sections,
        final_cta,
    }
}

fn bake_section(section: &Section, resolver: &AssetResolver) -> BakedSection {
    let mut section = section.clone();
    section.image = section.image.as_ref().map(|image| resolver.resolve_image(image));
    section.background_image = resolver.resolve_opt(section.background_image.as_deref());

    let items = section
        .items
        .iter()
        .flatten()
        .map(|item| ItemMarkdown {
            content: inline_content(&item.content),
            answer: render(item.answer.as_deref()),
        })
        .collect();

    let markdown = SectionMarkdown {
        title: render(section.title.as_deref()),
        description: render(section.description.as_deref()),
        content: render(section.content.as_deref()),
        items,
    };
    BakedSection { section, markdown }
}
