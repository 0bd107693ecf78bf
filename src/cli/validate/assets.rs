//! Asset references in validated documents.

use crate::content::{ContentDocument, DocPath, Image, LandingContent, LegacyContent};

/// A root-absolute asset path and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef<'a> {
    pub path: DocPath,
    pub url: &'a str,
}

/// Root-absolute image references of a document.
///
/// External URLs, protocol-relative URLs and relative paths are not
/// served from the assets directory and are skipped.
pub fn asset_refs(document: &ContentDocument) -> Vec<AssetRef<'_>> {
    let mut refs = Vec::new();
    match document {
        ContentDocument::Landing(page) => landing_refs(page, &mut refs),
        ContentDocument::Legacy(page) => legacy_refs(page, &mut refs),
    }
    refs
}

fn push<'a>(refs: &mut Vec<AssetRef<'a>>, path: DocPath, url: Option<&'a str>) {
    if let Some(url) = url
        && url.starts_with('/')
        && !url.starts_with("//")
    {
        refs.push(AssetRef { path, url });
    }
}

fn image_refs<'a>(refs: &mut Vec<AssetRef<'a>>, path: DocPath, image: &'a Image) {
    push(refs, path.clone().key("src"), image.src.as_deref());
    push(refs, path.clone().key("desktop"), image.desktop.as_deref());
    push(refs, path.key("mobile"), image.mobile.as_deref());
}

fn landing_refs<'a>(page: &'a LandingContent, refs: &mut Vec<AssetRef<'a>>) {
    if let Some(header) = &page.header {
        push(refs, DocPath::root().key("header").key("logo"), header.logo.as_deref());
    }
    for (i, section) in page.sections().iter().enumerate() {
        let path = DocPath::root().key("sections").index(i);
        if let Some(image) = &section.image {
            image_refs(refs, path.clone().key("image"), image);
        }
        push(refs, path.key("background_image"), section.background_image.as_deref());
    }
}

fn legacy_refs<'a>(page: &'a LegacyContent, refs: &mut Vec<AssetRef<'a>>) {
    if let Some(images) = page.section.as_ref().and_then(|s| s.images.as_ref()) {
        let path = DocPath::root().key("section").key("images");
        push(refs, path.clone().key("mobile"), images.mobile.as_deref());
        push(refs, path.key("desktop"), images.desktop.as_deref());
    }
    if let Some(steps) = &page.steps {
        for (i, step) in steps.items.iter().enumerate() {
            if let Some(image) = &step.image {
                let path = DocPath::root().key("steps").key("items").index(i).key("image");
                push(refs, path.clone().key("light"), Some(image.light.as_str()));
                push(refs, path.key("dark"), Some(image.dark.as_str()));
            }
        }
    }
    if let Some(testimonials) = &page.testimonials {
        for (i, item) in testimonials.items.iter().enumerate() {
            let path = DocPath::root()
                .key("testimonials")
                .key("items")
                .index(i)
                .key("user")
                .key("avatar")
                .key("src");
            push(refs, path, Some(item.user.avatar.src.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Header, Section, SectionKind};

    #[test]
    fn test_landing_refs() {
        let mut section = Section::new(SectionKind::Vertical);
        section.image = Some(Image {
            src: Some("/images/a.png".into()),
            desktop: Some("https://cdn.example.com/d.png".into()),
            mobile: Some("images/m.png".into()),
            alt: None,
        });
        section.background_image = Some("//cdn.example.com/bg.png".into());
        let page = LandingContent {
            header: Some(Header {
                logo: Some("/logo.svg".into()),
                ..Header::default()
            }),
            sections: Some(vec![section]),
            ..LandingContent::default()
        };

        let document = ContentDocument::Landing(page);
        let refs = asset_refs(&document);
        let found: Vec<_> = refs
            .iter()
            .map(|r| (r.path.to_string(), r.url))
            .collect();
        assert_eq!(
            found,
            [
                ("header.logo".to_string(), "/logo.svg"),
                ("sections[0].image.src".to_string(), "/images/a.png"),
            ]
        );
    }

    #[test]
    fn test_legacy_refs() {
        let page: LegacyContent = serde_yaml::from_str(
            r#"
testimonials:
  title: t
  description: d
  items:
    - quote: q
      user:
        name: n
        description: d
        avatar:
          src: /images/avatar.jpg
"#,
        )
        .unwrap();
        let document = ContentDocument::Legacy(page);
        let refs = asset_refs(&document);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].path.to_string(), "testimonials.items[0].user.avatar.src");
    }
}
