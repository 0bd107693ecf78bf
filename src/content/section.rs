//! Landing page sections.
//!
//! A section is tagged by `type` and carries an optional attribute bag.
//! Any attribute may appear on any type; [`Section::lint`] reports the ones
//! a section type does not render so authors can spot copy that will never
//! show up.

use serde::{Deserialize, Serialize};

use super::schema::{Constraint, DocPath, Field, Schema, Violation};
use super::shared::{Image, image_schema};

pub const SECTION_KINDS: &[&str] = &[
    "vertical",
    "horizontal",
    "icon-enum",
    "contact",
    "acordeon",
    "footer",
];
pub const FIELD_TYPES: &[&str] = &["text", "email", "tel", "number", "textarea"];

// ============================================================================
// Schemas
// ============================================================================

fn button_schema() -> Schema {
    Schema::object([
        Field::required("label", Schema::non_empty()),
        Field::optional("to", Schema::string()),
        Field::optional("href", Schema::string()),
        Field::optional("color", Schema::string()),
        Field::optional("variant", Schema::string()),
        Field::optional("size", Schema::string()),
        Field::optional("icon", Schema::string()),
        Field::optional("target", Schema::string()),
    ])
}

fn item_schema() -> Schema {
    Schema::object([
        Field::optional("icon", Schema::string()),
        Field::required("title", Schema::non_empty()),
        Field::required("content", Schema::non_empty()),
        Field::optional("question", Schema::string()),
        Field::optional("answer", Schema::string()),
    ])
}

fn contact_field_schema() -> Schema {
    Schema::object([
        Field::required("name", Schema::non_empty()),
        Field::required("label", Schema::non_empty()),
        Field::required("type", Schema::one_of(FIELD_TYPES)),
        Field::optional("placeholder", Schema::string()),
        Field::optional("min", Schema::Number),
        Field::optional("max", Schema::Number),
        Field::required("required", Schema::Bool),
    ])
}

pub fn section_schema() -> Schema {
    let text = [
        "class",
        "title",
        "description",
        "headline",
        "content",
        "subtitle",
        "caption",
        "footer",
        "background",
        "background_image",
        "textAlign",
        "layout",
    ]
    .map(|name| Field::optional(name, Schema::string()));

    Schema::object([Field::required("type", Schema::one_of(SECTION_KINDS))])
        .extend(text)
        .extend([
            Field::optional("image", image_schema()),
            Field::optional("buttons", Schema::array(button_schema())),
            Field::optional("bullets", Schema::array(Schema::string())),
            Field::optional("items", Schema::array(item_schema())),
            Field::optional("fields", Schema::array(contact_field_schema())),
            Field::optional(
                "contact_info",
                Schema::object([
                    Field::optional("address", Schema::string()),
                    Field::optional("phone", Schema::string()),
                    Field::optional("email", Schema::string()),
                ]),
            ),
        ])
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Vertical,
    Horizontal,
    IconEnum,
    Contact,
    Acordeon,
    Footer,
}

impl SectionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::IconEnum => "icon-enum",
            Self::Contact => "contact",
            Self::Acordeon => "acordeon",
            Self::Footer => "footer",
        }
    }

    /// Whether this kind renders the given type-specific attribute.
    ///
    /// Text attributes, `image` and `buttons` are rendered by every kind;
    /// only the list-like attributes are kind-specific.
    pub fn uses(self, field: &str) -> bool {
        match field {
            "bullets" => matches!(self, Self::Vertical | Self::Horizontal),
            "items" => matches!(self, Self::IconEnum | Self::Acordeon),
            "fields" => self == Self::Contact,
            "contact_info" => matches!(self, Self::Contact | Self::Footer),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionButton {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Entry of an `icon-enum` list or an `acordeon` panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactFieldType {
    Text,
    Email,
    Tel,
    Number,
    Textarea,
}

/// Input of a contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ContactFieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(
        rename = "textAlign",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<SectionButton>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SectionItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<ContactField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

impl Section {
    /// Empty section of the given kind.
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            class: None,
            title: None,
            description: None,
            headline: None,
            content: None,
            subtitle: None,
            caption: None,
            footer: None,
            background: None,
            background_image: None,
            text_align: None,
            layout: None,
            image: None,
            buttons: None,
            bullets: None,
            items: None,
            fields: None,
            contact_info: None,
        }
    }

    /// Report attributes this section's kind does not render.
    ///
    /// `path` is the section's own location (`sections[3]`).
    pub fn lint(&self, path: &DocPath) -> Vec<Violation> {
        let present = [
            ("bullets", self.bullets.is_some()),
            ("items", self.items.is_some()),
            ("fields", self.fields.is_some()),
            ("contact_info", self.contact_info.is_some()),
        ];
        let irrelevant = Constraint::Irrelevant {
            kind: self.kind.as_str(),
        };

        let mut found: Vec<Violation> = present
            .into_iter()
            .filter(|(name, set)| *set && !self.kind.uses(name))
            .map(|(name, _)| Violation::new(path.clone().key(name), irrelevant.clone()))
            .collect();

        // question/answer pairs only render inside acordeon panels
        if self.kind != SectionKind::Acordeon {
            for (i, item) in self.items.iter().flatten().enumerate() {
                let item_path = path.clone().key("items").index(i);
                if item.question.is_some() {
                    found.push(Violation::new(item_path.clone().key("question"), irrelevant.clone()));
                }
                if item.answer.is_some() {
                    found.push(Violation::new(item_path.key("answer"), irrelevant.clone()));
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn parse(src: &str) -> (Vec<Violation>, Option<Section>) {
        let value: Value = serde_yaml::from_str(src).unwrap();
        let violations = section_schema().validate(&value);
        let section = violations
            .is_empty()
            .then(|| serde_yaml::from_value(value).unwrap());
        (violations, section)
    }

    #[test]
    fn test_kind_names_round_trip_through_serde() {
        for name in SECTION_KINDS {
            let kind: SectionKind = serde_yaml::from_str(name).unwrap();
            assert_eq!(kind.as_str(), *name);
        }
    }

    #[test]
    fn test_contact_section() {
        let (violations, section) = parse(
            r#"
type: contact
title: Contacta
fields:
  - name: email
    label: Email
    type: email
    required: true
  - name: age
    label: Edad
    type: number
    min: 18
    max: 99
    required: false
contact_info:
  phone: "+34 600 000 000"
"#,
        );
        assert!(violations.is_empty(), "{violations:?}");
        let section = section.unwrap();
        assert_eq!(section.kind, SectionKind::Contact);
        let fields = section.fields.unwrap();
        assert_eq!(fields[0].kind, ContactFieldType::Email);
        assert_eq!(fields[1].min, Some(18.0));
        assert_eq!(
            section.contact_info.unwrap().phone.as_deref(),
            Some("+34 600 000 000")
        );
    }

    #[test]
    fn test_unknown_section_type() {
        let (violations, _) = parse("type: carousel\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path.to_string(), "type");
    }

    #[test]
    fn test_missing_type() {
        let (violations, _) = parse("title: Hola\n");
        assert_eq!(violations[0].path.to_string(), "type");
        assert!(matches!(violations[0].constraint, Constraint::Required { .. }));
    }

    #[test]
    fn test_item_requires_title_and_content() {
        let (violations, _) = parse("type: icon-enum\nitems:\n  - icon: i-heart\n    title: Cuidado\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path.to_string(), "items[0].content");
    }

    #[test]
    fn test_contact_field_required_flag_is_mandatory() {
        let (violations, _) = parse("type: contact\nfields:\n  - name: n\n    label: Nombre\n    type: text\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path.to_string(), "fields[0].required");
    }

    #[test]
    fn test_text_align_is_camel_case_in_yaml() {
        let (_, section) = parse("type: vertical\ntextAlign: center\n");
        assert_eq!(section.unwrap().text_align.as_deref(), Some("center"));
    }

    #[test]
    fn test_lint_flags_foreign_lists() {
        let mut section = Section::new(SectionKind::Vertical);
        section.fields = Some(Vec::new());
        section.bullets = Some(vec!["ok".into()]);

        let path = DocPath::root().key("sections").index(1);
        let found = section.lint(&path);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path.to_string(), "sections[1].fields");
        assert_eq!(found[0].constraint, Constraint::Irrelevant { kind: "vertical" });
    }

    #[test]
    fn test_lint_question_outside_acordeon() {
        let mut section = Section::new(SectionKind::IconEnum);
        section.items = Some(vec![SectionItem {
            title: "t".into(),
            content: "c".into(),
            question: Some("q?".into()),
            ..SectionItem::default()
        }]);
        let found = section.lint(&DocPath::root());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path.to_string(), "items[0].question");

        section.kind = SectionKind::Acordeon;
        assert!(section.lint(&DocPath::root()).is_empty());
    }
}
