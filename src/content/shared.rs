//! Primitive records shared by both collections: base copy, links,
//! features and images.

use serde::{Deserialize, Serialize};

use super::schema::{Field, Schema};

pub const TARGETS: &[&str] = &["_blank", "_self"];
pub const SIZES: &[&str] = &["xs", "sm", "md", "lg", "xl"];
pub const COLORS: &[&str] = &[
    "primary",
    "secondary",
    "neutral",
    "error",
    "warning",
    "success",
    "info",
];
pub const VARIANTS: &[&str] = &["solid", "outline", "subtle", "soft", "ghost", "link"];

// ============================================================================
// Schemas
// ============================================================================

/// `title` + `description`, both non-empty.
pub fn base_schema() -> Schema {
    Schema::object([
        Field::required("title", Schema::non_empty()),
        Field::required("description", Schema::non_empty()),
    ])
}

pub fn link_schema() -> Schema {
    Schema::object([
        Field::required("label", Schema::non_empty()),
        Field::required("to", Schema::non_empty()),
        Field::optional("icon", Schema::string()),
        Field::required("size", Schema::one_of(SIZES)),
        Field::optional("trailing", Schema::Bool),
        Field::required("target", Schema::one_of(TARGETS)),
        Field::required("color", Schema::one_of(COLORS)),
        Field::required("variant", Schema::one_of(VARIANTS)),
    ])
}

pub fn feature_schema() -> Schema {
    base_schema().extend([
        Field::required("icon", Schema::string()),
        Field::required(
            "ui",
            Schema::object([Field::optional("leading", Schema::string())]),
        ),
    ])
}

pub fn image_schema() -> Schema {
    Schema::object([
        Field::optional("src", Schema::string()),
        Field::optional("desktop", Schema::string()),
        Field::optional("mobile", Schema::string()),
        Field::optional("alt", Schema::string()),
    ])
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfFrame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Primary,
    Secondary,
    Neutral,
    Error,
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Solid,
    Outline,
    Subtle,
    Soft,
    Ghost,
    Link,
}

/// A call-to-action link with presentation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing: Option<bool>,
    pub target: Target,
    pub color: Color,
    pub variant: Variant,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureUi {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading: Option<String>,
}

/// Icon + title + description tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub ui: FeatureUi,
}

/// Image sources; any subset may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}
