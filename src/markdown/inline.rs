//! Inline span renderer.
//!
//! Three substitutions run in a fixed order over the whole string:
//!
//! ```text
//! **x**        → <strong class="font-bold text-primary">x</strong>
//! *x*          → <em class="italic">x</em>
//! [label](url) → <a href="url" class="text-primary hover:underline">label</a>
//! ```
//!
//! Matches are non-greedy and are not re-scanned for nested spans. Bold and
//! italic never cross a line terminator (`\n`, `\r`, U+2028, U+2029); link
//! labels and targets may. Text outside a match is passed through untouched.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]*?)\*\*").unwrap());
static RE_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\n\r\x{2028}\x{2029}]*?)\*").unwrap());
static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

const STRONG: &str = r#"<strong class="font-bold text-primary">${1}</strong>"#;
const EMPHASIS: &str = r#"<em class="italic">${1}</em>"#;
const LINK: &str = r#"<a href="${2}" class="text-primary hover:underline">${1}</a>"#;

/// Render inline markdown spans to HTML.
pub fn render_inline(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let html = RE_STRONG.replace_all(text, STRONG);
    let html = RE_EMPHASIS.replace_all(&html, EMPHASIS);
    RE_LINK.replace_all(&html, LINK).into_owned()
}

/// Rendered inline markdown tagged for a generic content renderer.
///
/// Serializes as `{"_type": "markdown", "body": "<html>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineContent {
    #[serde(rename = "_type")]
    pub kind: InlineKind,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineKind {
    Markdown,
}

/// Render `text` and wrap it as [`InlineContent`].
pub fn inline_content(text: &str) -> InlineContent {
    InlineContent {
        kind: InlineKind::Markdown,
        body: render_inline(text),
    }
}
