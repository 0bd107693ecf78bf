//! Inline markdown for short content fields.
//!
//! Landing copy uses a tiny markdown subset inside YAML strings:
//! `**bold**`, `*italic*` and `[label](url)`. Block constructs are not
//! supported; see [`inline`].

mod inline;

pub use inline::{InlineContent, inline_content, render_inline};
