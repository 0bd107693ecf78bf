//! Content collections and schema validation.
//!
//! # Module Structure
//!
//! ```text
//! content/
//! ├── schema      # Schema combinators + field-path violations
//! ├── shared      # Link, Feature, Image, base title/description
//! ├── section     # Landing sections (type-tagged attribute bag)
//! ├── landing     # `landing` collection (content/landing/*.yml)
//! ├── legacy      # legacy collection (content/*.yml)
//! ├── collection  # Collection membership, routes, file discovery
//! └── error       # ContentError, ContentDiagnostics
//! ```
//!
//! A document is validated against its collection's [`Schema`] first; only
//! a document with no violations is decoded into typed records.

mod collection;
mod error;
mod landing;
mod legacy;
mod schema;
mod section;
mod shared;

pub use collection::{Collection, LANDING_DIR, collect_content_files, route_conflicts};
pub use error::{ContentDiagnostics, ContentError};
pub use landing::{CtaButton, FinalCta, Header, LandingContent, Language, Seo};
pub use legacy::LegacyContent;
pub use schema::{Constraint, DocPath, Field, Schema, Violation};
pub use section::{ContactField, ContactInfo, Section, SectionButton, SectionItem, SectionKind};
pub use shared::{Feature, Image, Link};

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml::Value;

use crate::utils::path::display_relative;

/// A validated document of either collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "collection", content = "data", rename_all = "lowercase")]
pub enum ContentDocument {
    Landing(LandingContent),
    Legacy(LegacyContent),
}

impl ContentDocument {
    pub const fn collection(&self) -> Collection {
        match self {
            Self::Landing(_) => Collection::Landing,
            Self::Legacy(_) => Collection::Legacy,
        }
    }
}

/// Validation switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions {
    /// Treat section attributes unused by the section's type as errors.
    pub strict_sections: bool,
}

/// A content file that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedDocument {
    pub source: PathBuf,
    /// Site route the document renders at.
    pub route: String,
    pub document: ContentDocument,
    /// Non-fatal findings (section lint in permissive mode).
    pub warnings: Vec<Violation>,
}

/// Validate a parsed YAML value against `collection` and decode it.
///
/// An empty document (`null`) is treated as an empty mapping.
pub fn validate_value(
    value: Value,
    collection: Collection,
    options: ValidateOptions,
    diag: &mut ContentDiagnostics,
) -> Option<ContentDocument> {
    let value = if value.is_null() {
        Value::Mapping(Default::default())
    } else {
        value
    };

    diag.errors.extend(collection.schema().validate(&value));
    if diag.has_errors() {
        return None;
    }

    let document = match collection {
        Collection::Landing => decode(value, diag).map(ContentDocument::Landing)?,
        Collection::Legacy => decode(value, diag).map(ContentDocument::Legacy)?,
    };

    if let ContentDocument::Landing(page) = &document {
        let lint = page.lint_sections();
        if options.strict_sections {
            diag.errors.extend(lint);
            if diag.has_errors() {
                return None;
            }
        } else {
            diag.warnings.extend(lint);
        }
    }
    Some(document)
}

/// Decode a schema-valid value. A failure here means schema and record
/// disagree, and is reported at the document root.
fn decode<T: serde::de::DeserializeOwned>(value: Value, diag: &mut ContentDiagnostics) -> Option<T> {
    match serde_yaml::from_value(value) {
        Ok(record) => Some(record),
        Err(err) => {
            diag.errors
                .push(Violation::new(DocPath::root(), Constraint::Decode(err.to_string())));
            None
        }
    }
}

/// Read, parse and validate one content file.
///
/// `root` is the content directory; it decides the collection and the
/// display path used in diagnostics.
pub fn load_document(
    path: &Path,
    root: &Path,
    options: ValidateOptions,
) -> Result<ValidatedDocument, ContentError> {
    let collection = Collection::classify(path, root)
        .ok_or_else(|| ContentError::Unclassified(path.to_path_buf()))?;

    let source = fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;
    let value: Value = if source.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(&source).map_err(|e| ContentError::Yaml(path.to_path_buf(), e))?
    };

    let mut diag = ContentDiagnostics::new(display_relative(path, root));
    let Some(document) = validate_value(value, collection, options, &mut diag) else {
        return Err(ContentError::Invalid(diag));
    };

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ValidatedDocument {
        source: path.to_path_buf(),
        route: collection.route_for(&stem),
        document,
        warnings: diag.warnings,
    })
}
