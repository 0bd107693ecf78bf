//! Declarative document schemas over `serde_yaml::Value`.
//!
//! A [`Schema`] describes the accepted shape of a YAML document: strings
//! (optionally non-empty), closed enums, booleans, numbers, arrays and
//! objects with required or optional fields. Validation walks the document
//! once and collects every [`Violation`] with the exact field path, e.g.
//! `sections[2].items[0].title`.
//!
//! Rules:
//! - optional fields may be absent; a present `null` is a type mismatch
//! - required fields must be present; a missing one reports `Required`
//! - keys not named by an object schema are ignored
//!
//! Typed records are deserialized only after a document validates, so serde
//! never sees a shape the schema rejected.

use std::fmt;

use serde_yaml::Value;

// ============================================================================
// Schema
// ============================================================================

/// Accepted shape of a YAML value.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Any string; `non_empty` requires at least one character.
    String { non_empty: bool },
    /// A string from a closed set.
    Enum(&'static [&'static str]),
    Bool,
    Number,
    Array(Box<Schema>),
    Object(Vec<Field>),
}

/// A named object member.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub schema: Schema,
    pub required: bool,
}

impl Field {
    pub fn required(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            required: true,
        }
    }

    pub fn optional(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            required: false,
        }
    }
}

impl Schema {
    pub const fn string() -> Self {
        Self::String { non_empty: false }
    }

    pub const fn non_empty() -> Self {
        Self::String { non_empty: true }
    }

    pub const fn one_of(values: &'static [&'static str]) -> Self {
        Self::Enum(values)
    }

    pub fn array(item: Schema) -> Self {
        Self::Array(Box::new(item))
    }

    pub fn object(fields: impl IntoIterator<Item = Field>) -> Self {
        Self::Object(fields.into_iter().collect())
    }

    /// Add fields to an object schema, replacing members with the same name.
    ///
    /// Calling this on a non-object schema is a programming error and
    /// returns the schema unchanged.
    pub fn extend(self, extra: impl IntoIterator<Item = Field>) -> Self {
        match self {
            Self::Object(mut fields) => {
                for field in extra {
                    match fields.iter_mut().find(|f| f.name == field.name) {
                        Some(existing) => *existing = field,
                        None => fields.push(field),
                    }
                }
                Self::Object(fields)
            }
            other => other,
        }
    }

    /// Short name of the expected type, used in messages.
    fn expected(&self) -> &'static str {
        match self {
            Self::String { .. } | Self::Enum(_) => "string",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Validate `value`, returning all violations (empty when valid).
    pub fn validate(&self, value: &Value) -> Vec<Violation> {
        let mut ctx = Context::default();
        self.check(value, &mut ctx);
        ctx.violations
    }

    fn check(&self, value: &Value, ctx: &mut Context) {
        let value = untag(value);
        match (self, value) {
            (Self::String { non_empty }, Value::String(s)) => {
                if *non_empty && s.is_empty() {
                    ctx.report(Constraint::NonEmpty);
                }
            }
            (Self::Enum(allowed), Value::String(s)) => {
                if !allowed.contains(&s.as_str()) {
                    ctx.report(Constraint::OneOf {
                        allowed: *allowed,
                        found: s.clone(),
                    });
                }
            }
            (Self::Bool, Value::Bool(_)) | (Self::Number, Value::Number(_)) => {}
            (Self::Array(item), Value::Sequence(items)) => {
                for (i, element) in items.iter().enumerate() {
                    ctx.path.push(Segment::Index(i));
                    item.check(element, ctx);
                    ctx.path.pop();
                }
            }
            (Self::Object(fields), Value::Mapping(map)) => {
                for field in fields {
                    ctx.path.push(Segment::Key(field.name));
                    match map.get(field.name) {
                        Some(member) => field.schema.check(member, ctx),
                        None if field.required => ctx.report(Constraint::Required {
                            expected: field.schema.expected(),
                        }),
                        None => {}
                    }
                    ctx.path.pop();
                }
            }
            (schema, other) => ctx.report(Constraint::Type {
                expected: schema.expected(),
                found: kind_of(other),
            }),
        }
    }
}

/// Look through YAML tags (`!foo value`) to the tagged value.
fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "array",
        Value::Mapping(_) => "object",
        Value::Tagged(_) => "tagged value",
    }
}

// ============================================================================
// Field paths
// ============================================================================

/// One step into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Key(&'static str),
    Index(usize),
}

/// Location of a value inside a document, e.g. `sections[0].buttons[1].label`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocPath(Vec<Segment>);

impl DocPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: &'static str) -> Self {
        self.0.push(Segment::Key(key));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.0.push(Segment::Index(index));
        self
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(document)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// Violations
// ============================================================================

/// The rule a value broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    Required { expected: &'static str },
    NonEmpty,
    OneOf {
        allowed: &'static [&'static str],
        found: String,
    },
    Type {
        expected: &'static str,
        found: &'static str,
    },
    /// Field present on a section type that does not use it.
    Irrelevant { kind: &'static str },
    /// Schema-valid value the typed record could not decode.
    Decode(String),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { expected } => write!(f, "required {expected} is missing"),
            Self::NonEmpty => f.write_str("must be a non-empty string"),
            Self::OneOf { allowed, found } => {
                let list = allowed
                    .iter()
                    .map(|v| format!("`{v}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "must be one of {list} (found `{found}`)")
            }
            Self::Type { expected, found } => write!(f, "expected {expected}, found {found}"),
            Self::Irrelevant { kind } => write!(f, "not used by `{kind}` sections"),
            Self::Decode(message) => write!(f, "could not decode: {message}"),
        }
    }
}

/// A single schema violation at a document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: DocPath,
    pub constraint: Constraint,
}

impl Violation {
    pub fn new(path: DocPath, constraint: Constraint) -> Self {
        Self { path, constraint }
    }

    /// Fix hint for common authoring mistakes.
    pub fn hint(&self) -> Option<&'static str> {
        match &self.constraint {
            Constraint::Type {
                expected: "string",
                found: "number" | "boolean",
            } => Some("quote the value so YAML reads it as a string"),
            Constraint::NonEmpty
            | Constraint::Type {
                found: "null", ..
            } => Some("remove the field or give it a value"),
            _ => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.constraint)
    }
}

#[derive(Default)]
struct Context {
    path: DocPath,
    violations: Vec<Violation>,
}

impl Context {
    fn report(&mut self, constraint: Constraint) {
        self.violations
            .push(Violation::new(self.path.clone(), constraint));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    fn person() -> Schema {
        Schema::object([
            Field::required("name", Schema::non_empty()),
            Field::optional("role", Schema::one_of(&["admin", "user"])),
            Field::optional("tags", Schema::array(Schema::non_empty())),
            Field::optional("active", Schema::Bool),
            Field::optional("age", Schema::Number),
        ])
    }

    #[test]
    fn test_valid_document() {
        let doc = yaml("name: Ana\nrole: admin\ntags: [a, b]\nactive: true\nage: 31\n");
        assert!(person().validate(&doc).is_empty());
    }

    #[test]
    fn test_absent_optional_fields() {
        assert!(person().validate(&yaml("name: Ana\n")).is_empty());
    }

    #[test]
    fn test_null_fields_rejected() {
        let violations = person().validate(&yaml("name: ~\nrole:\ntags: null\n"));
        let found: Vec<_> = violations
            .iter()
            .map(|v| (v.path.to_string(), v.constraint.clone()))
            .collect();
        assert_eq!(
            found,
            [
                (
                    "name".to_string(),
                    Constraint::Type {
                        expected: "string",
                        found: "null"
                    }
                ),
                (
                    "role".to_string(),
                    Constraint::Type {
                        expected: "string",
                        found: "null"
                    }
                ),
                (
                    "tags".to_string(),
                    Constraint::Type {
                        expected: "array",
                        found: "null"
                    }
                ),
            ]
        );
        assert_eq!(
            violations[1].hint(),
            Some("remove the field or give it a value")
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert!(person().validate(&yaml("name: Ana\nextra: 1\n")).is_empty());
    }

    #[test]
    fn test_missing_required() {
        let violations = person().validate(&yaml("role: user\n"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path.to_string(), "name");
        assert_eq!(
            violations[0].constraint,
            Constraint::Required { expected: "string" }
        );
    }

    #[test]
    fn test_empty_string_rejected() {
        let violations = person().validate(&yaml("name: ''\n"));
        assert_eq!(violations[0].constraint, Constraint::NonEmpty);
        assert!(violations[0].hint().is_some());
    }

    #[test]
    fn test_enum_violation_lists_allowed_values() {
        let violations = person().validate(&yaml("name: Ana\nrole: root\n"));
        assert_eq!(violations.len(), 1);
        let message = violations[0].to_string();
        assert_eq!(
            message,
            "role: must be one of `admin`, `user` (found `root`)"
        );
    }

    #[test]
    fn test_array_element_path() {
        let violations = person().validate(&yaml("name: Ana\ntags: [ok, '', fine]\n"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path.to_string(), "tags[1]");
    }

    #[test]
    fn test_type_mismatch_and_hint() {
        let violations = person().validate(&yaml("name: 42\n"));
        assert_eq!(
            violations[0].constraint,
            Constraint::Type {
                expected: "string",
                found: "number"
            }
        );
        assert_eq!(
            violations[0].hint(),
            Some("quote the value so YAML reads it as a string")
        );
    }

    #[test]
    fn test_collects_all_violations() {
        let violations = person().validate(&yaml("role: root\nactive: yes\nage: old\n"));
        let paths: Vec<_> = violations.iter().map(|v| v.path.to_string()).collect();
        assert_eq!(paths, ["name", "role", "active", "age"]);
    }

    #[test]
    fn test_root_type_mismatch() {
        let violations = person().validate(&yaml("- a\n- b\n"));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].path.is_root());
        assert_eq!(violations[0].to_string(), "(document): expected object, found array");
    }

    #[test]
    fn test_extend_overrides_and_appends() {
        let schema = person().extend([
            Field::required("role", Schema::one_of(&["owner"])),
            Field::required("email", Schema::non_empty()),
        ]);
        let violations = schema.validate(&yaml("name: Ana\nrole: owner\n"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path.to_string(), "email");
    }

    #[test]
    fn test_nested_path_display() {
        let path = DocPath::root()
            .key("sections")
            .index(2)
            .key("items")
            .index(0)
            .key("title");
        assert_eq!(path.to_string(), "sections[2].items[0].title");
    }
}
