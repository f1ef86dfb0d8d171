//! Builder pattern for rule documents.
//!
//! Rule documents usually come from YAML or TOML files; these builders
//! exist for constructing them in code, mostly in tests and tooling.

use crate::{FieldRule, FieldType, RuleDocument};

/// Builder for creating a `FieldRule`.
///
/// # Example
///
/// ```rust
/// use rowgate_core::{FieldRuleBuilder, FieldType};
///
/// let rule = FieldRuleBuilder::new()
///     .required(true)
///     .field_type(FieldType::Date)
///     .pattern(r"^\d{4}-\d{2}-\d{2}$")
///     .build();
/// assert!(rule.required);
/// ```
#[derive(Debug, Default)]
pub struct FieldRuleBuilder {
    required: bool,
    field_type: FieldType,
    pattern: Option<String>,
}

impl FieldRuleBuilder {
    /// Creates a new field rule builder with the document defaults
    /// (optional, untyped, no pattern).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether a failure of this field discards the row.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the expected semantic type.
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    /// Sets the pattern constraint.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Builds the field rule.
    pub fn build(self) -> FieldRule {
        FieldRule {
            required: self.required,
            field_type: self.field_type,
            pattern: self.pattern,
        }
    }
}

/// Builder for creating a `RuleDocument`.
///
/// # Example
///
/// ```rust
/// use rowgate_core::{FieldRuleBuilder, FieldType, RuleDocumentBuilder};
///
/// let doc = RuleDocumentBuilder::new()
///     .field(
///         "title",
///         FieldRuleBuilder::new()
///             .required(true)
///             .field_type(FieldType::Text)
///             .build(),
///     )
///     .build();
/// assert!(doc.fields.contains_key("title"));
/// ```
#[derive(Debug, Default)]
pub struct RuleDocumentBuilder {
    doc: RuleDocument,
}

impl RuleDocumentBuilder {
    /// Creates a new rule document builder with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule for a named field. A repeated name replaces the
    /// earlier rule, matching mapping semantics in the document formats.
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.doc.fields.insert(name.into(), rule);
        self
    }

    /// Builds the rule document.
    pub fn build(self) -> RuleDocument {
        self.doc
    }
}
