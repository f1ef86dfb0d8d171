//! Declarative rule types.
//!
//! This module contains the types a rule document deserializes into: one
//! `FieldRule` per ruled field, collected under a top-level `fields`
//! mapping. Fields of the input that carry no rule are never examined.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The semantic type a ruled field must cast to.
///
/// A closed set: every tag has a defined cast behavior and there is no
/// open-ended fallthrough. Unrecognized document strings map to `Untyped`,
/// which accepts any value unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    /// Canonical text, trimmed (`string`)
    Text,
    /// Whole number; booleans are explicitly not integers (`int`)
    Integer,
    /// Boolean, also accepted from common true/false tokens (`bool`)
    Boolean,
    /// Calendar date, `YYYY-MM-DD` (`date`)
    Date,
    /// Date and time, `YYYY-MM-DD HH:MM:SS` (`datetime`)
    Timestamp,
    /// No cast: the value passes through unchanged
    #[default]
    Untyped,
}

impl FieldType {
    /// Resolves a document type string, leniently.
    ///
    /// Case and surrounding whitespace are ignored; anything unrecognized
    /// resolves to `Untyped`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "string" => FieldType::Text,
            "int" => FieldType::Integer,
            "bool" => FieldType::Boolean,
            "date" => FieldType::Date,
            "datetime" => FieldType::Timestamp,
            _ => FieldType::Untyped,
        }
    }

    /// The document spelling of this type.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Text => "string",
            FieldType::Integer => "int",
            FieldType::Boolean => "bool",
            FieldType::Date => "date",
            FieldType::Timestamp => "datetime",
            FieldType::Untyped => "untyped",
        }
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(FieldType::from_name(&name))
    }
}

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// The declared contract for one named field.
///
/// Document keys: `required` (default false), `type` (default untyped),
/// `regex` (default none). A type/pattern pair that no value can satisfy
/// is legal; such a rule simply rejects every value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Whether a failure of this field discards the whole row
    #[serde(default)]
    pub required: bool,

    /// Expected semantic type
    #[serde(rename = "type", default)]
    pub field_type: FieldType,

    /// Optional regex the canonical text of the cast value must match
    #[serde(rename = "regex", default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Default for FieldRule {
    fn default() -> Self {
        Self {
            required: false,
            field_type: FieldType::Untyped,
            pattern: None,
        }
    }
}

/// A parsed rule document: field name → rule.
///
/// This is the document shape; the loader compiles it into a `RuleSet`
/// with patterns resolved before any row is processed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleDocument {
    /// Rules keyed by field name
    pub fields: HashMap<String, FieldRule>,
}
