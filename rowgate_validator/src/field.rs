//! Field validation.
//!
//! Combines a field's raw value, its compiled rule, and the caster into
//! a single verdict. The check order is significant: empty handling,
//! then cast, then pattern. A rule regex always sees the canonical text
//! of the cast value, never the raw input.

use crate::cast;
use rowgate_core::{CellValue, FieldVerdict};
use rowgate_rules::CompiledRule;

/// Validates one field value against its rule.
///
/// `value` is `None` when the field is absent from the record; an absent
/// field, an explicit `Null`, and empty text are all treated as "no
/// value" and take the same required/optional branch.
pub fn validate_field(value: Option<&CellValue>, rule: &CompiledRule) -> FieldVerdict {
    let value = match value {
        None | Some(CellValue::Null) => None,
        Some(CellValue::Text(s)) if s.is_empty() => None,
        Some(v) => Some(v),
    };

    let Some(value) = value else {
        return fail_or_null(rule);
    };

    let cast_value = match cast(value, rule.field_type) {
        Ok(v) => v,
        Err(_) => return fail_or_null(rule),
    };

    if let Some(pattern) = &rule.pattern
        && !pattern.is_match(&cast_value.canonical_text())
    {
        return fail_or_null(rule);
    }

    FieldVerdict::Accepted(cast_value)
}

/// The discard/null policy: a failed required field rejects the row, a
/// failed optional field is nulled and the row survives.
fn fail_or_null(rule: &CompiledRule) -> FieldVerdict {
    if rule.required {
        FieldVerdict::Rejected
    } else {
        FieldVerdict::AcceptedEmpty
    }
}
