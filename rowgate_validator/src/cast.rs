//! Type casting.
//!
//! Converts a raw cell value into one of the rule types, or reports that
//! the value cannot be represented in it. Null/absent values never reach
//! the caster; the field validator intercepts them first.

use crate::CastError;
use chrono::{NaiveDate, NaiveDateTime};
use rowgate_core::{CellValue, DATE_FORMAT, FieldType, TIMESTAMP_FORMAT};

/// Text tokens accepted as boolean true, case-insensitively.
const TRUE_TOKENS: [&str; 5] = ["true", "1", "t", "yes", "y"];

/// Text tokens accepted as boolean false, case-insensitively.
const FALSE_TOKENS: [&str; 5] = ["false", "0", "f", "no", "n"];

/// Casts a value to the given rule type.
///
/// Every tag of `FieldType` has a defined behavior; `Untyped` returns
/// the value unchanged.
pub fn cast(value: &CellValue, field_type: FieldType) -> Result<CellValue, CastError> {
    match field_type {
        FieldType::Untyped => Ok(value.clone()),
        FieldType::Text => Ok(CellValue::Text(
            value.canonical_text().trim().to_string(),
        )),
        FieldType::Integer => cast_int(value),
        FieldType::Boolean => cast_bool(value),
        FieldType::Date => cast_date(value),
        FieldType::Timestamp => cast_timestamp(value),
    }
}

/// The value must denote a whole number. Booleans are explicitly
/// rejected so `true` never silently becomes `1`.
fn cast_int(value: &CellValue) -> Result<CellValue, CastError> {
    match value {
        CellValue::Int(i) => Ok(CellValue::Int(*i)),
        CellValue::Bool(_) => Err(CastError::incompatible("int", value.type_name())),
        CellValue::Float(f) => {
            // `i64::MAX as f64` rounds up to 2^63, so the upper bound is
            // exclusive; every whole float below it fits exactly.
            let in_range = *f >= i64::MIN as f64 && *f < i64::MAX as f64;
            if f.is_finite() && f.fract() == 0.0 && in_range {
                Ok(CellValue::Int(*f as i64))
            } else {
                Err(CastError::unparseable("int", f.to_string()))
            }
        }
        CellValue::Text(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .map(CellValue::Int)
                .map_err(|_| CastError::unparseable("int", trimmed))
        }
        _ => Err(CastError::incompatible("int", value.type_name())),
    }
}

/// A boolean-shaped value passes through; otherwise the trimmed,
/// lowercased text form must be one of the accepted tokens.
fn cast_bool(value: &CellValue) -> Result<CellValue, CastError> {
    if let CellValue::Bool(b) = value {
        return Ok(CellValue::Bool(*b));
    }

    let token = value.canonical_text().trim().to_lowercase();
    if TRUE_TOKENS.contains(&token.as_str()) {
        Ok(CellValue::Bool(true))
    } else if FALSE_TOKENS.contains(&token.as_str()) {
        Ok(CellValue::Bool(false))
    } else {
        Err(CastError::unparseable("bool", token))
    }
}

/// A date-shaped value passes through and a timestamp truncates to its
/// date; otherwise the first 10 characters of the text form must parse
/// as `YYYY-MM-DD`.
fn cast_date(value: &CellValue) -> Result<CellValue, CastError> {
    match value {
        CellValue::Date(d) => Ok(CellValue::Date(*d)),
        CellValue::Timestamp(ts) => Ok(CellValue::Date(ts.date())),
        _ => {
            let head: String = value.canonical_text().chars().take(10).collect();
            NaiveDate::parse_from_str(&head, DATE_FORMAT)
                .map(CellValue::Date)
                .map_err(|_| CastError::unparseable("date", head))
        }
    }
}

/// A timestamp-shaped value passes through; otherwise the first 19
/// characters of the text form must parse as `YYYY-MM-DD HH:MM:SS`.
/// Trailing offsets in the text are dropped with the rest of the tail.
fn cast_timestamp(value: &CellValue) -> Result<CellValue, CastError> {
    match value {
        CellValue::Timestamp(ts) => Ok(CellValue::Timestamp(*ts)),
        _ => {
            let head: String = value.canonical_text().chars().take(19).collect();
            NaiveDateTime::parse_from_str(&head, TIMESTAMP_FORMAT)
                .map(CellValue::Timestamp)
                .map_err(|_| CastError::unparseable("datetime", head))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_untyped_passes_through() {
        let value = CellValue::Float(3.5);
        assert_eq!(cast(&value, FieldType::Untyped).unwrap(), value);
    }

    #[test]
    fn test_text_renders_and_trims() {
        assert_eq!(
            cast(&CellValue::Text("  hello ".into()), FieldType::Text).unwrap(),
            CellValue::Text("hello".into())
        );
        assert_eq!(
            cast(&CellValue::Int(42), FieldType::Text).unwrap(),
            CellValue::Text("42".into())
        );
    }

    #[test]
    fn test_int_from_int_and_text() {
        assert_eq!(
            cast(&CellValue::Int(7), FieldType::Integer).unwrap(),
            CellValue::Int(7)
        );
        assert_eq!(
            cast(&CellValue::Text(" -12 ".into()), FieldType::Integer).unwrap(),
            CellValue::Int(-12)
        );
    }

    #[test]
    fn test_int_rejects_bool() {
        let err = cast(&CellValue::Bool(true), FieldType::Integer).unwrap_err();
        assert!(matches!(err, CastError::Incompatible { expected: "int", .. }));
    }

    #[test]
    fn test_int_from_whole_float_only() {
        assert_eq!(
            cast(&CellValue::Float(4.0), FieldType::Integer).unwrap(),
            CellValue::Int(4)
        );
        assert!(cast(&CellValue::Float(4.5), FieldType::Integer).is_err());
        assert!(cast(&CellValue::Float(f64::NAN), FieldType::Integer).is_err());
    }

    #[test]
    fn test_int_from_float_out_of_range() {
        // a whole float beyond i64 must fail, not saturate
        assert!(cast(&CellValue::Float(1e19), FieldType::Integer).is_err());
        assert!(cast(&CellValue::Float(-1e19), FieldType::Integer).is_err());
        assert!(cast(&CellValue::Float(i64::MAX as f64), FieldType::Integer).is_err());
        assert_eq!(
            cast(&CellValue::Float(i64::MIN as f64), FieldType::Integer).unwrap(),
            CellValue::Int(i64::MIN)
        );
    }

    #[test]
    fn test_int_from_garbage_text() {
        assert!(cast(&CellValue::Text("abc".into()), FieldType::Integer).is_err());
    }

    #[test]
    fn test_bool_passes_through() {
        assert_eq!(
            cast(&CellValue::Bool(false), FieldType::Boolean).unwrap(),
            CellValue::Bool(false)
        );
    }

    #[test]
    fn test_bool_tokens() {
        for token in ["true", "1", "t", "yes", "y", " YES ", "True"] {
            assert_eq!(
                cast(&CellValue::Text(token.into()), FieldType::Boolean).unwrap(),
                CellValue::Bool(true),
                "token {token:?} should cast to true"
            );
        }
        for token in ["false", "0", "f", "no", "n", "NO"] {
            assert_eq!(
                cast(&CellValue::Text(token.into()), FieldType::Boolean).unwrap(),
                CellValue::Bool(false),
                "token {token:?} should cast to false"
            );
        }
        assert!(cast(&CellValue::Text("si".into()), FieldType::Boolean).is_err());
    }

    #[test]
    fn test_bool_from_int_token() {
        // canonical text of Int(1) is "1", which is a true token
        assert_eq!(
            cast(&CellValue::Int(1), FieldType::Boolean).unwrap(),
            CellValue::Bool(true)
        );
        assert!(cast(&CellValue::Int(2), FieldType::Boolean).is_err());
    }

    #[test]
    fn test_date_from_text() {
        assert_eq!(
            cast(&CellValue::Text("2024-01-05".into()), FieldType::Date).unwrap(),
            CellValue::Date(date(2024, 1, 5))
        );
    }

    #[test]
    fn test_date_ignores_text_tail() {
        // only the first 10 characters are considered
        assert_eq!(
            cast(
                &CellValue::Text("2024-01-05T10:30:00Z".into()),
                FieldType::Date
            )
            .unwrap(),
            CellValue::Date(date(2024, 1, 5))
        );
    }

    #[test]
    fn test_date_from_timestamp_truncates() {
        let ts = date(2024, 1, 5).and_hms_opt(10, 30, 0).unwrap();
        assert_eq!(
            cast(&CellValue::Timestamp(ts), FieldType::Date).unwrap(),
            CellValue::Date(date(2024, 1, 5))
        );
    }

    #[test]
    fn test_date_invalid() {
        assert!(cast(&CellValue::Text("05/01/2024".into()), FieldType::Date).is_err());
        assert!(cast(&CellValue::Text("2024-13-40".into()), FieldType::Date).is_err());
    }

    #[test]
    fn test_timestamp_from_text() {
        let expected = date(2024, 1, 5).and_hms_opt(10, 30, 0).unwrap();
        assert_eq!(
            cast(
                &CellValue::Text("2024-01-05 10:30:00".into()),
                FieldType::Timestamp
            )
            .unwrap(),
            CellValue::Timestamp(expected)
        );
    }

    #[test]
    fn test_timestamp_drops_offset_tail() {
        let expected = date(2024, 1, 5).and_hms_opt(10, 30, 0).unwrap();
        assert_eq!(
            cast(
                &CellValue::Text("2024-01-05 10:30:00+02:00".into()),
                FieldType::Timestamp
            )
            .unwrap(),
            CellValue::Timestamp(expected)
        );
    }

    #[test]
    fn test_timestamp_rejects_bare_date() {
        // a 10-character date has no time part to parse
        assert!(cast(&CellValue::Text("2024-01-05".into()), FieldType::Timestamp).is_err());
        assert!(cast(&CellValue::Date(date(2024, 1, 5)), FieldType::Timestamp).is_err());
    }
}
