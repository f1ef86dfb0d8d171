//! Row validation.
//!
//! Applies the field validator to every ruled field of one record and
//! applies the discard policy. Fields without a rule pass through
//! untouched.

use crate::validate_field;
use rowgate_core::{CellValue, FieldVerdict, Record, RowOutcome};
use rowgate_rules::RuleSet;

/// Validates one record against the rule set.
///
/// The outgoing record is a copy seeded from the input and updated
/// verdict by verdict; the input is never mutated. The first rejection
/// (which only a required field can produce) discards the row
/// immediately; remaining fields are not evaluated and no partial
/// record escapes.
///
/// A field named in the rules but absent from the record is validated
/// as "no value", exactly like an explicitly empty cell.
pub fn validate_row(record: &Record, rules: &RuleSet) -> RowOutcome {
    let mut out = record.clone();

    for (name, rule) in rules.iter() {
        match validate_field(record.get(name), rule) {
            FieldVerdict::Rejected => return RowOutcome::Discarded,
            FieldVerdict::Accepted(value) => {
                out.insert(name.clone(), value);
            }
            FieldVerdict::AcceptedEmpty => {
                out.insert(name.clone(), CellValue::Null);
            }
        }
    }

    RowOutcome::Kept(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rowgate_core::{FieldRuleBuilder, FieldType, RuleDocumentBuilder};

    fn rules_title_year() -> RuleSet {
        RuleSet::compile(
            RuleDocumentBuilder::new()
                .field(
                    "title",
                    FieldRuleBuilder::new()
                        .required(true)
                        .field_type(FieldType::Text)
                        .build(),
                )
                .field(
                    "year",
                    FieldRuleBuilder::new().field_type(FieldType::Integer).build(),
                )
                .build(),
        )
        .unwrap()
    }

    #[test]
    fn test_required_failure_discards() {
        let rules = rules_title_year();
        let mut record = Record::new();
        record.insert("title".to_string(), CellValue::Text("".into()));
        record.insert("year".to_string(), CellValue::Text("2024".into()));

        assert_eq!(validate_row(&record, &rules), RowOutcome::Discarded);
    }

    #[test]
    fn test_optional_failure_nulls_field() {
        let rules = rules_title_year();
        let mut record = Record::new();
        record.insert("title".to_string(), CellValue::Text("Decreto 12".into()));
        record.insert("year".to_string(), CellValue::Text("abc".into()));

        let RowOutcome::Kept(out) = validate_row(&record, &rules) else {
            panic!("row should be kept");
        };
        assert_eq!(out.get("year"), Some(&CellValue::Null));
        assert_eq!(out.get("title"), Some(&CellValue::Text("Decreto 12".into())));
    }

    #[test]
    fn test_ruled_but_absent_field_is_nulled_into_output() {
        let rules = rules_title_year();
        let mut record = Record::new();
        record.insert("title".to_string(), CellValue::Text("Decreto 12".into()));
        // no "year" key at all

        let RowOutcome::Kept(out) = validate_row(&record, &rules) else {
            panic!("row should be kept");
        };
        assert_eq!(out.get("year"), Some(&CellValue::Null));
    }

    #[test]
    fn test_required_absent_field_discards() {
        let rules = rules_title_year();
        let mut record = Record::new();
        record.insert("year".to_string(), CellValue::Int(2024));

        assert_eq!(validate_row(&record, &rules), RowOutcome::Discarded);
    }

    #[test]
    fn test_unruled_fields_pass_through() {
        let rules = rules_title_year();
        let mut record = Record::new();
        record.insert("title".to_string(), CellValue::Text("Decreto 12".into()));
        record.insert("entity".to_string(), CellValue::Text("  raw, untouched ".into()));

        let RowOutcome::Kept(out) = validate_row(&record, &rules) else {
            panic!("row should be kept");
        };
        // unruled field keeps its raw value, no trimming, no cast
        assert_eq!(
            out.get("entity"),
            Some(&CellValue::Text("  raw, untouched ".into()))
        );
    }

    #[test]
    fn test_kept_record_carries_cast_values() {
        let rules = rules_title_year();
        let mut record = Record::new();
        record.insert("title".to_string(), CellValue::Text(" padded ".into()));
        record.insert("year".to_string(), CellValue::Text("2024".into()));

        let RowOutcome::Kept(out) = validate_row(&record, &rules) else {
            panic!("row should be kept");
        };
        assert_eq!(out.get("title"), Some(&CellValue::Text("padded".into())));
        assert_eq!(out.get("year"), Some(&CellValue::Int(2024)));
    }

    #[test]
    fn test_empty_rule_set_keeps_row_unchanged() {
        let rules = RuleSet::empty();
        let mut record = Record::new();
        record.insert("anything".to_string(), CellValue::Bool(true));

        let RowOutcome::Kept(out) = validate_row(&record, &rules) else {
            panic!("row should be kept");
        };
        assert_eq!(out, record);
    }
}
