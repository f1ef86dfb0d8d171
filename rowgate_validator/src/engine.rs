//! Batch validation.
//!
//! Drives the row validator across a whole table and assembles the
//! result: kept rows in input order plus the discard accounting.

use crate::validate_row;
use rowgate_core::{BatchResult, RowOutcome, Table};
use rowgate_rules::RuleSet;
use tracing::{debug, info};

/// Batch validation engine.
///
/// Stateless; the rule set is passed per call and never cached.
///
/// # Example
///
/// ```rust
/// use rowgate_core::Table;
/// use rowgate_rules::RuleSet;
/// use rowgate_validator::BatchValidator;
///
/// let result = BatchValidator::new().validate(&Table::empty(), &RuleSet::empty());
/// assert_eq!(result.input_rows, 0);
/// assert_eq!(result.discarded_rows, 0);
/// ```
#[derive(Debug, Default)]
pub struct BatchValidator;

impl BatchValidator {
    /// Creates a new batch validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates every record of a table against the rule set.
    ///
    /// Kept rows preserve input order. Always:
    /// `result.kept_rows() + result.discarded_rows == result.input_rows`.
    pub fn validate(&self, table: &Table, rules: &RuleSet) -> BatchResult {
        let input_rows = table.len();

        if table.is_empty() {
            return BatchResult {
                rows: Table::empty(),
                input_rows: 0,
                discarded_rows: 0,
            };
        }

        info!(rows = input_rows, fields = rules.len(), "starting batch validation");

        let mut kept = Vec::with_capacity(input_rows);
        let mut discarded_rows = 0usize;

        for (index, record) in table.rows().enumerate() {
            match validate_row(record, rules) {
                RowOutcome::Kept(row) => kept.push(row),
                RowOutcome::Discarded => {
                    debug!(row = index, "row discarded by required-field rule");
                    discarded_rows += 1;
                }
            }
        }

        info!(
            kept = kept.len(),
            discarded = discarded_rows,
            "batch validation finished"
        );

        BatchResult {
            rows: Table::from_rows(kept),
            input_rows,
            discarded_rows,
        }
    }
}

/// Validates a table in one call, without constructing the engine.
pub fn validate_batch(table: &Table, rules: &RuleSet) -> BatchResult {
    BatchValidator::new().validate(table, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rowgate_core::{CellValue, FieldRuleBuilder, FieldType, Record, RuleDocumentBuilder};

    fn rules() -> RuleSet {
        RuleSet::compile(
            RuleDocumentBuilder::new()
                .field(
                    "title",
                    FieldRuleBuilder::new()
                        .required(true)
                        .field_type(FieldType::Text)
                        .build(),
                )
                .build(),
        )
        .unwrap()
    }

    fn row(title: &str) -> Record {
        let mut record = Record::new();
        record.insert("title".to_string(), CellValue::Text(title.into()));
        record
    }

    #[test]
    fn test_empty_input() {
        let result = BatchValidator::new().validate(&Table::empty(), &rules());
        assert_eq!(result.input_rows, 0);
        assert_eq!(result.kept_rows(), 0);
        assert_eq!(result.discarded_rows, 0);
    }

    #[test]
    fn test_mixed_batch_counts_and_order() {
        let table = Table::from_rows(vec![row("first"), row(""), row("third")]);
        let result = validate_batch(&table, &rules());

        assert_eq!(result.input_rows, 3);
        assert_eq!(result.kept_rows(), 2);
        assert_eq!(result.discarded_rows, 1);

        let titles: Vec<_> = result
            .rows
            .rows()
            .map(|r| r.get("title").unwrap().clone())
            .collect();
        assert_eq!(
            titles,
            vec![
                CellValue::Text("first".into()),
                CellValue::Text("third".into())
            ]
        );
    }

    #[test]
    fn test_row_count_conservation() {
        let table = Table::from_rows(vec![row(""), row(""), row("kept"), row("")]);
        let result = validate_batch(&table, &rules());
        assert_eq!(result.kept_rows() + result.discarded_rows, result.input_rows);
    }
}
