//! Validation results at field, row, and batch granularity.

use crate::{CellValue, Record, Table};

/// The result of validating one field against its rule.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldVerdict {
    /// The value passed every check; carries the cast/normalized value.
    Accepted(CellValue),
    /// An optional field with no usable value; the field is nulled.
    AcceptedEmpty,
    /// A required field failed; the row cannot survive.
    Rejected,
}

impl FieldVerdict {
    /// Returns true unless the verdict is `Rejected`.
    pub fn is_ok(&self) -> bool {
        !matches!(self, FieldVerdict::Rejected)
    }
}

/// The result of validating one row against the rule set.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// The row survives with ruled fields normalized or nulled.
    Kept(Record),
    /// A required field failed; the row contributes nothing to the output.
    Discarded,
}

/// The result of validating one batch.
///
/// `rows` holds the kept records in input order. Invariant:
/// `rows.len() + discarded_rows == input_rows`.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Kept records, input order preserved
    pub rows: Table,

    /// Number of rows in the input batch
    pub input_rows: usize,

    /// Number of rows discarded by required-field failures
    pub discarded_rows: usize,
}

impl BatchResult {
    /// Number of rows that survived validation.
    pub fn kept_rows(&self) -> usize {
        self.rows.len()
    }

    /// Fraction of input rows kept, in `[0, 1]`. An empty input counts
    /// as fully successful.
    pub fn success_rate(&self) -> f64 {
        if self.input_rows == 0 {
            1.0
        } else {
            self.kept_rows() as f64 / self.input_rows as f64
        }
    }
}
