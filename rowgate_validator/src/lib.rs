//! # Rowgate Validator
//!
//! Validation engine for tabular batches. This crate provides the
//! decision logic of rowgate, bottom to top:
//!
//! - Type casting (`cast`): raw value → semantic type, or `CastError`
//! - Field validation (`validate_field`): value + rule → verdict
//! - Row validation (`validate_row`): record + rule set → kept/discarded
//! - Batch validation (`BatchValidator`): table + rule set → result
//!
//! Per-field failures never propagate as errors: a required-field
//! failure discards its row, an optional-field failure nulls just that
//! field, and both are absorbed into the batch accounting. Only
//! rule-loading failures (in `rowgate_rules`) are fatal to a run.
//!
//! ## Example
//!
//! ```rust
//! use rowgate_core::{CellValue, FieldRuleBuilder, FieldType, Record, RuleDocumentBuilder, Table};
//! use rowgate_rules::RuleSet;
//! use rowgate_validator::BatchValidator;
//!
//! let rules = RuleSet::compile(
//!     RuleDocumentBuilder::new()
//!         .field(
//!             "title",
//!             FieldRuleBuilder::new()
//!                 .required(true)
//!                 .field_type(FieldType::Text)
//!                 .build(),
//!         )
//!         .build(),
//! )
//! .unwrap();
//!
//! let mut row = Record::new();
//! row.insert("title".to_string(), CellValue::Text("  Decreto 123 ".into()));
//!
//! let result = BatchValidator::new().validate(&Table::from_rows(vec![row]), &rules);
//! assert_eq!(result.kept_rows(), 1);
//! assert_eq!(result.discarded_rows, 0);
//! ```

mod cast;
mod engine;
mod error;
mod field;
mod row;

pub use cast::*;
pub use engine::*;
pub use error::*;
pub use field::*;
pub use row::*;
