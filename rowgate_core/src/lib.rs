//! # Rowgate Core
//!
//! Core data model for the rowgate validation engine.
//!
//! Rowgate sits between an extraction step and a persistence step in a
//! tabular pipeline: it takes a batch of rows, applies a declarative rule
//! set to every ruled field, and keeps, nulls, or discards data according
//! to each field's contract. This crate holds the building blocks shared
//! by the loader and the validator:
//!
//! - **CellValue / Record / Table**: the tagged-value representation of
//!   one cell, one row, and one ordered batch of rows
//! - **FieldRule / RuleDocument**: the declarative per-field contract
//!   (required, expected type, optional regex) as it appears in a rule file
//! - **FieldVerdict / RowOutcome / BatchResult**: the per-field, per-row,
//!   and per-batch validation results
//!
//! ## Example
//!
//! ```rust
//! use rowgate_core::{FieldRule, FieldType, RuleDocumentBuilder};
//!
//! let doc = RuleDocumentBuilder::new()
//!     .field(
//!         "title",
//!         FieldRule {
//!             required: true,
//!             field_type: FieldType::Text,
//!             pattern: None,
//!         },
//!     )
//!     .build();
//! assert_eq!(doc.fields.len(), 1);
//! ```

pub mod builder;
pub mod rules;
pub mod value;
pub mod verdict;

pub use builder::*;
pub use rules::*;
pub use value::*;
pub use verdict::*;
