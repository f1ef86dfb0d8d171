//! Error types for cast operations.
//!
//! A `CastError` is always recovered inside the field validator: it is
//! downgraded to a rejection (required field) or a nulled field
//! (optional field) and never surfaces past that point.

use thiserror::Error;

/// A value could not be represented in the rule's semantic type.
#[derive(Debug, Error)]
pub enum CastError {
    /// The value's shape can never represent the target type
    #[error("{actual} value is not a valid {expected}")]
    Incompatible {
        /// Target type name
        expected: &'static str,
        /// Shape of the offending value
        actual: &'static str,
    },

    /// The value's text form failed to parse as the target type
    #[error("cannot cast '{text}' to {expected}")]
    Unparseable {
        /// Target type name
        expected: &'static str,
        /// Text that failed to parse
        text: String,
    },
}

impl CastError {
    /// Creates an incompatible-shape error.
    pub fn incompatible(expected: &'static str, actual: &'static str) -> Self {
        Self::Incompatible { expected, actual }
    }

    /// Creates an unparseable-text error.
    pub fn unparseable(expected: &'static str, text: impl Into<String>) -> Self {
        Self::Unparseable {
            expected,
            text: text.into(),
        }
    }
}
