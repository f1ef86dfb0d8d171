//! Cell, row, and table representation.
//!
//! This module provides the value types flowing through validation. A
//! `Record` is one input row; a `Table` is an ordered batch of records.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// Canonical text layout for date values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical text layout for timestamp values.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single cell value.
///
/// Covers the raw scalar shapes an extraction step can hand over plus the
/// normalized shapes the caster produces (`Date`, `Timestamp`).
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Null/missing value
    Null,
    /// Text value
    Text(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Calendar date value
    Date(NaiveDate),
    /// Date-and-time value, no offset
    Timestamp(NaiveDateTime),
}

impl CellValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Text(_) => "string",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Bool(_) => "bool",
            CellValue::Date(_) => "date",
            CellValue::Timestamp(_) => "datetime",
        }
    }

    /// Renders this value to its canonical text form.
    ///
    /// Patterns are always evaluated against this rendering, so a rule
    /// regex sees `2024-01-05` for a date and `2024-01-05 10:30:00` for a
    /// timestamp regardless of how extraction formatted the raw input.
    /// `Null` renders as the empty string.
    pub fn canonical_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Date(d) => d.format(DATE_FORMAT).to_string(),
            CellValue::Timestamp(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Attempts to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Attempts to get this value as a timestamp.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(ts: NaiveDateTime) -> Self {
        CellValue::Timestamp(ts)
    }
}

/// A single row of data.
pub type Record = HashMap<String, CellValue>;

/// An ordered batch of records.
///
/// Row order is preserved through validation: kept rows come out in the
/// order they went in, with discarded rows removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Record>,
}

impl Table {
    /// Creates a new empty table.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a new table from rows.
    pub fn from_rows(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    /// Returns the number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter()
    }

    /// Gets a specific row by index.
    pub fn get_row(&self, index: usize) -> Option<&Record> {
        self.rows.get(index)
    }

    /// Appends a row to the table.
    pub fn push_row(&mut self, row: Record) {
        self.rows.push(row);
    }

    /// Consumes the table, yielding its rows.
    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
