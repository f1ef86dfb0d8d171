//! Reading and writing interchange tables.
//!
//! The upstream pipeline hands batches over as files: CSV between
//! extraction and validation, CSV or JSON onward. CSV carries no type
//! information, so every non-empty cell is ingested as text and left to
//! the caster; empty cells are null. JSON scalars map directly onto
//! cell values.

use anyhow::{Context, Result, anyhow};
use rowgate_core::{CellValue, Record, Table};
use std::collections::BTreeSet;
use std::path::Path;

/// Interchange formats for input/output tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Json,
}

/// Picks the table format from the file extension: `.csv` is CSV,
/// anything else is treated as a JSON array of objects.
pub fn detect_format(path: &Path) -> TableFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => TableFormat::Csv,
        _ => TableFormat::Json,
    }
}

/// Reads a table from a file, detecting the format from the extension.
///
/// Also returns the input's column order (the CSV header, or field
/// names by first appearance for JSON) so output can reproduce it.
pub fn read_table(path: &Path) -> Result<(Table, Vec<String>)> {
    match detect_format(path) {
        TableFormat::Csv => read_csv(path),
        TableFormat::Json => read_json(path),
    }
}

/// Writes a table to a file in the given format. `columns` fixes the
/// CSV column order; fields not listed there are appended.
pub fn write_table(
    path: &Path,
    table: &Table,
    format: TableFormat,
    columns: &[String],
) -> Result<()> {
    let rendered = match format {
        TableFormat::Csv => render_csv(table, columns)?,
        TableFormat::Json => render_json(table)?,
    };
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write table to {}", path.display()))?;
    Ok(())
}

/// Renders a table to a string in the given format, for stdout output.
pub fn render_table(table: &Table, format: TableFormat, columns: &[String]) -> Result<String> {
    match format {
        TableFormat::Csv => render_csv(table, columns),
        TableFormat::Json => render_json(table),
    }
}

fn read_csv(path: &Path) -> Result<(Table, Vec<String>)> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open CSV file {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("failed to read CSV header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = Table::empty();
    for record in reader.records() {
        let record = record.context("failed to read CSV row")?;
        let mut row = Record::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            let value = if cell.is_empty() {
                CellValue::Null
            } else {
                CellValue::Text(cell.to_string())
            };
            row.insert(header.clone(), value);
        }
        table.push_row(row);
    }

    Ok((table, headers))
}

fn read_json(path: &Path) -> Result<(Table, Vec<String>)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read JSON file {}", path.display()))?;
    let rows: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&content).context("input must be a JSON array of objects")?;

    let mut table = Table::empty();
    let mut columns = Vec::new();
    for (index, object) in rows.into_iter().enumerate() {
        let mut row = Record::new();
        for (key, value) in object {
            if !columns.contains(&key) {
                columns.push(key.clone());
            }
            row.insert(key, json_to_cell(value, index)?);
        }
        table.push_row(row);
    }

    Ok((table, columns))
}

fn json_to_cell(value: serde_json::Value, row: usize) -> Result<CellValue> {
    use serde_json::Value;
    match value {
        Value::Null => Ok(CellValue::Null),
        Value::Bool(b) => Ok(CellValue::Bool(b)),
        Value::String(s) => Ok(CellValue::Text(s)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(CellValue::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(CellValue::Float(f))
            } else {
                Err(anyhow!("row {row}: number {n} is out of range"))
            }
        }
        other => Err(anyhow!(
            "row {row}: nested value {other} is not a scalar cell"
        )),
    }
}

fn cell_to_json(value: &CellValue) -> serde_json::Value {
    use serde_json::Value;
    match value {
        CellValue::Null => Value::Null,
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Int(i) => Value::Number((*i).into()),
        CellValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        CellValue::Bool(b) => Value::Bool(*b),
        CellValue::Date(_) | CellValue::Timestamp(_) => Value::String(value.canonical_text()),
    }
}

/// CSV output keeps the input's column order; fields that appear only
/// in the validated rows (ruled but absent from the input header) are
/// appended after it, sorted for stable files.
fn column_order(table: &Table, preferred: &[String]) -> Vec<String> {
    let mut columns: Vec<String> = preferred.to_vec();
    let mut extra = BTreeSet::new();
    for row in table.rows() {
        for key in row.keys() {
            if !preferred.contains(key) {
                extra.insert(key.clone());
            }
        }
    }
    columns.extend(extra);
    columns
}

fn render_csv(table: &Table, preferred: &[String]) -> Result<String> {
    let columns = column_order(table, preferred);
    if columns.is_empty() {
        return Ok(String::new());
    }
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(&columns).context("failed to write CSV header")?;
    for row in table.rows() {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| {
                row.get(column)
                    .map(|value| value.canonical_text())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&cells).context("failed to write CSV row")?;
    }

    let bytes = writer.into_inner().context("failed to flush CSV output")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

fn render_json(table: &Table) -> Result<String> {
    let rows: Vec<serde_json::Value> = table
        .rows()
        .map(|row| {
            let object: serde_json::Map<String, serde_json::Value> = row
                .iter()
                .map(|(key, value)| (key.clone(), cell_to_json(value)))
                .collect();
            serde_json::Value::Object(object)
        })
        .collect();

    serde_json::to_string_pretty(&rows).context("failed to serialize JSON output")
}
