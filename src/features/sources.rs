//! Row sources backed by CSV and JSON
//!
//! These adapters only materialize rows; everything else happens on the
//! resulting [`Table`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::core::model::{CellValue, Table};
use crate::utils::error::{TableError, TableResult};

/// CSV reading options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: u8,
    /// Whether the first record is a header row (kept as the first table row)
    pub has_header: bool,
    /// Parse integers and floats instead of keeping every field as text
    pub auto_detect_types: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            auto_detect_types: true,
        }
    }
}

impl CsvOptions {
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Default::default()
        }
    }
}

/// Read CSV text into a table
///
/// Short records are padded with empty cells to the widest record.
pub fn read_csv<R: Read>(reader: R, options: &CsvOptions) -> TableResult<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| TableError::invalid(format!("CSV error: {}", e)))?;
        let header = i == 0 && options.has_header;
        let row = record
            .iter()
            .map(|field| {
                if options.auto_detect_types && !header {
                    detect_type(field)
                } else {
                    CellValue::text(field)
                }
            })
            .collect();
        rows.push(row);
    }

    log::debug!("read {} CSV records", rows.len());
    Table::new(pad_rows(rows))
}

/// Read a CSV file into a table
pub fn read_csv_file<P: AsRef<Path>>(path: P, options: &CsvOptions) -> TableResult<Table> {
    let file = File::open(path)?;
    read_csv(file, options)
}

/// Read JSON into a table
///
/// Accepts an array of arrays of scalars, or an array of objects. For
/// objects, the keys of the first object become a header row and select
/// the columns of every row.
pub fn read_json(text: &str) -> TableResult<Table> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| TableError::invalid(format!("JSON error: {}", e)))?;
    let Value::Array(items) = value else {
        return Err(TableError::invalid("JSON input must be an array of rows"));
    };

    let rows = match items.first() {
        Some(Value::Object(first)) => {
            let keys: Vec<String> = first.keys().cloned().collect();
            let mut rows = vec![keys.iter().map(CellValue::text).collect::<Vec<_>>()];
            for (i, item) in items.iter().enumerate() {
                let Value::Object(map) = item else {
                    return Err(TableError::invalid(format!("row {} is not an object", i)));
                };
                let row = keys
                    .iter()
                    .map(|k| map.get(k).map(json_scalar).transpose())
                    .collect::<TableResult<Vec<_>>>()?;
                rows.push(row.into_iter().map(Option::unwrap_or_default).collect());
            }
            rows
        }
        _ => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Array(cells) => cells.iter().map(json_scalar).collect::<TableResult<Vec<_>>>(),
                _ => Err(TableError::invalid(format!("row {} is not an array", i))),
            })
            .collect::<TableResult<Vec<Vec<CellValue>>>>()?,
    };

    Table::new(pad_rows(rows))
}

/// Detect the type of a CSV field
fn detect_type(field: &str) -> CellValue {
    let field = field.trim();
    if field.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(i) = field.parse::<i64>() {
        return CellValue::Int(i);
    }
    match field.parse::<f64>() {
        Ok(f) if f.is_finite() => CellValue::Float(f),
        _ => CellValue::text(field),
    }
}

fn json_scalar(value: &Value) -> TableResult<CellValue> {
    Ok(match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Text(b.to_string()),
        Value::Number(n) => match n.as_i64() {
            Some(i) => CellValue::Int(i),
            None => n.as_f64().map(CellValue::Float).unwrap_or_default(),
        },
        Value::String(s) => CellValue::text(s),
        Value::Array(_) | Value::Object(_) => {
            return Err(TableError::invalid("nested JSON values cannot be table cells"))
        }
    })
}

fn pad_rows(mut rows: Vec<Vec<CellValue>>) -> Vec<Vec<CellValue>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, CellValue::Empty);
    }
    rows
}
