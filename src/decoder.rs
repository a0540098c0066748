use crate::error::{FinPulseError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Cursor;

/// One decoded row: normalized column name to decoded scalar.
pub type RowRecord = BTreeMap<String, CellValue>;

/// A scalar cell as decoded from the source format. No type coercion is
/// applied at decode time: CSV cells stay text, spreadsheet cells keep the
/// type calamine reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Best-effort numeric interpretation. Text is trimmed and stripped of
    /// currency/thousands symbols before parsing; booleans and empty cells
    /// never coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().replace(['$', ','], "").parse().ok(),
            _ => None,
        }
    }

    /// Text content, trimmed. Non-text cells yield `None`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.trim()),
            _ => None,
        }
    }
}

/// Format hint derived from the uploaded filename's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    DelimitedText,
    Spreadsheet,
}

impl FileFormat {
    /// Maps `.csv` to delimited text and `.xlsx`/`.xls` to spreadsheet.
    /// Matching is case-insensitive; any other suffix is rejected.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".csv") {
            Ok(FileFormat::DelimitedText)
        } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            Ok(FileFormat::Spreadsheet)
        } else {
            Err(FinPulseError::UnsupportedFormat(filename.to_string()))
        }
    }
}

/// Decodes raw bytes into an ordered sequence of row records.
///
/// Column names are case-folded and trimmed; row order is the source order.
/// Bytes that do not parse as the declared format fail with a decode error
/// carrying the underlying cause.
pub fn decode(bytes: &[u8], format: FileFormat) -> Result<Vec<RowRecord>> {
    let rows = match format {
        FileFormat::DelimitedText => decode_delimited(bytes)?,
        FileFormat::Spreadsheet => decode_spreadsheet(bytes)?,
    };
    debug!("Decoded {} rows as {:?}", rows.len(), format);
    Ok(rows)
}

fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn decode_delimited(bytes: &[u8]) -> Result<Vec<RowRecord>> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| FinPulseError::DecodeError(e.to_string()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| FinPulseError::DecodeError(e.to_string()))?;
        let mut row = RowRecord::new();
        for (name, field) in headers.iter().zip(record.iter()) {
            let value = if field.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(field.to_string())
            };
            row.insert(name.clone(), value);
        }
        rows.push(row);
    }

    Ok(rows)
}

fn decode_spreadsheet(bytes: &[u8]) -> Result<Vec<RowRecord>> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| FinPulseError::DecodeError(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| FinPulseError::DecodeError("workbook contains no sheets".to_string()))?
        .map_err(|e| FinPulseError::DecodeError(e.to_string()))?;

    let mut cells = range.rows();
    let headers: Vec<String> = match cells.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| normalize_header(&cell.to_string()))
            .collect(),
        None => return Ok(Vec::new()),
    };

    let mut rows = Vec::new();
    for sheet_row in cells {
        let mut row = RowRecord::new();
        for (name, cell) in headers.iter().zip(sheet_row.iter()) {
            row.insert(name.clone(), convert_cell(cell));
        }
        rows.push(row);
    }

    Ok(rows)
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::Text(naive.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => CellValue::Number(dt.as_f64()),
        },
        other => CellValue::Text(other.to_string()),
    }
}
