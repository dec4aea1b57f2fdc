//! Cell coercion helpers for calamine `Data` values.
//!
//! Spreadsheet cells arrive typed (string, float, bool, ...); the catalogue
//! contract is string-based, so everything funnels through a single string
//! conversion with numeric cells rendered without a trailing `.0`.

use calamine::Data;

/// Converts a cell to its string representation. Empty and error cells
/// become the empty string; numeric cells are formatted without trailing
/// zeros.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(v) => format_numeric(*v),
        Data::Int(v) => v.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => format_numeric(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Converts a cell to i64, returning None for blank, fractional or
/// non-numeric cells.
pub fn cell_to_i64(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(v) => Some(*v),
        Data::Float(v) if v.fract() == 0.0 => Some(*v as i64),
        Data::String(s) => parse_i64(s),
        Data::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// True when the cell holds no usable text (empty, error, or whitespace).
pub fn is_blank(cell: &Data) -> bool {
    cell_to_string(cell).trim().is_empty()
}

/// Formats a floating-point number, rendering integral values without a
/// decimal part.
pub fn format_numeric(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 9e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}
