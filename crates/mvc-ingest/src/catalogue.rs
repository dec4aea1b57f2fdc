#![deny(unsafe_code)]

//! Extracts value-set sheets from the catalogue workbook.
//!
//! Catalogue sheets are positional, not tabular: the value-set name sits in
//! a fixed cell and concept rows start at a fixed row. Offsets live in
//! [`mvc_model::sheet`]. All coordinates here are absolute, matching the
//! workbook grid rather than the loaded range.

use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use mvc_model::sheet::{
    CODE_COLUMN, DATA_START_ROW, DESCRIPTION_COLUMN, OID_COLUMN, SHEET_NAME_PREFIX,
    UNKNOWN_VALUE_SET, VALUE_SET_NAME_CELL,
};
use mvc_model::{ConceptRow, ValueSetSheet};
use tracing::debug;

use crate::cell::cell_to_string;
use crate::error::{IngestError, Result};

/// True for worksheet names that hold value-set content.
pub fn is_catalogue_sheet(name: &str) -> bool {
    name.starts_with(SHEET_NAME_PREFIX)
}

/// Reads every catalogue sheet from the workbook at `path`, in workbook
/// order. Non-catalogue sheets are passed over without a trace.
pub fn read_catalogue_sheets(path: &Path) -> Result<Vec<ValueSetSheet>> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| IngestError::workbook(path, e))?;
    let names: Vec<String> = workbook.sheet_names().to_owned();

    let mut sheets = Vec::new();
    for name in names {
        if !is_catalogue_sheet(&name) {
            continue;
        }
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| IngestError::sheet(path, name.clone(), e))?;
        sheets.push(sheet_from_range(&name, &range));
    }

    debug!(count = sheets.len(), "catalogue sheets extracted");
    Ok(sheets)
}

/// Builds a [`ValueSetSheet`] from one sheet's grid. Rows whose OID cell is
/// blank are not concept rows; everything else is kept in grid order.
pub fn sheet_from_range(sheet_name: &str, range: &Range<Data>) -> ValueSetSheet {
    let value_set_name = range
        .get_value(VALUE_SET_NAME_CELL)
        .map(cell_to_string)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_VALUE_SET.to_string());

    let mut concepts = Vec::new();
    if let Some((end_row, _)) = range.end() {
        for row in DATA_START_ROW..=end_row {
            let oid = cell_text(range, row, OID_COLUMN);
            let oid = oid.trim();
            if oid.is_empty() {
                continue;
            }
            concepts.push(ConceptRow {
                oid: oid.to_string(),
                code: cell_text(range, row, CODE_COLUMN),
                description: cell_text(range, row, DESCRIPTION_COLUMN),
            });
        }
    }

    ValueSetSheet {
        sheet_name: sheet_name.to_string(),
        value_set_name,
        concepts,
    }
}

fn cell_text(range: &Range<Data>, row: u32, col: u32) -> String {
    range
        .get_value((row, col))
        .map(cell_to_string)
        .unwrap_or_default()
}
