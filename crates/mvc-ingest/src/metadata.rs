#![deny(unsafe_code)]

//! Loads the metadata workbook into the two lookup tables.
//!
//! The table lives on the first worksheet with the header in the first grid
//! row. Value-set rows and code-system rows share the table: one physical
//! row may contribute to either lookup, both, or neither.

use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use mvc_model::{MvcMetadata, ValueSetMeta, normalize_quotes};
use tracing::debug;

use crate::cell::{cell_to_i64, cell_to_string, is_blank};
use crate::error::{IngestError, Result};

pub const COL_VALUE_SET_NAME: &str = "Value Set name";
pub const COL_VALUE_SET_TITLE: &str = "ValueSet Title";
pub const COL_VALUE_SET_DESCRIPTION: &str = "ValueSet Description";
pub const COL_PACKAGE: &str = "Package";
pub const COL_CODE_SYSTEM_OID: &str = "CodeSystem OID";
pub const COL_CODE_SYSTEM_URL: &str = "CodeSystem URL";

/// Reads the metadata workbook at `path` and builds the lookup tables.
pub fn load_metadata(path: &Path) -> Result<MvcMetadata> {
    let range = read_first_sheet(path)?;
    metadata_from_range(path, &range)
}

fn read_first_sheet(path: &Path) -> Result<Range<Data>> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| IngestError::workbook(path, e))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?;
    workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::sheet(path, sheet.clone(), e))
}

/// Builds [`MvcMetadata`] from an already-loaded grid. `path` is only used
/// for error messages.
///
/// Rules: rows blank across all columns are dropped; a row enters the
/// value-set table when its name is non-blank (later rows win on duplicate
/// names, descriptions get double quotes normalized to single quotes); a row
/// enters the code-system lookup when both OID and URL are non-blank.
pub fn metadata_from_range(path: &Path, range: &Range<Data>) -> Result<MvcMetadata> {
    let mut rows = range.rows();
    let headers = rows.next().ok_or_else(|| IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: COL_VALUE_SET_NAME.to_string(),
    })?;

    let idx_name = require_column(path, headers, COL_VALUE_SET_NAME)?;
    let idx_title = require_column(path, headers, COL_VALUE_SET_TITLE)?;
    let idx_description = require_column(path, headers, COL_VALUE_SET_DESCRIPTION)?;
    let idx_package = require_column(path, headers, COL_PACKAGE)?;
    let idx_oid = require_column(path, headers, COL_CODE_SYSTEM_OID)?;
    let idx_url = require_column(path, headers, COL_CODE_SYSTEM_URL)?;

    let mut metadata = MvcMetadata::default();
    for row in rows {
        if row.iter().all(is_blank) {
            continue;
        }

        if let Some(name) = get_string(row, idx_name) {
            let meta = ValueSetMeta {
                title: get_text(row, idx_title),
                description: normalize_quotes(&get_text(row, idx_description)),
                package: row.get(idx_package).and_then(cell_to_i64).unwrap_or(0),
            };
            metadata.value_sets.insert(name, meta);
        }

        if let (Some(oid), Some(url)) = (get_string(row, idx_oid), get_string(row, idx_url)) {
            metadata.code_systems.insert(oid, url);
        }
    }

    debug!(
        value_sets = metadata.value_set_count(),
        code_systems = metadata.code_system_count(),
        "metadata tables built"
    );
    Ok(metadata)
}

fn header_index(headers: &[Data], name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|cell| cell_to_string(cell).trim() == name)
}

fn require_column(path: &Path, headers: &[Data], name: &str) -> Result<usize> {
    header_index(headers, name).ok_or_else(|| IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: name.to_string(),
    })
}

fn get_string(row: &[Data], idx: usize) -> Option<String> {
    row.get(idx)
        .map(cell_to_string)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn get_text(row: &[Data], idx: usize) -> String {
    row.get(idx).map(cell_to_string).unwrap_or_default()
}
