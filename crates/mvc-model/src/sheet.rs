//! Fixed layout of the Master Value set Catalogue workbook.
//!
//! All positions are 0-based absolute sheet coordinates `(row, column)`.
//! The MVC publication pipeline has kept this layout stable across releases;
//! changing any of these values is a schema change, not a tuning knob.

/// Only sheets whose name starts with this prefix hold value-set content.
pub const SHEET_NAME_PREFIX: &str = "eHDSI";

/// Cell holding the value-set name.
pub const VALUE_SET_NAME_CELL: (u32, u32) = (1, 1);

/// First row of concept data. Rows above it are headers and banner text.
pub const DATA_START_ROW: u32 = 7;

/// Column holding the code-system OID of each concept row.
pub const OID_COLUMN: u32 = 0;

/// Column holding the concept code.
pub const CODE_COLUMN: u32 = 2;

/// Column holding the concept description (full specified name).
pub const DESCRIPTION_COLUMN: u32 = 3;

/// Sentinel used when the value-set name cell is blank or missing.
pub const UNKNOWN_VALUE_SET: &str = "UNKNOWN";

/// Sentinel substituted for the code-system URL when an OID does not resolve.
pub const UNKNOWN_CODE_SYSTEM: &str = "UNKNOWN_CS";

/// Package flag value marking a value set as part of the conversion batch.
pub const PACKAGE_INCLUDED: i64 = 1;
