pub mod catalogue;
pub mod cell;
pub mod error;
pub mod metadata;

pub use catalogue::{is_catalogue_sheet, read_catalogue_sheets, sheet_from_range};
pub use cell::{cell_to_i64, cell_to_string, format_numeric, is_blank, parse_i64};
pub use error::{IngestError, Result};
pub use metadata::{load_metadata, metadata_from_range};
