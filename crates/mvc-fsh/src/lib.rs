//! FSH output generation for the MVC converter.
//!
//! Takes the catalogue sheets and lookup tables produced by ingestion and
//! turns them into files on disk:
//!
//! - **FSH documents**: one `<sheet-name>.fsh` value-set definition per
//!   qualifying catalogue sheet
//! - **Anomaly reports**: CSV listings of value-set names and code-system
//!   OIDs that could not be resolved during the run

mod document;
mod output;

pub use document::{Concept, ValueSetDocument};
pub use output::{ReportPaths, write_anomaly_reports, write_fsh_document};
