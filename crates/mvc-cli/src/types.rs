//! Result records produced by a conversion run.
//!
//! These types are serializable so a run outcome can be captured as JSON by
//! wrapping tools or test harnesses.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of processing a single catalogue sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetStatus {
    /// The sheet was converted and an FSH document was written.
    Converted,
    /// The value set name was not present in the metadata workbook.
    UnknownValueSet,
    /// The value set is known but not part of the current package.
    NotInPackage,
}

/// Per-sheet summary row for the run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetSummary {
    /// Sheet name as it appears in the catalogue workbook.
    pub sheet_name: String,
    /// Value set name extracted from the sheet header.
    pub value_set_name: String,
    /// What happened to the sheet.
    pub status: SheetStatus,
    /// Number of concept rows found on the sheet.
    pub concept_count: usize,
    /// Number of concepts whose code system OID could not be resolved.
    pub unresolved_oids: usize,
    /// Path of the written FSH document, if the sheet was converted.
    pub output: Option<PathBuf>,
}

/// Aggregate result of a full conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Catalogue workbook that was read.
    pub catalogue: PathBuf,
    /// Directory FSH documents and reports were written to.
    pub output_dir: PathBuf,
    /// Number of value set entries loaded from the metadata workbook.
    pub value_set_count: usize,
    /// Number of code system mappings loaded from the metadata workbook.
    pub code_system_count: usize,
    /// One summary per catalogue sheet, in workbook order.
    pub sheets: Vec<SheetSummary>,
    /// Path of the unknown value set name report, if one was written.
    pub unknown_name_report: Option<PathBuf>,
    /// Path of the unknown code system OID report, if one was written.
    pub unknown_oid_report: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_result_serializes() {
        let result = RunResult {
            catalogue: PathBuf::from("mvc.xlsx"),
            output_dir: PathBuf::from("out"),
            value_set_count: 2,
            code_system_count: 3,
            sheets: vec![SheetSummary {
                sheet_name: "eHDSI-Test".to_string(),
                value_set_name: "eHDSITest".to_string(),
                status: SheetStatus::Converted,
                concept_count: 4,
                unresolved_oids: 1,
                output: Some(PathBuf::from("out/eHDSI-Test.fsh")),
            }],
            unknown_name_report: None,
            unknown_oid_report: Some(PathBuf::from("out/unknown_oids.csv")),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"status\":\"converted\""));
        assert!(json.contains("\"unknown_name_report\":null"));

        let parsed: RunResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sheets.len(), 1);
        assert_eq!(parsed.sheets[0].status, SheetStatus::Converted);
    }

    #[test]
    fn sheet_status_round_trips() {
        for status in [
            SheetStatus::Converted,
            SheetStatus::UnknownValueSet,
            SheetStatus::NotInPackage,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let parsed: SheetStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }
}
