//! Integration tests for the conversion pipeline.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use mvc_cli::pipeline::{convert_sheets, ingest, write_reports};
use mvc_cli::types::SheetStatus;
use mvc_model::{ConceptRow, MvcMetadata, ValueSetMeta, ValueSetSheet};

fn test_metadata(package: i64) -> MvcMetadata {
    let mut metadata = MvcMetadata::default();
    metadata.value_sets.insert(
        "VS1".to_string(),
        ValueSetMeta {
            title: "T1".to_string(),
            description: "D1".to_string(),
            package,
        },
    );
    metadata
        .code_systems
        .insert("1.2.3".to_string(), "http://example.org/cs".to_string());
    metadata
}

fn test_sheet(sheet_name: &str, value_set_name: &str, concepts: Vec<ConceptRow>) -> ValueSetSheet {
    ValueSetSheet {
        sheet_name: sheet_name.to_string(),
        value_set_name: value_set_name.to_string(),
        concepts,
    }
}

fn concept(oid: &str, code: &str, description: &str) -> ConceptRow {
    ConceptRow {
        oid: oid.to_string(),
        code: code.to_string(),
        description: description.to_string(),
    }
}

#[test]
fn test_eligible_sheet_writes_document_and_no_reports() {
    let dir = TempDir::new().unwrap();
    let metadata = test_metadata(1);
    let sheets = vec![test_sheet(
        "eHDSI-Test",
        "VS1",
        vec![concept("1.2.3", "C1", "Desc \"A\"")],
    )];

    let result = convert_sheets(&sheets, &metadata, dir.path()).unwrap();
    let reports = write_reports(&result.anomalies, dir.path()).unwrap();

    assert_eq!(result.sheets.len(), 1);
    assert_eq!(result.sheets[0].status, SheetStatus::Converted);
    assert_eq!(result.sheets[0].unresolved_oids, 0);

    let content = fs::read_to_string(dir.path().join("eHDSI-Test.fsh")).unwrap();
    assert!(content.contains("Title: \"T1\"\n"));
    assert!(content.contains("Description: \"D1\"\n"));
    assert!(content.contains("* http://example.org/cs#C1 \"Desc 'A'\"\n"));

    assert!(reports.unknown_names.is_none());
    assert!(reports.unknown_oids.is_none());
    assert!(!dir.path().join("unknown_names.csv").exists());
    assert!(!dir.path().join("unknown_oids.csv").exists());
}

#[test]
fn test_unknown_value_set_is_skipped_and_reported() {
    let dir = TempDir::new().unwrap();
    let metadata = test_metadata(1);
    let sheets = vec![test_sheet(
        "eHDSI-Other",
        "VS9",
        vec![concept("1.2.3", "C1", "First")],
    )];

    let result = convert_sheets(&sheets, &metadata, dir.path()).unwrap();
    let reports = write_reports(&result.anomalies, dir.path()).unwrap();

    assert_eq!(result.sheets[0].status, SheetStatus::UnknownValueSet);
    assert!(result.sheets[0].output_path.is_none());
    assert!(!dir.path().join("eHDSI-Other.fsh").exists());

    let report = reports.unknown_names.unwrap();
    let content = fs::read_to_string(report).unwrap();
    assert_eq!(content, "Unknown Value Set Name\nVS9\n");
}

#[test]
fn test_out_of_package_sheet_is_skipped_and_reported() {
    let dir = TempDir::new().unwrap();
    let metadata = test_metadata(0);
    let sheets = vec![test_sheet(
        "eHDSI-Test",
        "VS1",
        vec![concept("1.2.3", "C1", "First")],
    )];

    let result = convert_sheets(&sheets, &metadata, dir.path()).unwrap();
    let reports = write_reports(&result.anomalies, dir.path()).unwrap();

    assert_eq!(result.sheets[0].status, SheetStatus::NotInPackage);
    assert!(!dir.path().join("eHDSI-Test.fsh").exists());

    let report = reports.unknown_names.unwrap();
    let content = fs::read_to_string(report).unwrap();
    assert_eq!(content, "Unknown Value Set Name\nVS1\n");
}

#[test]
fn test_unresolved_oid_uses_sentinel_and_is_reported() {
    let dir = TempDir::new().unwrap();
    let mut metadata = test_metadata(1);
    metadata.code_systems.clear();
    let sheets = vec![test_sheet(
        "eHDSI-Test",
        "VS1",
        vec![concept("1.2.3", "C1", "Desc \"A\"")],
    )];

    let result = convert_sheets(&sheets, &metadata, dir.path()).unwrap();
    let reports = write_reports(&result.anomalies, dir.path()).unwrap();

    assert_eq!(result.sheets[0].status, SheetStatus::Converted);
    assert_eq!(result.sheets[0].unresolved_oids, 1);

    let content = fs::read_to_string(dir.path().join("eHDSI-Test.fsh")).unwrap();
    assert!(content.contains("* UNKNOWN_CS#C1 \"Desc 'A'\"\n"));

    let report = reports.unknown_oids.unwrap();
    let report_content = fs::read_to_string(report).unwrap();
    assert_eq!(report_content, "Unknown CodeSystem OID\n1.2.3\n");
    assert!(reports.unknown_names.is_none());
}

#[test]
fn test_sheets_keep_workbook_order() {
    let dir = TempDir::new().unwrap();
    let metadata = test_metadata(1);
    let sheets = vec![
        test_sheet("eHDSI-B", "VS9", vec![]),
        test_sheet("eHDSI-A", "VS1", vec![concept("1.2.3", "C1", "First")]),
    ];

    let result = convert_sheets(&sheets, &metadata, dir.path()).unwrap();

    let names: Vec<&str> = result
        .sheets
        .iter()
        .map(|c| c.sheet_name.as_str())
        .collect();
    assert_eq!(names, vec!["eHDSI-B", "eHDSI-A"]);
}

#[test]
fn test_rerun_produces_identical_output() {
    let dir = TempDir::new().unwrap();
    let metadata = test_metadata(1);
    let sheets = vec![test_sheet(
        "eHDSI-Test",
        "VS1",
        vec![
            concept("1.2.3", "C1", "First"),
            concept("9.9.9", "C2", "Unmapped"),
        ],
    )];

    convert_sheets(&sheets, &metadata, dir.path()).unwrap();
    let first = fs::read(dir.path().join("eHDSI-Test.fsh")).unwrap();

    convert_sheets(&sheets, &metadata, dir.path()).unwrap();
    let second = fs::read(dir.path().join("eHDSI-Test.fsh")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_ingest_reports_missing_workbook_by_path() {
    let err = ingest(
        Path::new("missing-catalogue.xlsx"),
        Path::new("missing-metadata.xlsx"),
    )
    .unwrap_err();

    // Metadata loads first, so its path is the one reported.
    let message = format!("{err:#}");
    assert!(message.contains("failed to open workbook"));
    assert!(message.contains("missing-metadata.xlsx"));
}
