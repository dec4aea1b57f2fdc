#![deny(unsafe_code)]

//! File output: FSH documents and anomaly report CSVs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mvc_model::AnomalyLog;
use tracing::info;

use crate::document::ValueSetDocument;

/// Extension of rendered value-set documents.
pub const FSH_EXTENSION: &str = "fsh";

/// Listing of value-set names skipped for missing or out-of-package metadata.
pub const UNKNOWN_NAMES_FILE: &str = "unknown_names.csv";

/// Listing of code-system OIDs with no URL mapping.
pub const UNKNOWN_OIDS_FILE: &str = "unknown_oids.csv";

const UNKNOWN_NAMES_HEADER: &str = "Unknown Value Set Name";
const UNKNOWN_OIDS_HEADER: &str = "Unknown CodeSystem OID";

/// Paths of the anomaly reports written for one run. A side is `None` when
/// its set was empty and no file was produced.
#[derive(Debug, Clone, Default)]
pub struct ReportPaths {
    pub unknown_names: Option<PathBuf>,
    pub unknown_oids: Option<PathBuf>,
}

/// Renders `document` and writes it to `<output_dir>/<sheet_name>.fsh`,
/// replacing any existing file. The directory is created if absent.
pub fn write_fsh_document(
    output_dir: &Path,
    sheet_name: &str,
    document: &ValueSetDocument,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).with_context(|| format!("create {}", output_dir.display()))?;
    let path = output_dir.join(format!("{sheet_name}.{FSH_EXTENSION}"));
    fs::write(&path, document.render()).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Writes each non-empty anomaly set as a one-column CSV listing in
/// `output_dir`. An empty set produces no file and no log line.
pub fn write_anomaly_reports(output_dir: &Path, anomalies: &AnomalyLog) -> Result<ReportPaths> {
    let mut paths = ReportPaths::default();
    if !anomalies.unknown_names.is_empty() {
        let path = write_listing(
            output_dir,
            UNKNOWN_NAMES_FILE,
            UNKNOWN_NAMES_HEADER,
            anomalies.unknown_names.iter(),
        )?;
        info!(
            count = anomalies.unknown_names.len(),
            path = %path.display(),
            "unknown value set names report written"
        );
        paths.unknown_names = Some(path);
    }
    if !anomalies.unknown_oids.is_empty() {
        let path = write_listing(
            output_dir,
            UNKNOWN_OIDS_FILE,
            UNKNOWN_OIDS_HEADER,
            anomalies.unknown_oids.iter(),
        )?;
        info!(
            count = anomalies.unknown_oids.len(),
            path = %path.display(),
            "unknown code system OIDs report written"
        );
        paths.unknown_oids = Some(path);
    }
    Ok(paths)
}

fn write_listing<'a>(
    output_dir: &Path,
    file_name: &str,
    header: &str,
    values: impl Iterator<Item = &'a String>,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).with_context(|| format!("create {}", output_dir.display()))?;
    let path = output_dir.join(file_name);
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("open {}", path.display()))?;
    writer
        .write_record([header])
        .with_context(|| format!("write header to {}", path.display()))?;
    for value in values {
        writer
            .write_record([value.as_str()])
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Concept;
    use tempfile::TempDir;

    fn test_document() -> ValueSetDocument {
        ValueSetDocument {
            name: "VS1".to_string(),
            title: "Title".to_string(),
            description: "Description".to_string(),
            concepts: vec![Concept {
                code_system_url: "http://example.org/cs".to_string(),
                code: "C1".to_string(),
                description: "Concept one".to_string(),
            }],
        }
    }

    #[test]
    fn test_write_fsh_document_names_file_after_sheet() {
        let dir = TempDir::new().unwrap();
        let path = write_fsh_document(dir.path(), "eHDSI-Test", &test_document()).unwrap();

        assert_eq!(path, dir.path().join("eHDSI-Test.fsh"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("ValueSet: VS1\n"));
    }

    #[test]
    fn test_write_fsh_document_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eHDSI-Test.fsh");
        fs::write(&path, "stale content").unwrap();

        write_fsh_document(dir.path(), "eHDSI-Test", &test_document()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale content"));
    }

    #[test]
    fn test_write_fsh_document_creates_output_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out").join("fsh");

        let path = write_fsh_document(&nested, "eHDSI-Test", &test_document()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_anomaly_log_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let paths = write_anomaly_reports(dir.path(), &AnomalyLog::default()).unwrap();

        assert!(paths.unknown_names.is_none());
        assert!(paths.unknown_oids.is_none());
        assert!(!dir.path().join(UNKNOWN_NAMES_FILE).exists());
        assert!(!dir.path().join(UNKNOWN_OIDS_FILE).exists());
    }

    #[test]
    fn test_unknown_names_report_lists_one_name_per_row() {
        let dir = TempDir::new().unwrap();
        let mut anomalies = AnomalyLog::default();
        anomalies.record_unknown_name("VS2");
        anomalies.record_unknown_name("VS1");

        let paths = write_anomaly_reports(dir.path(), &anomalies).unwrap();
        let path = paths.unknown_names.unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "Unknown Value Set Name\nVS1\nVS2\n");
        assert!(paths.unknown_oids.is_none());
    }

    #[test]
    fn test_unknown_oids_report_is_sorted() {
        let dir = TempDir::new().unwrap();
        let mut anomalies = AnomalyLog::default();
        anomalies.record_unknown_oid("2.4.6");
        anomalies.record_unknown_oid("1.2.3");
        anomalies.record_unknown_oid("2.4.6");

        let paths = write_anomaly_reports(dir.path(), &anomalies).unwrap();
        let path = paths.unknown_oids.unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "Unknown CodeSystem OID\n1.2.3\n2.4.6\n");
    }
}
