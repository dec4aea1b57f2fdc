//! Conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Load the metadata lookup tables and extract catalogue sheets
//! 2. **Convert**: Assemble and write one FSH document per eligible sheet
//! 3. **Report**: Write CSV listings of the anomalies accumulated on the way
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use mvc_fsh::{ReportPaths, ValueSetDocument, write_anomaly_reports, write_fsh_document};
use mvc_ingest::{load_metadata, read_catalogue_sheets};
use mvc_model::sheet::UNKNOWN_CODE_SYSTEM;
use mvc_model::{AnomalyLog, MvcMetadata, ValueSetSheet};

use crate::types::SheetStatus;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// Lookup tables built from the metadata workbook.
    pub metadata: MvcMetadata,
    /// Catalogue sheets in workbook order, non-catalogue sheets dropped.
    pub sheets: Vec<ValueSetSheet>,
}

/// Load both workbooks.
///
/// This stage:
/// - Builds the value-set and code-system lookup tables from the metadata workbook
/// - Extracts every catalogue sheet from the catalogue workbook
pub fn ingest(catalogue: &Path, metadata_path: &Path) -> Result<IngestResult> {
    let ingest_span = info_span!(
        "ingest",
        catalogue = %catalogue.display(),
        metadata = %metadata_path.display()
    );
    let _ingest_guard = ingest_span.enter();
    let ingest_start = Instant::now();

    let metadata = load_metadata(metadata_path)?;
    info!(
        value_sets = metadata.value_set_count(),
        code_systems = metadata.code_system_count(),
        "metadata loaded"
    );

    let sheets = read_catalogue_sheets(catalogue)?;
    info!(
        sheet_count = sheets.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    Ok(IngestResult { metadata, sheets })
}

// ============================================================================
// Stage 2: Convert
// ============================================================================

/// Outcome of one catalogue sheet.
#[derive(Debug)]
pub struct SheetConversion {
    pub sheet_name: String,
    pub value_set_name: String,
    pub status: SheetStatus,
    pub concept_count: usize,
    /// Concepts whose OID had no code-system mapping.
    pub unresolved_oids: usize,
    /// Written FSH document, `None` for skipped sheets.
    pub output_path: Option<PathBuf>,
}

/// Result of the convert stage.
#[derive(Debug)]
pub struct ConvertResult {
    /// One outcome per catalogue sheet, in workbook order.
    pub sheets: Vec<SheetConversion>,
    /// Unknown names and OIDs accumulated across all sheets.
    pub anomalies: AnomalyLog,
}

/// Convert each eligible sheet into an FSH document under `output_dir`.
///
/// A sheet is eligible when its value-set name has a metadata entry whose
/// package flag marks it for conversion. Skips are expected behavior and
/// are recorded, never raised.
pub fn convert_sheets(
    sheets: &[ValueSetSheet],
    metadata: &MvcMetadata,
    output_dir: &Path,
) -> Result<ConvertResult> {
    let convert_span = info_span!("convert", output_dir = %output_dir.display());
    let _convert_guard = convert_span.enter();
    let convert_start = Instant::now();

    let mut anomalies = AnomalyLog::default();
    let mut conversions = Vec::with_capacity(sheets.len());

    for sheet in sheets {
        let Some(meta) = metadata.value_set(&sheet.value_set_name) else {
            info!(
                sheet = %sheet.sheet_name,
                value_set = %sheet.value_set_name,
                "sheet skipped: value set not in metadata"
            );
            anomalies.record_unknown_name(&sheet.value_set_name);
            conversions.push(SheetConversion {
                sheet_name: sheet.sheet_name.clone(),
                value_set_name: sheet.value_set_name.clone(),
                status: SheetStatus::UnknownValueSet,
                concept_count: sheet.concept_count(),
                unresolved_oids: 0,
                output_path: None,
            });
            continue;
        };

        if !meta.in_package() {
            info!(
                sheet = %sheet.sheet_name,
                value_set = %sheet.value_set_name,
                package = meta.package,
                "sheet skipped: value set not in package"
            );
            anomalies.record_unknown_name(&sheet.value_set_name);
            conversions.push(SheetConversion {
                sheet_name: sheet.sheet_name.clone(),
                value_set_name: sheet.value_set_name.clone(),
                status: SheetStatus::NotInPackage,
                concept_count: sheet.concept_count(),
                unresolved_oids: 0,
                output_path: None,
            });
            continue;
        }

        info!(
            sheet = %sheet.sheet_name,
            value_set = %sheet.value_set_name,
            concepts = sheet.concept_count(),
            "processing sheet"
        );
        let document = ValueSetDocument::assemble(sheet, meta, metadata, &mut anomalies);
        let unresolved_oids = document
            .concepts
            .iter()
            .filter(|concept| concept.code_system_url == UNKNOWN_CODE_SYSTEM)
            .count();
        let path = write_fsh_document(output_dir, &sheet.sheet_name, &document)
            .with_context(|| format!("write FSH document for sheet {}", sheet.sheet_name))?;
        conversions.push(SheetConversion {
            sheet_name: sheet.sheet_name.clone(),
            value_set_name: sheet.value_set_name.clone(),
            status: SheetStatus::Converted,
            concept_count: sheet.concept_count(),
            unresolved_oids,
            output_path: Some(path),
        });
    }

    let converted = conversions
        .iter()
        .filter(|c| c.status == SheetStatus::Converted)
        .count();
    info!(
        converted,
        skipped = conversions.len() - converted,
        duration_ms = convert_start.elapsed().as_millis(),
        "conversion complete"
    );

    Ok(ConvertResult {
        sheets: conversions,
        anomalies,
    })
}

// ============================================================================
// Stage 3: Report
// ============================================================================

/// Write the anomaly listings. Empty sets produce no files.
pub fn write_reports(anomalies: &AnomalyLog, output_dir: &Path) -> Result<ReportPaths> {
    let report_span = info_span!("report", output_dir = %output_dir.display());
    let _report_guard = report_span.enter();
    write_anomaly_reports(output_dir, anomalies).context("write anomaly reports")
}
