use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use mvc_cli::pipeline::{ConvertResult, IngestResult, convert_sheets, ingest, write_reports};
use mvc_cli::types::{RunResult, SheetStatus, SheetSummary};

use crate::cli::ConvertArgs;

pub fn run_convert(args: &ConvertArgs) -> Result<RunResult> {
    let run_span = info_span!("run", catalogue = %args.catalogue.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    // =========================================================================
    // Stage 1: Ingest - Load lookup tables and catalogue sheets
    // =========================================================================
    let IngestResult { metadata, sheets } = ingest(&args.catalogue, &args.metadata)?;

    // =========================================================================
    // Stage 2: Convert - Write one FSH document per eligible sheet
    // =========================================================================
    let ConvertResult {
        sheets: conversions,
        anomalies,
    } = convert_sheets(&sheets, &metadata, &args.output_dir)?;

    // =========================================================================
    // Stage 3: Report - Write anomaly listings
    // =========================================================================
    let reports = write_reports(&anomalies, &args.output_dir)?;

    let converted = conversions
        .iter()
        .filter(|c| c.status == SheetStatus::Converted)
        .count();
    info!(
        sheet_count = conversions.len(),
        converted,
        skipped = conversions.len() - converted,
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        catalogue: args.catalogue.clone(),
        output_dir: args.output_dir.clone(),
        value_set_count: metadata.value_set_count(),
        code_system_count: metadata.code_system_count(),
        sheets: conversions
            .into_iter()
            .map(|conversion| SheetSummary {
                sheet_name: conversion.sheet_name,
                value_set_name: conversion.value_set_name,
                status: conversion.status,
                concept_count: conversion.concept_count,
                unresolved_oids: conversion.unresolved_oids,
                output: conversion.output_path,
            })
            .collect(),
        unknown_name_report: reports.unknown_names,
        unknown_oid_report: reports.unknown_oids,
    })
}
