use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use mvc_cli::types::{RunResult, SheetStatus};

pub fn print_summary(result: &RunResult) {
    println!("Catalogue: {}", result.catalogue.display());
    println!("Output: {}", result.output_dir.display());
    println!(
        "Metadata: {} value sets, {} code systems",
        result.value_set_count, result.code_system_count
    );
    if let Some(path) = &result.unknown_name_report {
        println!("Unknown names report: {}", path.display());
    }
    if let Some(path) = &result.unknown_oid_report {
        println!("Unknown OIDs report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Value Set"),
        header_cell("Status"),
        header_cell("Concepts"),
        header_cell("Unresolved"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    let mut total_concepts = 0usize;
    let mut total_unresolved = 0usize;
    let mut converted = 0usize;
    for summary in &result.sheets {
        total_concepts += summary.concept_count;
        total_unresolved += summary.unresolved_oids;
        if summary.status == SheetStatus::Converted {
            converted += 1;
        }
        table.add_row(vec![
            Cell::new(&summary.sheet_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&summary.value_set_name),
            status_cell(summary.status),
            Cell::new(summary.concept_count),
            count_cell(summary.unresolved_oids, Color::Yellow),
            output_cell(summary.output.as_ref()),
        ]);
    }
    let skipped = result.sheets.len() - converted;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("All sheets")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{converted} converted / {skipped} skipped"))
            .add_attribute(Attribute::Bold),
        Cell::new(total_concepts).add_attribute(Attribute::Bold),
        count_cell(total_unresolved, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn status_cell(status: SheetStatus) -> Cell {
    match status {
        SheetStatus::Converted => Cell::new("CONVERTED").fg(Color::Green),
        SheetStatus::UnknownValueSet => Cell::new("UNKNOWN NAME").fg(Color::Yellow),
        SheetStatus::NotInPackage => Cell::new("NOT IN PACKAGE").fg(Color::DarkGrey),
    }
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
