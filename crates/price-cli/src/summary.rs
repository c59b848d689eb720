//! Terminal tables for search results and ingestion summaries.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use price_model::{IngestReport, ProductRecord, format_number, format_unit_price};

/// Search result columns, matching the HTML report.
pub const RESULT_HEADERS: [&str; 6] = [
    "№",
    "Наименование",
    "Цена",
    "Вес",
    "Файл",
    "Цена за кг",
];

/// Builds the results table; `№` is the 1-based position in `records`.
pub fn results_table(records: &[ProductRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(RESULT_HEADERS.iter().map(|label| header_cell(label)));
    apply_table_style(&mut table);
    for column in [0, 2, 3, 5] {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for (position, record) in records.iter().enumerate() {
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(&record.name),
            Cell::new(format_number(record.price)),
            Cell::new(format_number(record.weight)),
            dim_cell(&record.source_file),
            Cell::new(format_unit_price(record.unit_price())).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

/// Per-file status table for a folder load.
pub fn ingest_table(report: &IngestReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Records"),
        header_cell("Duplicates"),
        header_cell("Rejected"),
        header_cell("Note"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 2..=4 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for file in &report.files {
        let status = if file.rejected > 0 {
            Cell::new("partial").fg(Color::Yellow)
        } else {
            Cell::new("loaded").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(&file.file),
            status,
            Cell::new(file.records),
            count_cell(file.duplicates, Color::DarkGrey),
            count_cell(file.rejected, Color::Yellow),
            dim_cell("-"),
        ]);
    }
    for skipped in &report.skipped {
        table.add_row(vec![
            Cell::new(&skipped.file),
            Cell::new("skipped").fg(Color::DarkGrey),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(skipped.reason.to_string()),
        ]);
    }
    for failed in &report.failed {
        table.add_row(vec![
            Cell::new(&failed.file),
            Cell::new("failed")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(&failed.message),
        ]);
    }
    table
}

pub fn print_ingest_summary(report: &IngestReport) {
    println!(
        "Loaded {} records from {} price lists",
        report.inserted(),
        report.files.len()
    );
    if report.files.is_empty() && report.skipped.is_empty() && report.failed.is_empty() {
        println!("No price lists found.");
        return;
    }
    println!("{}", ingest_table(report));
    if !report.row_errors.is_empty() {
        eprintln!("Rejected rows:");
        for row in &report.row_errors {
            eprintln!("- {}: {}", row.file, row.error);
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
