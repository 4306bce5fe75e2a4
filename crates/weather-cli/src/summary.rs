use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use weather_model::{Measurement, ProcessedRow, ProcessedTable};
use weather_output::{format_date, format_float};

use crate::types::RunResult;

/// Rows shown in the output preview.
const PREVIEW_ROWS: usize = 5;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    println!("{}", counts_table(result));
    println!();
    println!("Weather label mapping:");
    println!("{}", label_table(&result.table));
    if !result.table.is_empty() {
        println!();
        println!("Preview (first {} rows):", PREVIEW_ROWS.min(result.table.len()));
        println!("{}", preview_table(&result.table));
    }
}

fn counts_table(result: &RunResult) -> Table {
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows"), header_cell("Detail")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Read"),
        Cell::new(report.rows_read),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(report.duplicates_removed, Color::Yellow),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Dropped (missing values)"),
        count_cell(report.rows_dropped, Color::Yellow),
        dim_cell("-"),
    ]);
    for (measurement, fill) in &report.filled {
        table.add_row(vec![
            Cell::new(format!("Filled {measurement}")),
            count_cell(fill.cells, Color::Yellow),
            Cell::new(format!("mean {}", format_float(fill.value))),
        ]);
    }
    table.add_row(vec![
        Cell::new("Written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.rows_written).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

fn label_table(processed: &ProcessedTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Weather"), header_cell("Code")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, code) in processed.label_mapping.iter() {
        table.add_row(vec![Cell::new(label), Cell::new(code)]);
    }
    table
}

fn preview_table(processed: &ProcessedTable) -> Table {
    let mut table = Table::new();
    table.set_header(
        processed
            .column_names()
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in processed.rows.iter().take(PREVIEW_ROWS) {
        table.add_row(preview_cells(row));
    }
    table
}

fn preview_cells(row: &ProcessedRow) -> Vec<Cell> {
    let record = &row.record;
    let mut cells = vec![Cell::new(format_date(record.date))];
    cells.extend(
        Measurement::ALL
            .iter()
            .map(|m| Cell::new(format_float(record.measurement(*m)))),
    );
    cells.push(Cell::new(&record.weather));
    cells.push(Cell::new(row.weather_code));
    if let Some(scaled) = &row.scaled {
        cells.extend(scaled.iter().map(|value| Cell::new(format!("{value:.3}"))));
    }
    cells
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
        .set_width(80);
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
