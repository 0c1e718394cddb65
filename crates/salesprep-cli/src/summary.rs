use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use salesprep_cli::pipeline::ConversionResult;
use salesprep_model::CellValue;

pub fn print_summary(result: &ConversionResult) {
    println!("Source: {}", result.source.display());
    println!();
    println!("First few rows:");
    println!("{}", preview_table(&result.preview));
    println!();
    println!("Column names:");
    println!("{:?}", result.source_columns);
    let (rows, columns) = result.source_shape;
    println!();
    println!("Shape: ({rows}, {columns})");
    println!("Sampled {} records", result.records.len());
    print_mapping_notes(result);
    println!();
    println!("Output: {}", result.output.display());
    println!("Total records: {}", result.records.len());
    if let Some(record) = result.records.first()
        && let Ok(json) = serde_json::to_string_pretty(&record)
    {
        println!();
        println!("Sample record:");
        println!("{json}");
    }
}

fn print_mapping_notes(result: &ConversionResult) {
    let report = &result.mapping;
    if !report.passthrough.is_empty() {
        println!("Unmapped columns kept as-is: {}", report.passthrough.join(", "));
    }
    if !report.missing.is_empty() {
        println!("Expected columns not found: {}", report.missing.join(", "));
    }
    for dropped in &report.dropped {
        println!(
            "Dropped column '{}': '{}' already present",
            dropped.source, dropped.target
        );
    }
}

fn preview_table(preview: &salesprep_model::Table) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(preview.columns().iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table);
    for (idx, row) in preview.rows().iter().enumerate() {
        let mut cells = vec![dim_cell(idx)];
        cells.extend(row.iter().map(value_cell));
        table.add_row(cells);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn value_cell(value: &CellValue) -> Cell {
    if value.is_missing() {
        dim_cell("NaN")
    } else {
        Cell::new(value)
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
