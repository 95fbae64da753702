//! Post-run console summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Column, ContentArrangement, Table};

use widebook_model::OutputFormat;

use crate::run::RunResult;

/// How many derived column names to preview after a run.
const COLUMN_PREVIEW: usize = 5;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!(
        "Output: {} ({})",
        result.output.display(),
        format_label(result.format)
    );

    let mut table = Table::new();
    table.set_header(vec!["Sheets", "Rows", "Columns", "Skipped"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(result.sheet_count),
        Cell::new(result.row_count),
        // +1 for the leading identifier column
        Cell::new(result.columns.len() + 1),
        Cell::new(result.skipped_sheets.len()),
    ]);
    println!("{table}");

    if !result.skipped_sheets.is_empty() {
        println!("Skipped (no Nerve column): {}", result.skipped_sheets.join(", "));
    }

    println!("  Column 0: [empty - contains sheet names]");
    for (idx, name) in result.columns.iter().take(COLUMN_PREVIEW).enumerate() {
        println!("  Column {}: {name}", idx + 1);
    }
    if result.columns.len() > COLUMN_PREVIEW {
        println!("  ... {} more", result.columns.len() - COLUMN_PREVIEW);
    }
}

fn format_label(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Csv => "csv",
        OutputFormat::Xlsx => "xlsx",
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for column in table.column_iter_mut() {
        align_right(column);
    }
}

fn align_right(column: &mut Column) {
    column.set_cell_alignment(CellAlignment::Right);
}
