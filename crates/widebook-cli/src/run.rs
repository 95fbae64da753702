//! End-to-end run: ingest the workbook, flatten it, write the output.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, info_span};

use widebook_ingest::read_workbook;
use widebook_model::{DEFAULT_OUTPUT_NAME, OutputFormat};
use widebook_output::write_table;
use widebook_transform::flatten;

use crate::cli::Cli;

/// Outcome of a successful run, consumed by the summary printer.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub sheet_count: usize,
    pub skipped_sheets: Vec<String>,
    pub row_count: usize,
    /// Pivoted column names, identifier column not included.
    pub columns: Vec<String>,
}

pub fn run(args: &Cli) -> Result<RunResult> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME));
    let format = if args.xlsx {
        OutputFormat::Xlsx
    } else {
        OutputFormat::from_path(&output)
    };

    let span = info_span!("combine", input = %args.input.display());
    let _guard = span.enter();

    let workbook = read_workbook(&args.input)?;
    info!(sheets = workbook.sheets.len(), "loaded workbook");

    let outcome = flatten(&workbook);
    let table = outcome.table;
    info!(
        rows = table.rows.len(),
        columns = table.columns.len() + 1,
        skipped = outcome.skipped_sheets.len(),
        "flattened workbook"
    );

    write_table(&table, &output, format)?;
    info!(output = %output.display(), "wrote combined table");

    Ok(RunResult {
        input: args.input.clone(),
        output,
        format,
        sheet_count: workbook.sheets.len(),
        skipped_sheets: outcome.skipped_sheets,
        row_count: table.rows.len(),
        columns: table.columns,
    })
}
