//! Writers for the flattened wide table.
//!
//! Both writers emit the same layout: a header row whose first cell is the
//! empty string (the identifier column), then one row per sheet. The table
//! is fully assembled in memory before either writer runs, so a failed run
//! never leaves a partially-written destination behind.

pub mod csv;
pub mod xlsx;

use std::path::Path;

use widebook_model::{OutputFormat, Result, WideTable};

pub use crate::csv::write_csv;
pub use crate::xlsx::write_xlsx;

/// Write the table to `path` in the given format.
pub fn write_table(table: &WideTable, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(table, path),
        OutputFormat::Xlsx => write_xlsx(table, path),
    }
}
