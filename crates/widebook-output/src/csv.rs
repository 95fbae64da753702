use std::path::Path;

use tracing::debug;

use widebook_model::{CombineError, Result, WideTable};

/// Write the table as comma-separated text. Missing cells become empty
/// fields; numbers are rendered with insignificant trailing zeros stripped.
pub fn write_csv(table: &WideTable, path: &Path) -> Result<()> {
    let write_err = |reason: String| CombineError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(|e| write_err(e.to_string()))?;

    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push(String::new());
    header.extend(table.columns.iter().cloned());
    writer
        .write_record(&header)
        .map_err(|e| write_err(e.to_string()))?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(table.columns.len() + 1);
        record.push(row.sheet_name.clone());
        for column in &table.columns {
            record.push(row.cell(column).render());
        }
        writer
            .write_record(&record)
            .map_err(|e| write_err(e.to_string()))?;
    }

    writer.flush().map_err(|e| write_err(e.to_string()))?;
    debug!(path = %path.display(), rows = table.rows.len(), "wrote csv");
    Ok(())
}
