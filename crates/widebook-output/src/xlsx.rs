use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use widebook_model::{CellValue, CombineError, Result, WideTable};

/// Write the table as a single-worksheet xlsx workbook. Missing cells are
/// left empty rather than written as empty strings.
pub fn write_xlsx(table: &WideTable, path: &Path) -> Result<()> {
    let write_err = |reason: String| CombineError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Header row: identifier column first, with an empty-string header.
    worksheet
        .write_string(0, 0, "")
        .map_err(|e| write_err(e.to_string()))?;
    for (idx, column) in table.columns.iter().enumerate() {
        let col = column_number(idx + 1).map_err(&write_err)?;
        worksheet
            .write_string(0, col, column)
            .map_err(|e| write_err(e.to_string()))?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = u32::try_from(row_idx + 1).map_err(|_| write_err("row overflow".into()))?;
        worksheet
            .write_string(row_num, 0, &row.sheet_name)
            .map_err(|e| write_err(e.to_string()))?;
        for (idx, column) in table.columns.iter().enumerate() {
            let col = column_number(idx + 1).map_err(&write_err)?;
            match row.cell(column) {
                CellValue::Missing => {}
                CellValue::Number(v) => {
                    worksheet
                        .write_number(row_num, col, *v)
                        .map_err(|e| write_err(e.to_string()))?;
                }
                CellValue::Text(s) => {
                    worksheet
                        .write_string(row_num, col, s)
                        .map_err(|e| write_err(e.to_string()))?;
                }
            }
        }
    }

    workbook.save(path).map_err(|e| write_err(e.to_string()))?;
    debug!(path = %path.display(), rows = table.rows.len(), "wrote xlsx");
    Ok(())
}

fn column_number(index: usize) -> std::result::Result<u16, String> {
    u16::try_from(index).map_err(|_| "column overflow".to_string())
}
