use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use tracing::debug;

use widebook_model::{BLANK_PREFIX, CellValue, CombineError, Result, SheetTable, Workbook};

/// Read every sheet of an xlsx workbook into memory.
///
/// The input path is checked eagerly so a missing file surfaces as
/// [`CombineError::MissingSource`] before any parsing starts.
pub fn read_workbook(path: &Path) -> Result<Workbook> {
    if !path.exists() {
        return Err(CombineError::MissingSource(path.to_path_buf()));
    }
    let mut book = open_workbook::<Xlsx<BufReader<File>>, _>(path).map_err(|e| CombineError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let names = book.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = book
            .worksheet_range(&name)
            .map_err(|e| CombineError::Read {
                path: path.to_path_buf(),
                reason: format!("sheet {name:?}: {e}"),
            })?;
        let sheet = sheet_from_range(&name, &range);
        debug!(
            sheet = %sheet.name,
            columns = sheet.headers.len(),
            records = sheet.rows.len(),
            "loaded sheet"
        );
        sheets.push(sheet);
    }
    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

/// List sheet names in file order without loading cell data.
pub fn read_sheet_names(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(CombineError::MissingSource(path.to_path_buf()));
    }
    let book = open_workbook::<Xlsx<BufReader<File>>, _>(path).map_err(|e| CombineError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(book.sheet_names().to_vec())
}

fn sheet_from_range(name: &str, range: &Range<Data>) -> SheetTable {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return SheetTable::new(name, Vec::new());
    };
    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| header_name(idx, cell))
        .collect();
    let mut sheet = SheetTable::new(name, headers);
    for record in rows {
        // Pad or truncate each record to the header width.
        let cells: Vec<CellValue> = (0..sheet.headers.len())
            .map(|idx| record.get(idx).map_or(CellValue::Missing, decode_cell))
            .collect();
        if cells.iter().all(CellValue::is_missing) {
            continue;
        }
        sheet.rows.push(cells);
    }
    sheet
}

/// Header cells are trimmed text; anything blank gets a positional
/// placeholder name so downstream code can recognize and drop it.
fn header_name(index: usize, cell: &Data) -> String {
    let text = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => match decode_cell(other) {
            CellValue::Missing => String::new(),
            value => value.render(),
        },
    };
    if text.is_empty() {
        format!("{BLANK_PREFIX}_{index}")
    } else {
        text
    }
}

fn decode_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Missing,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        Data::Bool(b) => CellValue::Text(b.to_string()),
        // Excel serial date; downstream treats it as a plain number.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_headers_get_placeholders() {
        assert_eq!(header_name(0, &Data::String("Nerve".to_string())), "Nerve");
        assert_eq!(header_name(0, &Data::String("  FA ".to_string())), "FA");
        assert_eq!(header_name(3, &Data::Empty), "__BLANK_3");
        assert_eq!(header_name(2, &Data::String("  ".to_string())), "__BLANK_2");
        assert_eq!(header_name(1, &Data::Float(2.0)), "2");
    }

    #[test]
    fn decode_maps_blank_text_to_missing() {
        assert_eq!(decode_cell(&Data::String(" ".to_string())), CellValue::Missing);
        assert_eq!(
            decode_cell(&Data::String(" T1 ".to_string())),
            CellValue::Text("T1".to_string())
        );
        assert_eq!(decode_cell(&Data::Float(0.5)), CellValue::Number(0.5));
        assert_eq!(decode_cell(&Data::Empty), CellValue::Missing);
    }
}
