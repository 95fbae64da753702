use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use widebook_model::{
    BLANK_PREFIX, CellValue, KEY_COLUMN, SLICE_COLUMN, SheetTable, WideRow, WideTable, Workbook,
    format_number,
};

/// Result of flattening a workbook: the combined table plus the names of
/// sheets that were dropped because they carry no key column.
#[derive(Debug, Default)]
pub struct FlattenOutcome {
    pub table: WideTable,
    pub skipped_sheets: Vec<String>,
}

/// Flatten a workbook into one wide row per sheet.
///
/// Rows are ordered by sheet name (ascending lexicographic) and columns by
/// name, so the output is deterministic for a given input. Sheets without a
/// `Nerve` column contribute no row; they are logged and reported in
/// [`FlattenOutcome::skipped_sheets`].
pub fn flatten(workbook: &Workbook) -> FlattenOutcome {
    let mut columns: BTreeSet<String> = BTreeSet::new();
    let mut rows: Vec<WideRow> = Vec::with_capacity(workbook.sheets.len());
    let mut skipped_sheets = Vec::new();

    for sheet in &workbook.sheets {
        match flatten_sheet(sheet) {
            Some(row) => {
                columns.extend(row.cells.keys().cloned());
                debug!(sheet = %sheet.name, cells = row.cells.len(), "flattened sheet");
                rows.push(row);
            }
            None => {
                warn!(sheet = %sheet.name, "sheet has no {KEY_COLUMN} column, dropping");
                skipped_sheets.push(sheet.name.clone());
            }
        }
    }

    rows.sort_by(|a, b| a.sheet_name.cmp(&b.sheet_name));
    FlattenOutcome {
        table: WideTable {
            columns: columns.into_iter().collect(),
            rows,
        },
        skipped_sheets,
    }
}

/// Pivot one sheet into a wide row, or `None` when the sheet has no key
/// column at all.
fn flatten_sheet(sheet: &SheetTable) -> Option<WideRow> {
    let key_index = sheet.column_index(KEY_COLUMN)?;
    let metric_columns: Vec<(usize, &str)> = sheet
        .headers
        .iter()
        .enumerate()
        .filter(|(index, header)| {
            *index != key_index && *header != SLICE_COLUMN && !header.starts_with(BLANK_PREFIX)
        })
        .map(|(index, header)| (index, header.as_str()))
        .collect();

    let mut cells: BTreeMap<String, CellValue> = BTreeMap::new();
    for record in &sheet.rows {
        // Records without a key value are trailing blanks, not data.
        let Some(nerve) = record.get(key_index).and_then(key_text) else {
            continue;
        };
        for &(index, header) in &metric_columns {
            let value = record.get(index).cloned().unwrap_or(CellValue::Missing);
            // Later records with the same key overwrite earlier ones,
            // Missing included (last write wins).
            cells.insert(format!("{nerve}_{header}"), value);
        }
    }

    Some(WideRow {
        sheet_name: sheet.name.clone(),
        cells,
    })
}

/// The key value as trimmed text. Numeric keys pivot under their rendered
/// form; blank or missing keys drop the record.
fn key_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Missing => None,
        CellValue::Text(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        CellValue::Number(v) => Some(format_number(*v)),
    }
}
