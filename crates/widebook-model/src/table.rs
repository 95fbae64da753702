use std::collections::BTreeMap;
use std::path::PathBuf;

/// The categorical key column every sheet is expected to carry.
pub const KEY_COLUMN: &str = "Nerve";

/// Reader artifact column excluded from the metric set.
pub const SLICE_COLUMN: &str = "slice";

/// Prefix assigned to headerless columns by the ingest layer.
pub const BLANK_PREFIX: &str = "__BLANK";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Render for delimited output; `Missing` renders as the empty string.
    pub fn render(&self) -> String {
        match self {
            CellValue::Number(v) => format_number(*v),
            CellValue::Text(s) => s.clone(),
            CellValue::Missing => String::new(),
        }
    }
}

/// Format a number for output, stripping insignificant trailing zeros.
pub fn format_number(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// One sheet of the source workbook: a header row plus data records in
/// native order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

/// An ordered collection of sheets, in file order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Workbook {
    pub path: PathBuf,
    pub sheets: Vec<SheetTable>,
}

/// One output row: the source sheet name plus the pivoted cells keyed by
/// `{nerve}_{metric}` column name.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct WideRow {
    pub sheet_name: String,
    pub cells: BTreeMap<String, CellValue>,
}

impl WideRow {
    /// Cell under the given column, `Missing` when the sheet never
    /// produced that column.
    pub fn cell(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&CellValue::Missing)
    }
}

/// The flattened table. `columns` holds the pivoted column names in their
/// final sorted order; the leading identifier column (empty-string header)
/// is implicit and emitted by the writers.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct WideTable {
    pub columns: Vec<String>,
    pub rows: Vec<WideRow>,
}
