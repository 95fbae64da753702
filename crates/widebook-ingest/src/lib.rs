//! Workbook ingestion for the widebook flattener.
//!
//! Reads an xlsx file into the in-memory [`widebook_model::Workbook`]
//! structure: sheets in file order, first row as headers, blank headers
//! materialized as `__BLANK_{index}` placeholders.

pub mod workbook;

pub use workbook::{read_sheet_names, read_workbook};
