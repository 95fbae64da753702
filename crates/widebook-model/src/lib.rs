//! Shared data model for the widebook sheet flattener.
//!
//! - **table**: in-memory workbook, sheet, and wide-table types
//! - **options**: output format selection
//! - **error**: the `CombineError` taxonomy surfaced at the CLI boundary

pub mod error;
pub mod options;
pub mod table;

pub use error::{CombineError, Result};
pub use options::{DEFAULT_OUTPUT_NAME, OutputFormat};
pub use table::{
    BLANK_PREFIX, CellValue, KEY_COLUMN, SLICE_COLUMN, SheetTable, WideRow, WideTable, Workbook,
    format_number,
};
