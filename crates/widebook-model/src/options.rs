use std::path::Path;

/// Output filename used when the caller does not supply one.
pub const DEFAULT_OUTPUT_NAME: &str = "combined_output.csv";

/// Output formats supported by the writer layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutputFormat {
    Csv,
    Xlsx,
}

impl OutputFormat {
    /// Pick the format from the destination suffix: `.xlsx` selects a
    /// workbook, anything else is comma-separated text.
    pub fn from_path(path: &Path) -> Self {
        let is_xlsx = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
        if is_xlsx {
            OutputFormat::Xlsx
        } else {
            OutputFormat::Csv
        }
    }
}
