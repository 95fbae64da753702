use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombineError {
    #[error("input workbook not found: {}", .0.display())]
    MissingSource(PathBuf),
    #[error("failed to read workbook {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },
    #[error("sheet {sheet:?} has no \"Nerve\" column")]
    Schema { sheet: String },
    #[error("failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CombineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn messages_name_the_offender() {
        let missing = CombineError::MissingSource(PathBuf::from("data.xlsx"));
        assert_eq!(missing.to_string(), "input workbook not found: data.xlsx");

        let schema = CombineError::Schema {
            sheet: "notes".to_string(),
        };
        assert_eq!(schema.to_string(), "sheet \"notes\" has no \"Nerve\" column");

        let write = CombineError::Write {
            path: PathBuf::from("out.csv"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            write.to_string(),
            "failed to write out.csv: permission denied"
        );
    }
}
