use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    Csv(String),
    Xlsx(String),
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Csv(msg) => write!(f, "CSV export error: {msg}"),
            ExportError::Xlsx(msg) => write!(f, "XLSX export error: {msg}"),
            ExportError::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}
