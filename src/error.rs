use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VentasError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{what} not found at {}", path.display())]
    FileNotFound { what: &'static str, path: PathBuf },

    #[cfg(feature = "xlsx")]
    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Error writing report to {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, VentasError>;
