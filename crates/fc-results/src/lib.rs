//! fc-results: exported residual-profile artifacts.

pub mod export;

pub use export::{read_csv, write_csv, write_json, CSV_HEADER, DEFAULT_CSV_NAME};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed CSV line {line_no}: {message}")]
    MalformedCsv { line_no: usize, message: String },
}
