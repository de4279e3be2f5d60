use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("unsupported rows per page {0}, expected one of 10, 20 or 30")]
    UnsupportedRowsPerPage(usize),

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("failed to parse dataset json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
