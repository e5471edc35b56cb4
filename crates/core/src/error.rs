use thiserror::Error;

pub type ReportingResult<T> = Result<T, ReportingError>;

#[derive(Error, Debug)]
pub enum ReportingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid page size: {given} (must be at least 1)")]
    InvalidPageSize { given: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
