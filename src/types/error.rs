use thiserror::Error;

/// bakecal error types
#[derive(Error, Debug)]
pub enum BakecalError {
    /// Event form input rejected
    #[error("invalid event: {0}")]
    Validation(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Events file could not be read or written
    #[error("store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// No event with the given id
    #[error("event not found: {0}")]
    NotFound(String),
}

/// Result type alias for bakecal
pub type Result<T> = std::result::Result<T, BakecalError>;
