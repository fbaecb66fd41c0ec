/// Error Module
///
/// Defines the crate-wide error type for the ambient surfaces that return
/// `Result` (configuration loading, file access). Query-level failures never
/// travel through this type: they are reported as outcome values on the
/// database handle and through the logging collaborator.
use thiserror::Error;

/// Error type for the access layer's fallible ambient operations.
#[derive(Error, Debug)]
pub enum DaliteError {
    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result to use DaliteError as the error type.
pub type Result<T> = std::result::Result<T, DaliteError>;
