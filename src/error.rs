//! Error types for product loading and cage packing.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for packer processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Record could not be processed (-3)
    Processing = -3,
    /// Product can never fit in a cage (E100)
    UnpackableProduct = 100,
    /// Cage limit reached with products left (E101)
    CageLimitExceeded = 101,
}

/// Main error type for the packer.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Missing data item '{field}' at line {line}")]
    MissingField { line: usize, field: String },

    #[error("Data item invalid type at line {line}: '{field}' = '{value}'")]
    InvalidValue {
        line: usize,
        field: String,
        value: String,
    },

    #[error("Product {product_id} cannot be packed: {reason}")]
    UnpackableProduct { product_id: u64, reason: String },

    #[error("Validation failed: {} product(s) cannot be packed", .errors.len())]
    ValidationFailed { errors: Vec<String> },

    #[error("Cage limit of {limit} reached with {remaining} product(s) left to pack")]
    CageLimitExceeded { limit: usize, remaining: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PackError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PackError::EmptyFile { .. } => ErrorCode::EmptyFile,
            PackError::MissingField { .. } => ErrorCode::Processing,
            PackError::InvalidValue { .. } => ErrorCode::Processing,
            PackError::UnpackableProduct { .. } => ErrorCode::UnpackableProduct,
            PackError::ValidationFailed { .. } => ErrorCode::UnpackableProduct,
            PackError::CageLimitExceeded { .. } => ErrorCode::CageLimitExceeded,
            PackError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether this error only affects a single input record.
    pub fn is_processing(&self) -> bool {
        self.code() == ErrorCode::Processing
    }
}

/// Result type alias for packer operations.
pub type Result<T> = std::result::Result<T, PackError>;
