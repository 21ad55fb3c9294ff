//! Error types for cut-list nesting.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for nesting pipeline failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Required column missing from header (-11)
    MissingColumn = -11,
    /// Part too large for the sheet in both orientations (E100)
    OversizedPart = 100,
    /// Sheet count exceeded the defensive cap (E101)
    SheetBudgetExceeded = 101,
    /// Cut list rejected by validation (E200)
    ValidationFailed = 200,
}

/// Main error type for the nesting pipeline.
#[derive(Debug, Error)]
pub enum NestError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Missing required column '{column}' in header")]
    MissingColumn { column: String },

    #[error("Invalid numeric value at line {line}: {value}")]
    InvalidNumber { line: usize, value: String },

    #[error("Row at line {line} has {found} fields, expected at least {expected}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error(
        "Part {length} x {height} does not fit a {sheet_width} x {sheet_height} sheet in either orientation"
    )]
    OversizedPart {
        length: f64,
        height: f64,
        sheet_width: f64,
        sheet_height: f64,
    },

    #[error("Nesting produced {sheets} sheets for {parts} parts, aborting")]
    SheetBudgetExceeded { sheets: usize, parts: usize },

    #[error("Cut list validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NestError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            NestError::FileNotFound { .. } => ErrorCode::FileNotFound,
            NestError::EmptyFile { .. } => ErrorCode::EmptyFile,
            NestError::MissingColumn { .. } => ErrorCode::MissingColumn,
            NestError::InvalidNumber { .. } => ErrorCode::ParseError,
            NestError::ShortRow { .. } => ErrorCode::ParseError,
            NestError::OversizedPart { .. } => ErrorCode::OversizedPart,
            NestError::SheetBudgetExceeded { .. } => ErrorCode::SheetBudgetExceeded,
            NestError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            NestError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for nesting operations.
pub type Result<T> = std::result::Result<T, NestError>;
