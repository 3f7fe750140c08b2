//! # Error Types
//!
//! Structured error types for calc_core. Every failure a cost run can hit
//! maps to one variant, so callers (the CLI, or anything wrapping the library)
//! can branch on the kind of failure instead of parsing messages.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_lifespan(years: f64) -> CalcResult<()> {
//!     if years <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "machine_lifespan_years",
//!             years.to_string(),
//!             "Lifespan must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_lifespan(0.0).is_err());
//! ```

use serde::Serialize;
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for cost calculation operations.
#[derive(Error, Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The referenced input file does not exist
    #[error("Input file not found: '{path}'")]
    InputNotFound { path: String },

    /// The input does not parse into the expected schema
    #[error("Malformed input in '{path}': {reason}")]
    MalformedInput { path: String, reason: String },

    /// A syntactically valid input violates a domain constraint
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Calculation produced a non-finite figure
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InputNotFound error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        CalcError::InputNotFound { path: path.into() }
    }

    /// Create a MalformedInput error
    pub fn malformed_input(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InputNotFound { .. } => "INPUT_NOT_FOUND",
            CalcError::MalformedInput { .. } => "MALFORMED_INPUT",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError { reason: e.to_string() }
    }
}
