//! # Error Types
//!
//! Structured error types for bridge_core. Every failure the application can
//! surface to the user maps onto one of these variants: input validation
//! failures become [`BridgeError::InvalidInput`], file write failures become
//! [`BridgeError::FileError`]. A cancelled save dialog is not an error and
//! never reaches this type.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::errors::{BridgeError, BridgeResult};
//!
//! fn validate_span(span_m: f64) -> BridgeResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(BridgeError::invalid_input(
//!             "span",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bridge_core operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Structured error type for calculation and file operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BridgeError {
    /// An input value failed to parse or violated a constraint
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
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

impl BridgeError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BridgeError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BridgeError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }
}
