//! # Error Types
//!
//! Structured error types for trade_core. Every failure is a caller-side
//! input problem: either a numeric field is outside its declared domain or
//! an enumerated field names a category that has no table entry. There is
//! no retry policy; an evaluation either completes or fails here.
//!
//! ## Example
//!
//! ```rust
//! use trade_core::errors::{CalcError, CalcResult};
//!
//! fn validate_run_length(length_m: f64) -> CalcResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "run_length_m".to_string(),
//!             value: length_m.to_string(),
//!             reason: "Run length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for trade_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator evaluation.
///
/// Each variant carries enough context for the presentation layer to tell
/// the user which field to fix and what the accepted values are.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A numeric input is missing its domain (non-finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A conditionally-required field was not supplied
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An enumerated field does not match any declared table key
    #[error("Unknown category for '{field}': '{value}' (expected one of: {expected})")]
    UnknownCategory {
        field: String,
        value: String,
        expected: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownCategory error listing the accepted keys
    pub fn unknown_category(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        CalcError::UnknownCategory {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("run_length_m", "-12.0", "Run length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_unknown_category_lists_keys() {
        let error = CalcError::unknown_category("glazing", "quadruple", &["single", "double", "triple"]);
        let message = error.to_string();
        assert!(message.contains("quadruple"));
        assert!(message.contains("single, double, triple"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("loads").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::unknown_category("room", "garage", &["living"]).error_code(),
            "UNKNOWN_CATEGORY"
        );
    }
}
