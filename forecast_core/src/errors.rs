//! # Error Types
//!
//! Structured error types for forecast_core. The estimator never surfaces
//! these to HTTP clients; they drive the zero-estimate fallback and end up
//! in the logs, so they carry enough context to find the offending input.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::errors::{ForecastError, ForecastResult};
//!
//! fn validate_budget(budget: f64) -> ForecastResult<()> {
//!     if !budget.is_finite() {
//!         return Err(ForecastError::invalid_input(
//!             "budget",
//!             budget.to_string(),
//!             "Budget must be a finite number",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_budget(f64::NAN).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for forecast_core operations
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Structured error type for estimation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ForecastError {
    /// An input value cannot be used by the formula (NaN, infinite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A computed quantity overflowed to a non-finite value
    #[error("Non-finite result for {material} at budget {budget}")]
    NonFiniteResult { material: String, budget: f64 },
}

impl ForecastError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ForecastError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NonFiniteResult error
    pub fn non_finite_result(material: impl Into<String>, budget: f64) -> Self {
        ForecastError::NonFiniteResult {
            material: material.into(),
            budget,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ForecastError::InvalidInput { .. } => "INVALID_INPUT",
            ForecastError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
        }
    }
}
