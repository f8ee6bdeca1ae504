//! # Error Types
//!
//! Structured error types for calc_core. Every fault the engine can raise is
//! recoverable at the engine boundary: `apply` returns an error-tagged result,
//! the engine locks itself behind an error indicator, and `AC` resumes normal
//! input. Nothing here panics or aborts the host.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_divide(a: f64, b: f64) -> CalcResult<f64> {
//!     if b == 0.0 {
//!         return Err(CalcError::DivisionByZero);
//!     }
//!     Ok(a / b)
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for engine operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling by hosts (show indicator, log, snapshot as JSON).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Display text failed to parse as a number.
    ///
    /// Should not occur while the display invariants hold; handled
    /// defensively rather than unwrapped.
    #[error("Cannot parse '{text}' as a number")]
    ParseError { text: String },

    /// Equals pressed with a pending divide and a zero right operand
    #[error("Division by zero")]
    DivisionByZero,

    /// Square root requested for a negative display value
    #[error("Square root of negative number {value}")]
    DomainError { value: f64 },

    /// Arithmetic produced a non-finite value (overflow to infinity, or NaN)
    #[error("Result is not a finite number")]
    Overflow,

    /// A host passed a label outside the 20 fixed button identifiers
    #[error("Unknown button label: '{label}'")]
    UnknownButton { label: String },
}

impl CalcError {
    /// Create a ParseError
    pub fn parse_error(text: impl Into<String>) -> Self {
        CalcError::ParseError { text: text.into() }
    }

    /// Create a DomainError
    pub fn domain_error(value: f64) -> Self {
        CalcError::DomainError { value }
    }

    /// Create an UnknownButton error
    pub fn unknown_button(label: impl Into<String>) -> Self {
        CalcError::UnknownButton {
            label: label.into(),
        }
    }

    /// Check whether this error poisons engine state until `AC` is pressed.
    ///
    /// `UnknownButton` is raised before any transition runs, so the engine
    /// stays usable; everything else aborts a transition midway and locks
    /// the engine behind the error indicator.
    pub fn locks_engine(&self) -> bool {
        !matches!(self, CalcError::UnknownButton { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::ParseError { .. } => "PARSE_ERROR",
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::Overflow => "OVERFLOW",
            CalcError::UnknownButton { .. } => "UNKNOWN_BUTTON",
        }
    }
}
