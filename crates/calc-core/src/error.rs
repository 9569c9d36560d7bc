//! # Error Types
//!
//! Domain-specific error types for calc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  calc-core errors (this file)                                          │
//! │  ├── CalcError        - Evaluation failures (divide by zero, overflow) │
//! │  └── ValidationError  - Button labels outside the allowlist            │
//! │                                                                         │
//! │  calc-session errors (separate crate)                                  │
//! │  └── SessionError     - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: CalcError → written into the displayed total                    │
//! │        ValidationError → SessionError → front end                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every `CalcError` carries a machine-readable [`ErrorCode`]
//! 3. `Display` text is what the calculator shows, so keep it short

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Error Code
// =============================================================================

/// Machine-readable error codes shared with the front end.
///
/// ## Serialization
/// ```json
/// "DIVISION_BY_ZERO"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Right operand of ÷ is zero.
    DivisionByZero,

    /// Result magnitude, precision or display width exceeds the limits.
    Overflow,

    /// Any other failure while evaluating an operator.
    CalculationError,
}

impl ErrorCode {
    /// Returns the wire representation (`"DIVISION_BY_ZERO"`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DivisionByZero => "DIVISION_BY_ZERO",
            ErrorCode::Overflow => "OVERFLOW",
            ErrorCode::CalculationError => "CALCULATION_ERROR",
        }
    }
}

// =============================================================================
// Calculation Error
// =============================================================================

/// Errors raised while evaluating a button press.
///
/// All of them are recoverable. The caller replaces `total` with the error's
/// message and clears `next` and `operation`.
///
/// ## User Workflow
/// ```text
/// Display: 5 ÷ 0
///      │
///      ▼
/// Press "="
///      │
///      ▼
/// CalcError::DivisionByZero
///      │
///      ▼
/// Display shows: "Cannot divide by zero"
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division with a right operand of exactly zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// The result does not fit the display.
    ///
    /// ## When This Occurs
    /// - Magnitude above 999,999,999,999
    /// - Non-finite result other than divide by zero
    /// - Rounded value needs scientific notation or more than 12 characters
    #[error("Overflow")]
    Overflow,

    /// Catch-all for anything else that went wrong during evaluation.
    ///
    /// ## When This Occurs
    /// - An operand is not a finite decimal (e.g. an error message left in
    ///   `total` by the caller)
    #[error("Error: {reason}")]
    Calculation { reason: String },
}

impl CalcError {
    /// Creates a calculation error with the given reason.
    pub fn calculation(reason: impl Into<String>) -> Self {
        CalcError::Calculation {
            reason: reason.into(),
        }
    }

    /// Returns the machine-readable code for this error.
    pub const fn code(&self) -> ErrorCode {
        match self {
            CalcError::DivisionByZero => ErrorCode::DivisionByZero,
            CalcError::Overflow => ErrorCode::Overflow,
            CalcError::Calculation { .. } => ErrorCode::CalculationError,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Button label validation errors.
///
/// These occur before the engine runs; an invalid label never reaches
/// [`crate::calculate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The label was empty or only whitespace.
    #[error("button label is required")]
    EmptyLabel,

    /// The label is not on the keypad.
    #[error("unknown button label: '{label}'")]
    UnknownLabel { label: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CalcError.
pub type CalcResult<T> = Result<T, CalcError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Cannot divide by zero");
        assert_eq!(CalcError::Overflow.to_string(), "Overflow");
        assert_eq!(
            CalcError::calculation("invalid operand 'abc'").to_string(),
            "Error: invalid operand 'abc'"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::DivisionByZero.code(), ErrorCode::DivisionByZero);
        assert_eq!(CalcError::Overflow.code(), ErrorCode::Overflow);
        assert_eq!(
            CalcError::calculation("x").code(),
            ErrorCode::CalculationError
        );
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::DivisionByZero).unwrap();
        assert_eq!(json, "\"DIVISION_BY_ZERO\"");

        for code in [
            ErrorCode::DivisionByZero,
            ErrorCode::Overflow,
            ErrorCode::CalculationError,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::EmptyLabel.to_string(),
            "button label is required"
        );
        let err = ValidationError::UnknownLabel {
            label: "sqrt".to_string(),
        };
        assert_eq!(err.to_string(), "unknown button label: 'sqrt'");
    }
}
