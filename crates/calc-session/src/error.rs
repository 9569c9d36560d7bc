//! # Session Error Type
//!
//! Unified error type handed to the front end.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in a Session                              │
//! │                                                                         │
//! │  press("7")                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Unknown label? ─── ValidationError ──► SessionError ──► Err(...)      │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  calculate() fails? ─── CalcError ──► SessionError in snapshot.error   │
//! │      │                               total = error message             │
//! │      ▼                                                                  │
//! │  Success ──────────────────────────────────────────► Ok(snapshot)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Both a machine-readable `code` and a human-readable `message`:
//! ```json
//! {
//!   "code": "DIVISION_BY_ZERO",
//!   "message": "Cannot divide by zero"
//! }
//! ```

use calc_core::{CalcError, ErrorCode, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned to (or displayed by) the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{}] {message}", .code.as_str())]
pub struct SessionError {
    /// Machine-readable error code for programmatic handling
    pub code: SessionErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for session responses.
///
/// The engine codes pass through unchanged; `InvalidButton` is added for
/// labels rejected before the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionErrorCode {
    /// Label is not on the keypad
    InvalidButton,

    /// Right operand of ÷ is zero
    DivisionByZero,

    /// Result does not fit the display
    Overflow,

    /// Any other evaluation failure
    CalculationError,
}

impl SessionErrorCode {
    /// Returns the wire representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SessionErrorCode::InvalidButton => "INVALID_BUTTON",
            SessionErrorCode::DivisionByZero => ErrorCode::DivisionByZero.as_str(),
            SessionErrorCode::Overflow => ErrorCode::Overflow.as_str(),
            SessionErrorCode::CalculationError => ErrorCode::CalculationError.as_str(),
        }
    }
}

impl From<ErrorCode> for SessionErrorCode {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::DivisionByZero => SessionErrorCode::DivisionByZero,
            ErrorCode::Overflow => SessionErrorCode::Overflow,
            ErrorCode::CalculationError => SessionErrorCode::CalculationError,
        }
    }
}

impl SessionError {
    /// Creates a new session error.
    pub fn new(code: SessionErrorCode, message: impl Into<String>) -> Self {
        SessionError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid button error.
    pub fn invalid_button(message: impl Into<String>) -> Self {
        SessionError::new(SessionErrorCode::InvalidButton, message)
    }
}

/// Converts label validation errors to session errors.
impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::invalid_button(err.to_string())
    }
}

/// Converts engine errors to session errors.
///
/// The message is exactly what ends up in the displayed total.
impl From<CalcError> for SessionError {
    fn from(err: CalcError) -> Self {
        SessionError::new(err.code().into(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_calc_error() {
        let err = SessionError::from(CalcError::DivisionByZero);
        assert_eq!(err.code, SessionErrorCode::DivisionByZero);
        assert_eq!(err.message, "Cannot divide by zero");
        assert_eq!(err.to_string(), "[DIVISION_BY_ZERO] Cannot divide by zero");
    }

    #[test]
    fn test_from_validation_error() {
        let err = SessionError::from(ValidationError::UnknownLabel {
            label: "sqrt".to_string(),
        });
        assert_eq!(err.code, SessionErrorCode::InvalidButton);
        assert_eq!(err.message, "unknown button label: 'sqrt'");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(SessionError::from(CalcError::Overflow)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "OVERFLOW", "message": "Overflow" })
        );
    }

    #[test]
    fn test_code_wire_names_match_serde() {
        for code in [
            SessionErrorCode::InvalidButton,
            SessionErrorCode::DivisionByZero,
            SessionErrorCode::Overflow,
            SessionErrorCode::CalculationError,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
