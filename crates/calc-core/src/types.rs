//! # Domain Types
//!
//! Core domain types of the keypad calculator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ CalculatorState │   │    Operation    │   │     Button      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  total?         │   │  Add       +    │   │  Digit(0..=9)   │       │
//! │  │  next?          │   │  Subtract  −    │   │  Decimal        │       │
//! │  │  operation?     │   │  Multiply  ×    │   │  Operator(op)   │       │
//! │  └─────────────────┘   │  Divide    ÷    │   │  Equals, Clear  │       │
//! │                        └─────────────────┘   │  ToggleSign, %  │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Structural States
//! States are unnamed: which of the three fields are present is the state.
//! The empty state is both the initial state and the one `Clear` returns.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Operation
// =============================================================================

/// A binary operator awaiting its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operators, in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Symbol shown on the keypad and in the expression line.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// ## Note
    /// No guard runs here: dividing by zero yields an infinity or NaN.
    /// The engine checks the divisor before calling this.
    #[inline]
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operation::Add => left + right,
            Operation::Subtract => left - right,
            Operation::Multiply => left * right,
            Operation::Divide => left / right,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// Button
// =============================================================================

/// One keypad button.
///
/// The engine only ever sees this typed form. Raw labels go through
/// [`crate::validation::parse_button`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    /// A digit key, `0..=9`.
    Digit(u8),
    /// The decimal point.
    Decimal,
    /// `+`, `−`, `×` or `÷`.
    Operator(Operation),
    Equals,
    /// `AC`: back to the empty state.
    Clear,
    /// `+/-`
    ToggleSign,
    Percent,
}

// =============================================================================
// Calculator State
// =============================================================================

/// The calculator's state between two button presses.
///
/// ## Fields
/// - `total`: result of all completed operations so far
/// - `next`: operand currently being typed
/// - `operation`: operator waiting for `next`
///
/// ## Invariants
/// - At most one pending operator
/// - `total` and `next` are absent or finite decimal strings; the one
///   exception is an error message the session writes into `total`
///
/// ## Ownership
/// The state is a plain value. [`crate::calculate`] borrows it and returns a
/// new one; the caller keeps whichever it wants for the next press.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorState {
    pub total: Option<String>,
    pub next: Option<String>,
    pub operation: Option<Operation>,
}

impl CalculatorState {
    /// The empty state (all fields absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if all fields are absent.
    pub fn is_empty(&self) -> bool {
        self.total.is_none() && self.next.is_none() && self.operation.is_none()
    }

    /// Checks if `total`, `operation` and `next` are all present, i.e. an
    /// equals or operator press will compute something.
    pub fn has_pending_computation(&self) -> bool {
        self.total.is_some() && self.operation.is_some() && self.next.is_some()
    }

    /// Primary display value: `next`, else `total`, else `"0"`.
    pub fn display(&self) -> &str {
        self.next
            .as_deref()
            .or(self.total.as_deref())
            .unwrap_or("0")
    }

    /// Expression line shown above the display.
    ///
    /// Present only when both `total` and `operation` are, e.g. `"5 +"` or,
    /// once the second operand is being typed, `"5 + 3"`.
    pub fn expression(&self) -> Option<String> {
        let total = self.total.as_deref()?;
        let operation = self.operation?;
        Some(match self.next.as_deref() {
            Some(next) => format!("{} {} {}", total, operation, next),
            None => format!("{} {}", total, operation),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total: Option<&str>, next: Option<&str>, operation: Option<Operation>) -> CalculatorState {
        CalculatorState {
            total: total.map(str::to_string),
            next: next.map(str::to_string),
            operation,
        }
    }

    #[test]
    fn test_operation_apply() {
        assert_eq!(Operation::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operation::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operation::Multiply.apply(5.0, 3.0), 15.0);
        assert_eq!(Operation::Divide.apply(6.0, 3.0), 2.0);
        assert!(Operation::Divide.apply(1.0, 0.0).is_infinite());
    }

    #[test]
    fn test_operation_symbols() {
        let symbols: Vec<String> = Operation::ALL.iter().map(|op| op.to_string()).collect();
        assert_eq!(symbols, vec!["+", "−", "×", "÷"]);
    }

    #[test]
    fn test_display_priority() {
        assert_eq!(CalculatorState::new().display(), "0");
        assert_eq!(state(Some("5"), None, None).display(), "5");
        assert_eq!(state(Some("5"), Some("3"), Some(Operation::Add)).display(), "3");
    }

    #[test]
    fn test_expression() {
        assert_eq!(CalculatorState::new().expression(), None);
        assert_eq!(state(Some("5"), None, None).expression(), None);
        assert_eq!(
            state(Some("5"), None, Some(Operation::Multiply)).expression(),
            Some("5 ×".to_string())
        );
        assert_eq!(
            state(Some("5"), Some("3"), Some(Operation::Add)).expression(),
            Some("5 + 3".to_string())
        );
        // No total yet: nothing to show
        assert_eq!(state(None, Some("3"), Some(Operation::Add)).expression(), None);
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_value(state(Some("5"), None, Some(Operation::Divide))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "total": "5", "next": null, "operation": "divide" })
        );
    }

    #[test]
    fn test_button_serialization() {
        let json = serde_json::to_value(Button::Operator(Operation::Add)).unwrap();
        assert_eq!(json, serde_json::json!({ "operator": "add" }));
        let json = serde_json::to_value(Button::Digit(7)).unwrap();
        assert_eq!(json, serde_json::json!({ "digit": 7 }));
        let json = serde_json::to_value(Button::ToggleSign).unwrap();
        assert_eq!(json, serde_json::json!("toggle_sign"));
    }

    #[test]
    fn test_new_state_is_empty() {
        assert!(CalculatorState::new().is_empty());
        assert!(!state(Some("0"), None, None).is_empty());
    }
}
