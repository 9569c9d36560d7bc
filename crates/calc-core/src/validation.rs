//! # Validation Module
//!
//! The button label allowlist.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (out of scope)                                  │
//! │  └── Only renders keypad buttons and maps known keys                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  └── Raw label → typed Button, anything else rejected                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine                                                        │
//! │  └── Takes `Button`, so an illegal label cannot reach it               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use calc_core::{parse_button, Button, Operation};
//!
//! assert_eq!(parse_button("7").unwrap(), Button::Digit(7));
//! assert_eq!(parse_button("×").unwrap(), Button::Operator(Operation::Multiply));
//! assert!(parse_button("sqrt").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Button, Operation};

/// Parses a keypad label into a [`Button`].
///
/// ## Accepted Labels
/// | Button | Labels |
/// |--------|--------|
/// | digits | `0` … `9` |
/// | decimal | `.` |
/// | add | `+` |
/// | subtract | `-`, `−` |
/// | multiply | `x`, `×`, `*` |
/// | divide | `÷`, `/` |
/// | equals | `=` |
/// | clear | `AC` |
/// | sign toggle | `+/-` |
/// | percent | `%` |
///
/// Surrounding whitespace is ignored.
pub fn parse_button(label: &str) -> ValidationResult<Button> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::EmptyLabel);
    }

    let button = match label {
        "." => Button::Decimal,
        "+" => Button::Operator(Operation::Add),
        "-" | "−" => Button::Operator(Operation::Subtract),
        "x" | "×" | "*" => Button::Operator(Operation::Multiply),
        "÷" | "/" => Button::Operator(Operation::Divide),
        "=" => Button::Equals,
        "AC" => Button::Clear,
        "+/-" => Button::ToggleSign,
        "%" => Button::Percent,
        _ => match single_digit(label) {
            Some(digit) => Button::Digit(digit),
            None => {
                return Err(ValidationError::UnknownLabel {
                    label: label.to_string(),
                })
            }
        },
    };

    Ok(button)
}

/// Returns the digit value of a one-character ASCII digit label.
fn single_digit(label: &str) -> Option<u8> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

impl Button {
    /// Canonical keypad label, the inverse of [`parse_button`].
    pub fn label(&self) -> String {
        match self {
            Button::Digit(d) => d.to_string(),
            Button::Decimal => ".".to_string(),
            Button::Operator(op) => op.symbol().to_string(),
            Button::Equals => "=".to_string(),
            Button::Clear => "AC".to_string(),
            Button::ToggleSign => "+/-".to_string(),
            Button::Percent => "%".to_string(),
        }
    }
}

impl FromStr for Button {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_button(s)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
