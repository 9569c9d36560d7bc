//! # calc-core: Pure Calculator Logic
//!
//! This crate is the **heart** of the keypad calculator. It maps
//! `(current state, button press)` to the next state as a pure function with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Keypad Calculator Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (out of scope)               │   │
//! │  │        Display ──► Keypad ──► Keyboard wiring ──► Styling       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ button label                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    calc-session                                 │   │
//! │  │    allowlist check, error → display, tape, logging, config      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Button + CalculatorState               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ calc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  engine   │  │  format   │  │ validation│  │   │
//! │  │   │   State   │  │ calculate │  │  guard    │  │  labels   │  │   │
//! │  │   │  Button   │  │           │  │  parse    │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `CalculatorState`, `Operation`, `Button`
//! - [`engine`] - The `calculate` state-transition function
//! - [`format`] - Operand parsing and the display formatting guard
//! - [`error`] - Domain error types
//! - [`validation`] - Button label allowlist
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::{calculate, Button, CalculatorState, Operation};
//!
//! let mut state = CalculatorState::default();
//! for button in [
//!     Button::Digit(5),
//!     Button::Operator(Operation::Add),
//!     Button::Digit(3),
//!     Button::Equals,
//! ] {
//!     state = calculate(&state, button).unwrap();
//! }
//!
//! assert_eq!(state.total.as_deref(), Some("8"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod format;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::calculate;
pub use error::{CalcError, CalcResult, ErrorCode, ValidationError};
pub use types::*;
pub use validation::parse_button;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest magnitude a stored result may have.
///
/// ## Display Reason
/// Twelve integer digits is the widest value the display renders without
/// switching to scientific notation.
pub const MAX_MAGNITUDE: f64 = 999_999_999_999.0;

/// Nonzero magnitudes below this are displayed as `"0"`.
pub const MIN_MAGNITUDE: f64 = 1e-8;

/// Maximum fractional digits kept after rounding.
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Maximum characters (sign and decimal point included) of a displayed value.
pub const MAX_DISPLAY_CHARS: usize = 12;
