//! # Calculation Engine
//!
//! The `calculate` state-transition function.
//!
//! ## Transition Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    calculate(state, button)                             │
//! │                                                                         │
//! │  Button            Effect                                               │
//! │  ──────            ──────                                               │
//! │  AC                empty state                                          │
//! │  +/-, %            transform next (else total) through the guard        │
//! │  =                 total op next → total           (no-op if partial)   │
//! │  + − × ÷           resolve pending, or adopt operand, or swap operator  │
//! │  0-9, .            extend next                                          │
//! │                                                                         │
//! │  Every computed value goes through format::format_result().             │
//! │  The input state is borrowed and never modified.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Chaining
//! Only one operator is ever pending. Pressing a second operator while
//! `total op next` is complete resolves it first, so `5 + 3 ×` behaves as
//! `(5 + 3) ×`.

use crate::error::{CalcError, CalcResult};
use crate::format::{format_result, parse_operand};
use crate::types::{Button, CalculatorState, Operation};
use crate::MAX_DISPLAY_CHARS;

/// Computes the state that follows `state` when `button` is pressed.
///
/// ## Errors
/// - `DivisionByZero` when `÷` resolves with a right operand of zero
/// - `Overflow` when a result does not fit the display
/// - `Calculation` when an operand is not a number
///
/// The caller decides what to display on error; the input state is
/// untouched either way.
///
/// ## Example
/// ```rust
/// use calc_core::{calculate, Button, CalculatorState, Operation};
///
/// let state = CalculatorState {
///     total: Some("5".to_string()),
///     next: Some("3".to_string()),
///     operation: Some(Operation::Add),
/// };
///
/// let state = calculate(&state, Button::Operator(Operation::Multiply)).unwrap();
/// assert_eq!(state.total.as_deref(), Some("8"));
/// assert_eq!(state.next, None);
/// assert_eq!(state.operation, Some(Operation::Multiply));
/// ```
pub fn calculate(state: &CalculatorState, button: Button) -> CalcResult<CalculatorState> {
    match button {
        Button::Clear => Ok(CalculatorState::default()),
        Button::ToggleSign => transform_entry(state, |value| -value),
        Button::Percent => transform_entry(state, |value| value / 100.0),
        Button::Equals => press_equals(state),
        Button::Operator(operation) => press_operator(state, operation),
        Button::Decimal => press_decimal(state),
        Button::Digit(digit) => press_digit(state, digit),
    }
}

/// Applies `operation` to two operand strings and formats the result.
///
/// The divide-by-zero check runs before the generic non-finite check in
/// [`format_result`], so `5 ÷ 0` reports `DivisionByZero`, not `Overflow`.
pub fn operate(left: &str, right: &str, operation: Operation) -> CalcResult<String> {
    let left = parse_operand(left)?;
    let right = parse_operand(right)?;

    if operation == Operation::Divide && right == 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    format_result(operation.apply(left, right))
}

/// Resolves `total op next`, if all three are present.
fn resolve_pending(state: &CalculatorState) -> Option<CalcResult<String>> {
    match (&state.total, state.operation, &state.next) {
        (Some(total), Some(operation), Some(next)) => Some(operate(total, next, operation)),
        _ => None,
    }
}

/// Sign toggle and percent: transform `next`, else `total`, else nothing.
fn transform_entry(
    state: &CalculatorState,
    transform: impl Fn(f64) -> f64,
) -> CalcResult<CalculatorState> {
    let apply = |text: &str| -> CalcResult<String> { format_result(transform(parse_operand(text)?)) };

    if let Some(next) = state.next.as_deref() {
        return Ok(CalculatorState {
            next: Some(apply(next)?),
            ..state.clone()
        });
    }

    if let Some(total) = state.total.as_deref() {
        return Ok(CalculatorState {
            total: Some(apply(total)?),
            ..state.clone()
        });
    }

    Ok(state.clone())
}

fn press_equals(state: &CalculatorState) -> CalcResult<CalculatorState> {
    match resolve_pending(state) {
        Some(result) => Ok(CalculatorState {
            total: Some(result?),
            next: None,
            operation: None,
        }),
        None => Ok(state.clone()),
    }
}

fn press_operator(state: &CalculatorState, operation: Operation) -> CalcResult<CalculatorState> {
    if let Some(result) = resolve_pending(state) {
        return Ok(CalculatorState {
            total: Some(result?),
            next: None,
            operation: Some(operation),
        });
    }

    if state.operation.is_none() {
        return Ok(CalculatorState {
            total: state.next.clone().or_else(|| state.total.clone()),
            next: None,
            operation: Some(operation),
        });
    }

    // Operator already pending: let the user correct it
    Ok(CalculatorState {
        operation: Some(operation),
        ..state.clone()
    })
}

/// A typed entry longer than the display is an overflow, not a truncation.
/// Twelve characters also keep the entry within `MAX_MAGNITUDE`.
fn bounded_entry(entry: String) -> CalcResult<String> {
    if entry.chars().count() > MAX_DISPLAY_CHARS {
        return Err(CalcError::Overflow);
    }
    Ok(entry)
}

fn press_decimal(state: &CalculatorState) -> CalcResult<CalculatorState> {
    let next = match state.next.as_deref() {
        Some(next) if next.contains('.') => return Ok(state.clone()),
        Some(next) => format!("{}.", next),
        None => "0.".to_string(),
    };

    Ok(CalculatorState {
        next: Some(bounded_entry(next)?),
        ..state.clone()
    })
}

fn press_digit(state: &CalculatorState, digit: u8) -> CalcResult<CalculatorState> {
    let digit = char::from_digit(u32::from(digit), 10)
        .ok_or_else(|| CalcError::calculation(format!("invalid digit {}", digit)))?;

    let next = match state.next.as_deref() {
        None | Some("0") => digit.to_string(),
        Some(next) => format!("{}{}", next, digit),
    };
    let next = bounded_entry(next)?;

    // Typing without a pending operator starts over
    let total = if state.operation.is_some() {
        state.total.clone()
    } else {
        None
    };

    Ok(CalculatorState {
        total,
        next: Some(next),
        operation: state.operation,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
