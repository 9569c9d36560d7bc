//! # Format Module
//!
//! Operand parsing and the display formatting guard.
//!
//! ## Why a Guard?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Raw f64 arithmetic:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ 19 characters                    │
//! │    1 ÷ 3     = 0.3333333333333333   ❌ 18 characters                    │
//! │    1e12 × 10 = 10000000000000       ❌ wider than the display           │
//! │                                                                         │
//! │  OUR SOLUTION: every computed value passes format_result()              │
//! │    0.1 + 0.2 → "0.3"                                                    │
//! │    1 ÷ 3     → "0.33333333"                                             │
//! │    1e12 × 10 → CalcError::Overflow                                      │
//! │                                                                         │
//! │  Nothing is silently truncated: a value either fits or is an error.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use calc_core::format::{format_result, parse_operand};
//!
//! let sum = parse_operand("0.1").unwrap() + parse_operand("0.2").unwrap();
//! assert_eq!(format_result(sum).unwrap(), "0.3");
//! ```

use crate::error::{CalcError, CalcResult};
use crate::{MAX_DISPLAY_CHARS, MAX_FRACTION_DIGITS, MAX_MAGNITUDE, MIN_MAGNITUDE};

/// Magnitudes below this print in exponent form on a JavaScript display
/// (`String(1e-7) == "1e-7"`), so they cannot be shown.
const MIN_PLAIN_MAGNITUDE: f64 = 1e-6;

// =============================================================================
// Parsing
// =============================================================================

/// Parses a state field into a finite number.
///
/// ## Errors
/// - `CalcError::Overflow` when the text is a decimal too large for `f64`
/// - `CalcError::Calculation` when the text is not a decimal at all. The
///   usual source is an error message the session left in `total`.
///
/// ## Example
/// ```rust
/// use calc_core::format::parse_operand;
///
/// assert_eq!(parse_operand("3.").unwrap(), 3.0);
/// assert!(parse_operand("Overflow").is_err());
/// ```
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) if is_decimal_literal(text) => Err(CalcError::Overflow),
        _ => Err(CalcError::calculation(format!(
            "invalid operand '{}'",
            text
        ))),
    }
}

/// Digits, sign, decimal point and exponent only; rules out `inf` and `NaN`.
fn is_decimal_literal(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}

// =============================================================================
// Formatting Guard
// =============================================================================

/// Converts a computed value into its display string, or signals why it
/// cannot be displayed.
///
/// ## Rules (in order)
/// ```text
/// value
///   │
///   ├── not finite?            → Overflow
///   ├── |value| > 999…999?     → Overflow
///   ├── zero or |value| < 1e-8 → "0"
///   ├── > 8 fraction digits?   → round to 8
///   ├── needs exponent form?   → Overflow
///   ├── > 12 characters?       → Overflow
///   └── OK → shortest decimal text
/// ```
///
/// Division by zero is detected by the engine before the value gets here,
/// so an infinity reaching this function is reported as `Overflow`.
pub fn format_result(value: f64) -> CalcResult<String> {
    if !value.is_finite() || value.abs() > MAX_MAGNITUDE {
        return Err(CalcError::Overflow);
    }

    if value == 0.0 || value.abs() < MIN_MAGNITUDE {
        return Ok("0".to_string());
    }

    let rounded = round_fraction(value);
    if rounded == 0.0 {
        return Ok("0".to_string());
    }

    if rounded.abs() < MIN_PLAIN_MAGNITUDE {
        return Err(CalcError::Overflow);
    }

    // f64's Display never uses exponent form and prints the shortest
    // text that round-trips.
    let text = rounded.to_string();
    if text.chars().count() > MAX_DISPLAY_CHARS {
        return Err(CalcError::Overflow);
    }

    Ok(text)
}

/// Number of digits after the decimal point in the shortest text form.
fn fraction_digits(value: f64) -> usize {
    let text = value.to_string();
    text.split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
}

/// Rounds half away from zero to [`MAX_FRACTION_DIGITS`] places, leaving
/// values that are already short enough untouched.
fn round_fraction(value: f64) -> f64 {
    if fraction_digits(value) <= MAX_FRACTION_DIGITS {
        return value;
    }

    let factor = 10f64.powi(MAX_FRACTION_DIGITS as i32);
    (value * factor).round() / factor
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("5").unwrap(), 5.0);
        assert_eq!(parse_operand("-12.5").unwrap(), -12.5);
        assert_eq!(parse_operand("0.").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_operand_rejects_non_numbers() {
        for text in ["", "abc", "Cannot divide by zero", "inf", "NaN", "1.2.3"] {
            let err = parse_operand(text).unwrap_err();
            assert!(matches!(err, CalcError::Calculation { .. }), "{}", text);
        }
    }

    #[test]
    fn test_parse_operand_huge_decimal_is_overflow() {
        let huge = "9".repeat(400);
        assert_eq!(parse_operand(&huge), Err(CalcError::Overflow));
        assert_eq!(parse_operand(&format!("-{}", huge)), Err(CalcError::Overflow));
        assert_eq!(parse_operand("1e999"), Err(CalcError::Overflow));
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_result(8.0).unwrap(), "8");
        assert_eq!(format_result(-42.0).unwrap(), "-42");
        assert_eq!(format_result(999_999_999_999.0).unwrap(), "999999999999");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_result(0.0).unwrap(), "0");
        assert_eq!(format_result(-0.0).unwrap(), "0");
    }

    #[test]
    fn test_format_tiny_values_display_as_zero() {
        assert_eq!(format_result(1e-9).unwrap(), "0");
        assert_eq!(format_result(-5e-9).unwrap(), "0");
    }

    #[test]
    fn test_format_rounds_to_eight_fraction_digits() {
        assert_eq!(format_result(0.1 + 0.2).unwrap(), "0.3");
        assert_eq!(format_result(1.0 / 3.0).unwrap(), "0.33333333");
        assert_eq!(format_result(2.0 / 3.0).unwrap(), "0.66666667");
        assert_eq!(format_result(-1.0 / 3.0).unwrap(), "-0.33333333");
    }

    #[test]
    fn test_format_keeps_short_fractions() {
        assert_eq!(format_result(0.05).unwrap(), "0.05");
        assert_eq!(format_result(12.5).unwrap(), "12.5");
    }

    #[test]
    fn test_format_overflow_on_magnitude() {
        assert_eq!(format_result(1e12), Err(CalcError::Overflow));
        assert_eq!(format_result(-1e12), Err(CalcError::Overflow));
        assert_eq!(format_result(f64::INFINITY), Err(CalcError::Overflow));
        assert_eq!(format_result(f64::NAN), Err(CalcError::Overflow));
    }

    #[test]
    fn test_format_overflow_on_width() {
        // 13 characters once the sign is counted
        assert_eq!(format_result(-999_999_999_999.0), Err(CalcError::Overflow));
        // 14 characters after rounding
        assert_eq!(format_result(12345.123456789), Err(CalcError::Overflow));
    }

    #[test]
    fn test_format_overflow_when_exponent_form_needed() {
        assert_eq!(format_result(1e-7), Err(CalcError::Overflow));
        assert_eq!(format_result(0.000001).unwrap(), "0.000001");
    }
}
