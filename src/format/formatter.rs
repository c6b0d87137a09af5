// ============================================================================
// Result Formatter
// Fixed-point rendering of roll results with configurable rounding
// ============================================================================

use super::precision::FormatPrecision;
use crate::numeric::digits::DecimalDigits;
use crate::numeric::WideDecimal;
use rust_decimal::Decimal;

/// A value accepted by [`format`]: either tier's result type, or a plain
/// number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatValue {
    /// Plain decimal
    Decimal(Decimal),
    /// Precise tier result
    Wide(WideDecimal),
    /// Fast tier result
    Float(f64),
}

impl From<Decimal> for FormatValue {
    fn from(value: Decimal) -> Self {
        FormatValue::Decimal(value)
    }
}

impl From<&Decimal> for FormatValue {
    fn from(value: &Decimal) -> Self {
        FormatValue::Decimal(*value)
    }
}

impl From<WideDecimal> for FormatValue {
    fn from(value: WideDecimal) -> Self {
        FormatValue::Wide(value)
    }
}

impl From<f64> for FormatValue {
    fn from(value: f64) -> Self {
        FormatValue::Float(value)
    }
}

impl From<f32> for FormatValue {
    /// Finite values keep the shortest `f32` digits (`0.1_f32` is `0.1`,
    /// not `0.100000001490116`)
    fn from(value: f32) -> Self {
        match DecimalDigits::from_f32(value).map(WideDecimal::from_digits) {
            Some(Ok(wide)) => FormatValue::Wide(wide),
            _ => FormatValue::Float(f64::from(value)),
        }
    }
}

impl From<i64> for FormatValue {
    fn from(value: i64) -> Self {
        FormatValue::Decimal(Decimal::from(value))
    }
}

impl From<i32> for FormatValue {
    fn from(value: i32) -> Self {
        FormatValue::Decimal(Decimal::from(value))
    }
}

/// Format a roll result as a fixed-point string.
///
/// - `precision < 0`: no rounding requested, 16 fractional digits
/// - `precision == 0`: rounded to an integer, no decimal point
/// - `precision > 0`: exactly `precision` fractional digits, at most
///   [`MAX_FORMAT_DIGITS`](super::MAX_FORMAT_DIGITS)
///
/// Scientific notation is never produced. Ties round away from zero
/// (`0.125 → 0.13`, `2.5 → 3`, `-2.5 → -3`). Floats are rendered from
/// their shortest round-trip digits, so every digit Rust would print for
/// the `f64` survives. Non-finite floats render as `NaN`, `Infinity` or
/// `-Infinity`.
///
/// A negative value that rounds to zero renders without a sign (`-0.001`
/// at two digits is `0.00`). decimal.js `toFixed` keeps the sign there
/// (`-0.00`).
///
/// # Example
/// ```
/// use roll_calculator::format::format;
///
/// assert_eq!(format(0.39015, 2), "0.39");
/// assert_eq!(format(2.5, 0), "3");
/// assert_eq!(format(1.5, -1), "1.5000000000000000");
/// ```
pub fn format(value: impl Into<FormatValue>, precision: i32) -> String {
    format_with(value, FormatPrecision::from(precision))
}

/// Same as [`format`] with a typed precision.
pub fn format_with(value: impl Into<FormatValue>, precision: FormatPrecision) -> String {
    let digits = match value.into() {
        FormatValue::Decimal(d) => DecimalDigits::from_decimal(d),
        FormatValue::Wide(w) => w.digits(),
        FormatValue::Float(f) => match DecimalDigits::from_f64(f) {
            Some(digits) => digits,
            None => return non_finite(f),
        },
    };

    digits.to_fixed(precision.fraction_digits())
}

fn non_finite(value: f64) -> String {
    let rendered = if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    };
    rendered.to_string()
}
