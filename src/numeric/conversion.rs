// ============================================================================
// Decimal Conversion
// Construction of precise values at API boundaries
// ============================================================================

use super::digits::DecimalDigits;
use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a decimal from a string.
///
/// Accepts plain literals (`"27.68"`, `"-0.001"`) and scientific
/// notation (`"1e-5"`, `"2.5e3"`). Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `InvalidInput` if the string is not a number.
///
/// # Example
/// ```
/// use roll_calculator::numeric::parse_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal("1e-5").unwrap(), Decimal::new(1, 5));
/// ```
pub fn parse_decimal(s: &str) -> NumericResult<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NumericError::InvalidInput);
    }

    let parsed = if s.contains(['e', 'E']) {
        Decimal::from_scientific(s)
    } else {
        Decimal::from_str(s)
    };

    parsed.map_err(|_| NumericError::InvalidInput)
}

/// Convert a native float into a decimal.
///
/// The conversion keeps the shortest decimal that round-trips to the same
/// float (up to 17 significant digits), so `0.1_f64` becomes exactly `0.1`
/// rather than its binary expansion and `1.0000000000000002_f64` keeps its
/// last digit. Digits below 1e-28 are rounded off.
///
/// # Errors
/// - `NonFinite` for NaN or infinity
/// - `Overflow` if the magnitude exceeds the decimal range
pub fn decimal_from_f64(value: f64) -> NumericResult<Decimal> {
    DecimalDigits::from_f64(value)
        .ok_or(NumericError::NonFinite)?
        .to_decimal()
}

/// Convert a decimal into a native float for the fast tier.
///
/// # Errors
/// Returns `Overflow` if the engine cannot express the value as `f64`.
pub fn decimal_to_f64(value: Decimal) -> NumericResult<f64> {
    value.to_f64().ok_or(NumericError::Overflow)
}
