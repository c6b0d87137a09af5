// ============================================================================
// Roll Calculator
// Public precise and fast entry points for roll geometry
// ============================================================================

use super::formulas;
use crate::numeric::{infallible, NumericResult, WideDecimal};

// ============================================================================
// Precise Tier (WideDecimal)
// ============================================================================

/// Compute roll weight with decimal arithmetic.
///
/// `weight = length × width × thickness × 0.00001 × diameter² × film_type × 0.4335`
///
/// Inputs accept anything convertible into [`WideDecimal`] (a
/// `rust_decimal::Decimal`, an integer or a parsed literal). Every step
/// keeps 28 significant digits, however small the result.
///
/// # Errors
/// Returns `Overflow` if an intermediate exponent leaves the `i32` range.
///
/// # Example
/// ```
/// use roll_calculator::roll::compute_roll_weight;
/// use rust_decimal::Decimal;
///
/// let weight = compute_roll_weight(
///     Decimal::from(1000),
///     Decimal::ONE,
///     Decimal::from(3),
///     Decimal::from(10),
///     Decimal::ONE,
/// )
/// .unwrap();
/// assert_eq!(weight, Decimal::new(39015, 5)); // 0.39015
/// ```
pub fn compute_roll_weight(
    length: impl Into<WideDecimal>,
    thickness: impl Into<WideDecimal>,
    diameter: impl Into<WideDecimal>,
    width: impl Into<WideDecimal>,
    film_type: impl Into<WideDecimal>,
) -> NumericResult<WideDecimal> {
    let (length, thickness, diameter) = (length.into(), thickness.into(), diameter.into());
    let (width, film_type) = (width.into(), film_type.into());

    let weight = formulas::roll_weight(length, thickness, diameter, width, film_type)?;
    tracing::trace!(%length, %thickness, %diameter, %width, %film_type, %weight, "roll weight");
    Ok(weight)
}

/// Compute the outer diameter of a roll with decimal arithmetic.
///
/// `outer = sqrt((length × thickness × 0.00001 / 0.06545) + diameter²)`
///
/// # Errors
/// Returns `NegativeRadicand` if the expression under the root is negative.
pub fn compute_roll_diameter(
    length: impl Into<WideDecimal>,
    thickness: impl Into<WideDecimal>,
    diameter: impl Into<WideDecimal>,
) -> NumericResult<WideDecimal> {
    let (length, thickness, diameter) = (length.into(), thickness.into(), diameter.into());

    let outer = formulas::roll_diameter(length, thickness, diameter)?;
    tracing::trace!(%length, %thickness, %diameter, %outer, "roll diameter");
    Ok(outer)
}

/// Compute roll length from weight with decimal arithmetic.
///
/// `length = weight / (width × (27.68 / film_type / (thickness × 0.00001))) / 12`
///
/// # Errors
/// Returns `DivisionByZero` if `width`, `film_type` or `thickness` is zero.
pub fn compute_roll_length(
    weight: impl Into<WideDecimal>,
    width: impl Into<WideDecimal>,
    film_type: impl Into<WideDecimal>,
    thickness: impl Into<WideDecimal>,
) -> NumericResult<WideDecimal> {
    let (weight, width) = (weight.into(), width.into());
    let (film_type, thickness) = (film_type.into(), thickness.into());

    let length = formulas::roll_length(weight, width, film_type, thickness)?;
    tracing::trace!(%weight, %width, %film_type, %thickness, %length, "roll length");
    Ok(length)
}

// ============================================================================
// Fast Tier (f64)
// ============================================================================

/// Weight formula in native floating point.
#[inline]
pub fn compute_roll_weight_fast(
    length: f64,
    thickness: f64,
    diameter: f64,
    width: f64,
    film_type: f64,
) -> f64 {
    infallible(formulas::roll_weight(
        length, thickness, diameter, width, film_type,
    ))
}

/// Outer diameter in native floating point.
///
/// Lower cost than [`compute_roll_diameter`] at the price of binary
/// round-off. A negative radicand yields `NaN`.
#[inline]
pub fn compute_roll_diameter_fast(length: f64, thickness: f64, diameter: f64) -> f64 {
    infallible(formulas::roll_diameter(length, thickness, diameter))
}

/// Roll length in native floating point.
///
/// A zero divisor yields `inf` or `NaN` rather than an error.
#[inline]
pub fn compute_roll_length_fast(weight: f64, width: f64, film_type: f64, thickness: f64) -> f64 {
    infallible(formulas::roll_length(weight, width, film_type, thickness))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{NumericError, RollArithmetic};

    fn wide(s: &str) -> WideDecimal {
        s.parse().unwrap()
    }

    fn relative_error(actual: WideDecimal, expected: WideDecimal) -> WideDecimal {
        actual
            .try_sub(expected)
            .and_then(|diff| diff.try_div(expected))
            .unwrap()
            .abs()
    }

    #[test]
    fn test_weight_scenario() {
        let weight =
            compute_roll_weight(wide("1000"), wide("1.0"), wide("3"), wide("10"), wide("1"))
                .unwrap();
        assert_eq!(weight, wide("0.39015"));
    }

    #[test]
    fn test_weight_fast_scenario() {
        let weight = compute_roll_weight_fast(1000.0, 1.0, 3.0, 10.0, 1.0);
        assert!((weight - 0.39015).abs() < 1e-12);
    }

    #[test]
    fn test_diameter_fast_scenario() {
        let outer = compute_roll_diameter_fast(1000.0, 1.0, 3.0);
        assert!((outer - 3.0254).abs() < 1e-3);
        assert_eq!(outer, (1000.0_f64 * 1.0 * 0.00001 / 0.06545 + 3.0 * 3.0).sqrt());
    }

    #[test]
    fn test_diameter_precise_scenario() {
        let outer = compute_roll_diameter(1000_i64, 1_i64, 3_i64).unwrap();
        // sqrt(9.152788388082505729564553094...)
        let expected = wide("3.025357563674499902097952938");
        assert!(relative_error(outer, expected) < wide("1e-21"));
    }

    #[test]
    fn test_length_scenario() {
        let length = compute_roll_length(wide("0.39015"), wide("10"), wide("1"), wide("1.0")).unwrap();
        // 0.39015 / (10 × 2768000) / 12
        let expected = wide("1.174584537572254335260115607e-9");
        assert!(relative_error(length, expected) < wide("1e-25"));
    }

    #[test]
    fn test_length_small_weight_keeps_significant_digits() {
        // 1e-10 / (1000 × 2768000) / 12; a 28-digit scale would keep only 8 digits here
        let length = compute_roll_length(wide("1e-10"), 1000_i64, 1_i64, 1_i64).unwrap();
        let expected = wide("3.010597302504816955684007707e-21");
        assert!(relative_error(length, expected) < wide("1e-25"));
    }

    #[test]
    fn test_length_fast_matches_plain_expression() {
        let (weight, width, film_type, thickness) = (250.0, 48.0, 1.4, 92.0);
        let plain = weight / (width * (27.68 / film_type / (thickness * 0.00001))) / 12.0;
        assert_eq!(
            compute_roll_length_fast(weight, width, film_type, thickness),
            plain
        );
    }

    #[test]
    fn test_length_zero_film_type() {
        let result = compute_roll_length(1_i64, 1_i64, 0_i64, 1_i64);
        assert_eq!(result, Err(NumericError::DivisionByZero));

        let fast = compute_roll_length_fast(1.0, 1.0, 0.0, 1.0);
        // 27.68 / 0 = inf, weight / inf = 0
        assert_eq!(fast, 0.0);
    }

    #[test]
    fn test_diameter_fast_negative_radicand_is_nan() {
        assert!(compute_roll_diameter_fast(-100_000.0, 1.0, 1.0).is_nan());
    }

    #[test]
    fn test_precise_and_fast_diameter_agree() {
        let precise = compute_roll_diameter(wide("52000"), wide("0.92"), wide("3.25")).unwrap();
        let fast = compute_roll_diameter_fast(52000.0, 0.92, 3.25);
        let precise_f64 = precise.to_f64().unwrap();
        assert!(((precise_f64 - fast) / precise_f64).abs() < 1e-12);
    }
}
