// ============================================================================
// Format Properties
// Shape of formatted output for arbitrary decimal and float inputs
// ============================================================================

use quickcheck::{quickcheck, TestResult};
use roll_calculator::format::{format, MAX_FORMAT_DIGITS, UNROUNDED_DIGITS};
use rust_decimal::Decimal;

fn fraction_digits(rendered: &str) -> Option<usize> {
    rendered.find('.').map(|dot| rendered.len() - dot - 1)
}

fn decimal_from_parts(mantissa: i64, scale: u8) -> Decimal {
    Decimal::new(mantissa, u32::from(scale % 29))
}

/// Shortest digits of `value`, padded to the unrounded width
fn padded_shortest(value: f64) -> String {
    let mut shortest = value.to_string();
    let digits = match fraction_digits(&shortest) {
        Some(digits) => digits,
        None => {
            shortest.push('.');
            0
        },
    };
    shortest.push_str(&"0".repeat(UNROUNDED_DIGITS as usize - digits));
    shortest
}

quickcheck! {
    fn integer_precision_has_no_point(mantissa: i64, scale: u8) -> bool {
        let rendered = format(decimal_from_parts(mantissa, scale), 0);
        !rendered.contains('.') && !rendered.contains('e')
    }

    fn fixed_precision_has_exact_digits(mantissa: i64, scale: u8, precision: u8) -> bool {
        let precision = i32::from(precision % 28) + 1;
        let rendered = format(decimal_from_parts(mantissa, scale), precision);
        fraction_digits(&rendered) == Some(precision as usize)
    }

    fn unrounded_has_bounded_digits(mantissa: i64, scale: u8) -> bool {
        let rendered = format(decimal_from_parts(mantissa, scale), -1);
        let digits = fraction_digits(&rendered).unwrap_or(0);
        digits <= UNROUNDED_DIGITS as usize && !rendered.contains(['e', 'E'])
    }

    fn float_integer_precision_has_no_point(value: f64) -> TestResult {
        if !value.is_finite() {
            return TestResult::discard();
        }
        TestResult::from_bool(!format(value, 0).contains('.'))
    }

    fn float_two_digits(value: f64) -> TestResult {
        if !value.is_finite() {
            return TestResult::discard();
        }
        let rendered = format(value, 2);
        TestResult::from_bool(fraction_digits(&rendered) == Some(2) && !rendered.contains('e'))
    }

    fn float_unrounded_never_exponential(value: f64) -> TestResult {
        if !value.is_finite() {
            return TestResult::discard();
        }
        let rendered = format(value, -1);
        let digits = fraction_digits(&rendered).unwrap_or(0);
        TestResult::from_bool(
            digits <= UNROUNDED_DIGITS as usize && !rendered.contains(['e', 'E']),
        )
    }

    fn float_unrounded_keeps_shortest_digits(value: f64) -> TestResult {
        // Display prints the shortest round-trip digits, never an exponent
        if !value.is_finite() || value == 0.0 || value.abs() >= 1e15 {
            return TestResult::discard();
        }
        match fraction_digits(&value.to_string()) {
            Some(digits) if digits > UNROUNDED_DIGITS as usize => TestResult::discard(),
            _ => TestResult::from_bool(format(value, -1) == padded_shortest(value)),
        }
    }

    fn float_unrounded_parses_back_close(value: f64) -> TestResult {
        if !value.is_finite() || value.abs() >= 1.0 {
            return TestResult::discard();
        }
        // Rounded to 16 places: 5e-17 from the digits, plus a half ulp either side
        let parsed: f64 = format(value, -1).parse().unwrap();
        TestResult::from_bool((parsed - value).abs() <= 2e-16)
    }

    fn decimal_literal_float_keeps_its_digits(mantissa: i32, scale: u8) -> bool {
        // Up to 10 significant digits always survive the trip through f64
        let scale = u32::from(scale % 16);
        let value: f64 = format!("{}e-{}", mantissa, scale).parse().unwrap();
        format(value, -1) == format(Decimal::new(i64::from(mantissa), scale), -1)
    }

    fn rounding_stays_within_half_unit(mantissa: i32) -> bool {
        // Three decimals rounded to two never move more than 0.005
        let value = Decimal::new(i64::from(mantissa), 3);
        let rounded: Decimal = format(value, 2).parse().unwrap();
        (rounded - value).abs() <= Decimal::new(5, 3)
    }
}

#[test]
fn ties_round_away_from_zero() {
    assert_eq!(format(Decimal::new(5, 1), 0), "1");
    assert_eq!(format(Decimal::new(-5, 1), 0), "-1");
    assert_eq!(format(Decimal::new(1005, 3), 2), "1.01");
    assert_eq!(format(Decimal::new(39015, 5), 4), "0.3902");
}

#[test]
fn float_digits_beyond_fifteen_survive() {
    assert_eq!(format(1.0000000000000002_f64, -1), "1.0000000000000002");
    assert_eq!(format(123456.78901234567_f64, -1), "123456.7890123456700000");
    assert_eq!(padded_shortest(123456.78901234567), "123456.7890123456700000");
}

#[test]
fn huge_precision_is_clamped() {
    let rendered = format(0.5_f64, i32::MAX);
    assert_eq!(fraction_digits(&rendered), Some(MAX_FORMAT_DIGITS as usize));
}
