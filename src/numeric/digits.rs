// ============================================================================
// Decimal Digits
// Sign, integer digits and power of ten of a finite decimal value
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;

/// Most digits carried in the `u128` digit field
const MAX_DIGITS: u32 = 38;

/// Largest scale the decimal engine can carry
const MAX_DECIMAL_SCALE: i64 = 28;

/// Largest mantissa `rust_decimal` can store (2^96 - 1)
const MAX_DECIMAL_MANTISSA: u128 = (1u128 << 96) - 1;

/// Compute 10^n for n <= 38
#[inline]
const fn pow10(n: u32) -> u128 {
    10u128.pow(n)
}

/// Number of decimal digits in `value` (1 for zero)
#[inline]
pub(crate) fn count_digits(value: u128) -> u32 {
    if value == 0 {
        1
    } else {
        value.ilog10() + 1
    }
}

/// Divide by 10^k, rounding ties away from zero.
#[inline]
fn drop_digits(digits: u128, k: u32) -> u128 {
    if k == 0 {
        return digits;
    }
    // u128::MAX < 5 × 10^38, so nothing survives dropping 39 digits
    if k > MAX_DIGITS {
        return 0;
    }

    let p = pow10(k);
    let (quotient, remainder) = (digits / p, digits % p);
    if remainder >= p - remainder {
        quotient + 1
    } else {
        quotient
    }
}

/// A finite decimal value: `±digits × 10^exponent`.
///
/// Exact intermediate form shared by parsing, float conversion and
/// fixed-point rendering. Rounding always sends ties away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecimalDigits {
    pub(crate) negative: bool,
    pub(crate) digits: u128,
    pub(crate) exponent: i32,
}

impl DecimalDigits {
    pub(crate) fn from_decimal(value: Decimal) -> Self {
        Self {
            negative: value.is_sign_negative(),
            digits: value.mantissa().unsigned_abs(),
            exponent: -(value.scale() as i32),
        }
    }

    /// Shortest digits that round-trip to `value`; `None` for NaN/inf.
    pub(crate) fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // `{:e}` renders the shortest round-trip representation
        Self::parse(&format!("{:e}", value)).ok()
    }

    /// Shortest digits that round-trip to `value`; `None` for NaN/inf.
    pub(crate) fn from_f32(value: f32) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Self::parse(&format!("{:e}", value)).ok()
    }

    /// Parse `[-+]digits[.digits][e[-+]digits]`.
    ///
    /// Digits past the 38th are rounded off into the exponent.
    pub(crate) fn parse(s: &str) -> NumericResult<Self> {
        let s = s.trim();

        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exp) = match body.find(['e', 'E']) {
            Some(pos) => {
                let exp: i64 = body[pos + 1..]
                    .parse()
                    .map_err(|_| NumericError::InvalidInput)?;
                (&body[..pos], exp)
            },
            None => (body, 0),
        };

        let (int_part, frac_part) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let mut digits: u128 = 0;
        let mut kept = 0u32;
        let mut exponent = exp - frac_part.len() as i64;
        let mut round_up = None;

        for ch in int_part.chars().chain(frac_part.chars()) {
            let d = ch.to_digit(10).ok_or(NumericError::InvalidInput)?;
            if digits == 0 && d == 0 {
                continue;
            }
            if kept < MAX_DIGITS {
                digits = digits * 10 + u128::from(d);
                kept += 1;
            } else {
                exponent += 1;
                if round_up.is_none() {
                    round_up = Some(d >= 5);
                }
            }
        }
        if round_up == Some(true) {
            digits += 1;
        }

        let exponent = i32::try_from(exponent).map_err(|_| NumericError::Overflow)?;
        Ok(Self {
            negative,
            digits,
            exponent,
        })
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.digits == 0
    }

    /// Round to at most `dp` fractional digits.
    pub(crate) fn round_to_fraction(self, dp: u32) -> Self {
        let target = -i64::from(dp);
        let exponent = i64::from(self.exponent);
        if exponent >= target {
            return self;
        }

        let k = (target - exponent).min(i64::from(MAX_DIGITS) + 1) as u32;
        Self {
            negative: self.negative,
            digits: drop_digits(self.digits, k),
            exponent: target as i32,
        }
    }

    /// Round to at most `n` significant digits.
    pub(crate) fn round_significant(self, n: u32) -> Self {
        let present = count_digits(self.digits);
        if present <= n {
            return self;
        }

        let k = present - n;
        Self {
            negative: self.negative,
            digits: drop_digits(self.digits, k),
            exponent: self.exponent.saturating_add(k as i32),
        }
    }

    /// Render with exactly `dp` fractional digits, never in exponent form.
    ///
    /// A value that rounds to zero is rendered without a sign.
    pub(crate) fn to_fixed(self, dp: u32) -> String {
        let rounded = self.round_to_fraction(dp);

        // rounded value × 10^dp as an integer digit string
        let mut rendered = rounded.digits.to_string();
        let zeros = i64::from(rounded.exponent) + i64::from(dp);
        if rounded.digits != 0 {
            rendered.extend(std::iter::repeat('0').take(zeros as usize));
        }

        if dp > 0 {
            let dp = dp as usize;
            if rendered.len() <= dp {
                let padding = "0".repeat(dp + 1 - rendered.len());
                rendered.insert_str(0, &padding);
            }
            rendered.insert(rendered.len() - dp, '.');
        }

        if rounded.negative && !rounded.is_zero() {
            rendered.insert(0, '-');
        }
        rendered
    }

    /// Convert into the decimal engine's representation.
    ///
    /// Digits below 10^-28 are rounded off.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude exceeds the decimal range.
    pub(crate) fn to_decimal(self) -> NumericResult<Decimal> {
        let mut value = self.round_to_fraction(MAX_DECIMAL_SCALE as u32);

        if value.exponent > 0 {
            let factor = 10u128
                .checked_pow(value.exponent as u32)
                .ok_or(NumericError::Overflow)?;
            value.digits = value
                .digits
                .checked_mul(factor)
                .ok_or(NumericError::Overflow)?;
            value.exponent = 0;
        }

        // Trade fractional digits for mantissa room, rounding once
        if value.digits > MAX_DECIMAL_MANTISSA {
            let room = value.exponent.unsigned_abs();
            let dropped = (1..=room)
                .find(|&k| drop_digits(value.digits, k) <= MAX_DECIMAL_MANTISSA)
                .ok_or(NumericError::Overflow)?;
            value.digits = drop_digits(value.digits, dropped);
            value.exponent += dropped as i32;
        }

        let signed = if value.negative {
            -(value.digits as i128)
        } else {
            value.digits as i128
        };
        Decimal::try_from_i128_with_scale(signed, (-value.exponent) as u32)
            .map_err(|_| NumericError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(negative: bool, digits: u128, exponent: i32) -> DecimalDigits {
        DecimalDigits {
            negative,
            digits,
            exponent,
        }
    }

    #[test]
    fn test_parse_plain_and_scientific() {
        assert_eq!(DecimalDigits::parse("27.68").unwrap(), parts(false, 2768, -2));
        assert_eq!(DecimalDigits::parse("-1.5e-7").unwrap(), parts(true, 15, -8));
        assert_eq!(DecimalDigits::parse("0e0").unwrap(), parts(false, 0, 0));
        assert_eq!(DecimalDigits::parse("1e300").unwrap(), parts(false, 1, 300));
    }

    #[test]
    fn test_parse_rounds_excess_digits() {
        // 40 significant digits, the 39th is a 5
        let parsed = DecimalDigits::parse("1234567890123456789012345678901234567850").unwrap();
        assert_eq!(parsed.digits, 12345678901234567890123456789012345679);
        assert_eq!(parsed.exponent, 2);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(DecimalDigits::parse("."), Err(NumericError::InvalidInput));
        assert_eq!(DecimalDigits::parse("1.2.3"), Err(NumericError::InvalidInput));
        assert_eq!(DecimalDigits::parse("1e"), Err(NumericError::InvalidInput));
        assert_eq!(DecimalDigits::parse("abc"), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_f64_keeps_shortest_digits() {
        let d = DecimalDigits::from_f64(1.0000000000000002).unwrap();
        assert_eq!(d, parts(false, 10000000000000002, -16));

        let d = DecimalDigits::from_f64(123456.78901234567).unwrap();
        assert_eq!(d, parts(false, 12345678901234567, -11));

        assert_eq!(DecimalDigits::from_f64(0.1).unwrap(), parts(false, 1, -1));
        assert!(DecimalDigits::from_f64(f64::NAN).is_none());
    }

    #[test]
    fn test_from_f32_keeps_shortest_digits() {
        assert_eq!(DecimalDigits::from_f32(0.1).unwrap(), parts(false, 1, -1));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(parts(false, 125, -3).round_to_fraction(2), parts(false, 13, -2));
        assert_eq!(parts(true, 25, -1).round_to_fraction(0), parts(true, 3, 0));
        assert_eq!(parts(false, 124, -3).round_to_fraction(2), parts(false, 12, -2));
        assert_eq!(parts(false, 5, -40).round_to_fraction(2), parts(false, 0, -2));
    }

    #[test]
    fn test_round_significant() {
        assert_eq!(parts(false, 99996, 0).round_significant(4), parts(false, 10000, 1));
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(parts(false, 39015, -5).to_fixed(2), "0.39");
        assert_eq!(parts(false, 7, 0).to_fixed(3), "7.000");
        assert_eq!(parts(false, 5, -1).to_fixed(0), "1");
        assert_eq!(parts(false, 15, -8).to_fixed(10), "0.0000001500");
        assert_eq!(parts(false, 12, 3).to_fixed(1), "12000.0");
        assert_eq!(parts(true, 1, -3).to_fixed(2), "0.00");
        assert_eq!(parts(false, 0, 0).to_fixed(0), "0");
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(parts(false, 2768, -2).to_decimal().unwrap(), Decimal::new(2768, 2));
        assert_eq!(parts(true, 12, 3).to_decimal().unwrap(), Decimal::from(-12000));
        assert_eq!(parts(false, 1, -30).to_decimal().unwrap(), Decimal::ZERO);
        assert_eq!(parts(false, 1, 30).to_decimal(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_to_decimal_trims_mantissa() {
        // 38 digits with scale 30 does not fit 96 bits as is
        let value = parts(false, 12345678901234567890123456789012345678, -30);
        let decimal = value.to_decimal().unwrap();
        assert_eq!(decimal.to_string(), "12345678.901234567890123456789");
    }
}
