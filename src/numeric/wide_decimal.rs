// ============================================================================
// Wide Decimal
// 28 significant decimal digits at any magnitude
// ============================================================================

use super::arithmetic::RollArithmetic;
use super::digits::{count_digits, DecimalDigits};
use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, MathematicalOps};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Significant digits kept by every operation
pub const SIGNIFICANT_DIGITS: u32 = 28;

/// Base-10 floating point value: `coefficient × 10^exponent`.
///
/// The coefficient is a `rust_decimal` value normalized to
/// `1 ≤ |coefficient| < 10` (or exactly zero), so every result keeps the
/// engine's full 28 significant digits regardless of magnitude. A plain
/// [`Decimal`] caps the scale at 28 fractional digits, which leaves only
/// a handful of significant digits once a chained product drops below 1e-20.
///
/// # Example
/// ```
/// use roll_calculator::numeric::{RollArithmetic, WideDecimal};
///
/// let tiny: WideDecimal = "3e-25".parse().unwrap();
/// let product = tiny.try_mul(WideDecimal::from(7)).unwrap();
/// assert_eq!(product, "2.1e-24".parse::<WideDecimal>().unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WideDecimal {
    coefficient: Decimal,
    exponent: i32,
}

impl WideDecimal {
    pub const ZERO: WideDecimal = WideDecimal {
        coefficient: Decimal::ZERO,
        exponent: 0,
    };

    pub const ONE: WideDecimal = WideDecimal {
        coefficient: Decimal::ONE,
        exponent: 0,
    };

    /// Split a decimal into a normalized coefficient and its power of ten.
    fn split(value: Decimal) -> (Decimal, i64) {
        if value.is_zero() {
            return (Decimal::ZERO, 0);
        }

        let mantissa = value.mantissa();
        // |mantissa| < 2^96 has at most 29 digits, so the scale stays <= 28
        let shift = count_digits(mantissa.unsigned_abs()) - 1;
        let coefficient = Decimal::from_i128_with_scale(mantissa, shift).normalize();

        (coefficient, i64::from(shift) - i64::from(value.scale()))
    }

    /// Build `value × 10^exponent` in normalized form.
    fn normalized(value: Decimal, exponent: i64) -> NumericResult<Self> {
        let (coefficient, shift) = Self::split(value);
        if coefficient.is_zero() {
            return Ok(Self::ZERO);
        }

        let exponent = i32::try_from(exponent + shift).map_err(|_| {
            tracing::debug!(%value, exponent, "wide decimal exponent overflow");
            NumericError::Overflow
        })?;
        Ok(Self {
            coefficient,
            exponent,
        })
    }

    pub(crate) fn from_digits(digits: DecimalDigits) -> NumericResult<Self> {
        let digits = digits.round_significant(SIGNIFICANT_DIGITS);
        let mantissa = if digits.negative {
            -(digits.digits as i128)
        } else {
            digits.digits as i128
        };

        let value =
            Decimal::try_from_i128_with_scale(mantissa, 0).map_err(|_| NumericError::Overflow)?;
        Self::normalized(value, i64::from(digits.exponent))
    }

    /// Exact digits of this value.
    pub(crate) fn digits(&self) -> DecimalDigits {
        let mut digits = DecimalDigits::from_decimal(self.coefficient);
        digits.exponent = digits.exponent.saturating_add(self.exponent);
        digits
    }

    /// Convert a native float using its shortest round-trip digits.
    ///
    /// # Errors
    /// Returns `NonFinite` for NaN or infinity.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        let digits = DecimalDigits::from_f64(value).ok_or(NumericError::NonFinite)?;
        Self::from_digits(digits)
    }

    /// Nearest native float.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude exceeds the `f64` range.
    pub fn to_f64(&self) -> NumericResult<f64> {
        let literal = format!("{}e{}", self.coefficient, self.exponent);
        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(NumericError::Overflow),
        }
    }

    /// Round into a plain [`Decimal`]; digits below 1e-28 are dropped.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude exceeds the decimal range.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        self.digits().to_decimal()
    }

    /// Normalized coefficient, `1 ≤ |c| < 10` or zero
    pub fn coefficient(&self) -> Decimal {
        self.coefficient
    }

    /// Power of ten applied to the coefficient
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn is_sign_negative(&self) -> bool {
        self.coefficient.is_sign_negative() && !self.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self {
            coefficient: self.coefficient.abs(),
            exponent: self.exponent,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Decimal> for WideDecimal {
    fn from(value: Decimal) -> Self {
        let (coefficient, shift) = Self::split(value);
        // |shift| <= 28
        Self {
            coefficient,
            exponent: shift as i32,
        }
    }
}

impl From<&Decimal> for WideDecimal {
    fn from(value: &Decimal) -> Self {
        Self::from(*value)
    }
}

impl From<i64> for WideDecimal {
    fn from(value: i64) -> Self {
        Self::from(Decimal::from(value))
    }
}

impl From<i32> for WideDecimal {
    fn from(value: i32) -> Self {
        Self::from(Decimal::from(value))
    }
}

impl FromStr for WideDecimal {
    type Err = NumericError;

    /// Plain or scientific literal, rounded to 28 significant digits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_digits(DecimalDigits::parse(s)?)
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl WideDecimal {
    fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.coefficient.is_sign_negative() {
            -1
        } else {
            1
        }
    }
}

impl Ord for WideDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => {},
            ordering => return ordering,
        }

        let magnitude = self
            .exponent
            .cmp(&other.exponent)
            .then_with(|| self.coefficient.abs().cmp(&other.coefficient.abs()));

        if self.signum() < 0 {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl PartialOrd for WideDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<Decimal> for WideDecimal {
    fn eq(&self, other: &Decimal) -> bool {
        *self == WideDecimal::from(*other)
    }
}

impl PartialOrd<Decimal> for WideDecimal {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.cmp(&WideDecimal::from(*other)))
    }
}

impl Neg for WideDecimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coefficient: -self.coefficient,
            exponent: self.exponent,
        }
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for WideDecimal {
    /// Plain positional notation; `{:.N}` rounds to N fractional digits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.digits();
        let fraction = match f.precision() {
            Some(precision) => precision as u32,
            None => digits.exponent.min(0).unsigned_abs(),
        };
        f.write_str(&digits.to_fixed(fraction))
    }
}

impl fmt::Debug for WideDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.coefficient, self.exponent)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl RollArithmetic for WideDecimal {
    type Error = NumericError;

    #[inline]
    fn scaled(mantissa: i64, scale: u32) -> Self {
        Self::from(Decimal::new(mantissa, scale))
    }

    fn try_add(self, rhs: Self) -> NumericResult<Self> {
        if self.is_zero() {
            return Ok(rhs);
        }
        if rhs.is_zero() {
            return Ok(self);
        }

        let (large, small) = if self.exponent >= rhs.exponent {
            (self, rhs)
        } else {
            (rhs, self)
        };

        // Gap beyond the significant digits: the smaller operand vanishes
        let gap = i64::from(large.exponent) - i64::from(small.exponent);
        if gap > i64::from(SIGNIFICANT_DIGITS) {
            return Ok(large);
        }

        let aligned = small
            .coefficient
            .checked_mul(Decimal::new(1, gap as u32))
            .ok_or(NumericError::Overflow)?;
        let sum = large.coefficient.checked_add(aligned).ok_or_else(|| {
            tracing::debug!(lhs = ?self, rhs = ?rhs, "wide decimal addition overflow");
            NumericError::Overflow
        })?;

        Self::normalized(sum, i64::from(large.exponent))
    }

    #[inline]
    fn try_sub(self, rhs: Self) -> NumericResult<Self> {
        self.try_add(-rhs)
    }

    fn try_mul(self, rhs: Self) -> NumericResult<Self> {
        // Both coefficients are below 10, so the product stays below 100
        let product = self.coefficient.checked_mul(rhs.coefficient).ok_or_else(|| {
            tracing::debug!(lhs = ?self, rhs = ?rhs, "wide decimal multiplication overflow");
            NumericError::Overflow
        })?;

        Self::normalized(product, i64::from(self.exponent) + i64::from(rhs.exponent))
    }

    fn try_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            tracing::debug!(lhs = ?self, "wide decimal division by zero");
            return Err(NumericError::DivisionByZero);
        }

        let quotient = self.coefficient.checked_div(rhs.coefficient).ok_or_else(|| {
            tracing::debug!(lhs = ?self, rhs = ?rhs, "wide decimal division overflow");
            NumericError::Overflow
        })?;

        Self::normalized(quotient, i64::from(self.exponent) - i64::from(rhs.exponent))
    }

    fn try_sqrt(self) -> NumericResult<Self> {
        if self.is_sign_negative() {
            tracing::debug!(value = ?self, "wide decimal square root of negative value");
            return Err(NumericError::NegativeRadicand);
        }
        if self.is_zero() {
            return Ok(Self::ZERO);
        }

        // Even exponent: sqrt(c × 10^2k) = sqrt(c) × 10^k
        let (coefficient, exponent) = if self.exponent.rem_euclid(2) == 1 {
            (self.coefficient * Decimal::TEN, i64::from(self.exponent) - 1)
        } else {
            (self.coefficient, i64::from(self.exponent))
        };

        let root = coefficient
            .sqrt()
            .ok_or(NumericError::NegativeRadicand)?;
        Self::normalized(root, exponent / 2)
    }
}
