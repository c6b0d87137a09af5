// ============================================================================
// Roll Arithmetic
// The narrow numeric interface the roll formulas are written against
// ============================================================================

use std::convert::Infallible;
use std::fmt;

/// Arithmetic operations required by the roll formulas.
///
/// Every formula is expressed once against this trait and instantiated
/// for two precision tiers:
/// - [`WideDecimal`](super::WideDecimal): base-10 arithmetic with 28
///   significant digits at any magnitude; failures surface as
///   [`NumericError`](super::NumericError)
/// - `f64`: native binary floating point; never fails, `inf`/`NaN`
///   propagate through the result
///
/// All operations take and return values by copy, so implementations
/// are trivially safe to use from any thread.
pub trait RollArithmetic: Copy + fmt::Debug + Send + Sync {
    /// Error reported by the engine when an operation cannot be completed.
    type Error: fmt::Debug;

    /// Build the constant `mantissa × 10^-scale`.
    ///
    /// `scale` must not exceed 28.
    fn scaled(mantissa: i64, scale: u32) -> Self;

    /// Build an integer constant.
    fn integer(value: i64) -> Self {
        Self::scaled(value, 0)
    }

    fn try_add(self, rhs: Self) -> Result<Self, Self::Error>;

    fn try_sub(self, rhs: Self) -> Result<Self, Self::Error>;

    fn try_mul(self, rhs: Self) -> Result<Self, Self::Error>;

    fn try_div(self, rhs: Self) -> Result<Self, Self::Error>;

    /// `self × self`
    fn try_square(self) -> Result<Self, Self::Error> {
        self.try_mul(self)
    }

    fn try_sqrt(self) -> Result<Self, Self::Error>;
}

// ============================================================================
// Fast Tier: native f64
// ============================================================================

impl RollArithmetic for f64 {
    type Error = Infallible;

    #[inline]
    fn scaled(mantissa: i64, scale: u32) -> Self {
        // Both operands are exact for the constants in use, so the quotient
        // is the correctly rounded literal (e.g. 4335 / 10^4 == 0.4335).
        mantissa as f64 / 10f64.powi(scale as i32)
    }

    #[inline]
    fn try_add(self, rhs: Self) -> Result<Self, Infallible> {
        Ok(self + rhs)
    }

    #[inline]
    fn try_sub(self, rhs: Self) -> Result<Self, Infallible> {
        Ok(self - rhs)
    }

    #[inline]
    fn try_mul(self, rhs: Self) -> Result<Self, Infallible> {
        Ok(self * rhs)
    }

    #[inline]
    fn try_div(self, rhs: Self) -> Result<Self, Infallible> {
        Ok(self / rhs)
    }

    #[inline]
    fn try_sqrt(self) -> Result<Self, Infallible> {
        Ok(self.sqrt())
    }
}

/// Unwrap a result whose error type is uninhabited.
#[inline]
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
