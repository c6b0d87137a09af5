// ============================================================================
// Format Precision
// Typed form of the integer precision control value
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional digits rendered when no rounding is requested.
pub const UNROUNDED_DIGITS: u32 = 16;

/// Most fractional digits ever rendered; larger requests are clamped.
pub const MAX_FORMAT_DIGITS: u32 = 64;

/// How many fractional digits a formatted value carries.
///
/// Built from the integer control value callers pass to
/// [`format`](crate::format::format):
/// - `precision < 0` → [`Unrounded`](FormatPrecision::Unrounded)
/// - `precision == 0` → [`Integer`](FormatPrecision::Integer)
/// - `precision > 0` → [`Fixed`](FormatPrecision::Fixed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatPrecision {
    /// Keep the value as is, rendered with 16 fractional digits
    #[default]
    Unrounded,

    /// Round to the nearest integer, no decimal point
    Integer,

    /// Exactly this many fractional digits (always > 0), clamped to
    /// [`MAX_FORMAT_DIGITS`]
    Fixed(u32),
}

impl FormatPrecision {
    /// Number of digits rendered after the decimal point.
    #[inline]
    pub const fn fraction_digits(self) -> u32 {
        match self {
            FormatPrecision::Unrounded => UNROUNDED_DIGITS,
            FormatPrecision::Integer => 0,
            FormatPrecision::Fixed(digits) if digits > MAX_FORMAT_DIGITS => MAX_FORMAT_DIGITS,
            FormatPrecision::Fixed(digits) => digits,
        }
    }
}

impl From<i32> for FormatPrecision {
    fn from(precision: i32) -> Self {
        match precision {
            p if p < 0 => FormatPrecision::Unrounded,
            0 => FormatPrecision::Integer,
            p => FormatPrecision::Fixed(p.unsigned_abs()),
        }
    }
}
