// ============================================================================
// Numeric Module
// Precise decimal and fast floating-point arithmetic for roll formulas
// ============================================================================
//
// This module provides:
// - RollArithmetic: the operation set the formulas are written against
// - WideDecimal (precise, 28 significant digits at any magnitude) and f64 (fast)
// - NumericError: Error types for decimal arithmetic
// - Conversions at API boundaries (string/f64 <-> Decimal), always through
//   the shortest round-trip digits of a float
//
// Design principles:
// - Precise tier never passes through binary floating point
// - Decimal arithmetic returns Result (no panics)
// - The engine stays behind one trait so it can be swapped

mod arithmetic;
mod conversion;
pub(crate) mod digits;
mod errors;
mod wide_decimal;

pub use arithmetic::RollArithmetic;
pub(crate) use arithmetic::infallible;
pub use conversion::{decimal_from_f64, decimal_to_f64, parse_decimal};
pub use errors::{NumericError, NumericResult};
pub use wide_decimal::{WideDecimal, SIGNIFICANT_DIGITS};
