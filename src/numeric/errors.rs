// ============================================================================
// Numeric Errors
// Error types reported by the decimal arithmetic engine
// ============================================================================

use std::fmt;

/// Errors that can occur during precise (decimal) roll arithmetic.
///
/// The fast `f64` tier never produces these; it propagates `inf`/`NaN`
/// the way IEEE-754 does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the representable decimal range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Square root of a negative value
    NegativeRadicand,
    /// Input string could not be parsed as a number
    InvalidInput,
    /// Floating-point input was NaN or infinite
    NonFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NegativeRadicand => {
                write!(f, "square root of a negative value")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::NonFinite => write!(f, "non-finite value: NaN or infinity"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
