// ============================================================================
// Format Module
// Presentation of roll results as fixed-point strings
// ============================================================================

mod formatter;
mod precision;

pub use formatter::{format, format_with, FormatValue};
pub use precision::{FormatPrecision, MAX_FORMAT_DIGITS, UNROUNDED_DIGITS};
