// ============================================================================
// Roll Calculator Library
// Weight, diameter and length of wound material rolls with decimal precision
// ============================================================================

//! # Roll Calculator
//!
//! Geometry of wound material rolls (film, paper): from any three of
//! length, thickness, core diameter, width and film type, derive the roll
//! weight, its outer diameter or its length.
//!
//! ## Features
//!
//! - **Two precision tiers**: base-10 decimal arithmetic
//!   ([`WideDecimal`](numeric::WideDecimal), 28 significant digits at any
//!   magnitude on top of `rust_decimal`) for chained multiplication and
//!   division without binary round-off, and native `f64` for speed
//! - **One formula, two tiers**: each formula is written once against
//!   [`RollArithmetic`](numeric::RollArithmetic)
//! - **Fixed-point formatting** with a documented rounding rule
//!   (ties away from zero), never in scientific notation; floats keep their
//!   shortest round-trip digits
//! - **Pure functions**: no state, safe to call from any thread
//!
//! ## Example
//!
//! ```rust
//! use roll_calculator::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // 1000 ft of 1.0 mil film on a 3" core, 10" wide, film type 1
//! let weight = compute_roll_weight(
//!     Decimal::from(1000),
//!     Decimal::ONE,
//!     Decimal::from(3),
//!     Decimal::from(10),
//!     Decimal::ONE,
//! )
//! .unwrap();
//! assert_eq!(format(weight, 2), "0.39");
//!
//! // Fast tier for previews
//! let outer = compute_roll_diameter_fast(1000.0, 1.0, 3.0);
//! assert_eq!(format(outer, 4), "3.0254");
//! ```

pub mod domain;
pub mod engine;
pub mod format;
pub mod numeric;
pub mod roll;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CalculatorConfig, PrecisionTier};
    pub use crate::engine::{RollCalculator, RollCalculatorBuilder};
    pub use crate::format::{format, format_with, FormatPrecision, FormatValue};
    pub use crate::numeric::{
        decimal_from_f64, parse_decimal, NumericError, NumericResult, RollArithmetic,
        WideDecimal,
    };
    pub use crate::roll::{
        compute_roll_diameter, compute_roll_diameter_fast, compute_roll_length,
        compute_roll_length_fast, compute_roll_weight, compute_roll_weight_fast,
    };
}
