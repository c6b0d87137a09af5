// ============================================================================
// Engine Module
// Configured roll calculator built on the pure roll formulas
// ============================================================================

mod roll_calculator;

pub use roll_calculator::{RollCalculator, RollCalculatorBuilder};
