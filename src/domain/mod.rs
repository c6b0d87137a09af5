// ============================================================================
// Domain Models Module
// Configuration value objects for the roll calculator
// ============================================================================

pub mod config;

pub use config::{CalculatorConfig, PrecisionTier, DEFAULT_MAX_PRECISION};
