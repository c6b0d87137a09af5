// ============================================================================
// Calculator Configuration
// Precision tier and output rounding for the roll calculator
// ============================================================================

use crate::format::{FormatPrecision, MAX_FORMAT_DIGITS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits the formatter renders
pub const DEFAULT_MAX_PRECISION: u32 = MAX_FORMAT_DIGITS;

// ============================================================================
// Precision Tier
// ============================================================================

/// Arithmetic used to evaluate the roll formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrecisionTier {
    /// Base-10 decimal arithmetic (28 significant digits at any magnitude)
    /// - No binary round-off through chained multiplication/division
    /// - Engine failures surface as `NumericError`
    #[default]
    Precise,

    /// Native `f64` arithmetic
    /// - Lower cost, binary round-off
    /// - Used for interactive previews where speed beats the last digit
    Fast,
}

// ============================================================================
// Calculator Configuration
// ============================================================================

/// Configuration for a [`RollCalculator`](crate::engine::RollCalculator)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Arithmetic tier used for weight, diameter and length
    pub tier: PrecisionTier,

    /// Formatting control value: < 0 unrounded, 0 integer, > 0 fixed digits
    pub precision: i32,

    /// Upper bound accepted for a positive `precision`
    pub max_precision: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            tier: PrecisionTier::Precise,
            precision: -1,
            max_precision: DEFAULT_MAX_PRECISION,
        }
    }
}

impl CalculatorConfig {
    /// Create a new configuration with required parameters
    pub fn new(tier: PrecisionTier, precision: i32) -> Self {
        Self {
            tier,
            precision,
            ..Self::default()
        }
    }

    /// Builder method: Set the arithmetic tier
    pub fn with_tier(mut self, tier: PrecisionTier) -> Self {
        self.tier = tier;
        self
    }

    /// Builder method: Set the formatting precision
    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set the largest accepted precision
    pub fn with_max_precision(mut self, max_precision: u32) -> Self {
        self.max_precision = max_precision;
        self
    }

    /// Typed form of `precision`
    pub fn format_precision(&self) -> FormatPrecision {
        FormatPrecision::from(self.precision)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_precision == 0 {
            return Err("Maximum precision must be positive".to_string());
        }

        if self.max_precision > MAX_FORMAT_DIGITS {
            return Err(format!(
                "Maximum precision {} exceeds formatter limit of {}",
                self.max_precision, MAX_FORMAT_DIGITS
            ));
        }

        if let FormatPrecision::Fixed(digits) = self.format_precision() {
            if digits > self.max_precision {
                return Err(format!(
                    "Precision {} exceeds maximum of {}",
                    digits, self.max_precision
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Decimal arithmetic, unrounded output
    pub fn precise() -> Self {
        Self::new(PrecisionTier::Precise, -1)
    }

    /// Floating-point arithmetic, unrounded output
    pub fn fast() -> Self {
        Self::new(PrecisionTier::Fast, -1)
    }

    /// Decimal arithmetic, output rounded for display
    pub fn display(precision: i32) -> Self {
        Self::new(PrecisionTier::Precise, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();

        assert_eq!(config.tier, PrecisionTier::Precise);
        assert_eq!(config.precision, -1);
        assert_eq!(config.format_precision(), FormatPrecision::Unrounded);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::precise()
            .with_tier(PrecisionTier::Fast)
            .with_precision(3)
            .with_max_precision(6);

        assert_eq!(config.tier, PrecisionTier::Fast);
        assert_eq!(config.format_precision(), FormatPrecision::Fixed(3));
        assert_eq!(config.max_precision, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let too_precise = CalculatorConfig::display(12).with_max_precision(8);
        assert_eq!(
            too_precise.validate(),
            Err("Precision 12 exceeds maximum of 8".to_string())
        );

        let no_digits = CalculatorConfig::default().with_max_precision(0);
        assert!(no_digits.validate().is_err());

        let beyond_formatter = CalculatorConfig::default().with_max_precision(65);
        assert_eq!(
            beyond_formatter.validate(),
            Err("Maximum precision 65 exceeds formatter limit of 64".to_string())
        );
        assert!(CalculatorConfig::display(i32::MAX).validate().is_err());

        // Negative and zero precision never hit the ceiling
        let unrounded = CalculatorConfig::display(-5).with_max_precision(1);
        assert!(unrounded.validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        assert!(matches!(CalculatorConfig::precise().tier, PrecisionTier::Precise));
        assert!(matches!(CalculatorConfig::fast().tier, PrecisionTier::Fast));

        let display = CalculatorConfig::display(2);
        assert_eq!(display.format_precision(), FormatPrecision::Fixed(2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = CalculatorConfig::display(4).with_tier(PrecisionTier::Fast);
        let json = serde_json::to_string(&config).unwrap();
        let restored: CalculatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
