// ============================================================================
// Roll Calculator
// Configured facade that dispatches to the precise or fast tier
// ============================================================================

use crate::domain::{CalculatorConfig, PrecisionTier};
use crate::format::{format_with, FormatValue};
use crate::numeric::{NumericResult, WideDecimal};
use crate::roll;

/// Roll calculator bound to a [`CalculatorConfig`].
///
/// Inputs and outputs are always [`WideDecimal`]; the configured
/// [`PrecisionTier`] decides how the formula is evaluated. The calculator
/// holds no mutable state and can be shared freely between threads.
///
/// # Example
/// ```
/// use roll_calculator::prelude::*;
/// use rust_decimal::Decimal;
///
/// let calculator = RollCalculator::new(CalculatorConfig::display(2)).unwrap();
/// let weight = calculator
///     .weight(
///         Decimal::from(1000),
///         Decimal::ONE,
///         Decimal::from(3),
///         Decimal::from(10),
///         Decimal::ONE,
///     )
///     .unwrap();
/// assert_eq!(calculator.format(weight), "0.39");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RollCalculator {
    config: CalculatorConfig,
}

impl RollCalculator {
    /// Create a calculator from a validated configuration
    pub fn new(config: CalculatorConfig) -> Result<Self, String> {
        config.validate()?;
        tracing::debug!(tier = ?config.tier, precision = config.precision, "roll calculator configured");
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Roll weight from length, thickness, core diameter, width and film type
    pub fn weight(
        &self,
        length: impl Into<WideDecimal>,
        thickness: impl Into<WideDecimal>,
        diameter: impl Into<WideDecimal>,
        width: impl Into<WideDecimal>,
        film_type: impl Into<WideDecimal>,
    ) -> NumericResult<WideDecimal> {
        let (length, thickness, diameter) = (length.into(), thickness.into(), diameter.into());
        let (width, film_type) = (width.into(), film_type.into());

        match self.config.tier {
            PrecisionTier::Precise => {
                roll::compute_roll_weight(length, thickness, diameter, width, film_type)
            }
            PrecisionTier::Fast => WideDecimal::from_f64(roll::compute_roll_weight_fast(
                length.to_f64()?,
                thickness.to_f64()?,
                diameter.to_f64()?,
                width.to_f64()?,
                film_type.to_f64()?,
            )),
        }
    }

    /// Outer roll diameter from length, thickness and core diameter
    pub fn diameter(
        &self,
        length: impl Into<WideDecimal>,
        thickness: impl Into<WideDecimal>,
        diameter: impl Into<WideDecimal>,
    ) -> NumericResult<WideDecimal> {
        let (length, thickness, diameter) = (length.into(), thickness.into(), diameter.into());

        match self.config.tier {
            PrecisionTier::Precise => roll::compute_roll_diameter(length, thickness, diameter),
            PrecisionTier::Fast => WideDecimal::from_f64(roll::compute_roll_diameter_fast(
                length.to_f64()?,
                thickness.to_f64()?,
                diameter.to_f64()?,
            )),
        }
    }

    /// Roll length from weight, width, film type and thickness
    pub fn length(
        &self,
        weight: impl Into<WideDecimal>,
        width: impl Into<WideDecimal>,
        film_type: impl Into<WideDecimal>,
        thickness: impl Into<WideDecimal>,
    ) -> NumericResult<WideDecimal> {
        let (weight, width) = (weight.into(), width.into());
        let (film_type, thickness) = (film_type.into(), thickness.into());

        match self.config.tier {
            PrecisionTier::Precise => {
                roll::compute_roll_length(weight, width, film_type, thickness)
            }
            PrecisionTier::Fast => WideDecimal::from_f64(roll::compute_roll_length_fast(
                weight.to_f64()?,
                width.to_f64()?,
                film_type.to_f64()?,
                thickness.to_f64()?,
            )),
        }
    }

    /// Format a result with the configured precision
    pub fn format(&self, value: impl Into<FormatValue>) -> String {
        format_with(value, self.config.format_precision())
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating roll calculators with fluent API
///
/// # Example
/// ```
/// use roll_calculator::engine::RollCalculatorBuilder;
///
/// let calculator = RollCalculatorBuilder::new()
///     .fast()
///     .with_precision(3)
///     .build()
///     .unwrap();
/// assert_eq!(calculator.config().precision, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RollCalculatorBuilder {
    config: CalculatorConfig,
}

impl RollCalculatorBuilder {
    /// Create a new builder with the default (precise, unrounded) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate formulas with decimal arithmetic (default)
    pub fn precise(mut self) -> Self {
        self.config.tier = PrecisionTier::Precise;
        self
    }

    /// Evaluate formulas with native floating point
    pub fn fast(mut self) -> Self {
        self.config.tier = PrecisionTier::Fast;
        self
    }

    /// Set the formatting precision
    pub fn with_precision(mut self, precision: i32) -> Self {
        self.config.precision = precision;
        self
    }

    /// Set the largest accepted precision
    pub fn with_max_precision(mut self, max_precision: u32) -> Self {
        self.config.max_precision = max_precision;
        self
    }

    /// Build the calculator
    pub fn build(self) -> Result<RollCalculator, String> {
        RollCalculator::new(self.config)
    }
}
