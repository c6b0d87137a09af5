// ============================================================================
// Roll Formulas
// Tier-independent roll geometry, written once against RollArithmetic
// ============================================================================

use crate::numeric::RollArithmetic;

// ============================================================================
// Physical Constants
// ============================================================================

/// Thickness is given in units of 1e-5 of the length unit (0.00001)
#[inline]
fn thickness_scale<N: RollArithmetic>() -> N {
    N::scaled(1, 5)
}

/// Weight factor per unit volume (0.4335)
#[inline]
fn weight_factor<N: RollArithmetic>() -> N {
    N::scaled(4335, 4)
}

/// Wound area per unit of squared diameter (0.06545)
#[inline]
fn winding_factor<N: RollArithmetic>() -> N {
    N::scaled(6545, 5)
}

/// Yield numerator (27.68)
#[inline]
fn yield_factor<N: RollArithmetic>() -> N {
    N::scaled(2768, 2)
}

/// Inches per foot
#[inline]
fn inches_per_foot<N: RollArithmetic>() -> N {
    N::integer(12)
}

// ============================================================================
// Formulas
// ============================================================================

/// `length × width × thickness × 0.00001 × diameter × diameter × film_type × 0.4335`
///
/// Factors are multiplied left to right in exactly this order.
pub fn roll_weight<N: RollArithmetic>(
    length: N,
    thickness: N,
    diameter: N,
    width: N,
    film_type: N,
) -> Result<N, N::Error> {
    length
        .try_mul(width)?
        .try_mul(thickness)?
        .try_mul(thickness_scale())?
        .try_mul(diameter)?
        .try_mul(diameter)?
        .try_mul(film_type)?
        .try_mul(weight_factor())
}

/// `sqrt((length × thickness × 0.00001 / 0.06545) + diameter²)`
pub fn roll_diameter<N: RollArithmetic>(
    length: N,
    thickness: N,
    diameter: N,
) -> Result<N, N::Error> {
    let wound_area = length
        .try_mul(thickness)?
        .try_mul(thickness_scale())?
        .try_div(winding_factor())?;

    wound_area.try_add(diameter.try_square()?)?.try_sqrt()
}

/// `weight / (width × (27.68 / film_type / (thickness × 0.00001))) / 12`
///
/// Each parenthesised group is evaluated on its own before it is combined:
/// 27.68 ÷ film_type, then ÷ (thickness × 0.00001), then × width; weight is
/// divided by that product and the quotient by 12.
pub fn roll_length<N: RollArithmetic>(
    weight: N,
    width: N,
    film_type: N,
    thickness: N,
) -> Result<N, N::Error> {
    let scaled_thickness = thickness.try_mul(thickness_scale())?;
    let yield_per_width = yield_factor::<N>()
        .try_div(film_type)?
        .try_div(scaled_thickness)?;
    let divisor = width.try_mul(yield_per_width)?;

    weight.try_div(divisor)?.try_div(inches_per_foot())
}
