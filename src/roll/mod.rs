// ============================================================================
// Roll Module
// Geometry of wound material rolls: weight, outer diameter and length
// ============================================================================

mod calculator;

pub mod formulas;

pub use calculator::{
    compute_roll_diameter, compute_roll_diameter_fast, compute_roll_length,
    compute_roll_length_fast, compute_roll_weight, compute_roll_weight_fast,
};
