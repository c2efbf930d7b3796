//! # Simplified Beam-Bridge Deck Calculation
//!
//! Computes demand on a simply-supported bridge deck carried by parallel
//! girders. The deck is modeled as a rectangular concrete slab; its
//! self-weight plus a user-supplied live load form a uniform line load, and
//! the classic w·L²/8 and w·L/2 formulas give total moment and shear, split
//! evenly across the girders.
//!
//! ## Assumptions
//!
//! - Simply-supported span, uniformly distributed load
//! - Deck slab thickness 0.2 m, normal-weight concrete at 25 kN/m³
//! - Load shared equally by all girders
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::calculations::deck::{calculate, DeckInput};
//!
//! let input = DeckInput {
//!     span_m: 30.0,
//!     width_m: 10.0,
//!     girders: 4,
//!     live_load_kn_m: 5.0,
//! };
//! input.validate().unwrap();
//!
//! let result = calculate(&input);
//! assert_eq!(result.deck_self_weight_kn, 1500.0);
//! assert_eq!(result.per_girder_moment_knm, 1546.88);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BridgeError, BridgeResult};

/// Deck slab thickness (m)
const DECK_THICKNESS_M: f64 = 0.2;

/// Normal-weight concrete unit weight (kN/m³)
const CONCRETE_DENSITY_KN_M3: f64 = 25.0;

/// Input parameters for the deck calculation.
///
/// Serialized field names (`span`, `width`, `girders`, `live`) match the
/// on-disk JSON format produced by the Save action.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span": 30.0,
///   "width": 10.0,
///   "girders": 4,
///   "live": 5.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckInput {
    /// Clear span in meters
    #[serde(rename = "span")]
    pub span_m: f64,

    /// Deck width in meters
    #[serde(rename = "width")]
    pub width_m: f64,

    /// Number of supporting girders
    ///
    /// Kept signed so the Save path can carry any parsed value; `validate()`
    /// enforces positivity where the calculation requires it.
    pub girders: i64,

    /// Live load in kN per meter of span (any sign)
    #[serde(rename = "live")]
    pub live_load_kn_m: f64,
}

impl Default for DeckInput {
    /// Startup defaults: span 30 m, width 10 m, 4 girders, 5 kN/m live load.
    fn default() -> Self {
        DeckInput {
            span_m: 30.0,
            width_m: 10.0,
            girders: 4,
            live_load_kn_m: 5.0,
        }
    }
}

impl DeckInput {
    /// Validate the preconditions `calculate` relies on.
    ///
    /// Span and width must be positive (both appear as divisors or factors),
    /// girder count must be at least 1 (divisor). Live load may be any value.
    pub fn validate(&self) -> BridgeResult<()> {
        if !(self.span_m > 0.0) {
            return Err(BridgeError::invalid_input(
                "span",
                self.span_m.to_string(),
                "Span must be positive",
            ));
        }
        if !(self.width_m > 0.0) {
            return Err(BridgeError::invalid_input(
                "width",
                self.width_m.to_string(),
                "Width must be positive",
            ));
        }
        if self.girders < 1 {
            return Err(BridgeError::invalid_input(
                "girders",
                self.girders.to_string(),
                "Girder count must be positive",
            ));
        }
        Ok(())
    }
}

/// Derived structural quantities, all rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckResult {
    /// Total deck self-weight (kN)
    pub deck_self_weight_kn: f64,

    /// Uniform line load on the span: self-weight per meter + live load (kN/m)
    pub uniform_load_kn_per_m: f64,

    /// Midspan moment w·L²/8 (kN·m)
    pub total_moment_knm: f64,

    /// Support shear w·L/2 (kN)
    pub total_shear_kn: f64,

    /// Total moment divided by girder count (kN·m)
    pub per_girder_moment_knm: f64,

    /// Total shear divided by girder count (kN)
    pub per_girder_shear_kn: f64,
}

/// Round to 2 decimal places, halves away from zero (`f64::round` semantics).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Run the deck calculation.
///
/// Pure and deterministic: identical inputs always produce identical rounded
/// outputs. Assumes `input.validate()` has passed; the divisions by span and
/// girder count are safe under those preconditions. Each output is rounded
/// from the unrounded intermediates, so per-girder values do not accumulate
/// rounding error from the totals.
pub fn calculate(input: &DeckInput) -> DeckResult {
    let deck_area_m2 = input.span_m * input.width_m;
    let self_weight_kn = CONCRETE_DENSITY_KN_M3 * DECK_THICKNESS_M * deck_area_m2;
    let uniform_load_kn_m = self_weight_kn / input.span_m + input.live_load_kn_m;
    let moment_knm = uniform_load_kn_m * input.span_m * input.span_m / 8.0;
    let shear_kn = uniform_load_kn_m * input.span_m / 2.0;
    let girders = input.girders as f64;

    DeckResult {
        deck_self_weight_kn: round2(self_weight_kn),
        uniform_load_kn_per_m: round2(uniform_load_kn_m),
        total_moment_knm: round2(moment_knm),
        total_shear_kn: round2(shear_kn),
        per_girder_moment_knm: round2(moment_knm / girders),
        per_girder_shear_kn: round2(shear_kn / girders),
    }
}
