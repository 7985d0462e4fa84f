//! Closed-form estimates for deep wells.

use std::f64::consts::PI;

use crate::WellParameters;

/// Wavenumber of the tracked state in an infinitely deep well.
const LIMIT_WAVENUMBER: f64 = 1.5 * PI;

/// Energy of the tracked state as the outer potential goes to infinity.
#[must_use]
pub fn infinite_well_limit(inner: f64) -> f64 {
    inner + LIMIT_WAVENUMBER * LIMIT_WAVENUMBER
}

/// Approximates the bound-state energy of a deep well.
///
/// Expands the wavenumber just below its infinite-well value:
///
/// ```text
/// ε = (3π/2) / (1 + sqrt(V2 − V1 − (3π/2)²))
/// E = V1 + (3π/2)² − 3πε + ε²
/// ```
///
/// The estimate improves as `V2` grows. Returns `None` when the well is too
/// shallow for the expansion, `V2 − V1 ≤ (3π/2)²`.
#[must_use]
pub fn asymptotic_energy(params: &WellParameters) -> Option<f64> {
    let excess = params.depth() - LIMIT_WAVENUMBER * LIMIT_WAVENUMBER;
    if excess <= 0.0 {
        return None;
    }

    let epsilon = LIMIT_WAVENUMBER / (1.0 + excess.sqrt());
    Some(infinite_well_limit(params.inner()) - 3.0 * PI * epsilon + epsilon * epsilon)
}
