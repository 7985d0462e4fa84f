use eigenwell_core::Model;

use crate::{WellError, WellParameters};

/// How the model treats trial energies outside the well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Domain {
    /// Take absolute values of `E - V1` and `V2 - E`, so every finite energy
    /// evaluates.
    #[default]
    Fold,

    /// Reject energies outside the open interval `(V1, V2)`.
    Strict,
}

/// A trial energy for a given well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub params: WellParameters,
    pub energy: f64,
}

/// The interior and exterior wavefunction terms at a trial energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matching {
    /// Interior wavenumber, `k = sqrt(|E - V1|)`.
    pub wavenumber: f64,

    /// Exterior decay constant, `r = sqrt(|V2 - E|)`.
    pub decay: f64,

    /// Matching mismatch, `k·tan(k) − r`.
    pub mismatch: f64,
}

impl Matching {
    /// Evaluates the matching terms at `energy`.
    ///
    /// `tan` diverges where `k = π/2 + nπ`; energies near those poles give
    /// very large or non-finite mismatches.
    #[must_use]
    pub fn at(energy: f64, params: &WellParameters) -> Self {
        let wavenumber = (energy - params.inner()).abs().sqrt();
        let decay = (params.outer() - energy).abs().sqrt();
        Self {
            wavenumber,
            decay,
            mismatch: wavenumber * wavenumber.tan() - decay,
        }
    }
}

/// Returns `k·tan(k) − r` at `energy`; zero at a bound-state energy.
#[must_use]
pub fn mismatch(energy: f64, params: &WellParameters) -> f64 {
    Matching::at(energy, params).mismatch
}

/// Finite square well model mapping a [`Trial`] to its [`Matching`] terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FiniteWell {
    pub domain: Domain,
}

impl FiniteWell {
    /// Creates a model with the given domain policy.
    #[must_use]
    pub fn new(domain: Domain) -> Self {
        Self { domain }
    }
}

impl Model for FiniteWell {
    type Input = Trial;
    type Output = Matching;
    type Error = WellError;

    fn call(&self, trial: &Trial) -> Result<Matching, Self::Error> {
        let Trial { params, energy } = *trial;

        if self.domain == Domain::Strict && !params.contains(energy) {
            return Err(WellError::OutsideWell {
                energy,
                inner: params.inner(),
                outer: params.outer(),
            });
        }

        Ok(Matching::at(energy, &params))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn shallow() -> WellParameters {
        WellParameters::new(10.0, 70.0).unwrap()
    }

    #[test]
    fn mismatch_below_first_pole() {
        assert_relative_eq!(
            mismatch(26.0, &shallow()),
            -2.001_964_451_312_49,
            epsilon = 1e-12
        );
    }

    #[test]
    fn matching_terms() {
        let matching = Matching::at(26.0, &shallow());
        assert_relative_eq!(matching.wavenumber, 4.0);
        assert_relative_eq!(matching.decay, 44.0_f64.sqrt());
        assert_relative_eq!(
            matching.mismatch,
            4.0 * 4.0_f64.tan() - 44.0_f64.sqrt()
        );
    }

    #[test]
    fn fold_evaluates_outside_the_well() {
        let params = shallow();
        let below = FiniteWell::default()
            .call(&Trial {
                params,
                energy: 5.0,
            })
            .unwrap();

        assert_relative_eq!(below.wavenumber, 5.0_f64.sqrt());
        assert_relative_eq!(below.decay, 65.0_f64.sqrt());
        assert_relative_eq!(below.mismatch, -10.912_252_631_397_17, epsilon = 1e-12);
    }

    #[test]
    fn strict_rejects_outside_the_well() {
        let model = FiniteWell::new(Domain::Strict);
        let params = shallow();

        for energy in [5.0, 10.0, 70.0, 80.0, f64::NAN] {
            let result = model.call(&Trial { params, energy });
            assert!(
                matches!(result, Err(WellError::OutsideWell { inner, outer, .. }) if inner == 10.0 && outer == 70.0),
                "energy {energy} should be rejected"
            );
        }
    }

    #[test]
    fn strict_matches_fold_inside_the_well() {
        let trial = Trial {
            params: shallow(),
            energy: 26.0,
        };
        let strict = FiniteWell::new(Domain::Strict).call(&trial).unwrap();
        let fold = FiniteWell::default().call(&trial).unwrap();
        assert_eq!(strict, fold);
    }
}
