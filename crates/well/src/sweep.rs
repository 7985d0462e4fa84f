//! Continuation of a bound-state energy across outer potentials.
//!
//! [`sweep`] walks a sequence of outer potentials `V2` at fixed `V1`,
//! refining each energy with Newton's method from the previous one. Depths
//! are usually spaced geometrically with [`geometric_depths`].
//!
//! The default [`SweepConfig`] records each depth's *seed*, so the recorded
//! energies lag the solves by one depth. Set
//! [`Record::Refined`](eigenwell_solvers::continuation::Record::Refined) to
//! record the refined energy at each depth instead.

use eigenwell_core::Observer;
use eigenwell_solvers::{
    continuation::{self, Action, Event},
    equation::newton,
};
use ndarray::Array1;
use thiserror::Error;
use tracing::debug;

use crate::{FiniteWell, Matching, Trial, WellFamily};

pub use eigenwell_solvers::continuation::Config as SweepConfig;

/// Errors that can occur while building or running a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Geometric spacing needs finite, non-zero endpoints of the same sign
    /// with `start < end`.
    #[error("cannot space depths geometrically from {start} to {end}")]
    InvalidGrid { start: f64, end: f64 },

    /// Depths must be strictly increasing.
    #[error("depth {depth} at index {index} does not exceed the previous depth {previous}")]
    UnorderedDepths {
        index: usize,
        previous: f64,
        depth: f64,
    },

    #[error(transparent)]
    Continuation(#[from] continuation::Error),
}

/// Returns `count` outer potentials spaced geometrically from `start` to `end`.
///
/// Both endpoints are included exactly.
///
/// # Errors
///
/// Returns [`SweepError::InvalidGrid`] if either endpoint is zero or not
/// finite, if the endpoints differ in sign, or if `start >= end`.
pub fn geometric_depths(start: f64, end: f64, count: usize) -> Result<Array1<f64>, SweepError> {
    let invalid = SweepError::InvalidGrid { start, end };
    if !start.is_finite() || !end.is_finite() || start >= end {
        return Err(invalid);
    }

    let mut depths = Array1::geomspace(start, end, count).ok_or(invalid)?;
    if count > 0 {
        depths[0] = start;
    }
    if count > 1 {
        depths[count - 1] = end;
    }
    Ok(depths)
}

/// Energies recorded by a sweep, in depth order.
#[derive(Debug, Clone)]
pub struct EigenvalueSequence {
    depths: Array1<f64>,
    energies: Array1<f64>,
    statuses: Vec<newton::Status>,
    complete: bool,
}

impl EigenvalueSequence {
    fn from_solution(solution: &continuation::Solution<Trial, Matching>) -> Self {
        Self {
            depths: solution.points.iter().map(|point| point.param).collect(),
            energies: solution.points.iter().map(|point| point.value).collect(),
            statuses: solution
                .points
                .iter()
                .map(|point| point.solution.status)
                .collect(),
            complete: solution.status == continuation::Status::Complete,
        }
    }

    /// Outer potentials, one per recorded energy.
    #[must_use]
    pub fn depths(&self) -> &Array1<f64> {
        &self.depths
    }

    /// Recorded energies.
    #[must_use]
    pub fn energies(&self) -> &Array1<f64> {
        &self.energies
    }

    /// Newton status of the refinement at each depth.
    #[must_use]
    pub fn statuses(&self) -> &[newton::Status] {
        &self.statuses
    }

    /// Returns the `(depth, energy)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.depths.iter().copied().zip(self.energies.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Returns true if the refinement at `index` converged.
    #[must_use]
    pub fn is_converged(&self, index: usize) -> bool {
        self.statuses
            .get(index)
            .is_some_and(|status| *status == newton::Status::Converged)
    }

    /// Returns true if every refinement converged.
    #[must_use]
    pub fn all_converged(&self) -> bool {
        (0..self.len()).all(|index| self.is_converged(index))
    }

    /// Returns true if every depth was visited.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Checks that `depths` is strictly increasing.
fn check_order(depths: &Array1<f64>) -> Result<(), SweepError> {
    for (index, pair) in depths.windows(2).into_iter().enumerate() {
        let (previous, depth) = (pair[0], pair[1]);
        if !(depth > previous) {
            return Err(SweepError::UnorderedDepths {
                index: index + 1,
                previous,
                depth,
            });
        }
    }
    Ok(())
}

/// Sweeps `depths` at inner potential `inner`, starting from `seed`.
///
/// # Errors
///
/// Returns an error if `depths` is not strictly increasing, the Newton config
/// is invalid, a depth does not bind (`depth <= inner`), or `seed` is not
/// finite.
pub fn sweep(
    inner: f64,
    depths: &Array1<f64>,
    seed: f64,
    config: &SweepConfig,
) -> Result<EigenvalueSequence, SweepError> {
    sweep_observed(inner, depths, seed, config, ())
}

/// Sweeps `depths` like [`sweep`], passing each refinement to `observer`.
///
/// The observer can reject a refinement with [`Action::KeepSeed`] or end the
/// sweep with [`Action::StopEarly`].
///
/// # Errors
///
/// Returns the same errors as [`sweep`].
pub fn sweep_observed<Obs>(
    inner: f64,
    depths: &Array1<f64>,
    seed: f64,
    config: &SweepConfig,
    observer: Obs,
) -> Result<EigenvalueSequence, SweepError>
where
    Obs: for<'a> Observer<Event<'a, Trial, Matching>, Action>,
{
    check_order(depths)?;
    debug!(inner, depths = depths.len(), seed, "starting eigenvalue sweep");

    let solution = continuation::solve(
        &FiniteWell::default(),
        &WellFamily::new(inner),
        depths.iter().copied(),
        seed,
        config,
        observer,
    )?;

    Ok(EigenvalueSequence::from_solution(&solution))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use eigenwell_solvers::continuation::Record;

    use super::*;

    #[test]
    fn geometric_depths_hit_endpoints() {
        let depths = geometric_depths(70.0, 10_000.0, 10).unwrap();

        assert_eq!(depths.len(), 10);
        assert_eq!(depths[0], 70.0);
        assert_eq!(depths[9], 10_000.0);

        let ratio = (10_000.0_f64 / 70.0).powf(1.0 / 9.0);
        for pair in depths.windows(2) {
            assert_relative_eq!(pair[1] / pair[0], ratio, epsilon = 1e-12);
        }
    }

    #[test]
    fn geometric_depths_small_counts() {
        assert!(geometric_depths(70.0, 100.0, 0).unwrap().is_empty());
        assert_eq!(geometric_depths(70.0, 100.0, 1).unwrap().to_vec(), vec![70.0]);
    }

    #[test]
    fn geometric_depths_reject_bad_endpoints() {
        for (start, end) in [
            (0.0, 10.0),
            (-1.0, 10.0),
            (1.0, f64::INFINITY),
            (f64::NAN, 10.0),
            (10_000.0, 70.0),
            (70.0, 70.0),
        ] {
            assert!(matches!(
                geometric_depths(start, end, 5),
                Err(SweepError::InvalidGrid { .. })
            ));
        }
    }

    #[test]
    fn refined_sweep_tracks_root() {
        let depths = Array1::from(vec![70.0, 100.0]);
        let config = SweepConfig {
            record: Record::Refined,
            ..SweepConfig::default()
        };

        let sequence = sweep(10.0, &depths, 27.200_751_877_248_61, &config).unwrap();

        assert!(sequence.is_complete());
        assert!(sequence.all_converged());
        assert_relative_eq!(sequence.energies()[0], 27.200_751_877_248_6, epsilon = 1e-9);
        assert_relative_eq!(sequence.energies()[1], 28.046_337_509_905_38, epsilon = 1e-10);
    }

    #[test]
    fn unbound_depth_fails() {
        let depths = Array1::from(vec![5.0, 70.0]);

        let result = sweep(10.0, &depths, 27.0, &SweepConfig::default());

        assert!(matches!(
            result,
            Err(SweepError::Continuation(continuation::Error::Family { param, .. })) if param == 5.0
        ));
    }

    #[test]
    fn unordered_depths_fail_before_solving() {
        let depths = Array1::from(vec![1_000.0, 70.0, 70.0, 500.0]);

        let result = sweep(10.0, &depths, 27.0, &SweepConfig::default());

        assert!(matches!(
            result,
            Err(SweepError::UnorderedDepths { index: 1, previous, depth })
                if previous == 1_000.0 && depth == 70.0
        ));
    }

    #[test]
    fn repeated_depth_fails() {
        let depths = Array1::from(vec![70.0, 100.0, 100.0]);

        let result = sweep(10.0, &depths, 27.0, &SweepConfig::default());

        assert!(matches!(
            result,
            Err(SweepError::UnorderedDepths { index: 2, .. })
        ));
    }

    #[test]
    fn empty_sweep() {
        let sequence =
            sweep(10.0, &Array1::from(vec![]), 27.0, &SweepConfig::default()).unwrap();
        assert!(sequence.is_empty());
        assert!(sequence.is_complete());
        assert!(sequence.all_converged());
    }
}
