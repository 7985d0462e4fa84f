use eigenwell_solvers::{continuation::Record, equation::newton};
use ndarray::Array1;

use crate::sweep::{EigenvalueSequence, SweepConfig, SweepError, geometric_depths, sweep};

/// A complete eigenvalue sweep: inner potential, geometric depth grid, seed,
/// and solver settings.
///
/// The defaults track the state near `E ≈ 27.2` of a well with `V1 = 10`
/// over ten outer potentials from 70 to 10 000, recording lagged seeds.
///
/// With the `serde` feature every field is optional when deserialising:
///
/// ```toml
/// inner = 10.0
/// outer_end = 1000.0
/// count = 60
/// record = "refined"
///
/// [newton]
/// initial_step = 1e-6
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Scenario {
    /// Inner potential `V1`.
    pub inner: f64,

    /// First outer potential of the grid.
    pub outer_start: f64,

    /// Last outer potential of the grid.
    pub outer_end: f64,

    /// Number of grid points.
    pub count: usize,

    /// Energy seeding the first refinement.
    pub seed: f64,

    /// Which value to record per depth.
    pub record: Record,

    /// Newton settings for every refinement.
    pub newton: newton::Config,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            inner: 10.0,
            outer_start: 70.0,
            outer_end: 10_000.0,
            count: 10,
            seed: 27.200_751_877_248_61,
            record: Record::Seed,
            newton: newton::Config::default(),
        }
    }
}

impl Scenario {
    /// Returns the geometric grid of outer potentials.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::InvalidGrid`] if the endpoints cannot be spaced
    /// geometrically or `outer_start >= outer_end`.
    pub fn depths(&self) -> Result<Array1<f64>, SweepError> {
        geometric_depths(self.outer_start, self.outer_end, self.count)
    }

    /// Returns the continuation settings for this scenario.
    #[must_use]
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            newton: self.newton,
            record: self.record,
        }
    }

    /// Runs the sweep.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is invalid, or the sweep fails as
    /// described in [`sweep`](crate::sweep::sweep).
    pub fn run(&self) -> Result<EigenvalueSequence, SweepError> {
        let depths = self.depths()?;
        sweep(self.inner, &depths, self.seed, &self.sweep_config())
    }
}
