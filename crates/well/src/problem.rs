use std::convert::Infallible;

use eigenwell_core::EquationProblem;
use eigenwell_solvers::continuation::Family;

use crate::{Matching, Trial, WellError, WellParameters};

/// Finds an energy where the matching mismatch vanishes.
///
/// The solver variable is the trial energy and the residual is
/// [`Matching::mismatch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenvalueProblem {
    params: WellParameters,
}

impl EigenvalueProblem {
    #[must_use]
    pub fn new(params: WellParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> WellParameters {
        self.params
    }
}

impl EquationProblem<1> for EigenvalueProblem {
    type Input = Trial;
    type Output = Matching;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Trial, Self::Error> {
        Ok(Trial {
            params: self.params,
            energy: x[0],
        })
    }

    fn residuals(&self, _input: &Trial, output: &Matching) -> Result<[f64; 1], Self::Error> {
        Ok([output.mismatch])
    }
}

/// Eigenvalue problems at a fixed inner potential, indexed by outer potential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellFamily {
    inner: f64,
}

impl WellFamily {
    #[must_use]
    pub fn new(inner: f64) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn inner(&self) -> f64 {
        self.inner
    }
}

impl Family for WellFamily {
    type Problem = EigenvalueProblem;
    type Error = WellError;

    fn problem(&self, outer: f64) -> Result<EigenvalueProblem, WellError> {
        WellParameters::new(self.inner, outer).map(EigenvalueProblem::new)
    }
}
