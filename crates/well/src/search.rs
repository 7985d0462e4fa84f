//! Eigenvalue searches at fixed well parameters.
//!
//! Both searches use the default [`FiniteWell`] model. For another domain
//! policy or an observer, call the solvers in `eigenwell_solvers` directly
//! with an [`EigenvalueProblem`].

use eigenwell_solvers::equation::{bisection, newton};

use crate::{EigenvalueProblem, FiniteWell, Matching, Trial, WellParameters};

/// Bisects `bracket` for a bound-state energy.
///
/// The bracket must straddle exactly one root and no pole of `tan`. A bracket
/// that crosses a pole has a sign change but converges onto the pole, so
/// check the returned residual.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, or if a residual is
/// not finite.
pub fn bisect(
    params: WellParameters,
    bracket: [f64; 2],
    config: &bisection::Config,
) -> Result<bisection::Solution<Trial, Matching>, bisection::Error> {
    bisection::solve_unobserved(
        &FiniteWell::default(),
        &EigenvalueProblem::new(params),
        bracket,
        config,
    )
}

/// Refines `seed` toward a bound-state energy with Newton's method.
///
/// # Errors
///
/// Returns an error if the config is invalid or `seed` is not finite.
pub fn refine(
    params: WellParameters,
    seed: f64,
    config: &newton::Config,
) -> Result<newton::Solution<Trial, Matching>, newton::Error> {
    newton::solve_unobserved(
        &FiniteWell::default(),
        &EigenvalueProblem::new(params),
        seed,
        config,
    )
}
