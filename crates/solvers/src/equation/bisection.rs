//! Bisection for single-variable root finding.
//!
//! # Algorithm
//!
//! Given a bracket `[E1, E2]` whose endpoint residuals differ in sign, each
//! iteration evaluates the midpoint `Enew` and keeps the half that still
//! straddles the root:
//!
//! - if `f(Enew) · f(E1) > 0`, the root lies in `(Enew, E2)` and `E1 = Enew`
//! - otherwise the root lies in `(E1, Enew]` and `E2 = Enew`
//!
//! Iteration stops once `E2 - E1 <= x_abs_tol`, and the left endpoint `E1` is
//! reported as the root estimate. The bracket width halves every iteration,
//! so there is no iteration cap. If the bracket can no longer be split
//! because the endpoints are adjacent floats, the solver stops with
//! [`Status::Stalled`].
//!
//! # Bracket precondition
//!
//! By default the endpoint residuals are checked up front and a bracket with
//! `f(E1) · f(E2) > 0` is rejected with [`BracketError::NoSignChange`].
//! [`Precondition::Assume`] skips that check and trusts the caller, which is
//! useful when a pole sits between a root and the right endpoint.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation. Observers can
//! return [`Action::StopEarly`] to halt with the current left endpoint.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError, Precondition};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use eigenwell_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, evaluate};

use bracket::Bounds;

/// Finds a root of the equation using the bisection method.
///
/// The observer receives an [`Event`] for each midpoint evaluation.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, a residual is not
/// finite, or the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;

    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();

    let mut left_eval = evaluate(model, problem, left)?;
    let left_residual = finite_residual(&left_eval)?;

    let mut bracket = match config.precondition {
        Precondition::Verify => {
            let right_eval = evaluate(model, problem, right)?;
            let right_residual = finite_residual(&right_eval)?;
            Bracket::checked(bounds, left_residual, right_residual)?
        }
        Precondition::Assume => Bracket::assumed(bounds, left_residual),
    };

    let mut iters = 0;
    while !bracket.is_converged(config.x_abs_tol) {
        let mid = bracket.midpoint();
        if !bracket.splits_at(mid) {
            return Ok(Solution::new(left_eval, bracket, Status::Stalled, iters));
        }

        iters += 1;
        let mid_eval = evaluate(model, problem, mid)?;
        let mid_residual = finite_residual(&mid_eval)?;

        let event = Event {
            iter: iters,
            bracket: bracket.as_array(),
            eval: &mid_eval,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                left_eval,
                bracket,
                Status::StoppedByObserver,
                iters,
            ));
        }

        if bracket.shrink(mid, mid_residual) {
            left_eval = mid_eval;
        }
    }

    Ok(Solution::new(left_eval, bracket, Status::Converged, iters))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, a residual is not
/// finite, or the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

fn finite_residual<I, O>(eval: &Evaluation<I, O>) -> Result<f64, Error> {
    if eval.is_finite() {
        Ok(eval.residual)
    } else {
        Err(Error::NonFiniteResidual {
            x: eval.x,
            residual: eval.residual,
        })
    }
}
