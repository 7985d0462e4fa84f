//! Newton's method with a self-adapting finite-difference derivative.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration:
//!
//! 1. Stops if `|f(x)| <= residual_tol`.
//! 2. Estimates the derivative with a central difference,
//!    `df = (f(x + dx/2) - f(x - dx/2)) / dx`.
//! 3. Stops if `df` is below `min_derivative` (flat, or negative) or above
//!    `max_derivative` (typically a nearby pole of the residual).
//! 4. Updates `dx = -f(x) / df` and `x = x + dx`.
//!
//! The difference step `dx` starts at `initial_step` and is thereafter the
//! previous Newton increment, so the derivative estimate sharpens as the
//! iterates close in on the root. Far from the root the early estimates can
//! be poor; a larger `initial_step` helps.
//!
//! # Outcomes
//!
//! Numerical difficulties are not errors. The solver always returns the last
//! iterate, tagged with a [`Status`] that says whether it converged and, if
//! not, why it stopped ([`Reason`]). Only model or problem failures and an
//! invalid config produce an [`Error`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after each update. Observers can return
//! [`Action::StopEarly`] to halt with the latest iterate.

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Reason, Solution, Status};

use eigenwell_core::{EquationProblem, Model, Observer};

use crate::equation::evaluate;

/// Refines a root estimate starting from `x0` using Newton's method.
///
/// The observer receives an [`Event`] after each update.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is not finite, or the
/// model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteStart { x: x0 });
    }

    let mut current = evaluate(model, problem, x0)?;
    let mut step = config.initial_step;

    for iter in 0..config.max_iters {
        let x = current.x;
        let residual = current.residual;

        if residual.abs() <= config.residual_tol {
            return Ok(Solution::from_eval(current, Status::Converged, iter));
        }

        let derivative = central_difference(model, problem, x, step)?;

        // Written so a NaN estimate also counts as flat.
        if !(derivative >= config.min_derivative) {
            let status = Status::Unconverged(Reason::FlatDerivative);
            return Ok(Solution::from_eval(current, status, iter));
        }
        if derivative > config.max_derivative {
            let status = Status::Unconverged(Reason::SteepDerivative);
            return Ok(Solution::from_eval(current, status, iter));
        }

        step = -residual / derivative;
        let next = evaluate(model, problem, x + step)?;

        let event = Event {
            iter: iter + 1,
            step,
            derivative,
            eval: &next,
        };
        let action = observer.observe(&event);

        current = next;
        if let Some(Action::StopEarly) = action {
            return Ok(Solution::from_eval(
                current,
                Status::StoppedByObserver,
                iter + 1,
            ));
        }
    }

    let status = if current.residual.abs() <= config.residual_tol {
        Status::Converged
    } else {
        Status::Unconverged(Reason::MaxIters)
    };
    Ok(Solution::from_eval(current, status, config.max_iters))
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is not finite, or the
/// model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}

/// Central difference of the residual around `x` with total width `step`.
fn central_difference<M, P>(model: &M, problem: &P, x: f64, step: f64) -> Result<f64, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let half = 0.5 * step;
    let forward = evaluate(model, problem, x + half)?.residual;
    let backward = evaluate(model, problem, x - half)?.residual;
    Ok((forward - backward) / step)
}
