//! Natural-parameter continuation over a family of scalar equation problems.
//!
//! # Algorithm
//!
//! A [`Family`] maps a scalar parameter to an equation problem. For each
//! parameter, in the order given:
//!
//! 1. Build the problem for the parameter.
//! 2. Record the current seed.
//! 3. Refine the seed with [`newton`] against this parameter's problem.
//! 4. Use the refined value as the seed for the next parameter.
//!
//! With the default [`Record::Seed`], the value recorded for parameter `i` is
//! the seed *before* refinement at `i`, which is the value refined at
//! parameter `i - 1`. The recorded sequence therefore lags the solves by one
//! step. [`Record::Refined`] records the refined value instead.
//!
//! There is no retry or re-bracketing. A refinement that does not converge is
//! still recorded and still seeds the next parameter; each [`Point`] carries
//! the Newton [`Solution`](newton::Solution) so callers can inspect its
//! status.
//!
//! Solves depend on their predecessor, so the sweep is strictly sequential.
//!
//! # Observer Events
//!
//! The observer sees one [`Event`] per parameter, after the refinement. It
//! can return [`Action::KeepSeed`] to reject the refinement and carry the
//! current seed forward, or [`Action::StopEarly`] to end the sweep.

mod action;
mod config;
mod error;
mod event;
mod family;
mod solution;


pub use action::Action;
pub use config::{Config, Record};
pub use error::Error;
pub use event::Event;
pub use family::Family;
pub use solution::{Point, Solution, Status};

use eigenwell_core::{EquationProblem, Model, Observer};
use tracing::{debug, warn};

use crate::equation::newton;

/// Sweeps `params`, refining each seed with Newton's method.
///
/// # Errors
///
/// Returns an error if the Newton config is invalid, the family cannot build
/// a problem for a parameter, or a Newton solve fails with a model or problem
/// error.
pub fn solve<M, F, I, Obs>(
    model: &M,
    family: &F,
    params: I,
    seed: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    F: Family,
    F::Problem: EquationProblem<1, Input = M::Input, Output = M::Output>,
    I: IntoIterator<Item = f64>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.newton.validate()?;

    let mut seed = seed;
    let mut points = Vec::new();

    for (index, param) in params.into_iter().enumerate() {
        let problem = family
            .problem(param)
            .map_err(|source| Error::Family {
                param,
                source: Box::new(source),
            })?;

        let refined = newton::solve_unobserved(model, &problem, seed, &config.newton)
            .map_err(|source| Error::Newton { param, source })?;

        debug!(
            index,
            param,
            seed,
            refined = refined.x,
            iters = refined.iters,
            "refined continuation seed"
        );
        if !refined.is_converged() {
            warn!(
                index,
                param,
                x = refined.x,
                residual = refined.residual,
                status = ?refined.status,
                "refinement did not converge"
            );
        }

        let event = Event {
            index,
            param,
            seed,
            solution: &refined,
        };
        let action = observer.observe(&event);

        let accepted = match action {
            Some(Action::KeepSeed) => seed,
            Some(Action::StopEarly) | None => refined.x,
        };
        let value = match config.record {
            Record::Seed => seed,
            Record::Refined => accepted,
        };

        points.push(Point {
            param,
            seed,
            value,
            solution: refined,
        });

        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                points,
            });
        }

        seed = accepted;
    }

    Ok(Solution {
        status: Status::Complete,
        points,
    })
}

/// Sweeps `params` without observation.
///
/// # Errors
///
/// Returns an error if the Newton config is invalid, the family cannot build
/// a problem for a parameter, or a Newton solve fails with a model or problem
/// error.
pub fn solve_unobserved<M, F, I>(
    model: &M,
    family: &F,
    params: I,
    seed: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    F: Family,
    F::Problem: EquationProblem<1, Input = M::Input, Output = M::Output>,
    I: IntoIterator<Item = f64>,
{
    solve(model, family, params, seed, config, ())
}
