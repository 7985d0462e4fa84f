use thiserror::Error;

use eigenwell_core::{EquationProblem, Model, Snapshot};

/// A scalar equation problem evaluated at one point.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    /// Solver variable.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Model input and output at `x`.
    pub snapshot: Snapshot<I, O>,
}

impl<I, O> Evaluation<I, O> {
    /// Returns true if the residual is neither infinite nor NaN.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.residual.is_finite()
    }
}

/// Failure while evaluating a problem, split by which side failed.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// The problem could not map `x` to an input or compute the residual.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Maps `x` to a model input, calls the model, and computes the residual.
///
/// # Errors
///
/// Returns [`EvalError::Problem`] if the problem rejects `x` or its output,
/// or [`EvalError::Model`] if the model call fails.
pub fn evaluate<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output>, EvalError<M::Error, P::Error>>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&[x]).map_err(EvalError::Problem)?;
    let snapshot = Snapshot::capture(model, input).map_err(EvalError::Model)?;
    let [residual] = problem
        .residuals(&snapshot.input, &snapshot.output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residual,
        snapshot,
    })
}
