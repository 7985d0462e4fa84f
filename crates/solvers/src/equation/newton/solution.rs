use eigenwell_core::Snapshot;

use crate::equation::Evaluation;

/// Why a Newton solve stopped without converging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reason {
    /// The derivative estimate fell below `min_derivative`.
    FlatDerivative,

    /// The derivative estimate exceeded `max_derivative`.
    SteepDerivative,

    /// The update limit was reached.
    MaxIters,
}

/// Indicates how the Newton solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The residual met the configured tolerance.
    Converged,

    /// The solver stopped on a numerical guard or the iteration limit.
    Unconverged(Reason),

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
///
/// `x` is always the last iterate, whatever the status, so callers that do
/// not care about convergence can use it directly.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Last iterate.
    pub x: f64,

    /// Residual at the last iterate.
    pub residual: f64,

    /// Snapshot at the last iterate.
    pub snapshot: Snapshot<I, O>,

    /// Number of updates performed.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Constructs a solution from an evaluation result.
    pub(super) fn from_eval(eval: Evaluation<I, O>, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x,
            residual: eval.residual,
            snapshot: eval.snapshot,
            iters,
        }
    }

    /// Returns true if the residual met the configured tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the reason the solve stopped short, if it did.
    #[must_use]
    pub fn unconverged_reason(&self) -> Option<Reason> {
        match self.status {
            Status::Unconverged(reason) => Some(reason),
            Status::Converged | Status::StoppedByObserver => None,
        }
    }
}
