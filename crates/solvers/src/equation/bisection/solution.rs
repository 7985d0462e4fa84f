use eigenwell_core::Snapshot;

use crate::equation::Evaluation;

use super::Bracket;

/// Indicates how the bisection solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket width reached the configured tolerance.
    Converged,

    /// The bracket endpoints are adjacent floats and cannot be split further.
    Stalled,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Root estimate: the left endpoint of the final bracket.
    pub x: f64,

    /// Residual at the reported root estimate.
    pub residual: f64,

    /// Snapshot at the reported root estimate.
    pub snapshot: Snapshot<I, O>,

    /// Final bracket bounds.
    pub bracket: [f64; 2],

    /// Number of midpoint evaluations.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Constructs a solution from the left endpoint evaluation.
    pub(super) fn new(
        left: Evaluation<I, O>,
        bracket: Bracket,
        status: Status,
        iters: usize,
    ) -> Self {
        Self {
            status,
            x: left.x,
            residual: left.residual,
            snapshot: left.snapshot,
            bracket: bracket.as_array(),
            iters,
        }
    }

    /// Returns true if the bracket reached the configured tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
