use crate::equation::newton;

/// Indicates how the sweep terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every parameter was visited.
    Complete,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// One recorded parameter of a sweep.
#[derive(Debug, Clone)]
pub struct Point<I, O> {
    /// Parameter value.
    pub param: f64,

    /// Seed the refinement at this parameter started from.
    pub seed: f64,

    /// Recorded value, chosen by [`Record`](super::Record).
    pub value: f64,

    /// Newton refinement at this parameter.
    pub solution: newton::Solution<I, O>,
}

impl<I, O> Point<I, O> {
    /// Returns true if the refinement at this parameter converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.solution.is_converged()
    }
}

/// The result of a continuation sweep.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the sweep terminated.
    pub status: Status,

    /// Recorded points in parameter order.
    pub points: Vec<Point<I, O>>,
}

impl<I, O> Solution<I, O> {
    /// Returns the recorded `(param, value)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|point| (point.param, point.value))
    }

    /// Returns true if every refinement converged.
    #[must_use]
    pub fn all_converged(&self) -> bool {
        self.points.iter().all(Point::is_converged)
    }
}
