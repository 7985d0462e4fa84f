use crate::equation::Evaluation;

/// Event emitted by the Newton solver after each update.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Update counter (1-based).
    pub iter: usize,

    /// The increment just applied, `-f(x) / df`.
    pub step: f64,

    /// Derivative estimate used for the update.
    pub derivative: f64,

    /// Evaluation at the new iterate.
    pub eval: &'a Evaluation<I, O>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the new iterate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x
    }

    /// Returns the residual at the new iterate.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual
    }
}
