use crate::equation::Evaluation;

/// Iteration event emitted by the bisection solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Search bracket before this midpoint is applied.
    pub bracket: [f64; 2],

    /// Evaluation at the current midpoint.
    pub eval: &'a Evaluation<I, O>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the evaluated midpoint.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x
    }

    /// Returns the residual at the midpoint.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual
    }

    /// Returns the width of the bracket being split.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
