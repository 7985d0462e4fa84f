use crate::equation::newton;

/// Event emitted by the continuation driver after each refinement.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Zero-based position in the parameter sequence.
    pub index: usize,

    /// Parameter for this refinement.
    pub param: f64,

    /// Seed the refinement started from.
    pub seed: f64,

    /// Newton result at this parameter.
    pub solution: &'a newton::Solution<I, O>,
}
