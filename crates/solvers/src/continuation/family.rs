use std::error::Error as StdError;

/// A family of equation problems indexed by a scalar parameter.
///
/// Closures of the form `Fn(f64) -> Result<P, E>` implement `Family`.
pub trait Family {
    type Problem;
    type Error: StdError + Send + Sync + 'static;

    /// Builds the problem for a parameter value.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if no problem exists for `param`.
    fn problem(&self, param: f64) -> Result<Self::Problem, Self::Error>;
}

impl<P, E, F> Family for F
where
    F: Fn(f64) -> Result<P, E>,
    E: StdError + Send + Sync + 'static,
{
    type Problem = P;
    type Error = E;

    fn problem(&self, param: f64) -> Result<P, E> {
        self(param)
    }
}
