/// A deterministic function from a typed input to a typed output.
///
/// Solvers call a model many times at nearby inputs, so equal inputs must
/// give equal outputs. A failed call is reported through `Error` rather than
/// a sentinel output.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Returns [`Self::Error`] if the model cannot be evaluated at `input`.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// The input a model was called with and the output it returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Pairs the input with the result of calling `model` on it.
    ///
    /// # Errors
    ///
    /// Returns the model's error if the call fails.
    pub fn capture<M>(model: &M, input: I) -> Result<Self, M::Error>
    where
        M: Model<Input = I, Output = O>,
    {
        let output = model.call(&input)?;
        Ok(Self { input, output })
    }
}
