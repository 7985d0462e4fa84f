use thiserror::Error;

/// Errors produced when describing or evaluating a finite square well.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum WellError {
    #[error("well potentials must be finite (inner={inner}, outer={outer})")]
    NonFinite { inner: f64, outer: f64 },

    /// The outer potential does not exceed the inner one, so no state is bound.
    #[error("outer potential must exceed inner potential (inner={inner}, outer={outer})")]
    Unbound { inner: f64, outer: f64 },

    /// A trial energy outside the open interval `(inner, outer)`.
    ///
    /// Only reported under [`Domain::Strict`](crate::Domain::Strict).
    #[error("energy {energy} lies outside the well ({inner}, {outer})")]
    OutsideWell { energy: f64, inner: f64, outer: f64 },
}
