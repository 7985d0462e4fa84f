//! Numerical solvers for scalar equation problems.
//!
//! - [`equation::bisection`] — bracketed root finding to an absolute tolerance
//! - [`equation::newton`] — Newton iteration with a finite-difference derivative
//! - [`continuation`] — Newton solves across a parameter sweep, reseeding each
//!   solve with the previous result
//!
//! Every solver accepts an [`Observer`] for monitoring and early stopping, and
//! has an `_unobserved` convenience wrapper.
//!
//! [`Observer`]: eigenwell_core::Observer

pub mod continuation;
pub mod equation;
