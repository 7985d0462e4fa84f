//! Root finding for scalar equation problems.
//!
//! An [`EquationProblem`] maps the solver variable `x: [f64; 1]` to a model
//! input, calls the model, and computes a residual. Solvers in this module
//! drive that residual toward zero.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a bracketed interval
//! - [`newton`] — fast local convergence from a nearby starting point
//!
//! [`EquationProblem`]: eigenwell_core::EquationProblem

mod evaluate;

pub use evaluate::{EvalError, Evaluation, evaluate};

pub mod bisection;
pub mod newton;
