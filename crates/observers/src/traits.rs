//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual value
//! - [`HasIteration`] — events that carry a position in the solve
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use eigenwell_core::Observer;
//! use eigenwell_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use eigenwell_solvers::{
    continuation,
    equation::{bisection, newton},
};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries a position in the solve.
pub trait HasIteration {
    /// Returns the iteration (or sweep index) this event belongs to.
    fn iteration(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasResidual impls ---

impl<I, O> HasResidual for bisection::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.eval.residual
    }
}

impl<I, O> HasResidual for newton::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.eval.residual
    }
}

/// Residual of the Newton refinement at this parameter.
impl<I, O> HasResidual for continuation::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.solution.residual
    }
}

// --- HasIteration impls ---

impl<I, O> HasIteration for bisection::Event<'_, I, O> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl<I, O> HasIteration for newton::Event<'_, I, O> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl<I, O> HasIteration for continuation::Event<'_, I, O> {
    fn iteration(&self) -> usize {
        self.index
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for continuation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
