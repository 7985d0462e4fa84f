//! Reusable observers for the eigenwell solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the bisection, Newton, and continuation solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIteration`], [`CanStopEarly`])
//! - [`Trace`] — Emits a `tracing` event per solver event and counts them
//!
//! [`Observer`]: eigenwell_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

mod trace;
pub mod traits;

pub use trace::Trace;
