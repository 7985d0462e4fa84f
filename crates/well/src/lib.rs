//! Bound-state energies of a finite square well.
//!
//! The well has an inner potential `V1` over a unit-width region and an outer
//! potential `V2 > V1`. A bound state with energy `E` between the two matches
//! its interior and exterior wavefunctions when
//!
//! ```text
//! f(E) = k·tan(k) − r = 0,   k = sqrt(|E − V1|),   r = sqrt(|V2 − E|)
//! ```
//!
//! in units with `ħ = 1`, `2m = 1`, and unit well width.
//!
//! This crate wires that function into the generic solvers:
//!
//! - [`FiniteWell`] — the [`Model`](eigenwell_core::Model) evaluating `f(E)`
//! - [`EigenvalueProblem`] — the equation problem for one set of depths
//! - [`search`] — bisection and Newton searches at fixed depths
//! - [`sweep`] — continuation across a sequence of outer depths
//! - [`asymptotic_energy`] — a closed-form approximation for deep wells
//! - [`Scenario`] — a complete, deserialisable sweep description

mod error;
mod model;
mod oracle;
mod params;
mod problem;
mod scenario;
pub mod search;
pub mod sweep;

pub use error::WellError;
pub use model::{Domain, FiniteWell, Matching, Trial, mismatch};
pub use oracle::{asymptotic_energy, infinite_well_limit};
pub use params::WellParameters;
pub use problem::{EigenvalueProblem, WellFamily};
pub use scenario::Scenario;
