//! Tracing observer for solver diagnostics.

use eigenwell_core::Observer;
use tracing::trace;

use crate::traits::{CanStopEarly, HasIteration, HasResidual};

/// An observer that emits a `tracing` event for every solver event.
///
/// Each event is logged at `TRACE` level with the observer's label, the
/// iteration, and the residual. The observer also counts events and keeps
/// the last residual, so it doubles as an iteration counter.
///
/// An optional event limit stops the solver once reached, which puts a cap
/// on solvers (such as bisection) that have none of their own.
///
/// # Example
///
/// ```ignore
/// let mut trace = Trace::new("refine");
/// let solution = newton::solve(&model, &problem, x0, &config, &mut trace)?;
/// println!("{} updates", trace.events());
/// ```
#[derive(Debug, Clone)]
pub struct Trace {
    label: String,
    limit: Option<usize>,
    events: usize,
    last_residual: Option<f64>,
}

impl Trace {
    /// Creates a `Trace` that logs under `label` and never stops the solver.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            limit: None,
            events: 0,
            last_residual: None,
        }
    }

    /// Stops the solver once `limit` events have been observed.
    ///
    /// The trace only acts when an event arrives, so a limit of zero is
    /// treated as one: the solver stops at its first event.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit.max(1));
        self
    }

    /// Returns the label used in emitted events.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }

    /// Returns the residual carried by the most recent event.
    #[must_use]
    pub fn last_residual(&self) -> Option<f64> {
        self.last_residual
    }

    fn record<E: HasResidual + HasIteration>(&mut self, event: &E) -> bool {
        let residual = event.residual();
        self.events += 1;
        self.last_residual = Some(residual);

        trace!(
            label = %self.label,
            iteration = event.iteration(),
            residual,
            "solver event"
        );

        self.limit.is_some_and(|limit| self.events >= limit)
    }
}

impl<E, A> Observer<E, A> for Trace
where
    E: HasResidual + HasIteration,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event).then(A::stop_early)
    }
}

/// Allows `&mut Trace` to be passed to solvers that take an observer by
/// value, so the counters can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut Trace
where
    E: HasResidual + HasIteration,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
