use crate::WellError;

/// Inner and outer potentials of a finite square well.
///
/// Both are finite and `outer > inner`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellParameters {
    inner: f64,
    outer: f64,
}

impl WellParameters {
    /// Creates validated well parameters.
    ///
    /// # Errors
    ///
    /// Returns [`WellError::NonFinite`] if either potential is not finite, or
    /// [`WellError::Unbound`] if `outer <= inner`.
    pub fn new(inner: f64, outer: f64) -> Result<Self, WellError> {
        if !inner.is_finite() || !outer.is_finite() {
            return Err(WellError::NonFinite { inner, outer });
        }
        if outer <= inner {
            return Err(WellError::Unbound { inner, outer });
        }
        Ok(Self { inner, outer })
    }

    /// Returns parameters for the same inner potential at a new outer one.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`WellParameters::new`].
    pub fn with_outer(self, outer: f64) -> Result<Self, WellError> {
        Self::new(self.inner, outer)
    }

    /// Inner potential `V1`.
    #[must_use]
    pub fn inner(&self) -> f64 {
        self.inner
    }

    /// Outer potential `V2`.
    #[must_use]
    pub fn outer(&self) -> f64 {
        self.outer
    }

    /// Depth of the well, `V2 - V1`.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.outer - self.inner
    }

    /// Returns true if `energy` lies strictly between the two potentials.
    #[must_use]
    pub fn contains(&self, energy: f64) -> bool {
        energy > self.inner && energy < self.outer
    }
}
