use thiserror::Error;

/// How the solver treats the sign-change precondition on the initial bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precondition {
    /// Evaluate both endpoints and reject brackets whose residuals share a sign.
    #[default]
    Verify,

    /// Trust the caller that the bracket straddles a root.
    ///
    /// Only the left endpoint is evaluated. A bracket that does not actually
    /// contain a root converges to one of its endpoints.
    Assume,
}

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Stop once the bracket width is at most this value. Must be positive.
    pub x_abs_tol: f64,

    /// Bracket precondition handling.
    pub precondition: Precondition,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and positive; got {0}")]
    XAbsTol(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            x_abs_tol: 1e-12,
            precondition: Precondition::Verify,
        }
    }
}

impl Config {
    /// Creates a config with the given tolerance and a verified bracket.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is zero, negative, or non-finite.
    pub fn new(x_abs_tol: f64) -> Result<Self, ConfigError> {
        let config = Self {
            x_abs_tol,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy of this config with a different bracket precondition.
    #[must_use]
    pub fn with_precondition(self, precondition: Precondition) -> Self {
        Self {
            precondition,
            ..self
        }
    }

    /// Validates the tolerance.
    ///
    /// A zero tolerance would never be reached, so it is rejected along with
    /// negative and non-finite values.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is zero, negative, or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.x_abs_tol.is_finite() || self.x_abs_tol <= 0.0 {
            return Err(ConfigError::XAbsTol(self.x_abs_tol));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        assert_eq!(Config::new(0.0), Err(ConfigError::XAbsTol(0.0)));
        assert_eq!(Config::new(-1e-12), Err(ConfigError::XAbsTol(-1e-12)));
        assert!(Config::new(f64::NAN).is_err());
        assert!(Config::new(f64::INFINITY).is_err());
    }
}
