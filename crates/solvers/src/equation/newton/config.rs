use thiserror::Error;

/// Configuration for the Newton solver.
///
/// The defaults are tuned for residuals of order one to one hundred: a tight
/// residual tolerance, a tiny first difference step, and derivative bounds
/// that catch flat regions and poles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Converged once `|f(x)|` is at most this value.
    pub residual_tol: f64,

    /// Width of the first central-difference step.
    pub initial_step: f64,

    /// Smallest derivative estimate accepted for an update.
    pub min_derivative: f64,

    /// Largest derivative estimate accepted for an update.
    pub max_derivative: f64,

    /// Maximum number of updates.
    pub max_iters: usize,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative; got {0}")]
    ResidualTol(f64),

    #[error("initial_step must be finite and non-zero; got {0}")]
    InitialStep(f64),

    #[error("derivative bounds must satisfy min < max with a finite min; got [{min}, {max}]")]
    DerivativeBounds { min: f64, max: f64 },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            residual_tol: 1e-14,
            initial_step: 1e-14,
            min_derivative: 1e-12,
            max_derivative: 1e9,
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Creates a config with the given tolerance and first step, keeping the
    /// default derivative bounds and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is invalid.
    pub fn new(residual_tol: f64, initial_step: f64) -> Result<Self, ConfigError> {
        let config = Self {
            residual_tol,
            initial_step,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates tolerances, the initial step, and derivative bounds.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol(self.residual_tol));
        }
        if !self.initial_step.is_finite() || self.initial_step == 0.0 {
            return Err(ConfigError::InitialStep(self.initial_step));
        }
        if !self.min_derivative.is_finite() || !(self.min_derivative < self.max_derivative) {
            return Err(ConfigError::DerivativeBounds {
                min: self.min_derivative,
                max: self.max_derivative,
            });
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
    fn new_keeps_default_bounds() {
        let config = Config::new(1e-10, 1e-6).unwrap();
        assert_eq!(config.residual_tol, 1e-10);
        assert_eq!(config.initial_step, 1e-6);
        assert_eq!(config.max_iters, 1000);

        assert!(Config::new(f64::NAN, 1e-6).is_err());
        assert_eq!(Config::new(1e-10, 0.0), Err(ConfigError::InitialStep(0.0)));
    }

    #[test]
    fn rejects_bad_fields() {
        let config = Config {
            residual_tol: -1.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ResidualTol(-1.0)));

        let config = Config {
            initial_step: 0.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InitialStep(0.0)));

        let config = Config {
            min_derivative: 1.0,
            max_derivative: 1.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DerivativeBounds { .. })
        ));
    }

    #[test]
    fn unbounded_max_derivative_is_allowed() {
        let config = Config {
            max_derivative: f64::INFINITY,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
