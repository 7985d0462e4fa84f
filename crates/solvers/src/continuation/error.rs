use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::newton;

/// Errors that can occur during a continuation sweep.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid newton config: {0}")]
    InvalidConfig(#[from] newton::ConfigError),

    #[error("failed to build problem for parameter {param}")]
    Family {
        param: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("newton solve failed for parameter {param}")]
    Newton {
        param: f64,
        #[source]
        source: newton::Error,
    },
}
