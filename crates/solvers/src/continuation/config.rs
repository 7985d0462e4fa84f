use crate::equation::newton;

/// Which value a sweep records for each parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Record {
    /// The seed before refinement, lagging the solves by one parameter.
    #[default]
    Seed,

    /// The refined value for the same parameter.
    Refined,
}

/// Configuration for the continuation driver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Newton settings used for every refinement.
    pub newton: newton::Config,

    /// Which value to record per parameter.
    pub record: Record,
}
