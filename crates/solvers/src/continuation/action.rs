/// Control actions supported by the continuation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Record this parameter, then end the sweep.
    StopEarly,

    /// Reject the refinement and carry the current seed to the next parameter.
    KeepSeed,
}
