use thiserror::Error;

/// Errors from building a simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Probability outside [0, 1] or not finite.
    #[error("Invalid probability: {0} (expected a value in [0, 1])")]
    InvalidProbability(f64),

    /// Count that cannot describe a row of coins.
    #[error("Invalid count: {0}")]
    InvalidCount(String),
}
