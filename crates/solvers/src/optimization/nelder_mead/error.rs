use simplex_core::DimensionMismatch;
use thiserror::Error;

use super::{ConfigError, Solution};

/// Errors that can occur during Nelder-Mead minimization.
#[derive(Debug, Error)]
pub enum Error {
    #[error("starting point is empty")]
    EmptyStart,

    #[error("starting point has non-finite coordinate {value} at index {index}")]
    NonFiniteStart { index: usize, value: f64 },

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("vector arithmetic failed: {0}")]
    Dimension(#[from] DimensionMismatch),

    /// The budget ran out first; the payload is the best state reached.
    #[error(
        "did not converge within {} iterations and {} evaluations (best objective {})",
        .0.iters,
        .0.evals,
        .0.objective
    )]
    NotConverged(Box<Solution>),
}
