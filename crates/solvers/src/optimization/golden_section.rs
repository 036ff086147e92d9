//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval. It maintains two interior points positioned by the
//! golden ratio, compares their objectives, and shrinks the bracket toward the
//! better point. Each shrink reuses one interior point, so every iteration
//! costs exactly one evaluation after the initial two.
//!
//! # Limitations
//!
//! - **Unimodal assumption**: May find a local optimum if multiple extrema exist
//! - **Bracket required**: The caller supplies `[a, b]` with `a < b`
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per convergence check, carrying the best
//! point so far. Observers can return [`Action::StopEarly`] to halt
//! immediately with that point.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use simplex_core::{Observer, ScalarObjective};

use search::search;

/// Finds the minimum of the objective using golden section search.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] unless `bracket` is finite and ordered.
pub fn minimize<F, Obs>(
    objective: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarObjective + ?Sized,
    Obs: Observer<Event, Action>,
{
    search(objective, bracket, config, observer, |v| v)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] unless `bracket` is finite and ordered.
pub fn minimize_unobserved<F>(
    objective: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: ScalarObjective + ?Sized,
{
    minimize(objective, bracket, config, ())
}

/// Finds the maximum of the objective using golden section search.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] unless `bracket` is finite and ordered.
pub fn maximize<F, Obs>(
    objective: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarObjective + ?Sized,
    Obs: Observer<Event, Action>,
{
    search(objective, bracket, config, observer, |v| -v)
}

/// Finds the maximum of the objective without observer support.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] unless `bracket` is finite and ordered.
pub fn maximize_unobserved<F>(
    objective: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: ScalarObjective + ?Sized,
{
    maximize(objective, bracket, config, ())
}
