//! Adaptive Nelder-Mead simplex search for n-dimensional minimization.
//!
//! # Algorithm
//!
//! The solver keeps `n + 1` vertices sorted by objective value. Each step
//! reflects the worst vertex through the centroid of the others and, depending
//! on how the reflection compares with the current values, expands, accepts,
//! contracts, or shrinks the whole simplex toward the best vertex. See
//! [`Move`] for the possible outcomes.
//!
//! The starting simplex is `x0` plus one vertex per coordinate, each
//! perturbing a single coordinate by a relative offset (or a fixed offset when
//! the coordinate is zero).
//!
//! # Coefficients
//!
//! With [`Config::adaptive`] set (the default) the step coefficients depend on
//! the dimension, see [`Coefficients::adaptive`]. Otherwise
//! [`Coefficients::FIXED`] is used. Individual coefficients can be overridden.
//!
//! # Termination
//!
//! The search converges once every vertex lies within `simplex_tol` of the
//! best (per coordinate) and every value lies within `fn_tol` of the best
//! value. It gives up when the iteration or evaluation count exceeds its
//! budget, which defaults to `200 * n` each.
//!
//! # Observer Events
//!
//! The observer receives one [`Event`] per iteration, carrying the current
//! best vertex and the [`Move`] that produced the simplex. Observers can only watch: the action type is
//! [`Infallible`], so a run ends only through convergence or its budget.

mod coefficients;
mod config;
mod error;
mod event;
mod limits;
mod search;
mod simplex;
mod solution;
mod step;

#[cfg(test)]
mod tests;

pub use coefficients::Coefficients;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use step::Move;

use std::convert::Infallible;

use log::warn;
use simplex_core::{Objective, Observer};

use search::search;

/// Finds a minimum of the objective starting from `x0`.
///
/// Returns the best vertex when the search converges.
///
/// # Errors
///
/// Returns [`Error::NotConverged`] with the full [`Solution`] if a budget runs
/// out first, or an input error if `x0` or `config` is invalid.
pub fn minimize<F, Obs>(
    objective: &F,
    x0: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Vec<f64>, Error>
where
    F: Objective + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Infallible>,
{
    let solution = minimize_with_info(objective, x0, config, observer)?;
    if solution.converged() {
        Ok(solution.x)
    } else {
        warn!(
            "nelder-mead stopped without converging: {:?} at objective {}",
            solution.status, solution.objective
        );
        Err(Error::NotConverged(Box::new(solution)))
    }
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<F>(objective: &F, x0: &[f64], config: &Config) -> Result<Vec<f64>, Error>
where
    F: Objective + ?Sized,
{
    minimize(objective, x0, config, ())
}

/// Runs the search and returns the full [`Solution`], converged or not.
///
/// # Errors
///
/// Returns an error only if `x0` is empty or non-finite or `config` is invalid.
pub fn minimize_with_info<F, Obs>(
    objective: &F,
    x0: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Infallible>,
{
    if x0.is_empty() {
        return Err(Error::EmptyStart);
    }
    if let Some((index, &value)) = x0.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFiniteStart { index, value });
    }

    let settings = config.resolve(x0.len())?;
    Ok(search(objective, x0, &settings, observer)?)
}
