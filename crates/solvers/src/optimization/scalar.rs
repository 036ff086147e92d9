//! One-dimensional bracketed minimization.
//!
//! [`minimize_scalar`] is the stable entry point for callers that need a
//! one-dimensional minimum and do not care which bracketed algorithm finds
//! it. The search itself is delegated to a backend compiled in through a
//! crate feature:
//!
//! - `brent` — Brent's method from [`argmin`](https://docs.rs/argmin), used
//!   whenever the feature is enabled
//! - `golden-section` (default) — the in-crate [`golden_section`] solver
//!
//! Without a backend every call fails with [`ScalarError::Unsupported`].
//!
//! [`golden_section`]: super::golden_section
//!
//! How many times the observer runs depends on the backend's internal
//! convergence checks and is not part of the contract.

use std::convert::Infallible;

use simplex_core::{Observer, ScalarObjective};
use thiserror::Error;

use super::Point;

/// An approximate minimizer within the requested bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarMinimum {
    /// Approximate minimizer.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Objective evaluations made by the backend.
    pub evals: usize,
}

/// Errors that can occur during scalar minimization.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScalarError {
    #[error("bracket [{left}, {right}] must be finite with left < right")]
    InvalidBracket { left: f64, right: f64 },

    #[error("bracketed minimizer failed: {0}")]
    Backend(String),

    #[error("no bracketed minimizer backend is available in this build")]
    Unsupported,
}

/// Minimizes `objective` over `[a, b]`.
///
/// The observer is called synchronously at each internal convergence check
/// with the current candidate point. It can only watch.
///
/// # Errors
///
/// Returns [`ScalarError::InvalidBracket`] unless `a < b` with both finite,
/// [`ScalarError::Unsupported`] when no backend is compiled in, and
/// [`ScalarError::Backend`] if the backend itself gives up.
pub fn minimize_scalar<F, Obs>(
    objective: &F,
    bracket: [f64; 2],
    observer: Obs,
) -> Result<ScalarMinimum, ScalarError>
where
    F: ScalarObjective + ?Sized,
    Obs: Observer<Point, Infallible>,
{
    backend::minimize(objective, bracket, observer)
}

/// Minimizes `objective` over `[a, b]` without observer support.
///
/// # Errors
///
/// See [`minimize_scalar`].
pub fn minimize_scalar_unobserved<F>(
    objective: &F,
    bracket: [f64; 2],
) -> Result<ScalarMinimum, ScalarError>
where
    F: ScalarObjective + ?Sized,
{
    minimize_scalar(objective, bracket, ())
}

#[cfg(feature = "brent")]
mod backend {
    use std::{
        cell::{Cell, RefCell},
        convert::Infallible,
    };

    use argmin::{
        core::{CostFunction, Executor, State},
        solver::brent::BrentOpt,
    };
    use simplex_core::{Observer, ScalarObjective};

    use crate::optimization::Point;

    use super::{ScalarError, ScalarMinimum};

    const MAX_ITERS: u64 = 500;
    // √ε
    const REL_TOL: f64 = 1.490_116_119_384_765_6e-8;
    const ABS_TOL: f64 = 1e-12;

    /// Adapts a scalar objective to argmin, counting evaluations and
    /// reporting the best point seen so far after each one.
    struct Problem<'a, F: ?Sized, Obs> {
        objective: &'a F,
        observer: &'a RefCell<Obs>,
        best: &'a Cell<Option<Point>>,
        evals: &'a Cell<usize>,
    }

    impl<F, Obs> CostFunction for Problem<'_, F, Obs>
    where
        F: ScalarObjective + ?Sized,
        Obs: Observer<Point, Infallible>,
    {
        type Param = f64;
        type Output = f64;

        fn cost(&self, x: &f64) -> Result<f64, argmin::core::Error> {
            let objective = self.objective.value(*x);
            self.evals.set(self.evals.get() + 1);

            let best = match self.best.get() {
                Some(best) if objective.total_cmp(&best.objective).is_ge() => best,
                _ => Point::new(*x, objective),
            };
            self.best.set(Some(best));

            if let Some(action) = self.observer.borrow_mut().observe(&best) {
                match action {}
            }
            Ok(objective)
        }
    }

    pub(super) fn minimize<F, Obs>(
        objective: &F,
        [left, right]: [f64; 2],
        observer: Obs,
    ) -> Result<ScalarMinimum, ScalarError>
    where
        F: ScalarObjective + ?Sized,
        Obs: Observer<Point, Infallible>,
    {
        if !(left.is_finite() && right.is_finite() && left < right) {
            return Err(ScalarError::InvalidBracket { left, right });
        }

        let observer = RefCell::new(observer);
        let best = Cell::new(None);
        let evals = Cell::new(0);
        let problem = Problem {
            objective,
            observer: &observer,
            best: &best,
            evals: &evals,
        };
        let solver = BrentOpt::new(left, right).set_tolerance(REL_TOL, ABS_TOL);

        let result = Executor::new(problem, solver)
            .configure(|state| state.max_iters(MAX_ITERS))
            .run()
            .map_err(|err| ScalarError::Backend(err.to_string()))?;

        let state = result.state();
        let x = *state
            .get_best_param()
            .ok_or_else(|| ScalarError::Backend("no best point reported".to_string()))?;

        Ok(ScalarMinimum {
            x,
            objective: state.get_best_cost(),
            evals: evals.get(),
        })
    }
}

#[cfg(all(feature = "golden-section", not(feature = "brent")))]
mod backend {
    use std::convert::Infallible;

    use simplex_core::{Observer, ScalarObjective};

    use crate::optimization::{Point, golden_section};

    use super::{ScalarError, ScalarMinimum};

    pub(super) fn minimize<F, Obs>(
        objective: &F,
        bracket: [f64; 2],
        mut observer: Obs,
    ) -> Result<ScalarMinimum, ScalarError>
    where
        F: ScalarObjective + ?Sized,
        Obs: Observer<Point, Infallible>,
    {
        let forward = |event: &golden_section::Event| {
            if let Some(action) = observer.observe(&event.best) {
                match action {}
            }
            None
        };

        let solution = golden_section::minimize(
            objective,
            bracket,
            &golden_section::Config::default(),
            forward,
        )
        .map_err(|err| match err {
            golden_section::Error::InvalidBracket { left, right } => {
                ScalarError::InvalidBracket { left, right }
            }
        })?;

        Ok(ScalarMinimum {
            x: solution.x,
            objective: solution.objective,
            evals: solution.evals,
        })
    }
}

#[cfg(not(any(feature = "golden-section", feature = "brent")))]
mod backend {
    use std::convert::Infallible;

    use simplex_core::{Observer, ScalarObjective};

    use crate::optimization::Point;

    use super::{ScalarError, ScalarMinimum};

    pub(super) fn minimize<F, Obs>(
        _objective: &F,
        _bracket: [f64; 2],
        _observer: Obs,
    ) -> Result<ScalarMinimum, ScalarError>
    where
        F: ScalarObjective + ?Sized,
        Obs: Observer<Point, Infallible>,
    {
        Err(ScalarError::Unsupported)
    }
}
