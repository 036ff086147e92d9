use std::convert::Infallible;

use log::{debug, trace};
use simplex_core::{DimensionMismatch, Objective, Observer};

use crate::optimization::Counted;

use super::{
    Event, Solution, Status,
    config::Settings,
    limits::Exhausted,
    simplex::{Simplex, initial_vertices},
    step::step,
};

/// Runs Nelder-Mead from `x0` until convergence or an exhausted budget.
///
/// Each iteration reports the best vertex to the observer, then checks
/// convergence, then the budget, and only then steps. A simplex that already
/// meets the tolerances therefore terminates without another step.
pub(super) fn search<F, Obs>(
    objective: &F,
    x0: &[f64],
    settings: &Settings,
    mut observer: Obs,
) -> Result<Solution, DimensionMismatch>
where
    F: Objective + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Infallible>,
{
    let mut counted = Counted::new(objective);
    let vertices = initial_vertices(x0, settings.zero_delta, settings.nonzero_delta);
    let mut simplex = Simplex::evaluate(vertices, &mut counted);
    let mut iters = 0;
    let mut last_move = None;

    loop {
        let event = Event {
            iter: iters,
            best: simplex.best(),
            best_objective: simplex.best_value(),
            evals: counted.evals(),
            last_move,
        };
        if let Some(action) = observer.observe(&event) {
            match action {}
        }

        let status = if simplex.is_converged(&settings.tolerances)? {
            Some(Status::Converged)
        } else {
            settings
                .limits
                .exhausted(iters, counted.evals())
                .map(|exhausted| match exhausted {
                    Exhausted::Iters => Status::MaxIters,
                    Exhausted::Evals => Status::MaxEvals,
                })
        };

        if let Some(status) = status {
            let evals = counted.evals();
            let (x, objective) = simplex.into_best();
            debug!(
                "nelder-mead finished: {status:?} after {iters} iterations, \
                 {evals} evaluations, objective {objective}"
            );
            return Ok(Solution {
                status,
                x,
                objective,
                iters,
                evals,
            });
        }

        let (next, taken) = step(simplex, &settings.coefficients, &mut counted)?;
        trace!(
            "iteration {iters}: {taken:?}, best objective {}",
            next.best_value()
        );
        simplex = next;
        last_move = Some(taken);
        iters += 1;
    }
}
