use log::debug;
use simplex_core::{Observer, ScalarObjective};

use crate::optimization::{Counted, Point};

use super::{
    Action, Config, Error, Event, Solution, Status, bracket::GoldenBracket, state::State,
};

/// Core golden section search implementation.
///
/// The `transform` function is applied to objective values before comparison,
/// allowing the same algorithm to handle both minimization (identity) and
/// maximization (negation). Reported objectives are never transformed.
pub(super) fn search<F, Obs, T>(
    objective: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    transform: T,
) -> Result<Solution, Error>
where
    F: ScalarObjective + ?Sized,
    Obs: Observer<Event, Action>,
    T: Fn(f64) -> f64,
{
    let bracket = GoldenBracket::new(bracket)?;
    let mut counted = Counted::new(objective);

    let left = Point::new(bracket.inner_left, counted.scalar_value(bracket.inner_left));
    let right = Point::new(
        bracket.inner_right,
        counted.scalar_value(bracket.inner_right),
    );
    let mut state = State::new(bracket, left, right, &transform);

    let mut iter = 0;
    loop {
        let event = Event {
            iter,
            best: state.best(),
            bracket: state.bounds(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(state.into_solution(Status::StoppedByObserver, iter, counted.evals()));
        }

        let status = if state.is_converged(config) {
            Status::Converged
        } else if iter >= config.max_iters() {
            Status::MaxIters
        } else {
            let direction = state.next_action(&transform);
            let x = direction.x();
            let point = Point::new(x, counted.scalar_value(x));
            state.apply(direction, point, &transform);
            iter += 1;
            continue;
        };

        debug!(
            "golden section finished: {status:?} after {iter} iterations, {} evaluations",
            counted.evals()
        );
        return Ok(state.into_solution(status, iter, counted.evals()));
    }
}
