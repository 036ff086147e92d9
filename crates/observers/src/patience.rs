use simplex_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a solver once the best objective has not improved by more than
/// `min_improvement` for `patience` consecutive events.
///
/// Only solvers whose action type implements [`CanStopEarly`] can be stopped.
#[derive(Debug, Clone)]
pub struct Patience {
    patience: usize,
    min_improvement: f64,
    best: f64,
    stalled: usize,
}

impl Patience {
    #[must_use]
    pub fn new(patience: usize, min_improvement: f64) -> Self {
        Self {
            patience,
            min_improvement,
            best: f64::INFINITY,
            stalled: 0,
        }
    }
}

impl<E, A> Observer<E, A> for Patience
where
    E: HasObjective,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let objective = event.objective();
        if objective < self.best - self.min_improvement {
            self.best = objective;
            self.stalled = 0;
            return None;
        }

        self.stalled += 1;
        (self.stalled >= self.patience).then(A::stop_early)
    }
}
