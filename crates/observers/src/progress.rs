use log::{Level, log};
use simplex_core::Observer;

use crate::traits::{HasIteration, HasObjective};

/// Reports every event through the `log` facade.
///
/// Installing a logger is left to the application.
#[derive(Debug, Clone, Copy)]
pub struct LogProgress {
    level: Level,
    every: usize,
}

impl LogProgress {
    /// Logs every `every`-th iteration at `level`.
    #[must_use]
    pub fn new(level: Level, every: usize) -> Self {
        Self {
            level,
            every: every.max(1),
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(Level::Debug, 1)
    }
}

impl<E, A> Observer<E, A> for LogProgress
where
    E: HasObjective + HasIteration,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let iteration = event.iteration();
        if iteration % self.every == 0 {
            log!(
                self.level,
                "iteration {iteration}: best objective {}",
                event.objective()
            );
        }
        None
    }
}
