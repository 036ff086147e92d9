use simplex_core::Observer;

use crate::traits::{HasIteration, HasObjective};

/// Records `(iteration, best objective)` for every event it observes.
///
/// Pass `&mut History` as the observer to keep the record after the solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<(usize, f64)>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(iteration, objective)` pairs in observation order.
    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// The most recently recorded objective, if any.
    #[must_use]
    pub fn last_objective(&self) -> Option<f64> {
        self.entries.last().map(|&(_, objective)| objective)
    }

    /// Returns true if no recorded objective is larger than the one before it.
    #[must_use]
    pub fn is_non_increasing(&self) -> bool {
        self.entries.windows(2).all(|pair| pair[1].1 <= pair[0].1)
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasObjective + HasIteration,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.entries.push((event.iteration(), event.objective()));
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the record can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasObjective + HasIteration,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
