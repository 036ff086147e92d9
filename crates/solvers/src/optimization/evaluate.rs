use simplex_core::{Objective, ScalarObjective};

/// An objective paired with the evaluation counter of a single run.
///
/// Each solver run creates its own `Counted`, so counts are never shared
/// between runs or threads. Every call through [`Counted::value`] or
/// [`Counted::scalar_value`] increments the counter by exactly one.
#[derive(Debug)]
pub struct Counted<'a, F: ?Sized> {
    objective: &'a F,
    evals: usize,
}

impl<'a, F: ?Sized> Counted<'a, F> {
    /// Wraps `objective` with a counter starting at zero.
    #[must_use]
    pub fn new(objective: &'a F) -> Self {
        Self { objective, evals: 0 }
    }

    /// Returns the number of evaluations made so far.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }
}

impl<F: Objective + ?Sized> Counted<'_, F> {
    /// Evaluates the objective at `x`.
    pub fn value(&mut self, x: &[f64]) -> f64 {
        self.evals += 1;
        self.objective.value(x)
    }
}

impl<F: ScalarObjective + ?Sized> Counted<'_, F> {
    /// Evaluates the scalar objective at `x`.
    pub fn scalar_value(&mut self, x: f64) -> f64 {
        self.evals += 1;
        self.objective.value(x)
    }
}
