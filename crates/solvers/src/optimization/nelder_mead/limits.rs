/// Iteration and evaluation budgets for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Limits {
    pub(super) max_iters: usize,
    pub(super) max_evals: usize,
}

/// Which budget ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Exhausted {
    Iters,
    Evals,
}

impl Limits {
    /// Returns which budget, if any, is spent.
    ///
    /// Budgets are inclusive: a run may reach exactly `max_iters` iterations
    /// and `max_evals` evaluations and still continue. A zero iteration budget
    /// allows no steps at all.
    pub(super) fn exhausted(&self, iters: usize, evals: usize) -> Option<Exhausted> {
        if iters > self.max_iters || self.max_iters == 0 {
            Some(Exhausted::Iters)
        } else if evals > self.max_evals {
            Some(Exhausted::Evals)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: Limits = Limits {
        max_iters: 10,
        max_evals: 30,
    };

    #[test]
    fn limits_are_inclusive() {
        assert_eq!(LIMITS.exhausted(10, 30), None);
        assert_eq!(LIMITS.exhausted(11, 30), Some(Exhausted::Iters));
        assert_eq!(LIMITS.exhausted(10, 31), Some(Exhausted::Evals));
    }

    #[test]
    fn iterations_are_reported_first() {
        assert_eq!(LIMITS.exhausted(11, 31), Some(Exhausted::Iters));
    }

    #[test]
    fn zero_iteration_budget_stops_immediately() {
        let limits = Limits {
            max_iters: 0,
            max_evals: 100,
        };
        assert_eq!(limits.exhausted(0, 3), Some(Exhausted::Iters));
    }
}
