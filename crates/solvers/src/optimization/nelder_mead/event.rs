use super::Move;

/// Progress report emitted once per iteration, before the termination tests.
///
/// The event borrows the current best vertex immutably; observers can copy it
/// but never modify the simplex.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Number of steps taken so far.
    pub iter: usize,

    /// The current best vertex.
    pub best: &'a [f64],

    /// Objective value at [`Event::best`].
    pub best_objective: f64,

    /// Objective evaluations made so far.
    pub evals: usize,

    /// The transformation that produced this simplex, `None` before the
    /// first step.
    pub last_move: Option<Move>,
}
