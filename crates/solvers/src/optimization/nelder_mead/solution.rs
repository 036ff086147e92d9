/// Why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Simplex extent and value spread are both within tolerance.
    Converged,

    /// Exceeded the iteration budget without converging.
    MaxIters,

    /// Exceeded the evaluation budget without converging.
    MaxEvals,
}

/// The result of a Nelder-Mead search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best vertex found.
    pub x: Vec<f64>,

    /// Objective value at the reported x.
    pub objective: f64,

    /// Steps taken when the solver finished.
    pub iters: usize,

    /// Objective evaluations made, including the initial simplex.
    pub evals: usize,
}

impl Solution {
    /// Returns true if the search met both tolerances.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
