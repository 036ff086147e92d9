use crate::optimization::Point;

/// Emitted at every convergence check, before the solver decides whether to
/// stop or shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Shrinks performed so far.
    pub iter: usize,

    /// Best point evaluated so far.
    pub best: Point,

    /// Current outer bracket `[left, right]`.
    pub bracket: [f64; 2],
}
