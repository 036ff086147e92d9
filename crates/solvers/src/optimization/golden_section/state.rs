use crate::optimization::Point;

use super::{Config, Solution, Status, bracket::GoldenBracket};

/// Direction to shrink the bracket and where to evaluate next.
#[derive(Debug, Clone, Copy)]
pub(super) enum ShrinkDirection {
    /// Shrink left bound; payload is x for new `inner_right`.
    ShrinkLeft(f64),

    /// Shrink right bound; payload is x for new `inner_left`.
    ShrinkRight(f64),
}

impl ShrinkDirection {
    pub(super) fn x(self) -> f64 {
        match self {
            Self::ShrinkLeft(x) | Self::ShrinkRight(x) => x,
        }
    }
}

pub(super) struct State {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
    best: Point,
}

impl State {
    /// Creates the state from the two evaluated interior points.
    pub(super) fn new<T: Fn(f64) -> f64>(
        bracket: GoldenBracket,
        left: Point,
        right: Point,
        transform: &T,
    ) -> Self {
        let best = if transform(left.objective) <= transform(right.objective) {
            left
        } else {
            right
        };
        Self {
            bracket,
            left,
            right,
            best,
        }
    }

    pub(super) fn best(&self) -> Point {
        self.best
    }

    pub(super) fn bounds(&self) -> [f64; 2] {
        self.bracket.bounds()
    }

    /// Pure query: which direction to shrink and where to evaluate next.
    pub(super) fn next_action<T: Fn(f64) -> f64>(&self, transform: &T) -> ShrinkDirection {
        if transform(self.left.objective) <= transform(self.right.objective) {
            ShrinkDirection::ShrinkRight(self.bracket.next_inner_left())
        } else {
            ShrinkDirection::ShrinkLeft(self.bracket.next_inner_right())
        }
    }

    /// Applies a shrink with the newly evaluated interior point.
    pub(super) fn apply<T: Fn(f64) -> f64>(
        &mut self,
        direction: ShrinkDirection,
        point: Point,
        transform: &T,
    ) {
        match direction {
            ShrinkDirection::ShrinkRight(_) => {
                self.bracket.shrink_right();
                self.right = self.left;
                self.left = point;
            }
            ShrinkDirection::ShrinkLeft(_) => {
                self.bracket.shrink_left();
                self.left = self.right;
                self.right = point;
            }
        }

        if transform(point.objective) < transform(self.best.objective) {
            self.best = point;
        }
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let gap = (self.bracket.inner_right - self.bracket.inner_left).abs();
        let mid = 0.5 * (self.bracket.inner_left + self.bracket.inner_right);
        gap <= config.x_tol(mid)
    }

    pub(super) fn into_solution(self, status: Status, iters: usize, evals: usize) -> Solution {
        Solution {
            status,
            x: self.best.x,
            objective: self.best.objective,
            iters,
            evals,
        }
    }
}
