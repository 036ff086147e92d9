use super::Error;

/// The inverse golden ratio, `1/φ = φ - 1`.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Golden section search bracket.
///
/// Maintains the outer interval `[left, right]` and two interior points
/// dividing it in the golden ratio, so that each shrink reuses one interior
/// point and needs only one new evaluation.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) left: f64,
    pub(super) right: f64,
    pub(super) inner_left: f64,
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket over `[a, b]`.
    ///
    /// Both bounds must be finite and `a < b`.
    pub(super) fn new([a, b]: [f64; 2]) -> Result<Self, Error> {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(Error::InvalidBracket { left: a, right: b });
        }

        let width = b - a;
        Ok(Self {
            left: a,
            right: b,
            inner_left: a + (1.0 - INV_PHI) * width,
            inner_right: a + INV_PHI * width,
        })
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Keeps `[left, inner_right]`; the old `inner_left` becomes `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + (1.0 - INV_PHI) * self.width();
    }

    /// Keeps `[inner_left, right]`; the old `inner_right` becomes `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
    }

    /// The `inner_left` that [`Self::shrink_right`] would produce.
    pub(super) fn next_inner_left(&self) -> f64 {
        self.left + (1.0 - INV_PHI) * (self.inner_right - self.left)
    }

    /// The `inner_right` that [`Self::shrink_left`] would produce.
    pub(super) fn next_inner_right(&self) -> f64 {
        self.inner_left + INV_PHI * (self.right - self.inner_left)
    }
}
