/// Step coefficients for the four simplex transformations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coefficients {
    /// Reflection.
    pub alpha: f64,

    /// Expansion.
    pub beta: f64,

    /// Contraction.
    pub gamma: f64,

    /// Shrink.
    pub sigma: f64,
}

impl Coefficients {
    /// The classic fixed coefficients `(1, 2, 1/2, 1/2)`.
    pub const FIXED: Self = Self {
        alpha: 1.0,
        beta: 2.0,
        gamma: 0.5,
        sigma: 0.5,
    };

    /// Dimension-dependent coefficients for an `n`-dimensional problem.
    ///
    /// Expansion weakens and contraction and shrinking soften as `n` grows,
    /// which keeps the simplex from degenerating in higher dimensions.
    /// For `n = 2` these equal [`Coefficients::FIXED`].
    ///
    /// For `n = 1` the formula gives `sigma = 0`, outside the range
    /// [`Config::validate`] accepts for a user override: a shrink then
    /// collapses every vertex onto the best one. Override `sigma` to keep a
    /// one-dimensional simplex from degenerating.
    ///
    /// [`Config::validate`]: super::Config::validate
    #[must_use]
    pub fn adaptive(n: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let n = n as f64;
        Self {
            alpha: 1.0,
            beta: 1.0 + 2.0 / n,
            gamma: 0.75 - 1.0 / (2.0 * n),
            sigma: 1.0 - 1.0 / n,
        }
    }
}
