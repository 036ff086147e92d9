/// A real-valued function of an n-dimensional point.
///
/// Any `Fn(&[f64]) -> f64` closure is an objective. Implement the trait
/// directly for parameterised functions that carry their own data.
///
/// Solvers assume objectives are pure: calling one twice with the same point
/// returns the same value. Nothing enforces this, but reproducible iteration
/// and evaluation counts depend on it.
pub trait Objective {
    /// Returns the objective value at `x`.
    fn value(&self, x: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn value(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// A real-valued function of a single variable.
pub trait ScalarObjective {
    /// Returns the objective value at `x`.
    fn value(&self, x: f64) -> f64;
}

impl<F> ScalarObjective for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
