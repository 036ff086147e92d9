use simplex_core::Objective;

/// `Σ xᵢ²`, minimum 0 at the origin.
pub struct Sphere;

impl Objective for Sphere {
    fn value(&self, x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }
}

/// `(a - x)² + b (y - x²)²`, minimum 0 at `(a, a²)`.
pub struct Rosenbrock {
    pub a: f64,
    pub b: f64,
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Self { a: 1.0, b: 100.0 }
    }
}

impl Objective for Rosenbrock {
    fn value(&self, x: &[f64]) -> f64 {
        (self.a - x[0]).powi(2) + self.b * (x[1] - x[0] * x[0]).powi(2)
    }
}

/// `(x + 2y - 7)² + (2x + y - 5)²`, minimum 0 at `(1, 3)`.
pub struct Booth;

impl Objective for Booth {
    fn value(&self, x: &[f64]) -> f64 {
        (x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2)
    }
}

/// `(x² + y - 11)² + (x + y² - 7)²`, four minima with value 0.
pub struct Himmelblau;

impl Himmelblau {
    /// The four global minimizers.
    pub const MINIMA: [[f64; 2]; 4] = [
        [3.0, 2.0],
        [-2.805_118, 3.131_312],
        [-3.779_310, -3.283_186],
        [3.584_428, -1.848_126],
    ];
}

impl Objective for Himmelblau {
    fn value(&self, x: &[f64]) -> f64 {
        (x[0] * x[0] + x[1] - 11.0).powi(2) + (x[0] + x[1] * x[1] - 7.0).powi(2)
    }
}
