use simplex_core::{DimensionMismatch, Objective, vector};

use crate::optimization::Counted;

/// Convergence tolerances on simplex extent and value spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Tolerances {
    pub(super) simplex: f64,
    pub(super) value: f64,
}

/// The `n + 1` vertices of a simplex paired with their objective values.
///
/// Vertices and values always share length and index correspondence, and
/// every constructor leaves them sorted by ascending value, so index 0 is the
/// best vertex and index `n` the worst. Values compare with
/// [`f64::total_cmp`], which places NaN after every number.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Simplex {
    vertices: Vec<Vec<f64>>,
    values: Vec<f64>,
}

/// Builds the starting vertices around `x0`.
///
/// Vertex 0 is `x0`. Vertex `i` copies `x0` and perturbs coordinate `i - 1`:
/// a zero coordinate becomes `zero_delta`, any other is scaled by
/// `1 + nonzero_delta`. Zero needs its own offset because scaling it would
/// leave the simplex degenerate.
pub(super) fn initial_vertices(x0: &[f64], zero_delta: f64, nonzero_delta: f64) -> Vec<Vec<f64>> {
    let mut vertices = Vec::with_capacity(x0.len() + 1);
    vertices.push(x0.to_vec());

    for i in 0..x0.len() {
        let mut vertex = x0.to_vec();
        vertex[i] = if vertex[i] == 0.0 {
            zero_delta
        } else {
            vertex[i] * (1.0 + nonzero_delta)
        };
        vertices.push(vertex);
    }

    vertices
}

impl Simplex {
    /// Evaluates every vertex, in order, and sorts the result.
    pub(super) fn evaluate<F>(vertices: Vec<Vec<f64>>, objective: &mut Counted<'_, F>) -> Self
    where
        F: Objective + ?Sized,
    {
        let values = vertices.iter().map(|v| objective.value(v)).collect();
        Self::from_parts(vertices, values)
    }

    /// Pairs vertices with already-known values and sorts them.
    pub(super) fn from_parts(vertices: Vec<Vec<f64>>, values: Vec<f64>) -> Self {
        debug_assert_eq!(vertices.len(), values.len());

        let mut pairs: Vec<_> = vertices.into_iter().zip(values).collect();
        pairs.sort_by(|(_, a), (_, b)| a.total_cmp(b));
        let (vertices, values) = pairs.into_iter().unzip();

        Self { vertices, values }
    }

    /// Returns a new simplex with the worst vertex replaced, re-sorted.
    pub(super) fn replace_worst(self, vertex: Vec<f64>, value: f64) -> Self {
        let Self {
            mut vertices,
            mut values,
        } = self;
        let worst = vertices.len() - 1;
        vertices[worst] = vertex;
        values[worst] = value;
        Self::from_parts(vertices, values)
    }

    /// Returns true if values are non-decreasing by index.
    pub(super) fn is_sorted(&self) -> bool {
        self.values
            .windows(2)
            .all(|pair| pair[0].total_cmp(&pair[1]).is_le())
    }

    /// Returns true if both the simplex and its values are tight enough.
    ///
    /// The simplex extent is the largest coordinate distance of any vertex
    /// from the best; the value spread is the largest distance of any value
    /// from the best value. Both must be within tolerance. Only meaningful on
    /// a sorted simplex.
    pub(super) fn is_converged(&self, tolerances: &Tolerances) -> Result<bool, DimensionMismatch> {
        let best = self.best();
        let mut extent: f64 = 0.0;
        for vertex in &self.vertices[1..] {
            extent = extent.max(vector::sup_distance(vertex, best)?);
        }

        let best_value = self.best_value();
        let spread = self.values[1..]
            .iter()
            .map(|v| (v - best_value).abs())
            .fold(0.0, f64::max);

        Ok(extent <= tolerances.simplex && spread <= tolerances.value)
    }

    pub(super) fn vertices(&self) -> &[Vec<f64>] {
        &self.vertices
    }

    pub(super) fn values(&self) -> &[f64] {
        &self.values
    }

    /// Index of the worst vertex, which is also the problem dimension.
    pub(super) fn worst_index(&self) -> usize {
        self.vertices.len() - 1
    }

    pub(super) fn best(&self) -> &[f64] {
        &self.vertices[0]
    }

    pub(super) fn best_value(&self) -> f64 {
        self.values[0]
    }

    /// Consumes the simplex, returning the best vertex and its value.
    pub(super) fn into_best(self) -> (Vec<f64>, f64) {
        let best_value = self.values[0];
        let best = self.vertices.into_iter().next().unwrap_or_default();
        (best, best_value)
    }
}
