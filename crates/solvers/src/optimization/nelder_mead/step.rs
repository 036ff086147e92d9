use simplex_core::{DimensionMismatch, Objective, vector};

use crate::optimization::Counted;

use super::{Coefficients, simplex::Simplex};

/// The transformation applied by one Nelder-Mead step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Reflected past the best vertex and pushed further out.
    Expand,

    /// Accepted the reflection of the worst vertex.
    Reflect,

    /// Contracted toward the reflected side.
    ContractOutside,

    /// Contracted toward the worst vertex.
    ContractInside,

    /// Pulled every vertex toward the best.
    Shrink,
}

/// Returns `(1 + t) * centroid - t * worst`.
///
/// Every candidate lies on the line through the centroid and the worst vertex:
/// reflection at `t = alpha`, expansion at `t = alpha * beta`, outside
/// contraction at `t = gamma * alpha`, inside contraction at `t = -gamma`.
fn along(centroid: &[f64], worst: &[f64], t: f64) -> Result<Vec<f64>, DimensionMismatch> {
    vector::subtract(&vector::scale(1.0 + t, centroid), &vector::scale(t, worst))
}

/// Advances a sorted simplex by one Nelder-Mead step.
///
/// Candidates are evaluated lazily, in decision order, so the number of
/// objective calls per step depends on which branch is taken:
///
/// 1. Reflection beats the best: try expansion, keep the better of the two.
/// 2. Reflection beats the second worst: accept it.
/// 3. Reflection beats the worst: accept the outside contraction if it is no
///    worse than the reflection, otherwise shrink.
/// 4. Otherwise: accept the inside contraction if it beats the worst,
///    otherwise shrink.
///
/// The returned simplex is sorted.
pub(super) fn step<F>(
    simplex: Simplex,
    coefficients: &Coefficients,
    objective: &mut Counted<'_, F>,
) -> Result<(Simplex, Move), DimensionMismatch>
where
    F: Objective + ?Sized,
{
    debug_assert!(simplex.is_sorted(), "step requires a sorted simplex");

    let Coefficients {
        alpha,
        beta,
        gamma,
        sigma,
    } = *coefficients;

    let n = simplex.worst_index();
    let centroid = vector::mean(&simplex.vertices()[..n])?;
    let worst = &simplex.vertices()[n];

    let values = simplex.values();
    let (f_best, f_second_worst, f_worst) = (values[0], values[n - 1], values[n]);

    let reflected = along(&centroid, worst, alpha)?;
    let f_reflected = objective.value(&reflected);

    let (next, taken) = if f_reflected < f_best {
        let expanded = along(&centroid, worst, alpha * beta)?;
        let f_expanded = objective.value(&expanded);
        if f_expanded < f_reflected {
            (simplex.replace_worst(expanded, f_expanded), Move::Expand)
        } else {
            (simplex.replace_worst(reflected, f_reflected), Move::Reflect)
        }
    } else if f_reflected < f_second_worst {
        (simplex.replace_worst(reflected, f_reflected), Move::Reflect)
    } else if f_reflected < f_worst {
        let contracted = along(&centroid, worst, gamma * alpha)?;
        let f_contracted = objective.value(&contracted);
        if f_contracted <= f_reflected {
            let next = simplex.replace_worst(contracted, f_contracted);
            (next, Move::ContractOutside)
        } else {
            (shrink(simplex, sigma, objective)?, Move::Shrink)
        }
    } else {
        let contracted = along(&centroid, worst, -gamma)?;
        let f_contracted = objective.value(&contracted);
        if f_contracted < f_worst {
            let next = simplex.replace_worst(contracted, f_contracted);
            (next, Move::ContractInside)
        } else {
            (shrink(simplex, sigma, objective)?, Move::Shrink)
        }
    };

    debug_assert!(next.is_sorted(), "step must return a sorted simplex");
    Ok((next, taken))
}

/// Moves every vertex but the best to `best + sigma * (vertex - best)`.
///
/// The best value is reused; every moved vertex is re-evaluated in order.
fn shrink<F>(
    simplex: Simplex,
    sigma: f64,
    objective: &mut Counted<'_, F>,
) -> Result<Simplex, DimensionMismatch>
where
    F: Objective + ?Sized,
{
    let best = simplex.best();
    let mut vertices = Vec::with_capacity(simplex.vertices().len());
    let mut values = Vec::with_capacity(simplex.values().len());
    vertices.push(best.to_vec());
    values.push(simplex.best_value());

    for vertex in &simplex.vertices()[1..] {
        let offset = vector::scale(sigma, &vector::subtract(vertex, best)?);
        let moved = vector::add(best, &offset)?;
        values.push(objective.value(&moved));
        vertices.push(moved);
    }

    Ok(Simplex::from_parts(vertices, values))
}
