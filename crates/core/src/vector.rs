//! Elementwise arithmetic on fixed-length points.
//!
//! Every operation returns a fresh vector; inputs are never modified. Binary
//! operations require equal lengths and report [`DimensionMismatch`] otherwise.

use thiserror::Error;

/// Two operands had different lengths.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("dimension mismatch: {left} vs {right}")]
pub struct DimensionMismatch {
    pub left: usize,
    pub right: usize,
}

fn check(u: &[f64], v: &[f64]) -> Result<(), DimensionMismatch> {
    if u.len() == v.len() {
        Ok(())
    } else {
        Err(DimensionMismatch {
            left: u.len(),
            right: v.len(),
        })
    }
}

/// Returns `u + v`.
///
/// # Errors
///
/// Returns [`DimensionMismatch`] if `u` and `v` differ in length.
pub fn add(u: &[f64], v: &[f64]) -> Result<Vec<f64>, DimensionMismatch> {
    check(u, v)?;
    Ok(u.iter().zip(v).map(|(a, b)| a + b).collect())
}

/// Returns `u - v`.
///
/// # Errors
///
/// Returns [`DimensionMismatch`] if `u` and `v` differ in length.
pub fn subtract(u: &[f64], v: &[f64]) -> Result<Vec<f64>, DimensionMismatch> {
    check(u, v)?;
    Ok(u.iter().zip(v).map(|(a, b)| a - b).collect())
}

/// Returns `s * v`.
#[must_use]
pub fn scale(s: f64, v: &[f64]) -> Vec<f64> {
    v.iter().map(|a| s * a).collect()
}

/// Returns the arithmetic mean of `points`.
///
/// # Errors
///
/// Returns [`DimensionMismatch`] if the points differ in length. An empty
/// slice has no defined mean and is reported as a mismatch against zero.
pub fn mean<P: AsRef<[f64]>>(points: &[P]) -> Result<Vec<f64>, DimensionMismatch> {
    let Some((first, rest)) = points.split_first() else {
        return Err(DimensionMismatch { left: 0, right: 0 });
    };

    let mut sum = first.as_ref().to_vec();
    for point in rest {
        sum = add(&sum, point.as_ref())?;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = points.len() as f64;
    Ok(scale(1.0 / count, &sum))
}

/// Returns the largest absolute coordinate difference between `u` and `v`.
///
/// # Errors
///
/// Returns [`DimensionMismatch`] if `u` and `v` differ in length.
pub fn sup_distance(u: &[f64], v: &[f64]) -> Result<f64, DimensionMismatch> {
    check(u, v)?;
    Ok(u.iter()
        .zip(v)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn add_and_subtract_are_elementwise() {
        let u = [1.0, 2.0, 3.0];
        let v = [0.5, -2.0, 4.0];

        assert_eq!(add(&u, &v).unwrap(), vec![1.5, 0.0, 7.0]);
        assert_eq!(subtract(&u, &v).unwrap(), vec![0.5, 4.0, -1.0]);
    }

    #[test]
    fn scale_multiplies_every_coordinate() {
        assert_eq!(scale(-2.0, &[1.0, 0.0, 0.25]), vec![-2.0, -0.0, -0.5]);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = add(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, DimensionMismatch { left: 2, right: 1 });

        assert!(subtract(&[1.0], &[]).is_err());
        assert!(sup_distance(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn mean_of_points() {
        let points = vec![vec![0.0, 0.0], vec![2.0, 4.0], vec![1.0, -1.0]];
        let centroid = mean(&points).unwrap();

        assert_relative_eq!(centroid[0], 1.0);
        assert_relative_eq!(centroid[1], 1.0);
    }

    #[test]
    fn mean_rejects_empty_and_ragged_input() {
        let empty: [Vec<f64>; 0] = [];
        assert!(mean(&empty).is_err());
        assert!(mean(&[vec![1.0], vec![1.0, 2.0]]).is_err());
    }

    #[test]
    fn sup_distance_is_largest_coordinate_gap() {
        let d = sup_distance(&[1.0, -3.0, 2.0], &[1.5, 1.0, 2.0]).unwrap();
        assert_relative_eq!(d, 4.0);
    }
}
