//! Dense matrix constructors.

use ndarray::Array2;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dims::{validate_dims, validate_matrix};
use crate::error::MatrixError;
use crate::{CoreResult, Matrix};

/// Builds the generator used by [`random_dense`] callers that do not bring
/// their own. `Some(seed)` makes the sequence reproducible, `None` seeds from
/// system entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_entropy(),
    }
}

/// Matrix of `rows x cols` values drawn uniformly from `[min, max)` using the
/// caller's generator.
///
/// # Errors
///
/// [`MatrixError::InvalidDimension`] for a zero dimension and
/// [`MatrixError::InvalidRange`] unless `min < max` spans a finite interval.
pub fn random_dense<R>(
    rows: usize,
    cols: usize,
    min: f64,
    max: f64,
    rng: &mut R,
) -> CoreResult<Matrix>
where
    R: Rng + ?Sized,
{
    validate_dims(rows, cols)?;
    if !(min < max) || !(max - min).is_finite() {
        return Err(MatrixError::InvalidRange { min, max });
    }
    let dist = Uniform::new(min, max);
    log::debug!("random_dense: allocating {rows}x{cols} in [{min}, {max})");
    Ok(Array2::from_shape_simple_fn((rows, cols), || dist.sample(&mut *rng)))
}

/// Matrix of `rows x cols` with every element set to `value`.
pub fn constant_dense(rows: usize, cols: usize, value: f64) -> CoreResult<Matrix> {
    validate_dims(rows, cols)?;
    log::debug!("constant_dense: allocating {rows}x{cols} filled with {value}");
    Ok(Array2::from_elem((rows, cols), value))
}

/// `n x n` matrix with `value` on the diagonal and zeros elsewhere.
pub fn scaled_identity(n: usize, value: f64) -> CoreResult<Matrix> {
    validate_dims(n, n)?;
    log::debug!("scaled_identity: allocating {n}x{n} with diagonal {value}");
    Ok(Array2::from_diag_elem(n, value))
}

/// Adds `value` to every element of `matrix` in place.
///
/// # Errors
///
/// [`MatrixError::InvalidMatrix`] if the matrix holds no elements; the matrix
/// is not modified in that case.
pub fn add_constant(matrix: &mut Matrix, value: f64) -> CoreResult<()> {
    validate_matrix(matrix)?;
    matrix.mapv_inplace(|v| v + value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = seeded_rng(Some(55));
        let m = random_dense(2, 3, 1.0, 2.0, &mut rng).expect("random");
        assert_eq!(m.dim(), (2, 3));
        assert!(m.iter().all(|&v| (1.0..2.0).contains(&v)));
    }

    #[test]
    fn random_is_reproducible_only_with_same_seed() {
        let a = random_dense(4, 4, -1.0, 1.0, &mut seeded_rng(Some(7))).unwrap();
        let b = random_dense(4, 4, -1.0, 1.0, &mut seeded_rng(Some(7))).unwrap();
        assert_eq!(a, b);

        // one generator, two calls: the second draw continues the stream
        let mut rng = seeded_rng(Some(7));
        let first = random_dense(4, 4, -1.0, 1.0, &mut rng).unwrap();
        let second = random_dense(4, 4, -1.0, 1.0, &mut rng).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn random_rejects_bad_input() {
        let mut rng = seeded_rng(Some(1));
        assert!(matches!(
            random_dense(2, 0, 1.0, 2.0, &mut rng),
            Err(MatrixError::InvalidDimension { dim: "cols", .. })
        ));
        assert!(matches!(
            random_dense(0, 2, 1.0, 2.0, &mut rng),
            Err(MatrixError::InvalidDimension { dim: "rows", .. })
        ));
        assert!(matches!(
            random_dense(2, 2, 2.0, 2.0, &mut rng),
            Err(MatrixError::InvalidRange { .. })
        ));
        assert!(matches!(
            random_dense(2, 2, 0.0, f64::INFINITY, &mut rng),
            Err(MatrixError::InvalidRange { .. })
        ));
    }

    #[test]
    fn constant_and_identity() {
        assert_eq!(constant_dense(2, 2, 1.0).unwrap(), array![[1.0, 1.0], [1.0, 1.0]]);
        assert!(constant_dense(3, 0, 1.0).is_err());
        assert_eq!(scaled_identity(2, 1.0).unwrap(), array![[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(
            scaled_identity(3, 2.5).unwrap().diag().to_vec(),
            vec![2.5, 2.5, 2.5]
        );
        assert!(scaled_identity(0, 1.0).is_err());
    }

    #[test]
    fn add_constant_updates_in_place() {
        let mut m = array![[1.0, 2.0], [2.5, 2.5]];
        add_constant(&mut m, 0.5).expect("add");
        assert_abs_diff_eq!(m, array![[1.5, 2.5], [3.0, 3.0]], epsilon = 1e-12);

        let mut empty = Matrix::zeros((0, 4));
        assert_eq!(
            add_constant(&mut empty, 0.5),
            Err(MatrixError::InvalidMatrix { rows: 0, cols: 4 })
        );
    }
}
