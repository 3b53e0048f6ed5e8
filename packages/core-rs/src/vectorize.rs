use ndarray::{Array1, ArrayView1};

use crate::error::MatrixError;
use crate::orientation::Orientation;
use crate::{CoreResult, Matrix, Vector};

/// Flattens `matrix` into a vector of `rows * cols` values, row by row for
/// [`Orientation::ByRow`] and column by column for [`Orientation::ByColumn`].
pub fn unroll(matrix: &Matrix, order: Orientation) -> Vector {
    Array1::from_iter(order.ordered_view(matrix).iter().copied())
}

/// Overwrites every element of `matrix` with `values`, read in the same order
/// [`unroll`] produces.
///
/// # Errors
///
/// [`MatrixError::ElementCountMismatch`] if `values.len() != rows * cols`; the
/// matrix is left untouched.
pub fn set_values(
    matrix: &mut Matrix,
    values: ArrayView1<'_, f64>,
    order: Orientation,
) -> CoreResult<()> {
    if values.len() != matrix.len() {
        return Err(MatrixError::ElementCountMismatch {
            vector: values.len(),
            matrix: matrix.len(),
        });
    }
    let target = order.ordered_view_mut(matrix);
    for (dst, &src) in target.into_iter().zip(values.iter()) {
        *dst = src;
    }
    Ok(())
}
