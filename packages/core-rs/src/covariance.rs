use ndarray::Axis;

use crate::error::MatrixError;
use crate::orientation::Orientation;
use crate::reduce::{cols_mean, rows_mean};
use crate::symmetric::{to_symmetric, SymmetricMatrix};
use crate::{CoreResult, Matrix};

/// Covariance of the data in `matrix`, with observations laid out along
/// `orientation`.
///
/// With [`Orientation::ByRow`] each column is centred on its mean and `N` is
/// the row count; with [`Orientation::ByColumn`] each row is centred on its
/// mean and `N` is the column count. The result is `X * X^T / (N - 1)` for
/// the centred matrix `X`, checked and packed by [`to_symmetric`].
///
/// # Errors
///
/// [`MatrixError::InvalidMatrix`] for an empty matrix,
/// [`MatrixError::InsufficientObservations`] when `N < 2`, and any
/// [`to_symmetric`] failure unchanged.
pub fn covariance(matrix: &Matrix, orientation: Orientation) -> CoreResult<SymmetricMatrix> {
    let (rows, cols) = matrix.dim();
    let (means, observations) = match orientation {
        Orientation::ByRow => (cols_mean(cols, matrix)?, rows),
        Orientation::ByColumn => (rows_mean(rows, matrix)?, cols),
    };
    if observations < 2 {
        return Err(MatrixError::InsufficientObservations {
            orientation: orientation.name(),
            count: observations,
        });
    }

    let centred = match orientation {
        Orientation::ByRow => matrix - &means.insert_axis(Axis(0)),
        Orientation::ByColumn => matrix - &means.insert_axis(Axis(1)),
    };
    let scale = 1.0 / (observations as f64 - 1.0);
    let cov = centred.dot(&centred.t()) * scale;
    log::debug!(
        "covariance {}: {rows}x{cols} input, {observations} observations",
        orientation.name()
    );
    to_symmetric(&cov)
}
