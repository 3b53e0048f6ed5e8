//! Dimension guards shared by every constructor and prefix reduction.

use crate::error::MatrixError;
use crate::orientation::Orientation;
use crate::{CoreResult, Matrix};

/// Checks that `rows` and `cols` describe a non-empty matrix.
///
/// Rows are checked first, so a `0x0` request reports the row dimension.
pub fn validate_dims(rows: usize, cols: usize) -> CoreResult<()> {
    validate_dim("rows", rows)?;
    validate_dim("cols", cols)
}

/// Single-dimension variant of [`validate_dims`].
pub fn validate_dim(dim: &'static str, value: usize) -> CoreResult<()> {
    if value == 0 {
        return Err(MatrixError::InvalidDimension { dim, value });
    }
    Ok(())
}

/// Rejects matrices without elements.
pub fn validate_matrix(matrix: &Matrix) -> CoreResult<()> {
    let (rows, cols) = matrix.dim();
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidMatrix { rows, cols });
    }
    Ok(())
}

/// Count variant used by prefix reductions: the matrix must hold elements and
/// `count` may not exceed its extent along `orientation`.
pub fn validate_count(orientation: Orientation, count: usize, matrix: &Matrix) -> CoreResult<()> {
    validate_matrix(matrix)?;
    if count > orientation.lane_count(matrix) {
        return Err(MatrixError::DimensionExceeded {
            dim: orientation.name(),
            count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(validate_dims(2, 3).is_ok());
        assert_eq!(
            validate_dims(0, 3),
            Err(MatrixError::InvalidDimension {
                dim: "rows",
                value: 0
            })
        );
        assert_eq!(
            validate_dims(2, 0),
            Err(MatrixError::InvalidDimension {
                dim: "cols",
                value: 0
            })
        );
    }

    #[test]
    fn empty_matrix_is_reported_before_count() {
        let empty = Array2::<f64>::zeros((0, 0));
        assert_eq!(
            validate_count(Orientation::ByRow, 5, &empty),
            Err(MatrixError::InvalidMatrix { rows: 0, cols: 0 })
        );
    }

    #[test]
    fn count_may_equal_but_not_exceed_extent() {
        let m = Array2::<f64>::zeros((3, 2));
        assert!(validate_count(Orientation::ByRow, 3, &m).is_ok());
        assert!(validate_count(Orientation::ByColumn, 0, &m).is_ok());
        assert_eq!(
            validate_count(Orientation::ByColumn, 3, &m),
            Err(MatrixError::DimensionExceeded {
                dim: "cols",
                count: 3
            })
        );
    }
}
