use ndarray::{ArrayView1, ArrayView2, ArrayViewMut2};

use crate::Matrix;

/// Selects whether an operation walks a matrix row by row or column by column.
///
/// For reductions this picks the lanes being summarised, for covariance it
/// picks what counts as one observation, and for the vectorizer it picks
/// row-major versus column-major element order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    ByRow,
    ByColumn,
}

impl Orientation {
    /// Name used in error messages (`"rows"` / `"cols"`).
    pub fn name(self) -> &'static str {
        match self {
            Orientation::ByRow => "rows",
            Orientation::ByColumn => "cols",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Orientation::ByRow => Orientation::ByColumn,
            Orientation::ByColumn => Orientation::ByRow,
        }
    }

    /// Number of lanes (rows or columns) the matrix has in this orientation.
    pub fn lane_count(self, matrix: &Matrix) -> usize {
        match self {
            Orientation::ByRow => matrix.nrows(),
            Orientation::ByColumn => matrix.ncols(),
        }
    }

    /// Length of each lane, i.e. the extent of the other axis.
    pub fn lane_len(self, matrix: &Matrix) -> usize {
        self.other().lane_count(matrix)
    }

    /// Row `index` or column `index` as a one-dimensional view.
    ///
    /// Panics if `index` is out of bounds; callers validate counts first.
    pub fn lane(self, matrix: &Matrix, index: usize) -> ArrayView1<'_, f64> {
        match self {
            Orientation::ByRow => matrix.row(index),
            Orientation::ByColumn => matrix.column(index),
        }
    }

    /// View whose logical (row-major) iteration order visits the elements in
    /// this orientation's order.
    pub(crate) fn ordered_view(self, matrix: &Matrix) -> ArrayView2<'_, f64> {
        match self {
            Orientation::ByRow => matrix.view(),
            Orientation::ByColumn => matrix.view().reversed_axes(),
        }
    }

    pub(crate) fn ordered_view_mut(self, matrix: &mut Matrix) -> ArrayViewMut2<'_, f64> {
        match self {
            Orientation::ByRow => matrix.view_mut(),
            Orientation::ByColumn => matrix.view_mut().reversed_axes(),
        }
    }
}
