//! Packed symmetric matrices and conversion from dense storage.

use std::fmt;

use ndarray::Array2;

use crate::error::MatrixError;
use crate::format::formatted;
use crate::{CoreResult, Matrix};

/// Absolute tolerance used by [`to_symmetric`].
pub const SYMMETRY_ATOL: f64 = 1e-6;
/// Relative tolerance used by [`to_symmetric`].
pub const SYMMETRY_RTOL: f64 = 1e-2;

/// Square matrix with `m[i][j] == m[j][i]`, storing only the upper triangle
/// (diagonal included) in row-major packed order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SymmetricMatrix {
    n: usize,
    data: Vec<f64>,
}

/// Length of the packed upper triangle, `None` when it does not fit a `usize`.
fn packed_len(n: usize) -> Option<usize> {
    n.checked_add(1)
        .and_then(|next| n.checked_mul(next))
        .map(|product| product / 2)
}

impl SymmetricMatrix {
    /// `n x n` zero matrix. `zeros(0)` is the empty matrix.
    ///
    /// # Panics
    ///
    /// Panics if the packed storage cannot be allocated.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; packed_len(n).unwrap_or(usize::MAX)],
        }
    }

    /// Builds a matrix from its packed upper triangle.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ElementCountMismatch`] unless `data` holds exactly
    /// `n * (n + 1) / 2` values. A size whose triangle overflows `usize`
    /// reports `usize::MAX` as the expected count.
    pub fn from_packed_upper(n: usize, data: Vec<f64>) -> CoreResult<Self> {
        let expected = packed_len(n);
        if expected != Some(data.len()) {
            return Err(MatrixError::ElementCountMismatch {
                vector: data.len(),
                matrix: expected.unwrap_or(usize::MAX),
            });
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix from `n * n` row-major values, reading only the upper
    /// triangle. No symmetry check is performed; see [`to_symmetric`].
    ///
    /// # Errors
    ///
    /// [`MatrixError::ElementCountMismatch`] unless `values` holds exactly
    /// `n * n` values, with `usize::MAX` standing in for an overflowing square.
    pub fn from_row_major(n: usize, values: &[f64]) -> CoreResult<Self> {
        let expected = n.checked_mul(n);
        if expected != Some(values.len()) {
            return Err(MatrixError::ElementCountMismatch {
                vector: values.len(),
                matrix: expected.unwrap_or(usize::MAX),
            });
        }
        let mut data = Vec::with_capacity(packed_len(n).unwrap_or(0));
        for i in 0..n {
            data.extend_from_slice(&values[i * n + i..(i + 1) * n]);
        }
        Ok(Self { n, data })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn packed(&self) -> &[f64] {
        &self.data
    }

    fn index(&self, row: usize, col: usize) -> usize {
        let (i, j) = if row <= col { (row, col) } else { (col, row) };
        assert!(j < self.n, "index ({row}, {col}) out of bounds for size {}", self.n);
        i * self.n - i * i.saturating_sub(1) / 2 - i + j
    }

    /// Element at `(row, col)`; `get(i, j) == get(j, i)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.index(row, col)]
    }

    /// Sets both `(row, col)` and its mirror `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    /// Expands into full dense storage.
    pub fn to_dense(&self) -> Matrix {
        Array2::from_shape_fn((self.n, self.n), |(i, j)| self.get(i, j))
    }
}

impl fmt::Display for SymmetricMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", formatted(self.to_dense().view()))
    }
}

/// Combined absolute/relative bound for mirrored pairs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub atol: f64,
    pub rtol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            atol: SYMMETRY_ATOL,
            rtol: SYMMETRY_RTOL,
        }
    }
}

impl Tolerance {
    /// Whether `transposed` is close enough to `original`. NaN never is.
    pub fn accepts(&self, transposed: f64, original: f64) -> bool {
        (transposed - original).abs() <= self.atol + self.rtol * original.abs()
    }
}

/// Converts a square dense matrix into packed symmetric storage, using the
/// default [`Tolerance`].
pub fn to_symmetric(matrix: &Matrix) -> CoreResult<SymmetricMatrix> {
    to_symmetric_with(matrix, Tolerance::default())
}

/// Like [`to_symmetric`] with caller-supplied tolerances.
///
/// Pairs are scanned in row-major order and the first `(i, j)` whose mirror
/// `m[j][i]` falls outside `tolerance` is reported. The upper triangle of the
/// input is kept.
pub fn to_symmetric_with(matrix: &Matrix, tolerance: Tolerance) -> CoreResult<SymmetricMatrix> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    for ((i, j), &original) in matrix.indexed_iter() {
        if i == j {
            continue;
        }
        let transposed = matrix[[j, i]];
        if !tolerance.accepts(transposed, original) {
            return Err(MatrixError::Asymmetry {
                row: i,
                col: j,
                transposed,
                original,
                matrix: formatted(matrix.view()).to_string(),
            });
        }
    }

    let mut data = Vec::with_capacity(packed_len(rows).unwrap_or(0));
    for (i, row) in matrix.rows().into_iter().enumerate() {
        data.extend(row.iter().skip(i).copied());
    }
    Ok(SymmetricMatrix { n: rows, data })
}
