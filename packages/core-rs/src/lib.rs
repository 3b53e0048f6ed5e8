//! Numeric utilities for dense and symmetric `f64` matrices.
//!
//! Dense matrices and vectors are plain [`ndarray`] arrays ([`Matrix`],
//! [`Vector`]); symmetric matrices use the packed [`SymmetricMatrix`].
//!
//! ```
//! use ndarray::array;
//! use num_rs_matrix::{cols_mean, covariance, unroll, Orientation};
//!
//! let m = array![[1.0, 2.0], [2.0, 4.0]];
//! let cov = covariance(&m, Orientation::ByColumn).expect("covariance");
//! assert!((cov.get(1, 1) - 2.0).abs() < 1e-9);
//!
//! assert_eq!(cols_mean(2, &m).unwrap().to_vec(), vec![1.5, 3.0]);
//! assert_eq!(unroll(&m, Orientation::ByColumn).to_vec(), vec![1.0, 2.0, 2.0, 4.0]);
//! ```

pub mod block_diag;
pub mod covariance;
pub mod dims;
pub mod error;
pub mod factory;
pub mod format;
pub mod orientation;
pub mod reduce;
pub mod symmetric;
mod threading;
pub mod vectorize;

use ndarray::{Array1, Array2};

pub use block_diag::{block_diag, block_diag_symmetric, BlockDiagBuilder};
pub use covariance::covariance;
pub use dims::{validate_count, validate_dims};
pub use error::MatrixError;
pub use factory::{add_constant, constant_dense, random_dense, scaled_identity, seeded_rng};
pub use format::{format_matrix, formatted};
pub use orientation::Orientation;
pub use reduce::{
    cols_max, cols_mean, cols_min, cols_std_dev, cols_sum, reduce, rows_max, rows_mean, rows_min,
    rows_std_dev, rows_sum, Statistic,
};
pub use symmetric::{to_symmetric, to_symmetric_with, SymmetricMatrix, Tolerance};
pub use vectorize::{set_values, unroll};

/// Dense row-major matrix of `f64`.
pub type Matrix = Array2<f64>;
/// One-dimensional `f64` vector, read as a column.
pub type Vector = Array1<f64>;

pub type CoreResult<T> = Result<T, MatrixError>;
