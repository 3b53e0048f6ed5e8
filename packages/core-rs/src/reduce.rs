//! Per-row and per-column statistics over a leading prefix of lanes.
//!
//! Each reduction takes `count` and summarises lanes `0..count`, every lane
//! using all of its elements. `count` may be smaller than the matrix extent,
//! which lets callers summarise a leading block without copying it.

use ndarray::{Array1, ArrayView1};
use num_traits::Float;

use crate::dims::validate_count;
use crate::orientation::Orientation;
use crate::threading;
use crate::{CoreResult, Matrix, Vector};

/// Aggregate computed for every lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Statistic {
    Sum,
    Max,
    Min,
    Mean,
    /// Sample standard deviation (Bessel's correction). A lane holding a
    /// single element has deviation `0`, not NaN.
    StdDev,
}

impl Statistic {
    /// Reduces a single lane.
    pub fn apply(self, lane: ArrayView1<'_, f64>) -> f64 {
        match self {
            Statistic::Sum => compensated_sum(lane.iter().copied()),
            Statistic::Max => lane.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Statistic::Min => lane.iter().copied().fold(f64::INFINITY, f64::min),
            Statistic::Mean => {
                if lane.is_empty() {
                    return f64::NAN;
                }
                compensated_sum(lane.iter().copied()) / lane.len() as f64
            }
            Statistic::StdDev => welford_mean_variance(lane.iter().copied(), true).1.sqrt(),
        }
    }
}

// ---------------------------------------------------------------------
// Numerically stable lane kernels (Kahan sum, Welford mean/variance)
// ---------------------------------------------------------------------

fn compensated_sum<T, I>(values: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    let mut sum = T::zero();
    let mut compensation = T::zero();
    for value in values {
        let y = value - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}

/// Single-pass mean and variance. With `sample` the variance divides by
/// `n - 1` when `n > 1`; a single element has variance zero.
pub(crate) fn welford_mean_variance<T, I>(values: I, sample: bool) -> (T, T)
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    let mut n = T::zero();
    let mut mean = T::zero();
    let mut m2 = T::zero();
    for v in values {
        n = n + T::one();
        let delta = v - mean;
        mean = mean + delta / n;
        let delta2 = v - mean;
        m2 = m2 + delta * delta2;
    }
    if n < T::one() {
        return (T::nan(), T::nan());
    }
    let var = if sample && n > T::one() {
        m2 / (n - T::one())
    } else {
        m2 / n
    };
    (mean, var)
}

/// Applies `statistic` to the first `count` lanes of `matrix` along
/// `orientation`.
///
/// # Errors
///
/// [`MatrixError::InvalidMatrix`](crate::MatrixError::InvalidMatrix) for a
/// matrix without elements, then
/// [`MatrixError::DimensionExceeded`](crate::MatrixError::DimensionExceeded)
/// when `count` is larger than the number of rows (or columns).
pub fn reduce(
    orientation: Orientation,
    statistic: Statistic,
    count: usize,
    matrix: &Matrix,
) -> CoreResult<Vector> {
    validate_count(orientation, count, matrix)?;
    let lane_len = orientation.lane_len(matrix);
    if threading::should_parallelize(count, lane_len) {
        log::trace!("reduce {statistic:?} over {count} {}: parallel", orientation.name());
        return Ok(reduce_parallel(orientation, statistic, count, matrix));
    }
    log::trace!("reduce {statistic:?} over {count} {}: serial", orientation.name());
    Ok(reduce_serial(orientation, statistic, count, matrix))
}

fn reduce_serial(
    orientation: Orientation,
    statistic: Statistic,
    count: usize,
    matrix: &Matrix,
) -> Vector {
    (0..count)
        .map(|i| statistic.apply(orientation.lane(matrix, i)))
        .collect::<Array1<f64>>()
}

#[cfg(feature = "parallel")]
fn reduce_parallel(
    orientation: Orientation,
    statistic: Statistic,
    count: usize,
    matrix: &Matrix,
) -> Vector {
    use rayon::prelude::*;
    threading::ensure_rayon_pool();
    let values: Vec<f64> = (0..count)
        .into_par_iter()
        .map(|i| statistic.apply(orientation.lane(matrix, i)))
        .collect();
    Array1::from(values)
}

#[cfg(not(feature = "parallel"))]
fn reduce_parallel(
    orientation: Orientation,
    statistic: Statistic,
    count: usize,
    matrix: &Matrix,
) -> Vector {
    reduce_serial(orientation, statistic, count, matrix)
}

pub fn rows_sum(rows: usize, matrix: &Matrix) -> CoreResult<Vector> {
    reduce(Orientation::ByRow, Statistic::Sum, rows, matrix)
}

pub fn cols_sum(cols: usize, matrix: &Matrix) -> CoreResult<Vector> {
    reduce(Orientation::ByColumn, Statistic::Sum, cols, matrix)
}

pub fn rows_max(rows: usize, matrix: &Matrix) -> CoreResult<Vector> {
    reduce(Orientation::ByRow, Statistic::Max, rows, matrix)
}

pub fn cols_max(cols: usize, matrix: &Matrix) -> CoreResult<Vector> {
    reduce(Orientation::ByColumn, Statistic::Max, cols, matrix)
}

pub fn rows_min(rows: usize, matrix: &Matrix) -> CoreResult<Vector> {
    reduce(Orientation::ByRow, Statistic::Min, rows, matrix)
}

pub fn cols_min(cols: usize, matrix: &Matrix) -> CoreResult<Vector> {
    reduce(Orientation::ByColumn, Statistic::Min, cols, matrix)
}

/// Mean of each of the first `rows` rows.
pub fn rows_mean(rows: usize, matrix: &Matrix) -> CoreResult<Vector> {
    reduce(Orientation::ByRow, Statistic::Mean, rows, matrix)
}

/// Mean of each of the first `cols` columns.
pub fn cols_mean(cols: usize, matrix: &Matrix) -> CoreResult<Vector> {
    reduce(Orientation::ByColumn, Statistic::Mean, cols, matrix)
}

pub fn rows_std_dev(rows: usize, matrix: &Matrix) -> CoreResult<Vector> {
    reduce(Orientation::ByRow, Statistic::StdDev, rows, matrix)
}

pub fn cols_std_dev(cols: usize, matrix: &Matrix) -> CoreResult<Vector> {
    reduce(Orientation::ByColumn, Statistic::StdDev, cols, matrix)
}
