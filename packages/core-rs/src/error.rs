use thiserror::Error;

/// Canonical error codes emitted by the matrix core. The codes are designed to
/// be stable so that higher layers can branch on them without parsing messages.
pub mod codes {
    /// A requested row or column count was zero.
    pub const INVALID_DIMENSION: &str = "E_INVALID_DIMENSION";
    /// The supplied matrix holds no elements.
    pub const INVALID_MATRIX: &str = "E_INVALID_MATRIX";
    /// A prefix count is larger than the matrix extent along that axis.
    pub const DIMENSION_EXCEEDED: &str = "E_DIMENSION_EXCEEDED";
    /// A flat vector does not carry exactly `rows * cols` values.
    pub const ELEMENT_COUNT_MISMATCH: &str = "E_ELEMENT_COUNT_MISMATCH";
    /// Symmetric conversion was given a non-square matrix.
    pub const NOT_SQUARE: &str = "E_NOT_SQUARE";
    /// Symmetric conversion found a mirrored pair outside tolerance.
    pub const ASYMMETRY: &str = "E_ASYMMETRY";
    /// Random bounds do not describe a non-empty finite interval.
    pub const INVALID_RANGE: &str = "E_INVALID_RANGE";
    /// Covariance needs at least two observations.
    pub const INSUFFICIENT_OBSERVATIONS: &str = "E_INSUFFICIENT_OBSERVATIONS";
}

/// All failures reported by `num-rs-matrix`.
///
/// Every operation either returns a complete result or one of these values;
/// matrices mutated in place are left untouched on failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("invalid number of {dim}: {value}")]
    InvalidDimension { dim: &'static str, value: usize },

    #[error("invalid matrix supplied: empty {rows}x{cols} matrix")]
    InvalidMatrix { rows: usize, cols: usize },

    #[error("{dim} count exceeds matrix {dim}: {count}")]
    DimensionExceeded { dim: &'static str, count: usize },

    #[error("elements count mismatch: Vec: {vector}, Matrix: {matrix}")]
    ElementCountMismatch { vector: usize, matrix: usize },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix not symmetric ({row}, {col}): {transposed} != {original}\n{matrix}")]
    Asymmetry {
        row: usize,
        col: usize,
        transposed: f64,
        original: f64,
        /// Tabular rendering of the offending matrix.
        matrix: String,
    },

    #[error("invalid random range [{min}, {max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("covariance {orientation} needs at least 2 observations, got {count}")]
    InsufficientObservations {
        orientation: &'static str,
        count: usize,
    },
}

impl MatrixError {
    /// Stable code for this error, see [`codes`].
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDimension { .. } => codes::INVALID_DIMENSION,
            Self::InvalidMatrix { .. } => codes::INVALID_MATRIX,
            Self::DimensionExceeded { .. } => codes::DIMENSION_EXCEEDED,
            Self::ElementCountMismatch { .. } => codes::ELEMENT_COUNT_MISMATCH,
            Self::NotSquare { .. } => codes::NOT_SQUARE,
            Self::Asymmetry { .. } => codes::ASYMMETRY,
            Self::InvalidRange { .. } => codes::INVALID_RANGE,
            Self::InsufficientObservations { .. } => codes::INSUFFICIENT_OBSERVATIONS,
        }
    }
}
