//! Error types for tracing and filling.

use thiserror::Error;

/// Rejected input to a tracing or filling operation.
///
/// Every variant reports malformed caller input; none is retryable.
///
/// Segments lying outside the grid are not errors: they trace to an empty path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LassoError {
    #[error("Invalid grid shape ({rows}, {cols}): both dimensions must be >= 1")]
    InvalidGridShape { rows: i64, cols: i64 },

    #[error("Polyline needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("Polyline point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error("Resampling spacing must be finite and positive, got {0}")]
    InvalidSpacing(f32),

    #[error("Resampling at spacing {spacing} exceeds {limit} points")]
    TooManyPoints { spacing: f32, limit: usize },

    #[error("Path cell ({row}, {col}) lies outside the grid")]
    CellOutOfBounds { row: usize, col: usize },

    #[error("Mask shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, LassoError>;
