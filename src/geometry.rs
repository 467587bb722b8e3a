//! Shared geometry types for tracing on sampled images.
//!
//! Coordinates live in continuous index space: integer value `k` is the
//! center of cell `k`, and cell `k` covers `[k - 0.5, k + 0.5)` on its axis.
//! Rows come first everywhere, matching the row-major layout of the masks.

use serde::{Deserialize, Serialize};

use crate::error::{LassoError, Result};

/// Working float precision of the traversal.
pub type Real = f32;

/// Tolerance used for every alpha comparison (machine epsilon of [`Real`]).
pub const EPSILON: Real = Real::EPSILON;

/// Integer grid cell `(row, col)`.
pub type Cell = (usize, usize);

/// Ordered sequence of visited cells. Junction cells are not deduplicated.
pub type Path = Vec<Cell>;

/// A point in continuous index space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub row: Real,
    pub col: Real,
}

impl Point {
    pub const fn new(row: Real, col: Real) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.row.is_finite() && self.col.is_finite()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> Real {
        let dr = other.row - self.row;
        let dc = other.col - self.col;
        (dr * dr + dc * dc).sqrt()
    }
}

impl From<(Real, Real)> for Point {
    fn from((row, col): (Real, Real)) -> Self {
        Self { row, col }
    }
}

/// Number of rows and columns of the traced grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    /// Create a shape, rejecting empty dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let shape = Self { rows, cols };
        shape.validate()?;
        Ok(shape)
    }

    /// Build a shape from signed dimensions as handed over by bindings.
    pub fn from_signed(rows: i64, cols: i64) -> Result<Self> {
        if rows <= 0 || cols <= 0 {
            return Err(LassoError::InvalidGridShape { rows, cols });
        }
        Self::new(rows as usize, cols as usize)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LassoError::InvalidGridShape {
                rows: self.rows as i64,
                cols: self.cols as i64,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Shape in the `(rows, cols)` form ndarray expects.
    #[inline]
    pub fn dim2(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}
