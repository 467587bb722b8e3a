//! Per-axis entry/exit solver for a single segment.
//!
//! The segment is parameterized as `r(alpha) = r1 + (r2 - r1) * alpha`, so
//! `alpha = 0` at the start point and `alpha = 1` at the end point. Along one
//! axis the grid is bounded by the planes `-0.5` and `dim_size - 0.5`.

use crate::geometry::{Real, EPSILON};

/// Lowest bounding plane on any axis.
pub const LOW_PLANE: Real = -0.5;

/// Parametric start of a segment.
pub const ALPHA_MIN: Real = 0.0;

/// Parametric end of a segment.
pub const ALPHA_MAX: Real = 1.0;

/// Outcome of solving one axis of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisSetup {
    /// The segment moves along this axis and crosses cell planes.
    Active {
        /// `r2 - r1` along this axis.
        diff: Real,
        /// +1 when moving toward higher indices, -1 otherwise.
        direction: i64,
        /// Alpha at which the segment enters the grid slab on this axis.
        alpha_min: Real,
        /// Alpha at which the segment leaves the grid slab on this axis.
        alpha_max: Real,
        /// Alpha needed to travel one cell along this axis.
        step: Real,
    },
    /// Zero extent along this axis, but inside the slab: never constrains the
    /// intersection and never triggers a crossing.
    Cancelled,
    /// Zero extent along this axis and outside the slab: the whole segment
    /// misses the grid.
    MissesGrid,
}

impl AxisSetup {
    /// Solve one axis given the segment coordinates `r1`, `r2` on that axis.
    pub fn solve(dim_size: usize, r1: Real, r2: Real) -> Self {
        let high_plane = dim_size as Real - 0.5;
        let diff = r2 - r1;

        if diff.abs() > EPSILON {
            let a_low = (LOW_PLANE - r1) / diff;
            let a_high = (high_plane - r1) / diff;

            // Entry plane is the low one when travelling upward, the high one otherwise
            AxisSetup::Active {
                diff,
                direction: if diff > 0.0 { 1 } else { -1 },
                alpha_min: a_low.min(a_high),
                alpha_max: a_low.max(a_high),
                step: 1.0 / diff.abs(),
            }
        } else if r1 < LOW_PLANE || r1 > high_plane {
            AxisSetup::MissesGrid
        } else {
            AxisSetup::Cancelled
        }
    }

    /// Parametric range `[alpha_min, alpha_max]` this axis allows.
    ///
    /// A cancelled axis allows the full segment. Returns `None` for a miss.
    pub fn alpha_range(&self) -> Option<(Real, Real)> {
        match *self {
            AxisSetup::Active {
                alpha_min,
                alpha_max,
                ..
            } => Some((alpha_min, alpha_max)),
            AxisSetup::Cancelled => Some((ALPHA_MIN, ALPHA_MAX)),
            AxisSetup::MissesGrid => None,
        }
    }

    /// Displacement along the axis, zero for a degenerate axis.
    #[inline]
    pub fn diff(&self) -> Real {
        match *self {
            AxisSetup::Active { diff, .. } => diff,
            _ => 0.0,
        }
    }
}

/// Index of the cell containing `r1 + diff * alpha`, clamped into `[0, dim_size - 1]`.
///
/// Clamping absorbs rounding when the entry point sits exactly on a grid boundary.
#[inline]
pub fn start_index(dim_size: usize, r1: Real, diff: Real, alpha: Real) -> i64 {
    let ind = (r1 + diff * alpha - LOW_PLANE).floor() as i64;
    ind.clamp(0, dim_size as i64 - 1)
}

/// Alpha at which the segment reaches the far plane of cell `index`.
///
/// Moving down, the far plane is `index - 0.5`. Moving up, it is one cell further.
#[inline]
pub fn first_crossing(r1: Real, diff: Real, direction: i64, step: Real, index: i64) -> Real {
    let alpha = (LOW_PLANE + index as Real - r1) / diff;
    if direction > 0 {
        alpha + step
    } else {
        alpha
    }
}
