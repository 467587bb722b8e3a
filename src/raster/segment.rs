//! Siddon-style traversal of one segment across the grid.

use super::axis::{first_crossing, start_index, AxisSetup, ALPHA_MAX, ALPHA_MIN};
use crate::geometry::{GridShape, Path, Point, Real, EPSILON};

/// Traversal state of one axis.
#[derive(Debug, Clone, Copy)]
struct AxisCursor {
    index: i64,
    /// Alpha of the next plane crossing, `None` for a cancelled axis.
    next_alpha: Option<Real>,
    step: Real,
    direction: i64,
    dim_size: i64,
}

impl AxisCursor {
    fn new(setup: &AxisSetup, dim_size: usize, r1: Real, alpha_min: Real) -> Self {
        match *setup {
            AxisSetup::Active {
                diff,
                direction,
                step,
                ..
            } => {
                let index = start_index(dim_size, r1, diff, alpha_min);
                Self {
                    index,
                    next_alpha: Some(first_crossing(r1, diff, direction, step, index)),
                    step,
                    direction,
                    dim_size: dim_size as i64,
                }
            }
            _ => Self {
                index: start_index(dim_size, r1, 0.0, alpha_min),
                next_alpha: None,
                step: 0.0,
                direction: 0,
                dim_size: dim_size as i64,
            },
        }
    }

    #[inline]
    fn candidate(&self) -> Real {
        self.next_alpha.unwrap_or(Real::INFINITY)
    }

    #[inline]
    fn in_grid(&self) -> bool {
        (0..self.dim_size).contains(&self.index)
    }

    /// Move into the neighboring cell if this axis crosses a plane at `alpha`.
    #[inline]
    fn advance_if_crossing(&mut self, alpha: Real) {
        if let Some(next) = self.next_alpha {
            if (next - alpha).abs() < EPSILON {
                self.next_alpha = Some(next + self.step);
                self.index += self.direction;
            }
        }
    }
}

/// Compute the ordered cells crossed by the segment from `p1` to `p2`.
///
/// Cells are listed in the order the segment visits them. A segment wholly
/// outside the grid, or one with a non-finite endpoint, yields an empty path.
/// A zero-length segment yields its containing cell when inside the grid.
pub fn compute_segment_path(shape: GridShape, p1: Point, p2: Point) -> Path {
    if !p1.is_finite() || !p2.is_finite() {
        return Vec::new();
    }

    let setups = [
        AxisSetup::solve(shape.rows, p1.row, p2.row),
        AxisSetup::solve(shape.cols, p1.col, p2.col),
    ];

    // Overall entry/exit as the intersection of both slabs with [0, 1]
    let mut alpha_min = ALPHA_MIN;
    let mut alpha_max = ALPHA_MAX;
    for setup in &setups {
        match setup.alpha_range() {
            Some((lo, hi)) => {
                alpha_min = alpha_min.max(lo);
                alpha_max = alpha_max.min(hi);
            }
            None => {
                log::trace!("Segment {:?} -> {:?} misses the grid", p1, p2);
                return Vec::new();
            }
        }
    }

    if alpha_min >= alpha_max {
        return Vec::new();
    }

    let mut cursors = [
        AxisCursor::new(&setups[0], shape.rows, p1.row, alpha_min),
        AxisCursor::new(&setups[1], shape.cols, p1.col, alpha_min),
    ];

    let mut path = Vec::new();
    let mut previous_alpha = alpha_min;
    while previous_alpha < alpha_max {
        let next_alpha = alpha_max
            .min(cursors[0].candidate())
            .min(cursors[1].candidate());

        if shape.contains(cursors[0].index, cursors[1].index) {
            path.push((cursors[0].index as usize, cursors[1].index as usize));
        }

        // Both axes advance together when a corner is crossed
        for cursor in cursors.iter_mut() {
            cursor.advance_if_crossing(next_alpha);
        }

        // Indices move monotonically, so a cursor that left the grid never
        // returns. Long segments can have a step below the f32 spacing at
        // `next_alpha`, where only the index moves.
        if !cursors.iter().all(AxisCursor::in_grid) {
            break;
        }

        previous_alpha = next_alpha;
    }

    path
}
