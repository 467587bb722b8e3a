//! Polyline tracing: chains per-segment traversals into one boundary path.

use rayon::prelude::*;

use super::segment::compute_segment_path;
use crate::error::{LassoError, Result};
use crate::geometry::{GridShape, Path, Point, Real};

/// Upper bound on the points a single resampling may produce.
pub const MAX_RESAMPLED_POINTS: usize = 1 << 24;

/// Trace a polyline into the ordered cells it crosses.
///
/// Consecutive point pairs form the segments; with `closed` the last point is
/// joined back to the first. Per-segment paths are concatenated in segment
/// order and shared junction cells are kept, so callers counting cells must
/// deduplicate themselves.
///
/// # Errors
/// * [`LassoError::InvalidGridShape`] if either dimension is zero
/// * [`LassoError::TooFewPoints`] for fewer than 2 points
/// * [`LassoError::NonFinitePoint`] if a coordinate is NaN or infinite
pub fn compute_path(shape: GridShape, points: &[Point], closed: bool) -> Result<Path> {
    shape.validate()?;

    if points.len() < 2 {
        return Err(LassoError::TooFewPoints {
            count: points.len(),
        });
    }

    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(LassoError::NonFinitePoint { index });
    }

    let mut segments: Vec<(Point, Point)> = points.windows(2).map(|w| (w[0], w[1])).collect();
    if closed {
        segments.push((points[points.len() - 1], points[0]));
    }

    // Segments are independent; collect keeps them in order
    let pieces: Vec<Path> = segments
        .par_iter()
        .map(|&(p1, p2)| compute_segment_path(shape, p1, p2))
        .collect();

    let path = pieces.concat();

    log::debug!(
        "Traced {} segments ({}) into {} cells on {}x{} grid",
        segments.len(),
        if closed { "closed" } else { "open" },
        path.len(),
        shape.rows,
        shape.cols
    );

    Ok(path)
}

/// Resample pointer samples at a fixed spacing.
///
/// The line starts at the first sample. Every later sample at distance `d`
/// from the last recorded point adds `floor(d / spacing)` evenly spaced points
/// towards it; samples closer than `spacing` are skipped. The remainder of a
/// move shorter than one spacing is dropped, so the last recorded point need
/// not coincide with the last sample.
///
/// # Errors
/// * [`LassoError::InvalidSpacing`] unless `spacing` is finite and positive
/// * [`LassoError::NonFinitePoint`] if a sample is NaN or infinite
/// * [`LassoError::TooManyPoints`] if the line would exceed
///   [`MAX_RESAMPLED_POINTS`]
pub fn resample_polyline(samples: &[Point], spacing: Real) -> Result<Vec<Point>> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(LassoError::InvalidSpacing(spacing));
    }

    if let Some(index) = samples.iter().position(|p| !p.is_finite()) {
        return Err(LassoError::NonFinitePoint { index });
    }

    let Some(&first) = samples.first() else {
        return Ok(Vec::new());
    };

    let mut line = vec![first];
    for sample in &samples[1..] {
        let last = line[line.len() - 1];
        let distance = last.distance(sample);
        if distance < spacing {
            continue;
        }

        let n = (distance / spacing).floor();
        if !n.is_finite() || n > (MAX_RESAMPLED_POINTS - line.len()) as Real {
            return Err(LassoError::TooManyPoints {
                spacing,
                limit: MAX_RESAMPLED_POINTS,
            });
        }
        let n = n as usize;
        let d_row = spacing * (sample.row - last.row) / distance;
        let d_col = spacing * (sample.col - last.col) / distance;

        for k in 1..=n {
            let k = k as Real;
            line.push(Point::new(last.row + k * d_row, last.col + k * d_col));
        }
    }

    Ok(line)
}
