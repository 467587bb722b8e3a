//! Lasso selection: trace pointer samples into a filled mask and apply it to
//! an existing segmentation.

use ndarray::{Array2, ArrayView2, Zip};
use serde::{Deserialize, Serialize};

use super::fill::{fill_mask, path_bounds, rasterize_path};
use crate::error::{LassoError, Result};
use crate::geometry::{GridShape, Point, Real};
use crate::raster::{compute_path, resample_polyline};

fn default_closed() -> bool {
    true
}

fn default_fill() -> bool {
    true
}

fn default_spacing() -> Option<Real> {
    Some(1.0)
}

/// Lasso tool settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LassoConfig {
    /// Join the last sample back to the first
    #[serde(default = "default_closed")]
    pub closed: bool,

    /// Fill the enclosed interior
    #[serde(default = "default_fill")]
    pub fill: bool,

    /// Resampling distance in cells, `None` to trace samples as given
    #[serde(default = "default_spacing")]
    pub spacing: Option<Real>,
}

impl Default for LassoConfig {
    fn default() -> Self {
        Self {
            closed: default_closed(),
            fill: default_fill(),
            spacing: default_spacing(),
        }
    }
}

impl LassoConfig {
    pub fn validate(&self) -> Result<()> {
        match self.spacing {
            Some(spacing) if !spacing.is_finite() || spacing <= 0.0 => {
                Err(LassoError::InvalidSpacing(spacing))
            }
            _ => Ok(()),
        }
    }
}

/// How a lasso mask modifies a segmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Set selected cells
    Add,
    /// Clear selected cells
    Remove,
}

/// Lasso result with metadata.
#[derive(Debug, Clone)]
pub struct LassoResult {
    /// Selection mask (`true` = selected)
    pub mask: Array2<bool>,
    /// Bounds of the traced boundary as (row, col, height, width)
    pub bounds: Option<(usize, usize, usize, usize)>,
    /// Number of selected cells
    pub pixel_count: usize,
}

/// Trace pointer samples into a selection mask.
///
/// # Arguments
/// * `shape` - Grid the samples were drawn over
/// * `samples` - Pointer samples as (row, col) in index space
/// * `config` - Closing, filling and resampling settings
///
/// # Returns
/// Selection mask of `shape`
pub fn trace_lasso(
    shape: GridShape,
    samples: &[Point],
    config: &LassoConfig,
) -> Result<Array2<bool>> {
    Ok(trace_lasso_detailed(shape, samples, config)?.mask)
}

/// Trace pointer samples into a selection mask with detailed results.
pub fn trace_lasso_detailed(
    shape: GridShape,
    samples: &[Point],
    config: &LassoConfig,
) -> Result<LassoResult> {
    config.validate()?;

    let line = match config.spacing {
        Some(spacing) => resample_polyline(samples, spacing)?,
        None => samples.to_vec(),
    };

    let path = compute_path(shape, &line, config.closed)?;

    let mask = if config.fill {
        fill_mask(shape, &path)?
    } else {
        rasterize_path(shape, &path)?
    };

    let pixel_count = mask.iter().filter(|&&v| v).count();
    let bounds = path_bounds(&path)
        .map(|(r0, c0, r1, c1)| (r0, c0, r1 - r0 + 1, c1 - c0 + 1));

    log::debug!(
        "Lasso of {} samples ({} resampled) selected {} cells",
        samples.len(),
        line.len(),
        pixel_count
    );

    Ok(LassoResult {
        mask,
        bounds,
        pixel_count,
    })
}

/// Add the selected cells to, or remove them from, a segmentation mask.
///
/// # Returns
/// Number of cells whose value changed
pub fn apply_mask(
    target: &mut Array2<bool>,
    mask: ArrayView2<bool>,
    mode: EditMode,
) -> Result<usize> {
    if target.dim() != mask.dim() {
        return Err(LassoError::ShapeMismatch {
            expected: target.dim(),
            actual: mask.dim(),
        });
    }

    let value = mode == EditMode::Add;
    let mut changed = 0;
    Zip::from(target).and(&mask).for_each(|cell, &selected| {
        if selected && *cell != value {
            *cell = value;
            changed += 1;
        }
    });

    Ok(changed)
}
