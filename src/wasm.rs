//! WebAssembly exports for QuickSeg lasso tracing.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! ## Buffer Layout
//!
//! - Points are flat `f32` arrays of interleaved `(row, col)` pairs
//! - Paths are flat `u32` arrays of interleaved `(row, col)` cell indices
//! - Masks are flat row-major `u8` arrays (255 = selected, 0 = not selected)

use wasm_bindgen::prelude::*;

use crate::error::LassoError;
use crate::geometry::{GridShape, Point};
use crate::raster::compute_path;
use crate::selection::{trace_lasso, LassoConfig};

fn to_js(err: LassoError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn points_from_flat(coords: &[f32]) -> Result<Vec<Point>, JsValue> {
    if coords.len() % 2 != 0 {
        return Err(JsValue::from_str("coords must hold (row, col) pairs"));
    }
    Ok(coords.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect())
}

// ============================================================================
// Path Tracing
// ============================================================================

/// Trace a polyline into the cells it crosses.
///
/// # Arguments
/// * `rows` - Grid height in cells
/// * `cols` - Grid width in cells
/// * `coords` - Interleaved (row, col) points, at least 2
/// * `closed` - Join the last point back to the first
///
/// # Returns
/// Interleaved (row, col) cell indices
#[wasm_bindgen]
pub fn compute_path_wasm(
    rows: usize,
    cols: usize,
    coords: &[f32],
    closed: bool,
) -> Result<Vec<u32>, JsValue> {
    let shape = GridShape::new(rows, cols).map_err(to_js)?;
    let points = points_from_flat(coords)?;
    let path = compute_path(shape, &points, closed).map_err(to_js)?;

    Ok(path
        .into_iter()
        .flat_map(|(i, j)| [i as u32, j as u32])
        .collect())
}

// ============================================================================
// Lasso Selection
// ============================================================================

/// Trace pointer samples into a lasso selection mask.
///
/// # Arguments
/// * `rows` - Grid height in cells
/// * `cols` - Grid width in cells
/// * `coords` - Interleaved (row, col) pointer samples
/// * `closed` - Join the last sample back to the first
/// * `fill` - Fill the enclosed interior
/// * `spacing` - Resampling distance in cells, or undefined to trace as given
///
/// # Returns
/// Row-major mask of `rows * cols` bytes
#[wasm_bindgen]
pub fn trace_lasso_wasm(
    rows: usize,
    cols: usize,
    coords: &[f32],
    closed: bool,
    fill: bool,
    spacing: Option<f32>,
) -> Result<Vec<u8>, JsValue> {
    let shape = GridShape::new(rows, cols).map_err(to_js)?;
    let samples = points_from_flat(coords)?;
    let config = LassoConfig {
        closed,
        fill,
        spacing,
    };

    let mask = trace_lasso(shape, &samples, &config).map_err(to_js)?;
    Ok(mask.iter().map(|&v| if v { 255 } else { 0 }).collect())
}
