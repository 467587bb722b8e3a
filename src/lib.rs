//! QuickSeg Rust Extensions
//!
//! Lasso tracing for segmentation editing on sampled images, implemented in
//! Rust with Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Coordinates
//! Points are `(row, col)` pairs in continuous index space: integer `k` is the
//! center of cell `k`, which covers `[k - 0.5, k + 0.5)`. Grids are
//! `(rows, cols)` and masks are row-major `bool` arrays of that shape.
//!
//! ## Pipeline
//! - **Raster**: polyline → ordered cell path (Siddon traversal per segment)
//! - **Selection**: cell path → filled mask → add/remove on a segmentation
//!
//! Every operation is a pure function of its inputs and may be called
//! concurrently from several threads.

pub mod error;
pub mod geometry;
pub mod raster;
pub mod selection;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{LassoError, Result};
pub use geometry::{Cell, GridShape, Path, Point, Real, EPSILON};
pub use raster::{compute_path, compute_segment_path, resample_polyline};
pub use selection::{apply_mask, fill_holes, fill_mask, trace_lasso, EditMode, LassoConfig};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::LassoError;
    use crate::geometry::{GridShape, Path, Point};
    use crate::selection::LassoConfig;

    impl From<LassoError> for PyErr {
        fn from(err: LassoError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    /// Read an (N, 2) float32 array of (row, col) points.
    fn points_from_array(points: &PyReadonlyArray2<'_, f32>) -> PyResult<Vec<Point>> {
        let view = points.as_array();
        if view.ncols() != 2 {
            return Err(PyValueError::new_err(format!(
                "points must have shape (N, 2), got (N, {})",
                view.ncols()
            )));
        }
        Ok(view.outer_iter().map(|p| Point::new(p[0], p[1])).collect())
    }

    fn split_path(path: Path) -> (Vec<usize>, Vec<usize>) {
        path.into_iter().unzip()
    }

    // ========================================================================
    // Path Tracing
    // ========================================================================

    /// Trace a polyline into the cells it crosses.
    ///
    /// # Arguments
    /// * `shape` - Grid shape (rows, cols)
    /// * `points` - (N, 2) float32 array of (row, col) points, N >= 2
    /// * `closed` - Join the last point back to the first
    ///
    /// # Returns
    /// Tuple of row indices and column indices
    #[pyfunction]
    #[pyo3(signature = (shape, points, closed=false))]
    pub fn compute_path<'py>(
        shape: (i64, i64),
        points: PyReadonlyArray2<'py, f32>,
        closed: bool,
    ) -> PyResult<(Vec<usize>, Vec<usize>)> {
        let shape = GridShape::from_signed(shape.0, shape.1)?;
        let points = points_from_array(&points)?;
        let path = crate::raster::compute_path(shape, &points, closed)?;
        Ok(split_path(path))
    }

    /// Trace a single segment. Exposed for testing.
    #[pyfunction]
    pub fn compute_segment_path(
        shape: (i64, i64),
        p1: (f32, f32),
        p2: (f32, f32),
    ) -> PyResult<(Vec<usize>, Vec<usize>)> {
        let shape = GridShape::from_signed(shape.0, shape.1)?;
        let path = crate::raster::compute_segment_path(shape, p1.into(), p2.into());
        Ok(split_path(path))
    }

    // ========================================================================
    // Masks
    // ========================================================================

    /// Rasterize a traced path and fill its interior.
    #[pyfunction]
    pub fn fill_mask<'py>(
        py: Python<'py>,
        shape: (i64, i64),
        path_i: Vec<usize>,
        path_j: Vec<usize>,
    ) -> PyResult<Bound<'py, PyArray2<bool>>> {
        if path_i.len() != path_j.len() {
            return Err(PyValueError::new_err(format!(
                "path_i and path_j differ in length ({} vs {})",
                path_i.len(),
                path_j.len()
            )));
        }
        let shape = GridShape::from_signed(shape.0, shape.1)?;
        let path: Path = path_i.into_iter().zip(path_j).collect();
        let mask = crate::selection::fill_mask(shape, &path)?;
        Ok(mask.into_pyarray(py))
    }

    /// Trace pointer samples into a lasso selection mask.
    ///
    /// # Arguments
    /// * `shape` - Grid shape (rows, cols)
    /// * `points` - (N, 2) float32 array of (row, col) samples
    /// * `closed` - Join the last sample back to the first
    /// * `fill` - Fill the enclosed interior
    /// * `spacing` - Resampling distance in cells (None traces samples as given)
    #[pyfunction]
    #[pyo3(signature = (shape, points, closed=true, fill=true, spacing=Some(1.0)))]
    pub fn trace_line_on_mask<'py>(
        py: Python<'py>,
        shape: (i64, i64),
        points: PyReadonlyArray2<'py, f32>,
        closed: bool,
        fill: bool,
        spacing: Option<f32>,
    ) -> PyResult<Bound<'py, PyArray2<bool>>> {
        let shape = GridShape::from_signed(shape.0, shape.1)?;
        let samples = points_from_array(&points)?;
        let config = LassoConfig {
            closed,
            fill,
            spacing,
        };
        let mask = crate::selection::trace_lasso(shape, &samples, &config)?;
        Ok(mask.into_pyarray(py))
    }

    /// QuickSeg Rust extension module
    #[pymodule]
    pub fn quickseg_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Path tracing
        m.add_function(wrap_pyfunction!(compute_path, m)?)?;
        m.add_function(wrap_pyfunction!(compute_segment_path, m)?)?;

        // Masks
        m.add_function(wrap_pyfunction!(fill_mask, m)?)?;
        m.add_function(wrap_pyfunction!(trace_line_on_mask, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::quickseg_rust;
