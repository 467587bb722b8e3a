//! Selection algorithms for segmentation editing.
//!
//! This module turns traced boundaries into selection masks:
//! - **Interior fill**: 4-connected border flood marking enclosed background
//! - **Lasso**: pointer samples to filled mask, then add/remove on a segmentation
//!
//! Masks are `Array2<bool>` in row-major (row, col) order.

pub mod fill;
pub mod lasso;

pub use fill::{fill_holes, fill_mask, rasterize_path};
pub use lasso::{apply_mask, trace_lasso, trace_lasso_detailed, EditMode, LassoConfig, LassoResult};
