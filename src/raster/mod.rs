//! Grid traversal of polylines drawn over a sampled image.
//!
//! Implements Siddon's ray-tracing algorithm, repurposed to list the cells a
//! polyline crosses instead of accumulating radiological path lengths:
//! - **Axis solver** (`axis.rs`): entry/exit alphas of one segment on one axis
//! - **Segment tracer** (`segment.rs`): walks the plane crossings of both axes
//! - **Polyline compiler** (`polyline.rs`): concatenates segment traces
//!
//! ```text
//! alpha:  0 ──────┬────┬─────┬──────── 1
//!                 row  col   row
//!                 crossings advance the current cell
//! ```
//!
//! All functions are pure and reentrant; the only parallelism is across the
//! independent segments of one polyline.

pub mod axis;
pub mod polyline;
pub mod segment;

pub use axis::AxisSetup;
pub use polyline::{compute_path, resample_polyline};
pub use segment::compute_segment_path;
