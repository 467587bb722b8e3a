//! End-to-end tracing and filling properties.

use std::collections::{BTreeSet, VecDeque};

use ndarray::Array2;
use quickseg_rust::{
    compute_path, compute_segment_path, fill_mask, trace_lasso, GridShape, LassoConfig, LassoError,
    Path, Point,
};

fn shape(rows: usize, cols: usize) -> GridShape {
    GridShape::new(rows, cols).unwrap()
}

fn count(mask: &Array2<bool>) -> usize {
    mask.iter().filter(|&&v| v).count()
}

fn rasterize(shape: GridShape, path: &Path) -> Array2<bool> {
    let mut mask = Array2::from_elem((shape.rows, shape.cols), false);
    for &(i, j) in path {
        mask[[i, j]] = true;
    }
    mask
}

/// Whole-grid flood from the border, independent of the crate's windowed fill.
fn reference_fill(boundary: &Array2<bool>) -> Array2<bool> {
    let (h, w) = boundary.dim();
    let mut outside = Array2::from_elem((h, w), false);
    let mut queue = VecDeque::new();
    for i in 0..h {
        for j in 0..w {
            let on_border = i == 0 || j == 0 || i == h - 1 || j == w - 1;
            if on_border && !boundary[[i, j]] {
                outside[[i, j]] = true;
                queue.push_back((i, j));
            }
        }
    }
    while let Some((i, j)) = queue.pop_front() {
        let neighbors = [
            (i.wrapping_sub(1), j),
            (i + 1, j),
            (i, j.wrapping_sub(1)),
            (i, j + 1),
        ];
        for (ni, nj) in neighbors {
            if ni < h && nj < w && !boundary[[ni, nj]] && !outside[[ni, nj]] {
                outside[[ni, nj]] = true;
                queue.push_back((ni, nj));
            }
        }
    }
    Array2::from_shape_fn((h, w), |(i, j)| boundary[[i, j]] || !outside[[i, j]])
}

fn pentagon() -> Vec<Point> {
    vec![
        Point::new(2.2, 9.7),
        Point::new(8.9, 17.4),
        Point::new(17.1, 13.8),
        Point::new(16.4, 4.1),
        Point::new(7.3, 1.6),
    ]
}

#[test_log::test]
fn test_deterministic_output() {
    let first = compute_path(shape(20, 20), &pentagon(), true).unwrap();
    for _ in 0..20 {
        assert_eq!(compute_path(shape(20, 20), &pentagon(), true).unwrap(), first);
    }
}

#[test_log::test]
fn test_out_of_bounds_segment() {
    let path = compute_segment_path(shape(8, 8), Point::new(-10.0, -10.0), Point::new(-5.0, -5.0));
    assert!(path.is_empty());
}

#[test_log::test]
fn test_vertical_segment_ends_in_endpoint_cell() {
    let path = compute_segment_path(shape(8, 8), Point::new(0.2, 2.3), Point::new(5.7, 2.3));
    assert_eq!(
        path,
        vec![(0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2)]
    );
}

#[test_log::test]
fn test_endpoint_symmetry() {
    let points = pentagon();
    for pair in points.windows(2) {
        let forward: BTreeSet<_> = compute_segment_path(shape(20, 20), pair[0], pair[1])
            .into_iter()
            .collect();
        let backward: BTreeSet<_> = compute_segment_path(shape(20, 20), pair[1], pair[0])
            .into_iter()
            .collect();
        assert_eq!(forward, backward);
    }
}

#[test_log::test]
fn test_every_cell_in_bounds() {
    let points = vec![
        Point::new(-3.5, 4.2),
        Point::new(9.8, -2.1),
        Point::new(12.6, 14.9),
        Point::new(3.3, 11.0),
    ];
    let grid = shape(10, 10);
    let path = compute_path(grid, &points, true).unwrap();
    assert!(!path.is_empty());
    assert!(path.iter().all(|&(i, j)| i < 10 && j < 10));
}

#[test_log::test]
fn test_closed_square_area() {
    let grid = shape(8, 8);
    let square = vec![
        Point::new(1.0, 1.0),
        Point::new(1.0, 5.0),
        Point::new(5.0, 5.0),
        Point::new(5.0, 1.0),
    ];
    let path = compute_path(grid, &square, true).unwrap();
    let boundary = rasterize(grid, &path);
    let mask = fill_mask(grid, &path).unwrap();

    assert_eq!(count(&boundary), 16);
    assert_eq!(mask, reference_fill(&boundary));
    // 16 boundary cells plus the 3x3 interior
    assert_eq!(count(&mask), 25);
}

#[test_log::test]
fn test_pentagon_matches_reference_fill() {
    let grid = shape(20, 20);
    let path = compute_path(grid, &pentagon(), true).unwrap();
    let mask = fill_mask(grid, &path).unwrap();
    let boundary = rasterize(grid, &path);
    assert_eq!(mask, reference_fill(&boundary));
    assert!(count(&mask) > count(&boundary));
}

#[test_log::test]
fn test_open_polyline_fill_adds_nothing() {
    let grid = shape(12, 12);
    let points = vec![
        Point::new(1.4, 1.1),
        Point::new(9.2, 3.6),
        Point::new(4.7, 10.3),
    ];
    let path = compute_path(grid, &points, false).unwrap();
    assert_eq!(fill_mask(grid, &path).unwrap(), rasterize(grid, &path));
}

#[test_log::test]
fn test_invalid_input() {
    let points = pentagon();
    let err = compute_path(GridShape { rows: 0, cols: 5 }, &points, false).unwrap_err();
    assert!(matches!(err, LassoError::InvalidGridShape { .. }));

    let err = compute_path(shape(8, 8), &[Point::new(1.0, 1.0)], false).unwrap_err();
    assert_eq!(err, LassoError::TooFewPoints { count: 1 });

    assert!(GridShape::from_signed(0, 5).is_err());
}

#[test_log::test]
fn test_lasso_from_pointer_samples() {
    let grid = shape(20, 20);
    let mask = trace_lasso(grid, &pentagon(), &LassoConfig::default()).unwrap();
    assert_eq!(mask.dim(), (20, 20));
    // Center of the pentagon is inside, corners of the grid are not
    assert!(mask[[10, 9]]);
    assert!(!mask[[0, 0]]);
    assert!(!mask[[19, 19]]);
}
