//! Interior fill of traced boundaries.
//!
//! A cell is interior when it is background and cannot be reached from the
//! grid border through 4-connected background cells. Boundary cells act as
//! walls; 4-connectivity keeps one-cell-wide diagonal walls from leaking
//! through their corners.

use std::collections::VecDeque;

use ndarray::{s, Array2, ArrayView2, ArrayViewMut2};

use crate::error::{LassoError, Result};
use crate::geometry::{GridShape, Path};

/// 4-connected neighborhood (row, col offsets).
const NEIGHBORS_4: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Rasterize a path onto a blank mask (`true` at every path cell).
///
/// # Errors
/// * [`LassoError::InvalidGridShape`] if either dimension is zero
/// * [`LassoError::CellOutOfBounds`] if a cell lies outside the grid
pub fn rasterize_path(shape: GridShape, path: &Path) -> Result<Array2<bool>> {
    shape.validate()?;

    let mut mask = Array2::<bool>::from_elem(shape.dim2(), false);
    for &(row, col) in path {
        if row >= shape.rows || col >= shape.cols {
            return Err(LassoError::CellOutOfBounds { row, col });
        }
        mask[[row, col]] = true;
    }

    Ok(mask)
}

/// Fill the region enclosed by a traced path.
///
/// Returns the union of the path cells and every background cell not reachable
/// from the grid border. A path enclosing no area gives back its plain
/// rasterization. Only the bounding box of the path grown by one cell is
/// flooded; everything outside it is border-reachable background anyway.
///
/// # Errors
/// Same as [`rasterize_path`].
pub fn fill_mask(shape: GridShape, path: &Path) -> Result<Array2<bool>> {
    let mut mask = rasterize_path(shape, path)?;

    let Some((min_row, min_col, max_row, max_col)) = path_bounds(path) else {
        return Ok(mask);
    };

    let row_start = min_row.saturating_sub(1);
    let col_start = min_col.saturating_sub(1);
    let row_end = (max_row + 2).min(shape.rows);
    let col_end = (max_col + 2).min(shape.cols);

    let mut window = mask.slice_mut(s![row_start..row_end, col_start..col_end]);
    let interior = fill_in_place(&mut window);

    log::debug!(
        "Filled {} interior cells inside {}x{} window around {} path cells",
        interior,
        row_end - row_start,
        col_end - col_start,
        path.len()
    );

    Ok(mask)
}

/// Fill the holes of an already rasterized boundary grid.
///
/// Floods the whole grid, so cost scales with the grid's cell count.
pub fn fill_holes(boundary: ArrayView2<bool>) -> Array2<bool> {
    let mut mask = boundary.to_owned();
    let mut view = mask.view_mut();
    fill_in_place(&mut view);
    mask
}

/// Mark every cell not reachable from the border as `true`. Returns how many
/// cells were added.
fn fill_in_place(mask: &mut ArrayViewMut2<bool>) -> usize {
    let reachable = border_reachable(mask.view());

    let mut added = 0;
    for (cell, &outside) in mask.iter_mut().zip(reachable.iter()) {
        if !*cell && !outside {
            *cell = true;
            added += 1;
        }
    }
    added
}

/// Breadth-first flood of the background starting from every border cell.
fn border_reachable(walls: ArrayView2<bool>) -> Array2<bool> {
    let (height, width) = walls.dim();
    let mut visited = Array2::<bool>::from_elem((height, width), false);

    if height == 0 || width == 0 {
        return visited;
    }

    let mut queue = VecDeque::new();
    let mut seed = |row: usize, col: usize, visited: &mut Array2<bool>| {
        if !walls[[row, col]] && !visited[[row, col]] {
            visited[[row, col]] = true;
            queue.push_back((row, col));
        }
    };

    for col in 0..width {
        seed(0, col, &mut visited);
        seed(height - 1, col, &mut visited);
    }
    for row in 0..height {
        seed(row, 0, &mut visited);
        seed(row, width - 1, &mut visited);
    }

    while let Some((row, col)) = queue.pop_front() {
        for &(dr, dc) in &NEIGHBORS_4 {
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            if nr < 0 || nc < 0 || nr >= height as isize || nc >= width as isize {
                continue;
            }

            let (nr, nc) = (nr as usize, nc as usize);
            if !walls[[nr, nc]] && !visited[[nr, nc]] {
                visited[[nr, nc]] = true;
                queue.push_back((nr, nc));
            }
        }
    }

    visited
}

/// Inclusive bounds `(min_row, min_col, max_row, max_col)` of a path.
pub(crate) fn path_bounds(path: &Path) -> Option<(usize, usize, usize, usize)> {
    let &(first_row, first_col) = path.first()?;
    let bounds = path.iter().fold(
        (first_row, first_col, first_row, first_col),
        |(r0, c0, r1, c1), &(r, c)| (r0.min(r), c0.min(c), r1.max(r), c1.max(c)),
    );
    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::raster::compute_path;

    fn shape8() -> GridShape {
        GridShape::new(8, 8).unwrap()
    }

    fn count(mask: &Array2<bool>) -> usize {
        mask.iter().filter(|&&v| v).count()
    }

    /// Square ring of cells with corners at (top, left) and (bottom, right).
    fn ring(top: usize, left: usize, bottom: usize, right: usize) -> Path {
        let mut path = Vec::new();
        for col in left..=right {
            path.push((top, col));
            path.push((bottom, col));
        }
        for row in top..=bottom {
            path.push((row, left));
            path.push((row, right));
        }
        path
    }

    #[test]
    fn test_rasterize_rejects_out_of_bounds() {
        let err = rasterize_path(shape8(), &vec![(1, 1), (8, 2)]).unwrap_err();
        assert_eq!(err, LassoError::CellOutOfBounds { row: 8, col: 2 });
    }

    #[test]
    fn test_empty_path_gives_empty_mask() {
        let mask = fill_mask(shape8(), &Vec::new()).unwrap();
        assert_eq!(mask.dim(), (8, 8));
        assert_eq!(count(&mask), 0);
    }

    #[test]
    fn test_ring_is_filled() {
        let mask = fill_mask(shape8(), &ring(1, 1, 5, 5)).unwrap();
        assert_eq!(count(&mask), 25);
        for row in 1..=5 {
            for col in 1..=5 {
                assert!(mask[[row, col]]);
            }
        }
        assert!(!mask[[0, 0]]);
        assert!(!mask[[6, 6]]);
    }

    #[test]
    fn test_ring_touching_grid_border() {
        // Whole-grid frame: the window is clamped to the grid
        let mask = fill_mask(GridShape::new(5, 5).unwrap(), &ring(0, 0, 4, 4)).unwrap();
        assert_eq!(count(&mask), 25);
    }

    #[test]
    fn test_gap_leaks_to_background() {
        let mut path = ring(1, 1, 5, 5);
        path.retain(|&cell| cell != (1, 3));
        let mask = fill_mask(shape8(), &path).unwrap();
        assert_eq!(count(&mask), unique_count(&path));
    }

    fn unique_count(path: &Path) -> usize {
        let unique: std::collections::HashSet<_> = path.iter().collect();
        unique.len()
    }

    #[test]
    fn test_diagonal_wall_does_not_leak() {
        let points = vec![
            Point::new(1.0, 1.0),
            Point::new(6.0, 1.0),
            Point::new(6.0, 6.0),
        ];
        let path = compute_path(shape8(), &points, true).unwrap();
        let mask = fill_mask(shape8(), &path).unwrap();
        // Lower triangle of rows 1..=6 including the diagonal
        assert_eq!(count(&mask), 21);
        for row in 1..=6 {
            for col in 1..=row {
                assert!(mask[[row, col]], "({}, {}) not filled", row, col);
            }
        }
        assert!(!mask[[2, 3]]);
    }

    #[test]
    fn test_fill_holes_matches_fill_mask() {
        let path = ring(2, 1, 6, 4);
        let boundary = rasterize_path(shape8(), &path).unwrap();
        assert_eq!(fill_holes(boundary.view()), fill_mask(shape8(), &path).unwrap());
    }

    #[test]
    fn test_path_bounds() {
        assert_eq!(path_bounds(&vec![(3, 1), (1, 4), (2, 2)]), Some((1, 1, 3, 4)));
        assert_eq!(path_bounds(&Vec::new()), None);
    }
}
