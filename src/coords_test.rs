#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{GRID_COLS, GRID_ROWS};

// =============================================================
// GridSpec dimensions
// =============================================================

#[test]
fn default_grid_is_thirty_by_forty_two() {
    let grid = GridSpec::default();
    assert_eq!(grid.cols(), 30);
    assert_eq!(grid.rows(), 42);
    assert_eq!(grid.cols(), GRID_COLS);
    assert_eq!(grid.rows(), GRID_ROWS);
    assert_eq!(grid.cell_size(), 20.0);
}

#[test]
fn partial_cells_are_floored_away() {
    let grid = GridSpec::new(20, 615, 839).unwrap();
    assert_eq!(grid.cols(), 30);
    assert_eq!(grid.rows(), 41);
}

#[test]
fn zero_cell_size_is_rejected() {
    assert!(GridSpec::new(0, 600, 840).is_none());
}

#[test]
fn page_smaller_than_a_cell_is_rejected() {
    assert!(GridSpec::new(20, 19, 840).is_none());
    assert!(GridSpec::new(20, 600, 10).is_none());
}

// =============================================================
// pixel_to_grid / grid_to_pixel
// =============================================================

#[test]
fn pixel_to_grid_floors_both_axes() {
    let grid = GridSpec::default();
    assert_eq!(grid.pixel_to_grid(0.0, 0.0), GridCell::new(0, 0));
    assert_eq!(grid.pixel_to_grid(19.9, 39.9), GridCell::new(1, 0));
    assert_eq!(grid.pixel_to_grid(125.0, 61.0), GridCell::new(3, 6));
}

#[test]
fn pixel_to_grid_does_not_clamp() {
    let grid = GridSpec::default();
    assert_eq!(grid.pixel_to_grid(-1.0, -21.0), GridCell::new(-2, -1));
    assert_eq!(grid.pixel_to_grid(10_000.0, 0.0), GridCell::new(0, 500));
}

#[test]
fn grid_to_pixel_returns_cell_corner() {
    let grid = GridSpec::default();
    assert_eq!(grid.grid_to_pixel(GridCell::new(2, 3)), PixelPoint::new(60.0, 40.0));
}

#[test]
fn round_trip_snaps_to_cell_corner() {
    let grid = GridSpec::default();
    let snapped = grid.grid_to_pixel(grid.pixel_to_grid(47.0, 33.0));
    assert_eq!(snapped, PixelPoint::new(40.0, 20.0));
}

#[test]
fn cells_for_rounds_up() {
    let grid = GridSpec::default();
    assert_eq!(grid.cells_for(0.0), 0);
    assert_eq!(grid.cells_for(20.0), 1);
    assert_eq!(grid.cells_for(20.5), 2);
    assert_eq!(grid.cells_for(119.0), 6);
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn contains_accepts_full_page() {
    let grid = GridSpec::default();
    assert!(grid.contains(&GridRect::new(GridCell::new(0, 0), 42, 30)));
}

#[test]
fn contains_rejects_one_row_past_the_bottom() {
    let grid = GridSpec::default();
    assert!(!grid.contains(&GridRect::new(GridCell::new(41, 0), 2, 1)));
    assert!(!grid.contains(&GridRect::new(GridCell::new(0, -1), 1, 1)));
}

#[test]
fn contains_point_excludes_far_edges() {
    let grid = GridSpec::default();
    assert!(grid.contains_point(PixelPoint::new(0.0, 0.0)));
    assert!(grid.contains_point(PixelPoint::new(599.9, 839.9)));
    assert!(!grid.contains_point(PixelPoint::new(600.0, 10.0)));
    assert!(!grid.contains_point(PixelPoint::new(10.0, -0.1)));
}

// =============================================================
// GridRect
// =============================================================

#[test]
fn rects_sharing_a_cell_intersect() {
    let a = GridRect::new(GridCell::new(0, 0), 2, 6);
    let b = GridRect::new(GridCell::new(1, 5), 1, 1);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn touching_rects_do_not_intersect() {
    let a = GridRect::new(GridCell::new(0, 0), 2, 6);
    let below = GridRect::new(GridCell::new(2, 0), 2, 6);
    let right = GridRect::new(GridCell::new(0, 6), 2, 6);
    assert!(!a.intersects(&below));
    assert!(!a.intersects(&right));
}

#[test]
fn empty_rect_never_intersects() {
    let a = GridRect::new(GridCell::new(0, 0), 0, 6);
    let b = GridRect::new(GridCell::new(0, 0), 2, 6);
    assert!(!a.intersects(&b));
}

#[test]
fn cells_iterates_row_major() {
    let rect = GridRect::new(GridCell::new(1, 2), 2, 2);
    let cells: Vec<GridCell> = rect.cells().collect();
    assert_eq!(
        cells,
        vec![GridCell::new(1, 2), GridCell::new(1, 3), GridCell::new(2, 2), GridCell::new(2, 3)]
    );
}

// =============================================================
// Overflow
// =============================================================

#[test]
fn rect_ends_saturate_instead_of_overflowing() {
    let rect = GridRect::new(GridCell::new(1, 5), i32::MAX, i32::MAX);
    assert_eq!(rect.row_end(), i32::MAX);
    assert_eq!(rect.col_end(), i32::MAX);
    assert!(!GridSpec::default().contains(&rect));
    assert!(!GridSpec::default().contains(&GridRect::new(GridCell::new(0, 0), 1, i32::MAX)));
}

#[test]
fn saturated_rect_still_intersects() {
    let huge = GridRect::new(GridCell::new(0, 0), i32::MAX, 1);
    assert!(huge.intersects(&GridRect::new(GridCell::new(1000, 0), 1, 1)));
}

#[test]
fn grids_too_large_to_index_are_rejected() {
    assert!(GridSpec::new(1, 100_000, 100_000).is_none());
    assert!(GridSpec::new(1, 3_000_000_000, 10).is_none());
    let largest = GridSpec::new(1, 2048, 2048).unwrap();
    assert_eq!((largest.rows(), largest.cols()), (2048, 2048));
}
