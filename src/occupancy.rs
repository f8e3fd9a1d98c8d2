//! Occupancy map: which grid cells are reserved by at least one item.
//!
//! The map is derived state. It is rebuilt from scratch from the item list
//! whenever the store changes and is never persisted. Item rectangles that
//! run past the page edge are clipped; the overflow cells are dropped.

#[cfg(test)]
#[path = "occupancy_test.rs"]
mod occupancy_test;

use std::ops::Range;

use crate::coords::{GridRect, GridSpec};
use crate::item::CanvasItem;

/// Dense `rows × cols` boolean matrix, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    rows: i32,
    cols: i32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// All cells free.
    #[must_use]
    pub fn empty(grid: &GridSpec) -> Self {
        let rows = grid.rows();
        let cols = grid.cols();
        let len = usize::try_from(rows * cols).unwrap_or(0);
        Self { rows, cols, cells: vec![false; len] }
    }

    /// Full rebuild from `items`. Hidden items count only when `include_hidden` is set.
    #[must_use]
    pub fn build<'a>(grid: &GridSpec, items: impl IntoIterator<Item = &'a CanvasItem>, include_hidden: bool) -> Self {
        let mut occupancy = Self::empty(grid);
        for item in items {
            if include_hidden || item.is_visible() {
                occupancy.mark(&item.footprint());
            }
        }
        occupancy
    }

    /// Rebuild, skipping the item with id `exclude`.
    #[must_use]
    pub fn build_excluding(grid: &GridSpec, items: &[CanvasItem], exclude: &str, include_hidden: bool) -> Self {
        Self::build(grid, items.iter().filter(|item| item.id != exclude), include_hidden)
    }

    /// Mark every on-page cell of `rect` as occupied.
    pub fn mark(&mut self, rect: &GridRect) {
        let (rows, cols) = self.clip(rect);
        for row in rows {
            for col in cols.clone() {
                if let Some(index) = self.index(row, col) {
                    self.cells[index] = true;
                }
            }
        }
    }

    /// Whether a single cell is occupied. Off-page cells read as free.
    #[must_use]
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some_and(|index| self.cells[index])
    }

    /// Whether no covered on-page cell of `rect` is occupied. Does not check bounds.
    #[must_use]
    pub fn is_free(&self, rect: &GridRect) -> bool {
        let (mut rows, cols) = self.clip(rect);
        rows.all(|row| cols.clone().all(|col| !self.is_occupied(row, col)))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// One line per row, `#` for occupied and `.` for free.
    #[must_use]
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + usize::try_from(self.rows).unwrap_or(0));
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(if self.is_occupied(row, col) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    /// Row and column ranges of `rect` that fall on the page.
    fn clip(&self, rect: &GridRect) -> (Range<i32>, Range<i32>) {
        (
            rect.anchor.row.max(0)..rect.row_end().min(self.rows),
            rect.anchor.col.max(0)..rect.col_end().min(self.cols),
        )
    }

    #[allow(clippy::cast_sign_loss)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row * self.cols + col) as usize)
    }
}
