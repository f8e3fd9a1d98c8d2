//! Page grid geometry: cells, pixel points, and conversions between them.
//!
//! Conversions snap to cell granularity, so `grid_to_pixel(pixel_to_grid(p))`
//! is the top-left corner of the cell containing `p`, not `p` itself.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, CELL_SIZE_PX, MAX_GRID_CELLS};

/// A grid cell address. Signed so that search candidates may fall off the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCell {
    pub row: i32,
    pub col: i32,
}

impl GridCell {
    #[must_use]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// A point in canvas pixel space, relative to the page origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle of cells: `[row, row + row_span) × [col, col + col_span)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridRect {
    pub anchor: GridCell,
    pub row_span: i32,
    pub col_span: i32,
}

impl GridRect {
    #[must_use]
    pub fn new(anchor: GridCell, row_span: i32, col_span: i32) -> Self {
        Self { anchor, row_span, col_span }
    }

    /// Exclusive bottom row, saturating at the `i32` range.
    #[must_use]
    pub fn row_end(&self) -> i32 {
        self.anchor.row.saturating_add(self.row_span)
    }

    /// Exclusive right column, saturating at the `i32` range.
    #[must_use]
    pub fn col_end(&self) -> i32 {
        self.anchor.col.saturating_add(self.col_span)
    }

    /// Whether two rectangles share at least one cell. Empty rectangles never intersect.
    #[must_use]
    pub fn intersects(&self, other: &GridRect) -> bool {
        if self.row_span <= 0 || self.col_span <= 0 || other.row_span <= 0 || other.col_span <= 0 {
            return false;
        }
        self.anchor.row < other.row_end()
            && other.anchor.row < self.row_end()
            && self.anchor.col < other.col_end()
            && other.anchor.col < self.col_end()
    }

    /// Iterate every covered cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (self.anchor.row..self.row_end())
            .flat_map(move |row| (self.anchor.col..self.col_end()).map(move |col| GridCell { row, col }))
    }
}

/// Fixed page geometry for one canvas session.
///
/// `cols = floor(canvas_width / cell_size)` and likewise for rows; a partial
/// cell at the right or bottom edge is not addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    cell_size: u32,
    canvas_width: u32,
    canvas_height: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { cell_size: CELL_SIZE_PX, canvas_width: CANVAS_WIDTH_PX, canvas_height: CANVAS_HEIGHT_PX }
    }
}

impl GridSpec {
    /// Build a grid for the given page. Returns `None` when the cell size is
    /// zero, the page cannot hold a single whole cell on either axis, or the
    /// page holds more than [`MAX_GRID_CELLS`] cells.
    #[must_use]
    pub fn new(cell_size: u32, canvas_width: u32, canvas_height: u32) -> Option<Self> {
        if cell_size == 0 || canvas_width < cell_size || canvas_height < cell_size {
            return None;
        }
        let cells = u64::from(canvas_width / cell_size) * u64::from(canvas_height / cell_size);
        if cells > u64::from(MAX_GRID_CELLS) {
            return None;
        }
        Some(Self { cell_size, canvas_width, canvas_height })
    }

    /// Cell edge length in pixels.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        f64::from(self.cell_size)
    }

    #[must_use]
    pub fn canvas_width(&self) -> f64 {
        f64::from(self.canvas_width)
    }

    #[must_use]
    pub fn canvas_height(&self) -> f64 {
        f64::from(self.canvas_height)
    }

    /// Number of whole columns. Bounded by [`MAX_GRID_CELLS`], so it fits `i32`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn cols(&self) -> i32 {
        (self.canvas_width / self.cell_size) as i32
    }

    /// Number of whole rows.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn rows(&self) -> i32 {
        (self.canvas_height / self.cell_size) as i32
    }

    /// Snap a pixel position to the cell containing it. No bounds clamping.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn pixel_to_grid(&self, x: f64, y: f64) -> GridCell {
        let cell = self.cell_size();
        GridCell { row: (y / cell).floor() as i32, col: (x / cell).floor() as i32 }
    }

    /// Top-left pixel corner of a cell.
    #[must_use]
    pub fn grid_to_pixel(&self, cell: GridCell) -> PixelPoint {
        let size = self.cell_size();
        PixelPoint { x: f64::from(cell.col) * size, y: f64::from(cell.row) * size }
    }

    /// Number of cells needed to cover `px` pixels, rounding up.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn cells_for(&self, px: f64) -> i32 {
        (px / self.cell_size()).ceil() as i32
    }

    /// Whether a rectangle lies entirely on the page. A span that runs past the
    /// `i32` range saturates and is rejected like any other overflow.
    #[must_use]
    pub fn contains(&self, rect: &GridRect) -> bool {
        rect.anchor.row >= 0
            && rect.anchor.col >= 0
            && rect.row_end() <= self.rows()
            && rect.col_end() <= self.cols()
    }

    /// Whether a pixel point lies on the page.
    #[must_use]
    pub fn contains_point(&self, point: PixelPoint) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x < self.canvas_width() && point.y < self.canvas_height()
    }
}
