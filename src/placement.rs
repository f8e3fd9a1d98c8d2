//! Placement resolver: decides the anchor cell for a dropped or moved item.
//!
//! DESIGN
//! ======
//! Resolution never fails. The requested cell is taken as-is when its area is
//! free; otherwise an expanding square ring (Chebyshev distance 1, 2, ...) is
//! traced around it and the first free candidate wins; otherwise a row-major
//! scan of the whole page; otherwise the origin, accepting an overlap so that
//! the editor never blocks.
//!
//! Candidate order is fixed so that identical occupancy and start cell always
//! produce the same answer: for each ring distance `d` and each offset in
//! `-d..=d`, test top `(r-d, c+o)`, bottom `(r+d, c+o)`, left `(r+o, c-d)`,
//! right `(r+o, c+d)`.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::coords::{GridCell, GridRect, GridSpec};
use crate::item::CanvasItem;
use crate::occupancy::OccupancyGrid;

/// Read-only view over one store snapshot used to answer placement queries.
pub struct Resolver<'a> {
    grid: &'a GridSpec,
    items: &'a [CanvasItem],
    occupancy: &'a OccupancyGrid,
    include_hidden: bool,
}

impl<'a> Resolver<'a> {
    /// `occupancy` must have been built from `items` with the same `include_hidden` policy.
    #[must_use]
    pub fn new(grid: &'a GridSpec, items: &'a [CanvasItem], occupancy: &'a OccupancyGrid, include_hidden: bool) -> Self {
        Self { grid, items, occupancy, include_hidden }
    }

    /// Whether a `row_span × col_span` area anchored at `(row, col)` is on the page
    /// and free. With `exclude_id`, that item's own cells do not count as occupied.
    #[must_use]
    pub fn is_area_available(&self, row: i32, col: i32, row_span: i32, col_span: i32, exclude_id: Option<&str>) -> bool {
        let occupancy = self.occupancy_for(exclude_id);
        self.area_free(&occupancy, GridRect::new(GridCell::new(row, col), row_span, col_span))
    }

    /// First free anchor in row-major order from `(0, 0)`, or `None` if the page is full
    /// for this footprint. Uses the full occupancy with no exclusion.
    #[must_use]
    pub fn find_available_position(&self, col_span: i32, row_span: i32) -> Option<GridCell> {
        (0..self.grid.rows())
            .flat_map(|row| (0..self.grid.cols()).map(move |col| GridCell::new(row, col)))
            .find(|&cell| self.area_free(self.occupancy, GridRect::new(cell, row_span, col_span)))
    }

    /// Nearest free anchor to `(start_row, start_col)` by ring search. Always returns a cell.
    #[must_use]
    pub fn find_nearest_available_position(
        &self,
        start_row: i32,
        start_col: i32,
        row_span: i32,
        col_span: i32,
        exclude_id: Option<&str>,
    ) -> GridCell {
        let occupancy = self.occupancy_for(exclude_id);
        let fits = |row: i32, col: i32| self.area_free(&occupancy, GridRect::new(GridCell::new(row, col), row_span, col_span));

        if fits(start_row, start_col) {
            return GridCell::new(start_row, start_col);
        }

        let max_distance = self.grid.rows().max(self.grid.cols());
        for distance in 1..max_distance {
            for offset in -distance..=distance {
                // Saturated candidates are far off the page and simply fail to fit.
                let candidates = [
                    (start_row.saturating_sub(distance), start_col.saturating_add(offset)),
                    (start_row.saturating_add(distance), start_col.saturating_add(offset)),
                    (start_row.saturating_add(offset), start_col.saturating_sub(distance)),
                    (start_row.saturating_add(offset), start_col.saturating_add(distance)),
                ];
                if let Some(&(row, col)) = candidates.iter().find(|&&(row, col)| fits(row, col)) {
                    debug!(start_row, start_col, row, col, distance, "ring search found free anchor");
                    return GridCell::new(row, col);
                }
            }
        }

        // Reached when the start lies so far off the page that no ring touches a free anchor.
        if let Some(cell) = self.find_available_position(col_span, row_span) {
            debug!(start_row, start_col, row = cell.row, col = cell.col, "ring search exhausted; full scan found anchor");
            return cell;
        }

        warn!(start_row, start_col, row_span, col_span, "no free area on page; placing at origin");
        GridCell::new(0, 0)
    }

    fn occupancy_for(&self, exclude_id: Option<&str>) -> Cow<'a, OccupancyGrid> {
        match exclude_id {
            Some(id) => Cow::Owned(OccupancyGrid::build_excluding(self.grid, self.items, id, self.include_hidden)),
            None => Cow::Borrowed(self.occupancy),
        }
    }

    fn area_free(&self, occupancy: &OccupancyGrid, rect: GridRect) -> bool {
        self.grid.contains(&rect) && occupancy.is_free(&rect)
    }
}
