//! Footprint and size maintenance: text auto-fit, handle resize, table structure.
//!
//! None of these paths consult the placement resolver. Growing an item in
//! place may overlap its neighbours; only moves are collision-checked.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::consts::{HANDLE_FALLBACK_SIZE_PX, MAX_TEXT_WIDTH_PX, RECTANGLE_FALLBACK_HEIGHT_PX};
use crate::coords::{GridSpec, PixelPoint};
use crate::item::{CanvasItem, Dimension, ElementKind, ItemId};

/// Table row heights accepted from property editors.
const TABLE_ROW_HEIGHT_RANGE: (f64, f64) = (10.0, 200.0);

/// Rows assumed by height recomputation when a table carries no data matrix.
const TABLE_FALLBACK_ROWS: usize = 3;

// =============================================================================
// MEASUREMENT
// =============================================================================

/// A rendered pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

/// Measures the rendered bounding box of an item's content.
///
/// The host normally implements this with real text metrics from its renderer.
pub trait TextMeasurer {
    /// Rendered box, or `None` when the item cannot be measured yet.
    fn measure(&self, item: &CanvasItem, grid: &GridSpec) -> Option<PixelSize>;
}

/// Headless measurer using fixed per-character advance and line height ratios.
///
/// Text wraps at `wrap_width`. Non-text items report their numeric
/// `width`/`height` (or span size when unset) and are unmeasurable when an
/// axis is `"auto"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxTextMeasurer {
    pub wrap_width: f64,
}

impl ApproxTextMeasurer {
    const ADVANCE_RATIO: f64 = 0.5;
    const BOLD_ADVANCE_RATIO: f64 = 0.55;
    const LINE_HEIGHT_RATIO: f64 = 1.5;
    const DEFAULT_FONT_SIZE: f64 = 16.0;

    #[must_use]
    pub fn new(wrap_width: f64) -> Self {
        Self { wrap_width }
    }
}

impl Default for ApproxTextMeasurer {
    fn default() -> Self {
        Self::new(MAX_TEXT_WIDTH_PX)
    }
}

impl TextMeasurer for ApproxTextMeasurer {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, item: &CanvasItem, grid: &GridSpec) -> Option<PixelSize> {
        if !item.kind.is_text() {
            let (width, height) = item.render_size(grid);
            return Some(PixelSize { width: width?, height: height? });
        }

        let font_size = item.font_size.unwrap_or(Self::DEFAULT_FONT_SIZE);
        let bold = item.is_bold.unwrap_or(false) || matches!(item.font_weight.as_deref(), Some("bold" | "semibold"));
        let advance = font_size * if bold { Self::BOLD_ADVANCE_RATIO } else { Self::ADVANCE_RATIO };

        let mut width: f64 = 0.0;
        let mut lines: f64 = 0.0;
        for paragraph in item.content.as_deref().unwrap_or("").split('\n') {
            let natural = paragraph.chars().count() as f64 * advance;
            width = width.max(natural.min(self.wrap_width));
            lines += (natural / self.wrap_width).ceil().max(1.0);
        }
        Some(PixelSize { width, height: lines * font_size * Self::LINE_HEIGHT_RATIO })
    }
}

/// Convert a measured box to a `(col_span, row_span)` footprint.
///
/// Text kinds cap the width at `max_text_width`. Spans round up and never drop below one.
#[must_use]
pub fn measured_spans(kind: ElementKind, size: PixelSize, grid: &GridSpec, max_text_width: f64) -> (i32, i32) {
    let width = if kind.is_text() { size.width.min(max_text_width) } else { size.width };
    (grid.cells_for(width).max(1), grid.cells_for(size.height).max(1))
}

/// Re-measure `item` and update its spans if they changed. Returns whether anything changed.
pub fn auto_fit(item: &mut CanvasItem, measurer: &dyn TextMeasurer, config: &LayoutConfig) -> bool {
    let Some(size) = measurer.measure(item, &config.grid) else {
        return false;
    };
    let (col_span, row_span) = measured_spans(item.kind, size, &config.grid, config.max_text_width_px);
    if col_span == item.col_span && row_span == item.row_span {
        return false;
    }
    item.col_span = col_span;
    item.row_span = row_span;
    true
}

// =============================================================================
// HANDLE RESIZE
// =============================================================================

/// One of the eight resize handles around a shape or image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleDirection {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl HandleDirection {
    pub const ALL: [HandleDirection; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    #[must_use]
    pub fn north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    #[must_use]
    pub fn south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    #[must_use]
    pub fn east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    #[must_use]
    pub fn west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }
}

/// An in-flight handle drag, seeded with the item's size at pointer-down.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleResize {
    pub id: ItemId,
    pub direction: HandleDirection,
    pub start: PixelPoint,
    pub start_width: f64,
    pub start_height: f64,
}

impl HandleResize {
    /// Seed a handle drag. Locked items and kinds without handles are refused.
    /// A non-numeric axis starts at 120px, except a rectangle's height, which starts at 80px.
    #[must_use]
    pub fn begin(item: &CanvasItem, direction: HandleDirection, start: PixelPoint) -> Option<Self> {
        if item.is_locked() || !item.kind.has_resize_handles() {
            return None;
        }
        let fallback_height = match item.kind {
            ElementKind::Rectangle => RECTANGLE_FALLBACK_HEIGHT_PX,
            _ => HANDLE_FALLBACK_SIZE_PX,
        };
        let seed = |dim: Option<Dimension>, fallback: f64| dim.and_then(Dimension::px).unwrap_or(fallback);
        Some(Self {
            id: item.id.clone(),
            direction,
            start,
            start_width: seed(item.width, HANDLE_FALLBACK_SIZE_PX),
            start_height: seed(item.height, fallback_height),
        })
    }

    /// Size implied by the pointer at `pointer`. Only axes the handle touches change,
    /// and each changed axis is floored at `min_size`.
    #[must_use]
    pub fn size_at(&self, pointer: PixelPoint, min_size: f64) -> PixelSize {
        let dx = pointer.x - self.start.x;
        let dy = pointer.y - self.start.y;
        let mut size = PixelSize { width: self.start_width, height: self.start_height };
        if self.direction.east() {
            size.width = (self.start_width + dx).max(min_size);
        }
        if self.direction.west() {
            size.width = (self.start_width - dx).max(min_size);
        }
        if self.direction.south() {
            size.height = (self.start_height + dy).max(min_size);
        }
        if self.direction.north() {
            size.height = (self.start_height - dy).max(min_size);
        }
        size
    }
}

// =============================================================================
// TABLE STRUCTURE
// =============================================================================

/// Pixel height of a table with `rows` rows (header included).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn table_height(header_height: f64, row_height: f64, rows: usize) -> f64 {
    header_height + rows.saturating_sub(1) as f64 * row_height
}

fn positive(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v > 0)
}

fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn refresh_table_height(item: &mut CanvasItem, config: &LayoutConfig) {
    let header = item.row_header_height.unwrap_or(config.default_header_height_px);
    let row = item.row_height.unwrap_or(config.default_row_height_px);
    let rows = item.table_data.as_ref().map_or(TABLE_FALLBACK_ROWS, Vec::len);
    item.height = Some(Dimension::Px(table_height(header, row, rows)));
}

/// Append an empty row. Returns `false` for non-table items.
pub fn add_table_row(item: &mut CanvasItem, config: &LayoutConfig) -> bool {
    if item.kind != ElementKind::Table {
        return false;
    }
    let data = item.table_data.get_or_insert_with(Vec::new);
    let before = data.len();
    let cols = positive(item.table_cols)
        .map(|c| c.unsigned_abs() as usize)
        .or_else(|| data.first().map(Vec::len).filter(|len| *len > 0))
        .unwrap_or(1);
    data.push(vec![String::new(); cols]);
    item.table_rows = Some(positive(item.table_rows).unwrap_or(count(before)).saturating_add(1));
    item.row_span = item.row_span.saturating_add(1);
    refresh_table_height(item, config);
    true
}

/// Drop the last row. Refused when one row or fewer remain.
pub fn remove_table_row(item: &mut CanvasItem, config: &LayoutConfig) -> bool {
    if item.kind != ElementKind::Table {
        return false;
    }
    let Some(data) = item.table_data.as_mut().filter(|data| data.len() > 1) else {
        return false;
    };
    let before = data.len();
    data.truncate(before - 1);
    item.table_rows = Some((positive(item.table_rows).unwrap_or(count(before)) - 1).max(1));
    item.row_span = item.row_span.saturating_sub(1).max(1);
    refresh_table_height(item, config);
    true
}

/// Append an empty cell to every row. An empty table becomes `[[""]]`.
pub fn add_table_column(item: &mut CanvasItem) -> bool {
    if item.kind != ElementKind::Table {
        return false;
    }
    let data = item.table_data.get_or_insert_with(Vec::new);
    let before = data.first().map_or(0, Vec::len);
    if data.is_empty() {
        data.push(vec![String::new()]);
    } else {
        for row in data.iter_mut() {
            row.push(String::new());
        }
    }
    item.table_cols = Some(positive(item.table_cols).unwrap_or(count(before)).saturating_add(1));
    item.col_span = item.col_span.saturating_add(1);
    true
}

/// Drop the last cell of every row. Refused when one column or fewer remain.
pub fn remove_table_column(item: &mut CanvasItem) -> bool {
    if item.kind != ElementKind::Table {
        return false;
    }
    let Some(data) = item
        .table_data
        .as_mut()
        .filter(|data| data.first().is_some_and(|row| row.len() > 1))
    else {
        return false;
    };
    let before = data.first().map_or(0, Vec::len);
    for row in data.iter_mut() {
        row.truncate(row.len().saturating_sub(1));
    }
    item.table_cols = Some((positive(item.table_cols).unwrap_or(count(before)) - 1).max(1));
    item.col_span = item.col_span.saturating_sub(1).max(1);
    true
}

/// Set header and/or body row heights (clamped to 10..=200 px) and recompute the table height.
pub fn set_row_heights(item: &mut CanvasItem, header: Option<f64>, row: Option<f64>, config: &LayoutConfig) -> bool {
    if item.kind != ElementKind::Table || (header.is_none() && row.is_none()) {
        return false;
    }
    let (lo, hi) = TABLE_ROW_HEIGHT_RANGE;
    if let Some(h) = header {
        item.row_header_height = Some(h.clamp(lo, hi));
    }
    if let Some(r) = row {
        item.row_height = Some(r.clamp(lo, hi));
    }
    refresh_table_height(item, config);
    true
}

/// Overwrite one cell's text. Out-of-range addresses are ignored.
pub fn set_table_cell(item: &mut CanvasItem, row: usize, col: usize, text: impl Into<String>) -> bool {
    let Some(cell) = item
        .table_data
        .as_mut()
        .and_then(|data| data.get_mut(row))
        .and_then(|cells| cells.get_mut(col))
    else {
        return false;
    };
    *cell = text.into();
    true
}
