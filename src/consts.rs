//! Shared numeric constants for the layout engine.

// ── Page ────────────────────────────────────────────────────────

/// Edge length of one grid cell, in pixels.
pub const CELL_SIZE_PX: u32 = 20;

/// Page width in pixels (A4 approximation).
pub const CANVAS_WIDTH_PX: u32 = 600;

/// Page height in pixels (A4 approximation).
pub const CANVAS_HEIGHT_PX: u32 = 840;

/// Number of grid columns on the default page.
pub const GRID_COLS: i32 = (CANVAS_WIDTH_PX / CELL_SIZE_PX) as i32;

/// Number of grid rows on the default page.
pub const GRID_ROWS: i32 = (CANVAS_HEIGHT_PX / CELL_SIZE_PX) as i32;

/// Largest page, in cells, a custom grid may describe.
pub const MAX_GRID_CELLS: u32 = 1 << 22;

// ── Resize ──────────────────────────────────────────────────────

/// Widest a text element may measure before its column span stops growing.
pub const MAX_TEXT_WIDTH_PX: f64 = 600.0;

/// Smallest width or height a resize handle can drag an element down to.
pub const MIN_HANDLE_SIZE_PX: f64 = 20.0;

/// Start size assumed by handle resize when an axis has no numeric size yet.
pub const HANDLE_FALLBACK_SIZE_PX: f64 = 120.0;

/// Start height assumed for a rectangle handle drag with no numeric height.
pub const RECTANGLE_FALLBACK_HEIGHT_PX: f64 = 80.0;

// ── Tables ──────────────────────────────────────────────────────

/// Default height of a table body row.
pub const DEFAULT_ROW_HEIGHT_PX: f64 = 40.0;

/// Default height of a table header row.
pub const DEFAULT_HEADER_HEIGHT_PX: f64 = 40.0;
