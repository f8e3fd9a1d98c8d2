//! Drag session state machine.
//!
//! A session runs `Idle → Hovering → (dropped | cancelled) → Idle`. The
//! session carries everything the drop needs: what is being dragged, the
//! footprint to preview, and for an existing item its last known good anchor.
//! The session is an explicit value owned by the editor, never ambient state.
//!
//! Hover only snaps the pointer to a preview cell; it does not check for
//! collisions, so the preview may overlap existing items. Collision handling
//! happens once, at drop, in the editor.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use tracing::trace;

use crate::coords::{GridCell, GridRect, GridSpec, PixelPoint};
use crate::item::{ElementKind, ItemId};
use crate::palette::{Footprint, descriptor};

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// A new element from the palette; only the kind token is known.
    Palette(ElementKind),
    /// An existing canvas item.
    Item {
        id: ItemId,
        /// Anchor at drag start, kept for cancellation.
        origin: GridCell,
        /// Footprint at drag start, used for the preview.
        footprint: Footprint,
    },
}

impl DragSource {
    /// The footprint drawn under the pointer while hovering.
    #[must_use]
    pub fn footprint(&self) -> Footprint {
        match self {
            Self::Palette(kind) => descriptor(*kind).footprint,
            Self::Item { footprint, .. } => *footprint,
        }
    }
}

/// Current phase of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress over (or not yet over) the canvas.
    Hovering {
        source: DragSource,
        /// Snapped cell under the pointer, once the pointer has reached the canvas.
        preview: Option<GridCell>,
    },
}

/// A single drag session. One pointer means at most one session at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    phase: DragPhase,
}

impl DragSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, DragPhase::Hovering { .. })
    }

    /// The source of the active drag, if any.
    #[must_use]
    pub fn source(&self) -> Option<&DragSource> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Hovering { source, .. } => Some(source),
        }
    }

    /// Enter `Hovering`. A session already in flight is replaced.
    pub fn begin(&mut self, source: DragSource) {
        self.phase = DragPhase::Hovering { source, preview: None };
    }

    /// Snap the pointer to a cell and record it as the preview anchor.
    /// Returns the new preview rectangle, or `None` when idle.
    pub fn hover(&mut self, grid: &GridSpec, point: PixelPoint) -> Option<GridRect> {
        let DragPhase::Hovering { source, preview } = &mut self.phase else {
            return None;
        };
        let cell = grid.pixel_to_grid(point.x, point.y);
        *preview = Some(cell);
        let Footprint { col_span, row_span } = source.footprint();
        trace!(row = cell.row, col = cell.col, "drag preview moved");
        Some(GridRect::new(cell, row_span, col_span))
    }

    /// The preview rectangle to draw, if hovering over the canvas.
    #[must_use]
    pub fn preview(&self) -> Option<GridRect> {
        let DragPhase::Hovering { source, preview: Some(cell) } = &self.phase else {
            return None;
        };
        let Footprint { col_span, row_span } = source.footprint();
        Some(GridRect::new(*cell, row_span, col_span))
    }

    /// End the session for a drop, returning its source. Idle sessions yield `None`.
    pub fn finish(&mut self) -> Option<DragSource> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Idle => None,
            DragPhase::Hovering { source, .. } => Some(source),
        }
    }

    /// Discard the session and its preview. Returns whether a drag was in flight.
    pub fn cancel(&mut self) -> bool {
        self.finish().is_some()
    }
}
