use tracing::{debug, info};

use crate::config::LayoutConfig;
use crate::coords::{GridCell, GridRect, PixelPoint};
use crate::drag::{DragSession, DragSource};
use crate::item::{CanvasItem, Dimension, ElementKind, ItemId};
use crate::occupancy::OccupancyGrid;
use crate::palette::{Footprint, descriptor, new_item, new_item_id};
use crate::placement::Resolver;
use crate::resize::{self, HandleDirection, HandleResize, TextMeasurer};
use crate::store::ItemStore;

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// Actions returned from editor operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ItemCreated(CanvasItem),
    ItemMoved { id: ItemId, from: GridCell, to: GridCell },
    ItemResized { id: ItemId, col_span: i32, row_span: i32 },
    ItemUpdated { id: ItemId },
    ItemDeleted { id: ItemId },
    SelectionChanged(Option<ItemId>),
    /// The drag preview rectangle to draw, or `None` to clear it.
    PreviewChanged(Option<GridRect>),
    RenderNeeded,
}

/// Editor state for one canvas: items, occupancy, selection and in-flight gestures.
///
/// Occupancy is rebuilt in full after every store mutation, so queries always
/// see the current snapshot.
#[derive(Debug, Clone)]
pub struct EditorCore {
    config: LayoutConfig,
    store: ItemStore,
    occupancy: OccupancyGrid,
    selection: Option<ItemId>,
    drag: DragSession,
    handle: Option<HandleResize>,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl EditorCore {
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_items(config, Vec::new())
    }

    /// Editor over a loaded item list. Geometry is taken verbatim, overlaps included.
    #[must_use]
    pub fn with_items(config: LayoutConfig, items: Vec<CanvasItem>) -> Self {
        let store = ItemStore::from_items(items);
        let occupancy = OccupancyGrid::build(&config.grid, store.items(), config.hidden_items_occupy);
        Self {
            config,
            store,
            occupancy,
            selection: None,
            drag: DragSession::new(),
            handle: None,
        }
    }

    // --- Data inputs ---

    /// Replace every item with a loaded snapshot. Selection and gestures are dropped.
    pub fn load_items(&mut self, items: Vec<CanvasItem>) {
        self.store.load_snapshot(items);
        self.selection = None;
        self.drag.cancel();
        self.handle = None;
        self.rebuild();
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[must_use]
    pub fn items(&self) -> &[CanvasItem] {
        self.store.items()
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&CanvasItem> {
        self.store.get(id)
    }

    #[must_use]
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    #[must_use]
    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    /// Placement queries against the current snapshot.
    #[must_use]
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.config.grid, self.store.items(), &self.occupancy, self.config.hidden_items_occupy)
    }

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    #[must_use]
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// The drag preview rectangle, if a drag is hovering over the canvas.
    #[must_use]
    pub fn preview(&self) -> Option<GridRect> {
        self.drag.preview()
    }

    // --- Selection / deletion ---

    /// Select an item. Stale ids are ignored.
    pub fn select(&mut self, id: &str) -> Vec<Action> {
        if !self.store.contains(id) || self.selection.as_deref() == Some(id) {
            return Vec::new();
        }
        self.selection = Some(id.to_owned());
        vec![Action::SelectionChanged(self.selection.clone()), Action::RenderNeeded]
    }

    pub fn clear_selection(&mut self) -> Vec<Action> {
        if self.selection.take().is_none() {
            return Vec::new();
        }
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    /// Remove an item, clearing selection and any handle drag that targeted it.
    pub fn delete(&mut self, id: &str) -> Vec<Action> {
        let Some(removed) = self.store.remove(id) else {
            return Vec::new();
        };
        self.rebuild();
        debug!(id = %removed.id, "item deleted");

        let mut actions = vec![Action::ItemDeleted { id: removed.id }];
        if self.handle.as_ref().is_some_and(|h| h.id == id) {
            self.handle = None;
        }
        if self.selection.as_deref() == Some(id) {
            self.selection = None;
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Drag and drop ---

    /// Start dragging a new element of `kind` from the palette.
    pub fn begin_palette_drag(&mut self, kind: ElementKind) {
        self.drag.begin(DragSource::Palette(kind));
    }

    /// Start dragging an existing item. Locked and stale items are refused.
    pub fn begin_item_drag(&mut self, id: &str) -> bool {
        let Some(item) = self.store.get(id) else {
            return false;
        };
        if item.is_locked() {
            debug!(id, "drag refused for locked item");
            return false;
        }
        self.drag.begin(DragSource::Item {
            id: item.id.clone(),
            origin: item.grid_position,
            footprint: Footprint { col_span: item.col_span, row_span: item.row_span },
        });
        true
    }

    /// Pointer moved over the canvas during a drag.
    pub fn hover(&mut self, point: PixelPoint) -> Vec<Action> {
        match self.drag.hover(&self.config.grid, point) {
            Some(rect) => vec![Action::PreviewChanged(Some(rect))],
            None => Vec::new(),
        }
    }

    /// Abandon the drag. The store is untouched.
    pub fn cancel_drag(&mut self) -> Vec<Action> {
        if !self.drag.cancel() {
            return Vec::new();
        }
        vec![Action::PreviewChanged(None)]
    }

    /// Release the drag at `point`, resolving the final anchor and committing it.
    ///
    /// A release outside the page counts as a cancel. A palette drop creates a
    /// new item; an item drop relocates it, excluding its own cells from the
    /// collision check. Either way the result is selected.
    pub fn drop_at(&mut self, point: PixelPoint) -> Vec<Action> {
        let Some(source) = self.drag.finish() else {
            return Vec::new();
        };
        let mut actions = vec![Action::PreviewChanged(None)];
        if !self.config.grid.contains_point(point) {
            debug!(x = point.x, y = point.y, "drop outside canvas; cancelled");
            return actions;
        }
        let target = self.config.grid.pixel_to_grid(point.x, point.y);

        match source {
            DragSource::Palette(kind) => {
                let Footprint { col_span, row_span } = descriptor(kind).footprint;
                let anchor = self
                    .resolver()
                    .find_nearest_available_position(target.row, target.col, row_span, col_span, None);
                let item = new_item(kind, new_item_id(), anchor);
                info!(id = %item.id, %kind, row = anchor.row, col = anchor.col, "item placed");

                self.selection = Some(item.id.clone());
                actions.push(Action::ItemCreated(item.clone()));
                actions.push(Action::SelectionChanged(self.selection.clone()));
                self.store.push(item);
            }
            DragSource::Item { id, .. } => {
                let Some(item) = self.store.get(&id) else {
                    debug!(%id, "dropped item no longer exists");
                    return actions;
                };
                let from = item.grid_position;
                let to = self.resolver().find_nearest_available_position(
                    target.row,
                    target.col,
                    item.row_span,
                    item.col_span,
                    Some(&id),
                );
                self.store.update(&id, |item| {
                    item.grid_position = to;
                    item.pixel_position = None;
                });
                debug!(%id, from_row = from.row, from_col = from.col, row = to.row, col = to.col, "item moved");

                self.selection = Some(id.clone());
                actions.push(Action::ItemMoved { id, from, to });
                actions.push(Action::SelectionChanged(self.selection.clone()));
            }
        }
        self.rebuild();
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Direct edits (no collision check) ---

    /// Set the anchor from a numeric property edit. Overlaps are allowed.
    pub fn set_position(&mut self, id: &str, cell: GridCell) -> Vec<Action> {
        let Some(from) = self.store.get(id).map(|item| item.grid_position) else {
            return Vec::new();
        };
        self.store.set_position(id, cell);
        self.rebuild();
        vec![Action::ItemMoved { id: id.to_owned(), from, to: cell }, Action::RenderNeeded]
    }

    /// Set or clear the free-form pixel position. Occupancy is unaffected.
    pub fn set_pixel_position(&mut self, id: &str, point: Option<PixelPoint>) -> Vec<Action> {
        self.edit(id, |item| {
            item.pixel_position = point;
            true
        })
    }

    /// Set spans directly. Spans are clamped to at least one; overlaps are allowed.
    pub fn resize_spans(&mut self, id: &str, col_span: i32, row_span: i32) -> Vec<Action> {
        if !self.store.set_spans(id, col_span, row_span) {
            return Vec::new();
        }
        self.rebuild();
        self.resized(id)
    }

    // --- Measurement ---

    /// Re-measure an item and update its spans if they changed.
    pub fn auto_fit(&mut self, id: &str, measurer: &dyn TextMeasurer) -> Vec<Action> {
        let config = self.config;
        let mut changed = false;
        self.store.update(id, |item| changed = resize::auto_fit(item, measurer, &config));
        if !changed {
            return Vec::new();
        }
        self.rebuild();
        self.resized(id)
    }

    /// Replace an item's text content, then re-measure it.
    pub fn set_text(&mut self, id: &str, content: impl Into<String>, measurer: &dyn TextMeasurer) -> Vec<Action> {
        let content = content.into();
        if !self.store.update(id, |item| item.content = Some(content)) {
            return Vec::new();
        }
        let mut actions = vec![Action::ItemUpdated { id: id.to_owned() }];
        actions.extend(self.auto_fit(id, measurer).into_iter().filter(|a| *a != Action::RenderNeeded));
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Handle resize ---

    /// Press on a resize handle. Refused for locked items and kinds without handles.
    pub fn begin_handle_resize(&mut self, id: &str, direction: HandleDirection, point: PixelPoint) -> bool {
        self.handle = self.store.get(id).and_then(|item| HandleResize::begin(item, direction, point));
        self.handle.is_some()
    }

    /// Pointer moved during a handle drag. Only the axes the handle controls are written.
    pub fn handle_resize_move(&mut self, point: PixelPoint) -> Vec<Action> {
        let Some(handle) = &self.handle else {
            return Vec::new();
        };
        let size = handle.size_at(point, self.config.min_handle_size_px);
        let direction = handle.direction;
        let id = handle.id.clone();
        let applied = self.store.update(&id, |item| {
            if direction.east() || direction.west() {
                item.width = Some(Dimension::Px(size.width));
            }
            if direction.north() || direction.south() {
                item.height = Some(Dimension::Px(size.height));
            }
        });
        if !applied {
            self.handle = None;
            return Vec::new();
        }
        vec![Action::ItemUpdated { id }, Action::RenderNeeded]
    }

    /// Release the handle. Returns whether a handle drag was in flight.
    pub fn end_handle_resize(&mut self) -> bool {
        self.handle.take().is_some()
    }

    // --- Tables ---

    pub fn add_table_row(&mut self, id: &str) -> Vec<Action> {
        let config = self.config;
        self.edit(id, |item| resize::add_table_row(item, &config))
    }

    pub fn remove_table_row(&mut self, id: &str) -> Vec<Action> {
        let config = self.config;
        self.edit(id, |item| resize::remove_table_row(item, &config))
    }

    pub fn add_table_column(&mut self, id: &str) -> Vec<Action> {
        self.edit(id, resize::add_table_column)
    }

    pub fn remove_table_column(&mut self, id: &str) -> Vec<Action> {
        self.edit(id, resize::remove_table_column)
    }

    /// Set header and/or body row heights, recomputing the table's pixel height.
    pub fn set_row_heights(&mut self, id: &str, header: Option<f64>, row: Option<f64>) -> Vec<Action> {
        let config = self.config;
        self.edit(id, |item| resize::set_row_heights(item, header, row, &config))
    }

    pub fn set_table_cell(&mut self, id: &str, row: usize, col: usize, text: impl Into<String>) -> Vec<Action> {
        let text = text.into();
        self.edit(id, |item| resize::set_table_cell(item, row, col, text))
    }

    // --- Internals ---

    fn rebuild(&mut self) {
        self.occupancy = OccupancyGrid::build(&self.config.grid, self.store.items(), self.config.hidden_items_occupy);
    }

    fn resized(&self, id: &str) -> Vec<Action> {
        self.store.get(id).map_or_else(Vec::new, |item| {
            debug!(id, col_span = item.col_span, row_span = item.row_span, "item resized");
            vec![
                Action::ItemResized { id: item.id.clone(), col_span: item.col_span, row_span: item.row_span },
                Action::RenderNeeded,
            ]
        })
    }

    /// Apply an in-place edit that reports whether it changed anything.
    fn edit(&mut self, id: &str, f: impl FnOnce(&mut CanvasItem) -> bool) -> Vec<Action> {
        let mut changed = false;
        self.store.update(id, |item| changed = f(item));
        if !changed {
            return Vec::new();
        }
        self.rebuild();
        debug!(id, "item updated");
        vec![Action::ItemUpdated { id: id.to_owned() }, Action::RenderNeeded]
    }
}
