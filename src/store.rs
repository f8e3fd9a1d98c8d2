//! Ordered in-memory store of canvas items.
//!
//! Insertion order is preserved and is the order items are persisted and
//! drawn. All lookups and mutations are keyed by item id; a mutation aimed at
//! an id that is no longer present does nothing and reports `false`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::coords::GridCell;
use crate::item::{CanvasItem, ItemId};

/// The canvas item collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<CanvasItem>,
    revision: u64,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a loaded item list, verbatim.
    #[must_use]
    pub fn from_items(items: Vec<CanvasItem>) -> Self {
        Self { items, revision: 0 }
    }

    /// Replace all items with a loaded snapshot.
    pub fn load_snapshot(&mut self, items: Vec<CanvasItem>) {
        self.items = items;
        self.bump();
    }

    /// All items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    /// Consume the store, yielding the items for persistence.
    #[must_use]
    pub fn into_items(self) -> Vec<CanvasItem> {
        self.items
    }

    /// Monotonic counter bumped on every successful mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append an item. An existing item with the same id is replaced in place.
    pub fn push(&mut self, item: CanvasItem) {
        if let Some(slot) = self.items.iter_mut().find(|existing| existing.id == item.id) {
            *slot = item;
        } else {
            self.items.push(item);
        }
        self.bump();
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<CanvasItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        self.bump();
        Some(self.items.remove(index))
    }

    /// Apply `f` to the item with the given id. Returns `false` if the id is absent.
    pub fn update(&mut self, id: &str, f: impl FnOnce(&mut CanvasItem)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        f(item);
        self.bump();
        true
    }

    /// Move an item's anchor cell.
    pub fn set_position(&mut self, id: &str, cell: GridCell) -> bool {
        self.update(id, |item| item.grid_position = cell)
    }

    /// Set an item's footprint. Spans below one are raised to one.
    pub fn set_spans(&mut self, id: &str, col_span: i32, row_span: i32) -> bool {
        self.update(id, |item| {
            item.col_span = col_span.max(1);
            item.row_span = row_span.max(1);
        })
    }

    /// Every pair of items whose footprints share at least one cell, in store order.
    #[must_use]
    pub fn overlapping_pairs(&self) -> Vec<(ItemId, ItemId)> {
        let mut pairs = Vec::new();
        for (i, a) in self.items.iter().enumerate() {
            let rect_a = a.footprint();
            for b in &self.items[i + 1..] {
                if rect_a.intersects(&b.footprint()) {
                    pairs.push((a.id.clone(), b.id.clone()));
                }
            }
        }
        pairs
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
