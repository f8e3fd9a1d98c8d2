use super::*;
use crate::item::ElementKind;

fn make_item(id: &str, row: i32, col: i32, col_span: i32, row_span: i32) -> CanvasItem {
    CanvasItem::new(id, ElementKind::Text, GridCell::new(row, col), col_span, row_span)
}

// =============================================================
// Basics
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = ItemStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.revision(), 0);
}

#[test]
fn push_preserves_insertion_order() {
    let mut store = ItemStore::new();
    store.push(make_item("b", 0, 0, 1, 1));
    store.push(make_item("a", 0, 0, 1, 1));
    store.push(make_item("c", 0, 0, 1, 1));
    let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn push_with_existing_id_replaces_in_place() {
    let mut store = ItemStore::new();
    store.push(make_item("a", 0, 0, 1, 1));
    store.push(make_item("b", 0, 0, 1, 1));
    store.push(make_item("a", 5, 5, 2, 2));
    assert_eq!(store.len(), 2);
    assert_eq!(store.items()[0].grid_position, GridCell::new(5, 5));
}

#[test]
fn remove_returns_item_and_drops_it() {
    let mut store = ItemStore::new();
    store.push(make_item("a", 0, 0, 1, 1));
    let removed = store.remove("a").unwrap();
    assert_eq!(removed.id, "a");
    assert!(store.is_empty());
}

#[test]
fn remove_missing_is_none_and_keeps_revision() {
    let mut store = ItemStore::new();
    store.push(make_item("a", 0, 0, 1, 1));
    let rev = store.revision();
    assert!(store.remove("ghost").is_none());
    assert_eq!(store.revision(), rev);
}

#[test]
fn load_snapshot_replaces_everything() {
    let mut store = ItemStore::new();
    store.push(make_item("old", 0, 0, 1, 1));
    store.load_snapshot(vec![make_item("x", 1, 1, 1, 1), make_item("y", 2, 2, 1, 1)]);
    assert_eq!(store.len(), 2);
    assert!(!store.contains("old"));
    assert!(store.contains("y"));
}

// =============================================================
// Keyed mutation
// =============================================================

#[test]
fn set_position_moves_anchor() {
    let mut store = ItemStore::new();
    store.push(make_item("a", 0, 0, 6, 2));
    assert!(store.set_position("a", GridCell::new(3, 4)));
    assert_eq!(store.get("a").unwrap().grid_position, GridCell::new(3, 4));
}

#[test]
fn stale_id_mutations_are_no_ops() {
    let mut store = ItemStore::new();
    store.push(make_item("a", 0, 0, 6, 2));
    let before = store.clone();
    assert!(!store.set_position("ghost", GridCell::new(3, 4)));
    assert!(!store.set_spans("ghost", 3, 3));
    assert!(!store.update("ghost", |item| item.content = Some("x".into())));
    assert_eq!(store, before);
}

#[test]
fn set_spans_floors_at_one() {
    let mut store = ItemStore::new();
    store.push(make_item("a", 0, 0, 6, 2));
    assert!(store.set_spans("a", 0, -3));
    let item = store.get("a").unwrap();
    assert_eq!((item.col_span, item.row_span), (1, 1));
}

#[test]
fn every_mutation_bumps_revision() {
    let mut store = ItemStore::new();
    store.push(make_item("a", 0, 0, 6, 2));
    let r1 = store.revision();
    store.set_position("a", GridCell::new(1, 1));
    let r2 = store.revision();
    store.set_spans("a", 2, 2);
    let r3 = store.revision();
    assert!(r1 < r2 && r2 < r3);
}

// =============================================================
// Overlap report
// =============================================================

#[test]
fn overlapping_pairs_lists_each_pair_once() {
    let mut store = ItemStore::new();
    store.push(make_item("a", 0, 0, 6, 2));
    store.push(make_item("b", 1, 5, 2, 2));
    store.push(make_item("c", 10, 10, 2, 2));
    store.push(make_item("d", 0, 0, 1, 1));
    assert_eq!(
        store.overlapping_pairs(),
        vec![("a".to_string(), "b".to_string()), ("a".to_string(), "d".to_string())]
    );
}

#[test]
fn adjacent_items_do_not_overlap() {
    let mut store = ItemStore::new();
    store.push(make_item("a", 0, 0, 6, 2));
    store.push(make_item("b", 2, 0, 6, 2));
    store.push(make_item("c", 0, 6, 6, 2));
    assert!(store.overlapping_pairs().is_empty());
}
