use super::*;

fn item_source() -> DragSource {
    DragSource::Item {
        id: "item-1".into(),
        origin: GridCell::new(4, 4),
        footprint: Footprint { col_span: 3, row_span: 5 },
    }
}

// =============================================================
// Phases
// =============================================================

#[test]
fn new_session_is_idle() {
    let session = DragSession::new();
    assert_eq!(session.phase(), &DragPhase::Idle);
    assert!(!session.is_active());
    assert!(session.source().is_none());
    assert!(session.preview().is_none());
}

#[test]
fn begin_enters_hovering_without_preview() {
    let mut session = DragSession::new();
    session.begin(DragSource::Palette(ElementKind::Text));
    assert!(session.is_active());
    assert_eq!(session.source(), Some(&DragSource::Palette(ElementKind::Text)));
    assert!(session.preview().is_none());
}

#[test]
fn begin_replaces_session_in_flight() {
    let mut session = DragSession::new();
    session.begin(DragSource::Palette(ElementKind::Text));
    session.begin(item_source());
    assert_eq!(session.source(), Some(&item_source()));
}

#[test]
fn finish_returns_source_and_goes_idle() {
    let mut session = DragSession::new();
    session.begin(item_source());
    assert_eq!(session.finish(), Some(item_source()));
    assert!(!session.is_active());
    assert_eq!(session.finish(), None);
}

#[test]
fn cancel_discards_preview() {
    let grid = GridSpec::default();
    let mut session = DragSession::new();
    session.begin(DragSource::Palette(ElementKind::Image));
    session.hover(&grid, PixelPoint::new(50.0, 50.0));
    assert!(session.cancel());
    assert!(session.preview().is_none());
    assert!(!session.cancel());
}

// =============================================================
// Hover
// =============================================================

#[test]
fn hover_when_idle_does_nothing() {
    let mut session = DragSession::new();
    assert!(session.hover(&GridSpec::default(), PixelPoint::new(10.0, 10.0)).is_none());
    assert_eq!(session.phase(), &DragPhase::Idle);
}

#[test]
fn hover_snaps_palette_preview_with_default_footprint() {
    let grid = GridSpec::default();
    let mut session = DragSession::new();
    session.begin(DragSource::Palette(ElementKind::Image));
    let rect = session.hover(&grid, PixelPoint::new(45.0, 61.0)).unwrap();
    assert_eq!(rect, GridRect::new(GridCell::new(3, 2), 6, 8));
    assert_eq!(session.preview(), Some(rect));
}

#[test]
fn hover_uses_item_footprint() {
    let grid = GridSpec::default();
    let mut session = DragSession::new();
    session.begin(item_source());
    let rect = session.hover(&grid, PixelPoint::new(0.0, 0.0)).unwrap();
    assert_eq!(rect, GridRect::new(GridCell::new(0, 0), 5, 3));
}

#[test]
fn hover_preview_is_not_collision_checked_or_clamped() {
    let grid = GridSpec::default();
    let mut session = DragSession::new();
    session.begin(DragSource::Palette(ElementKind::Text));
    let rect = session.hover(&grid, PixelPoint::new(590.0, 830.0)).unwrap();
    assert_eq!(rect.anchor, GridCell::new(41, 29));
    assert!(!grid.contains(&rect));
}

#[test]
fn later_hover_overwrites_preview() {
    let grid = GridSpec::default();
    let mut session = DragSession::new();
    session.begin(DragSource::Palette(ElementKind::Text));
    session.hover(&grid, PixelPoint::new(0.0, 0.0));
    session.hover(&grid, PixelPoint::new(100.0, 200.0));
    assert_eq!(session.preview().map(|r| r.anchor), Some(GridCell::new(10, 5)));
}
