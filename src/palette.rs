//! Palette drag sources: the fixed element-type table and new-item defaults.
//!
//! The table is built once as a static and indexed by [`ElementKind`]; the
//! host renders one drag source per entry and hands back only the kind token
//! when a drag starts. Every geometry default for a new item originates here.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use serde_json::json;

use crate::coords::GridCell;
use crate::item::{CanvasItem, Dimension, ElementKind, ItemId};

/// A footprint in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub col_span: i32,
    pub row_span: i32,
}

/// One palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSourceDescriptor {
    pub kind: ElementKind,
    pub label: &'static str,
    /// Initial footprint, used both to resolve the drop and on the created item.
    pub footprint: Footprint,
}

const fn entry(kind: ElementKind, label: &'static str, col_span: i32, row_span: i32) -> DragSourceDescriptor {
    DragSourceDescriptor { kind, label, footprint: Footprint { col_span, row_span } }
}

/// Palette entries in display order; position `i` holds the kind whose discriminant is `i`.
pub static PALETTE: [DragSourceDescriptor; 15] = [
    entry(ElementKind::Text, "Text", 6, 2),
    entry(ElementKind::VariableField, "Variable Field", 4, 2),
    entry(ElementKind::Heading1, "Heading 1", 8, 2),
    entry(ElementKind::Heading2, "Heading 2", 7, 2),
    entry(ElementKind::Image, "Image", 8, 6),
    entry(ElementKind::Rectangle, "Rectangle", 6, 2),
    entry(ElementKind::Circle, "Circle", 6, 2),
    entry(ElementKind::Button, "Button", 6, 2),
    entry(ElementKind::List, "List", 8, 4),
    entry(ElementKind::Table, "Table", 2, 3),
    entry(ElementKind::Qrcode, "QR Code", 3, 4),
    entry(ElementKind::Signature, "Signature", 4, 2),
    entry(ElementKind::Chart, "Chart", 4, 3),
    entry(ElementKind::Logo, "Logo", 4, 3),
    entry(ElementKind::Attachment, "Attachment", 4, 3),
];

/// Palette entry for `kind`.
#[must_use]
pub fn descriptor(kind: ElementKind) -> &'static DragSourceDescriptor {
    &PALETTE[kind as usize]
}

/// Fresh id for a palette-created item.
#[must_use]
pub fn new_item_id() -> ItemId {
    format!("item-{}", uuid::Uuid::new_v4().simple())
}

/// Build a new item of `kind` at `anchor` with the kind's default footprint and payload.
#[must_use]
pub fn new_item(kind: ElementKind, id: ItemId, anchor: GridCell) -> CanvasItem {
    let Footprint { col_span, row_span } = descriptor(kind).footprint;
    let mut item = CanvasItem::new(id, kind, anchor, col_span, row_span);
    match kind {
        ElementKind::Text => {
            text_defaults(&mut item, "Sample text content", 16.0, "regular", false);
        }
        ElementKind::Heading1 => {
            text_defaults(&mut item, "Heading 1", 32.0, "bold", true);
        }
        ElementKind::Heading2 => {
            text_defaults(&mut item, "Heading 2", 24.0, "semibold", true);
        }
        ElementKind::Image => {
            decorate(&mut item, json!({
                "borderRadius": 12,
                "opacity": 0.8,
                "boxShadow": "0 2px 8px rgba(0,0,0,0.12)",
            }));
            advanced_defaults(&mut item);
        }
        ElementKind::Rectangle | ElementKind::Circle => {
            let (height, radius) = if kind == ElementKind::Circle { (120.0, 9999) } else { (80.0, 8) };
            decorate(&mut item, json!({
                "fillColor": "#ffffff",
                "borderColor": "#000000",
                "borderWidth": 2,
                "borderRadius": radius,
                "fillOpacity": 1,
                "borderOpacity": 1,
                "boxShadow": "",
            }));
            sized(&mut item, 120.0, height);
            advanced_defaults(&mut item);
        }
        ElementKind::Button => {
            decorate(&mut item, json!({
                "buttonColor": "#2563eb",
                "buttonText": "Click Me",
                "textColor": "#ffffff",
                "textSize": 16,
                "iconColor": "#ffffff",
                "iconSize": 20,
                "iconType": "MousePointerClick",
                "borderRadius": 8,
                "padding": { "top": 12, "right": 24, "bottom": 12, "left": 24 },
                "url": "",
                "buttonWidth": 140,
                "buttonHeight": 44,
                "iconPosition": "left",
                "boxShadow": "0 2px 8px rgba(37,99,235,0.15)",
            }));
            item.visible = Some(true);
            item.locked = Some(false);
        }
        ElementKind::List => {
            decorate(&mut item, json!({
                "items": ["List item 1", "List item 2", "List item 3"],
                "listStyle": "bulleted",
                "listFontSize": 16,
                "listFontColor": "#222",
                "listFontFamily": "inter",
                "listFontWeight": "regular",
                "listOpacity": 1,
            }));
        }
        ElementKind::Table => {
            sized(&mut item, 240.0, 120.0);
            item.table_rows = Some(3);
            item.table_cols = Some(2);
            item.table_data = Some(vec![
                vec!["Header 1".into(), "Header 2".into()],
                vec!["Cell 1".into(), "Cell 2".into()],
                vec!["Cell 3".into(), "Cell 4".into()],
            ]);
            decorate(&mut item, json!({ "tableBorder": 1, "tableCellPadding": 4, "tableHeader": true }));
        }
        ElementKind::Qrcode => {
            sized(&mut item, 120.0, 120.0);
            decorate(&mut item, json!({ "qrValue": "https://example.com" }));
        }
        ElementKind::Signature => sized(&mut item, 180.0, 100.0),
        ElementKind::Chart => sized(&mut item, 240.0, 160.0),
        ElementKind::Logo => {
            sized(&mut item, 120.0, 90.0);
            decorate(&mut item, json!({
                "borderRadius": 12,
                "opacity": 1,
                "boxShadow": "0 2px 8px rgba(0,0,0,0.08)",
            }));
            advanced_defaults(&mut item);
        }
        ElementKind::Attachment | ElementKind::VariableField => {
            let (height, radius, label) = if kind == ElementKind::Attachment {
                (90.0, 12, "Attachment")
            } else {
                (60.0, 8, "Variable Field")
            };
            sized(&mut item, 120.0, height);
            item.content = Some(label.into());
            decorate(&mut item, json!({
                "borderRadius": radius,
                "boxShadow": "0 2px 8px rgba(0,0,0,0.08)",
            }));
            advanced_defaults(&mut item);
        }
    }
    item
}

fn text_defaults(item: &mut CanvasItem, content: &str, font_size: f64, weight: &str, bold: bool) {
    item.content = Some(content.into());
    item.font_family = Some("inter".into());
    item.font_size = Some(font_size);
    item.font_weight = Some(weight.into());
    item.is_bold = Some(bold);
    item.is_italic = Some(false);
    item.is_underline = Some(false);
    decorate(item, json!({ "color": "#000000", "textAlign": "left" }));
}

fn sized(item: &mut CanvasItem, width: f64, height: f64) {
    item.width = Some(Dimension::Px(width));
    item.height = Some(Dimension::Px(height));
}

fn advanced_defaults(item: &mut CanvasItem) {
    item.visible = Some(true);
    item.locked = Some(false);
    decorate(item, json!({ "zIndex": 1, "rotation": 0 }));
}

fn decorate(item: &mut CanvasItem, props: serde_json::Value) {
    if let serde_json::Value::Object(map) = props {
        item.extra.extend(map);
    }
}
