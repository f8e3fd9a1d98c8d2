//! Canvas item data model: element kinds, pixel dimensions, and the item record.
//!
//! `CanvasItem` is the unit of placement and also the persisted shape handed
//! to the template store, so field names serialize in camelCase to match the
//! saved blob. Only the geometry fields and a handful of text/table fields are
//! typed; every other payload key (colors, icons, chart settings) rides along
//! untouched in `extra`.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coords::{GridCell, GridRect, GridSpec, PixelPoint};

/// Identifier for a canvas item. Loaded ids are arbitrary strings and kept verbatim.
pub type ItemId = String;

/// The kind of element placed on the page.
///
/// Variant order matches the palette order in [`crate::palette::PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Text,
    VariableField,
    Heading1,
    Heading2,
    Image,
    Rectangle,
    Circle,
    Button,
    List,
    Table,
    Qrcode,
    Signature,
    Chart,
    Logo,
    Attachment,
}

impl ElementKind {
    /// Every kind, in palette order.
    pub const ALL: [ElementKind; 15] = [
        Self::Text,
        Self::VariableField,
        Self::Heading1,
        Self::Heading2,
        Self::Image,
        Self::Rectangle,
        Self::Circle,
        Self::Button,
        Self::List,
        Self::Table,
        Self::Qrcode,
        Self::Signature,
        Self::Chart,
        Self::Logo,
        Self::Attachment,
    ];

    /// Wire token, identical to the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::VariableField => "variableField",
            Self::Heading1 => "heading1",
            Self::Heading2 => "heading2",
            Self::Image => "image",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Button => "button",
            Self::List => "list",
            Self::Table => "table",
            Self::Qrcode => "qrcode",
            Self::Signature => "signature",
            Self::Chart => "chart",
            Self::Logo => "logo",
            Self::Attachment => "attachment",
        }
    }

    /// Free-text kinds whose footprint follows their measured content, capped in width.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::Heading1 | Self::Heading2)
    }

    /// Kinds that expose the eight pixel resize handles.
    #[must_use]
    pub fn has_resize_handles(self) -> bool {
        matches!(self, Self::Image | Self::Rectangle | Self::Circle)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing an unknown element token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ElementKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// A rendered pixel length, or `"auto"` to let content decide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDimension", into = "RawDimension")]
pub enum Dimension {
    Px(f64),
    Auto,
}

impl Dimension {
    /// The numeric size, if any.
    #[must_use]
    pub fn px(self) -> Option<f64> {
        match self {
            Self::Px(v) => Some(v),
            Self::Auto => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawDimension {
    Px(f64),
    Keyword(String),
}

impl TryFrom<RawDimension> for Dimension {
    type Error = String;

    fn try_from(raw: RawDimension) -> Result<Self, Self::Error> {
        match raw {
            RawDimension::Px(v) => Ok(Self::Px(v)),
            RawDimension::Keyword(k) if k == "auto" => Ok(Self::Auto),
            RawDimension::Keyword(k) => Err(format!("expected a number or \"auto\", got {k:?}")),
        }
    }
}

impl From<Dimension> for RawDimension {
    fn from(dim: Dimension) -> Self {
        match dim {
            Dimension::Px(v) => Self::Px(v),
            Dimension::Auto => Self::Keyword("auto".to_string()),
        }
    }
}

/// A placed element.
///
/// `grid_position`, `col_span` and `row_span` are authoritative for occupancy.
/// `pixel_position`, when present, only moves where the item is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasItem {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Top-left anchor cell.
    pub grid_position: GridCell,
    pub col_span: i32,
    pub row_span: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_position: Option<PixelPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    // Text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_underline: Option<bool>,

    // Table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_rows: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_cols: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_data: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_header_height: Option<f64>,

    /// Remaining type-specific payload, opaque to layout.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CanvasItem {
    /// A bare item with the given geometry and no payload.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, kind: ElementKind, anchor: GridCell, col_span: i32, row_span: i32) -> Self {
        Self {
            id: id.into(),
            kind,
            grid_position: anchor,
            col_span,
            row_span,
            pixel_position: None,
            width: None,
            height: None,
            locked: None,
            visible: None,
            content: None,
            font_family: None,
            font_size: None,
            font_weight: None,
            is_bold: None,
            is_italic: None,
            is_underline: None,
            table_rows: None,
            table_cols: None,
            table_data: None,
            row_height: None,
            row_header_height: None,
            extra: serde_json::Map::new(),
        }
    }

    /// The rectangle of cells this item reserves.
    #[must_use]
    pub fn footprint(&self) -> GridRect {
        GridRect::new(self.grid_position, self.row_span, self.col_span)
    }

    /// Locked items cannot be dragged or handle-resized. Defaults to unlocked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked.unwrap_or(false)
    }

    /// Defaults to visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// Where the item is drawn: the pixel override if present, else the anchor cell corner.
    #[must_use]
    pub fn render_origin(&self, grid: &GridSpec) -> PixelPoint {
        self.pixel_position
            .unwrap_or_else(|| grid.grid_to_pixel(self.grid_position))
    }

    /// Drawn size per axis. `None` means the axis is `"auto"` and sized by content;
    /// an unset axis falls back to the grid span.
    #[must_use]
    pub fn render_size(&self, grid: &GridSpec) -> (Option<f64>, Option<f64>) {
        let cell = grid.cell_size();
        let axis = |dim: Option<Dimension>, span: i32| match dim {
            Some(d) => d.px(),
            None => Some(f64::from(span) * cell),
        };
        (axis(self.width, self.col_span), axis(self.height, self.row_span))
    }
}
