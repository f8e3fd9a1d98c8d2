//! Template documents: the persisted `{ name, data: { canvasItems } }` blob.
//!
//! Geometry is loaded verbatim. No migration or overlap repair happens here.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::item::CanvasItem;

/// Name given to templates saved with a blank name.
pub const UNTITLED: &str = "Untitled Template";

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("invalid template json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A saved template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: TemplateData,
    /// Other top-level fields (preview image, timestamps), kept opaque.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The layout payload of a template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    #[serde(default)]
    pub canvas_items: Vec<CanvasItem>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TemplateDocument {
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<CanvasItem>) -> Self {
        Self {
            name: name.into(),
            data: TemplateData { canvas_items: items, ..TemplateData::default() },
            ..Self::default()
        }
    }

    /// Parse a template document.
    ///
    /// # Errors
    ///
    /// Returns `Json` when the text is not a valid template.
    pub fn from_json(text: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Pretty-printed JSON, with a blank name replaced by [`UNTITLED`].
    ///
    /// # Errors
    ///
    /// Returns `Json` if an extras value cannot be serialized.
    pub fn to_json_pretty(&self) -> Result<String, TemplateError> {
        let mut doc = self.clone();
        doc.name = self.display_name().to_owned();
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Trimmed name, or [`UNTITLED`] when blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.trim() {
            "" => UNTITLED,
            name => name,
        }
    }

    /// Read and parse a template file.
    ///
    /// # Errors
    ///
    /// Returns `Read` on I/O failure and `Json` on malformed content.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let text = fs::read_to_string(path).map_err(|source| TemplateError::Read { path: path.to_owned(), source })?;
        Self::from_json(&text)
    }

    /// Write the template as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `Write` on I/O failure.
    pub fn save(&self, path: &Path) -> Result<(), TemplateError> {
        let text = self.to_json_pretty()?;
        fs::write(path, text).map_err(|source| TemplateError::Write { path: path.to_owned(), source })
    }

    #[must_use]
    pub fn items(&self) -> &[CanvasItem] {
        &self.data.canvas_items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<CanvasItem> {
        self.data.canvas_items
    }
}
