//! Layout configuration with optional environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, CELL_SIZE_PX, DEFAULT_HEADER_HEIGHT_PX, DEFAULT_ROW_HEIGHT_PX,
    MAX_TEXT_WIDTH_PX, MIN_HANDLE_SIZE_PX,
};
use crate::coords::GridSpec;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("page {width}x{height} with {cell}px cells is not a usable grid")]
    InvalidGrid { cell: u32, width: u32, height: u32 },
}

/// Settings fixed for the lifetime of one canvas session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub grid: GridSpec,
    /// Width cap applied when converting measured text to a column span.
    pub max_text_width_px: f64,
    /// Floor for each axis during handle resize.
    pub min_handle_size_px: f64,
    /// Whether `visible: false` items still reserve their cells.
    pub hidden_items_occupy: bool,
    pub default_row_height_px: f64,
    pub default_header_height_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            max_text_width_px: MAX_TEXT_WIDTH_PX,
            min_handle_size_px: MIN_HANDLE_SIZE_PX,
            hidden_items_occupy: true,
            default_row_height_px: DEFAULT_ROW_HEIGHT_PX,
            default_header_height_px: DEFAULT_HEADER_HEIGHT_PX,
        }
    }
}

impl LayoutConfig {
    /// Build config from environment variables. All are optional.
    ///
    /// - `PAGEGRID_CELL_SIZE`: default 20
    /// - `PAGEGRID_CANVAS_WIDTH`: default 600
    /// - `PAGEGRID_CANVAS_HEIGHT`: default 840
    /// - `PAGEGRID_MAX_TEXT_WIDTH`: default 600
    /// - `PAGEGRID_MIN_HANDLE_SIZE`: default 20
    /// - `PAGEGRID_HIDDEN_ITEMS_OCCUPY`: `true` (default) or `false`
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for unparseable values and `InvalidGrid` when the
    /// page cannot hold a whole cell or holds too many cells to index.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var)
    }

    /// Same as [`LayoutConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`LayoutConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let cell = parse_var(&lookup, "PAGEGRID_CELL_SIZE", CELL_SIZE_PX)?;
        let width = parse_var(&lookup, "PAGEGRID_CANVAS_WIDTH", CANVAS_WIDTH_PX)?;
        let height = parse_var(&lookup, "PAGEGRID_CANVAS_HEIGHT", CANVAS_HEIGHT_PX)?;
        let grid = GridSpec::new(cell, width, height).ok_or(ConfigError::InvalidGrid { cell, width, height })?;

        let max_text_width_px = parse_positive(&lookup, "PAGEGRID_MAX_TEXT_WIDTH", MAX_TEXT_WIDTH_PX)?;
        let min_handle_size_px = parse_positive(&lookup, "PAGEGRID_MIN_HANDLE_SIZE", MIN_HANDLE_SIZE_PX)?;
        let hidden_items_occupy = parse_var(&lookup, "PAGEGRID_HIDDEN_ITEMS_OCCUPY", true)?;

        Ok(Self { grid, max_text_width_px, min_handle_size_px, hidden_items_occupy, ..Self::default() })
    }
}

fn env_var(key: &str) -> Option<String> {
    let Ok(value) = std::env::var(key) else {
        return None;
    };
    Some(value)
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}

fn parse_positive(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let value = parse_var(lookup, var, default)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue { var, value: value.to_string() })
    }
}
