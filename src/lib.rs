//! Grid layout engine for the drag-and-drop document template editor.
//!
//! Elements placed on the fixed-size page canvas snap to a uniform grid. This
//! crate owns everything spatial about that: which cells are occupied, where a
//! dropped or moved element lands, how collisions are resolved, and how an
//! element's grid footprint tracks its rendered size. Rendering, property
//! forms and template persistence live in the host; the host feeds pointer
//! positions in and receives [`editor::Action`]s back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | Top-level [`editor::EditorCore`] façade and host actions |
//! | [`item`] | Canvas item data model and element kinds |
//! | [`store`] | Ordered in-memory item store |
//! | [`coords`] | Page grid geometry and pixel/cell conversions |
//! | [`occupancy`] | Boolean occupancy map derived from the store |
//! | [`placement`] | Collision-aware placement resolver |
//! | [`palette`] | Static element-type drag-source table and default payloads |
//! | [`drag`] | Drag session state machine |
//! | [`resize`] | Text measurement, handle resize and table structure edits |
//! | [`template`] | JSON interchange with the persistence layer |
//! | [`config`] | Runtime configuration with environment overrides |
//! | [`consts`] | Shared numeric constants (page size, cell size, minimums) |

pub mod config;
pub mod consts;
pub mod coords;
pub mod drag;
pub mod editor;
pub mod item;
pub mod occupancy;
pub mod palette;
pub mod placement;
pub mod resize;
pub mod store;
pub mod template;
