//! notegrid: a drag-to-reorder note grid
//!
//! Two columns of cards. Long-press a card to lift it, drag to move it,
//! release to drop. Cards in between shift one slot to make room, and the
//! caller receives the new order once per completed drag.
//!
//! The reorder core (`grid::positions`, `grid::geometry`, `grid::drag`) is
//! plain data and arithmetic; `grid::view` draws it with macroquad.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod grid;
pub mod store;
pub mod ui;

pub use config::GridConfig;
pub use error::{GridError, StoreError};
pub use grid::{GridItem, GridResponse, SortableGrid};
