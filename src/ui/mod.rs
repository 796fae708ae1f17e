//! Immediate-mode UI helpers for the note board
//!
//! Design principles:
//! - Immediate mode for drawing (rebuilt each frame)
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering and pointer input

mod rect;
mod input;
pub mod theme;

pub use rect::*;
pub use input::*;
