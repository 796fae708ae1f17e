//! UI Theme - Shared colors and styling constants
//!
//! Centralized color definitions for the note board.

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Header background
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Header/title text size
pub const FONT_SIZE_HEADER: f32 = 22.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 16.0;

// =============================================================================
// Card Colors
// =============================================================================

/// Resting card background
pub const CARD_BG: Color = Color::new(0.176, 0.176, 0.196, 1.0); // ~45, 45, 50

/// Card border
pub const CARD_BORDER: Color = Color::new(0.314, 0.314, 0.314, 1.0); // ~80, 80, 80

/// Card background while lifted by a drag
pub const CARD_LIFTED_BG: Color = Color::new(0.235, 0.314, 0.392, 1.0); // ~60, 80, 100

/// Drop shadow under a lifted card
pub const CARD_SHADOW: Color = Color::new(0.0, 0.0, 0.0, 0.2);

/// Accent color (cyan)
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);
