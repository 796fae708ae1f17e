//! Pointer sampling for grid interaction
//!
//! Mouse and touch are folded into a single pointer. The first active touch
//! wins over the mouse, so a phone and a desktop drive the grid the same way.

use macroquad::prelude::*;
use super::Rect;

/// Single-pointer state for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub pressed: bool,   // Just pressed this frame
    pub released: bool,  // Just released this frame
    pub cancelled: bool, // Host interrupted the gesture (touch cancel)
    pub scroll: f32,     // Scroll wheel delta
}

impl PointerState {
    /// Sample the pointer from macroquad's mouse and touch input
    pub fn sample() -> Self {
        let wheel = mouse_wheel().1;
        if let Some(touch) = touches().into_iter().next() {
            return Self {
                x: touch.position.x,
                y: touch.position.y,
                down: matches!(touch.phase, TouchPhase::Started | TouchPhase::Moved | TouchPhase::Stationary),
                pressed: matches!(touch.phase, TouchPhase::Started),
                released: matches!(touch.phase, TouchPhase::Ended),
                cancelled: matches!(touch.phase, TouchPhase::Cancelled),
                scroll: wheel,
            };
        }

        let (x, y) = mouse_position();
        Self {
            x,
            y,
            down: is_mouse_button_down(MouseButton::Left),
            pressed: is_mouse_button_pressed(MouseButton::Left),
            released: is_mouse_button_released(MouseButton::Left),
            cancelled: false,
            scroll: wheel,
        }
    }

    /// Pointer position as tuple
    pub fn pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Check if pointer is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if pointer just went down inside a rect
    pub fn pressed_in(&self, rect: &Rect) -> bool {
        self.pressed && rect.contains(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_in() {
        let area = Rect::new(0.0, 0.0, 100.0, 100.0);
        let pointer = PointerState { x: 10.0, y: 10.0, pressed: true, down: true, ..Default::default() };
        assert!(pointer.pressed_in(&area));
        assert!(pointer.inside(&area));

        let outside = PointerState { x: 150.0, ..pointer };
        assert!(!outside.pressed_in(&area));
        assert_eq!(outside.pos(), (150.0, 10.0));
    }
}
