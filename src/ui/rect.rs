//! Rectangle type for grid layout and hit-testing

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if two rects overlap (used to skip cards scrolled out of view)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }

    /// Move by an offset
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Grow or shrink around the center (1.0 = unchanged)
    pub fn scale_about_center(&self, factor: f32) -> Self {
        let w = self.w * factor;
        let h = self.h * factor;
        Self::new(self.center_x() - w * 0.5, self.center_y() - h * 0.5, w, h)
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// Area below a top slice (body under a header)
    pub fn remaining_after_top(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y + h, self.w, self.h - h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
        // Right/bottom edges are exclusive so adjacent cells never both claim a point
        assert!(!r.contains(110.0, 40.0));
    }

    #[test]
    fn test_scale_about_center() {
        let r = Rect::new(0.0, 0.0, 100.0, 200.0);
        let lifted = r.scale_about_center(1.05);
        assert!((lifted.w - 105.0).abs() < 0.001);
        assert!((lifted.h - 210.0).abs() < 0.001);
        assert!((lifted.center_x() - r.center_x()).abs() < 0.001);
        assert!((lifted.center_y() - r.center_y()).abs() < 0.001);
    }

    #[test]
    fn test_intersects() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(viewport.intersects(&Rect::new(50.0, 90.0, 20.0, 20.0)));
        assert!(!viewport.intersects(&Rect::new(0.0, 100.0, 20.0, 20.0)));
    }

    #[test]
    fn test_remaining_after_top() {
        let r = Rect::new(0.0, 10.0, 100.0, 50.0);
        let rest = r.remaining_after_top(20.0);
        assert!((rest.y - 30.0).abs() < 0.001);
        assert!((rest.h - 30.0).abs() < 0.001);
    }
}
