//! Spring easing for card positions
//!
//! The slot algorithm never depends on this module; it only turns target
//! offsets into smooth on-screen motion.

use crate::config::GridConfig;

/// Damped spring along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    stiffness: f32,
    damping: f32,
    /// Rest threshold; velocity must also be under twice this
    precision: f32,
}

impl Spring {
    /// Default precision for pixel offsets
    const PIXEL_PRECISION: f32 = 0.5;
    /// Largest integration step; longer frames are split
    const MAX_STEP: f32 = 1.0 / 120.0;

    pub fn new(value: f32, stiffness: f32, damping: f32) -> Self {
        Self { value, velocity: 0.0, target: value, stiffness, damping, precision: Self::PIXEL_PRECISION }
    }

    /// Settle threshold for values that are not pixels (e.g. scale)
    pub fn with_precision(mut self, precision: f32) -> Self {
        self.precision = precision;
        self
    }

    /// Jump to a value with no animation
    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance by `dt` seconds (semi-implicit Euler, unit mass)
    pub fn step(&mut self, dt: f32) {
        if self.at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(Self::MAX_STEP);
            let accel = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn at_rest(&self) -> bool {
        (self.value - self.target).abs() < self.precision && self.velocity.abs() < self.precision * 2.0
    }
}

/// On-screen motion of one card
#[derive(Debug, Clone)]
pub struct ItemMotion {
    pub x: Spring,
    pub y: Spring,
    /// Scale: 1.0 at rest, `lift_scale` while dragged
    pub lift: Spring,
    /// Position-map revision this card last retargeted against
    pub seen_revision: u64,
    /// When true the card follows the pointer directly instead of its springs
    pub tracking_pointer: bool,
}

impl ItemMotion {
    pub fn new(offset: (f32, f32), config: &GridConfig) -> Self {
        let (k, d) = (config.spring_stiffness, config.spring_damping);
        Self {
            x: Spring::new(offset.0, k, d),
            y: Spring::new(offset.1, k, d),
            lift: Spring::new(1.0, k, d).with_precision(0.001),
            seen_revision: 0,
            tracking_pointer: false,
        }
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.x.value, self.y.value)
    }

    /// Ease toward a new resting offset
    pub fn retarget(&mut self, offset: (f32, f32)) {
        self.x.target = offset.0;
        self.y.target = offset.1;
    }

    /// Place the card directly (dragged card following the pointer)
    pub fn place(&mut self, offset: (f32, f32)) {
        self.x.snap(offset.0);
        self.y.snap(offset.1);
    }

    pub fn step(&mut self, dt: f32) {
        if !self.tracking_pointer {
            self.x.step(dt);
            self.y.step(dt);
        }
        self.lift.step(dt);
    }

    pub fn at_rest(&self) -> bool {
        self.x.at_rest() && self.y.at_rest() && self.lift.at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_converges() {
        let mut spring = Spring::new(0.0, 200.0, 20.0);
        spring.target = 100.0;
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.at_rest());
        assert!((spring.value - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_spring_long_frame_is_stable() {
        let mut spring = Spring::new(0.0, 200.0, 20.0);
        spring.target = 50.0;
        spring.step(2.0);
        assert!(spring.value.is_finite());
        assert!((spring.value - 50.0).abs() < 1.0);
    }

    #[test]
    fn test_tracking_pointer_ignores_springs() {
        let mut motion = ItemMotion::new((0.0, 0.0), &GridConfig::default());
        motion.tracking_pointer = true;
        motion.retarget((100.0, 100.0));
        motion.step(0.5);
        assert_eq!(motion.offset(), (0.0, 0.0));

        motion.place((42.0, 7.0));
        assert_eq!(motion.offset(), (42.0, 7.0));
    }

    #[test]
    fn test_lift_animates_instead_of_snapping() {
        let mut motion = ItemMotion::new((0.0, 0.0), &GridConfig::default());
        motion.lift.target = 1.05;
        assert!(!motion.at_rest());
        motion.step(1.0 / 60.0);
        assert!(motion.lift.value > 1.0 && motion.lift.value < 1.05);
    }
}
