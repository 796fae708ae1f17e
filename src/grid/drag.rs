//! Drag controller for one card
//!
//! Lifecycle of a gesture:
//! - `Pending`: pointer is down on a card, long-press delay not yet elapsed.
//!   Moving past the touch slop here hands the gesture to scrolling.
//! - `Armed`: the card follows the pointer and reorders the grid as it
//!   crosses cell boundaries.
//! - `Settling`: pointer released, card springs into its resolved slot.
//!   Purely visual; the reorder is already final.
//!
//! The controller is the only writer of the position map while it is armed.

use tracing::debug;

use super::geometry::GridGeometry;
use super::positions::PositionMap;
use crate::config::GridConfig;
use crate::error::GridError;

/// Gesture phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Pending,
    Armed,
    Settling,
}

/// Transient per-gesture state, created when the controller arms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Card offset when the drag armed (grid content coords)
    pub start_offset: (f32, f32),
    /// Card offset following the pointer
    pub live_offset: (f32, f32),
    /// Pointer position the cumulative delta is measured from
    pub pointer_origin: (f32, f32),
    pub active: bool,
}

impl DragSession {
    /// Cumulative pointer delta since the gesture began
    pub fn delta(&self) -> (f32, f32) {
        (
            self.live_offset.0 - self.start_offset.0,
            self.live_offset.1 - self.start_offset.1,
        )
    }
}

/// Outcome of feeding a pointer move to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Still holding, delay not elapsed
    Waiting,
    /// Moved past the slop before arming; the gesture is a scroll now
    BecameScroll,
    /// Card moved while armed
    Moved {
        armed_now: bool,
        reordered: bool,
        live_offset: (f32, f32),
    },
    /// Controller not accepting moves (idle or settling)
    Ignored,
}

/// Per-item gesture handler
#[derive(Debug, Clone)]
pub struct DragController {
    item_id: String,
    phase: DragPhase,
    press_point: (f32, f32),
    press_time: f64,
    session: Option<DragSession>,
    long_press: f64,
    touch_slop: f32,
}

impl DragController {
    /// Start a pending gesture on `item_id` (pointer went down at `press_point`)
    pub fn press(item_id: impl Into<String>, press_point: (f32, f32), now: f64, config: &GridConfig) -> Self {
        Self {
            item_id: item_id.into(),
            phase: DragPhase::Pending,
            press_point,
            press_time: now,
            session: None,
            long_press: config.long_press_secs(),
            touch_slop: config.touch_slop,
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_armed(&self) -> bool {
        self.phase == DragPhase::Armed
    }

    fn delay_elapsed(&self, now: f64) -> bool {
        now - self.press_time >= self.long_press
    }

    /// Arm if still pending and the long-press delay has elapsed.
    /// `item_offset` is where the card rests right now.
    pub fn poll(&mut self, now: f64, item_offset: (f32, f32)) -> bool {
        if self.phase != DragPhase::Pending || !self.delay_elapsed(now) {
            return false;
        }
        self.phase = DragPhase::Armed;
        self.session = Some(DragSession {
            start_offset: item_offset,
            live_offset: item_offset,
            pointer_origin: self.press_point,
            active: true,
        });
        debug!(id = %self.item_id, "drag armed");
        true
    }

    /// Feed a pointer move (grid content coords).
    ///
    /// While armed, recomputes the target slot from the live offset and
    /// applies the shift-the-range reorder to `positions`.
    pub fn pointer_move(
        &mut self,
        point: (f32, f32),
        now: f64,
        positions: &mut PositionMap,
        geometry: &GridGeometry,
    ) -> Result<DragEvent, GridError> {
        let mut armed_now = false;
        match self.phase {
            DragPhase::Idle | DragPhase::Settling => return Ok(DragEvent::Ignored),
            DragPhase::Pending => {
                if !self.delay_elapsed(now) {
                    let dx = point.0 - self.press_point.0;
                    let dy = point.1 - self.press_point.1;
                    if dx.hypot(dy) > self.touch_slop {
                        debug!(id = %self.item_id, "press moved before long-press, scrolling");
                        self.phase = DragPhase::Idle;
                        return Ok(DragEvent::BecameScroll);
                    }
                    return Ok(DragEvent::Waiting);
                }
                let slot = positions
                    .get(&self.item_id)
                    .ok_or_else(|| GridError::UnknownId(self.item_id.clone()))?;
                armed_now = self.poll(now, geometry.slot_to_offset(slot));
            }
            DragPhase::Armed => {}
        }

        let Some(session) = self.session.as_mut() else {
            return Ok(DragEvent::Ignored);
        };
        session.live_offset = (
            session.start_offset.0 + (point.0 - session.pointer_origin.0),
            session.start_offset.1 + (point.1 - session.pointer_origin.1),
        );
        let live_offset = session.live_offset;

        let target = geometry.offset_to_slot(live_offset.0, live_offset.1, positions.len());
        let reordered = positions.move_to(&self.item_id, target)?;
        if reordered {
            debug!(id = %self.item_id, target, "slot changed");
        }

        Ok(DragEvent::Moved { armed_now, reordered, live_offset })
    }

    /// Pointer released or gesture cancelled.
    ///
    /// Returns true when an armed drag completed (the order is final and the
    /// card should settle). A release before arming is a tap.
    pub fn release(&mut self) -> bool {
        match self.phase {
            DragPhase::Armed => {
                self.phase = DragPhase::Settling;
                if let Some(session) = self.session.as_mut() {
                    session.active = false;
                }
                debug!(id = %self.item_id, "drag released");
                true
            }
            _ => {
                self.phase = DragPhase::Idle;
                false
            }
        }
    }

    /// Settle animation finished
    pub fn finish_settling(&mut self) {
        if self.phase == DragPhase::Settling {
            self.phase = DragPhase::Idle;
            self.session = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PositionMap, GridGeometry, GridConfig) {
        let config = GridConfig::default();
        let geometry = GridGeometry::for_width(400.0, &config);
        let positions = PositionMap::from_ids(["A", "B", "C", "D"]).unwrap();
        (positions, geometry, config)
    }

    #[test]
    fn test_hold_then_arm() {
        let (mut positions, geometry, config) = setup();
        let mut drag = DragController::press("A", (50.0, 50.0), 0.0, &config);
        assert_eq!(drag.phase(), DragPhase::Pending);

        // Small jitter under the slop keeps waiting
        let event = drag.pointer_move((53.0, 52.0), 0.1, &mut positions, &geometry).unwrap();
        assert_eq!(event, DragEvent::Waiting);

        assert!(!drag.poll(0.2, geometry.slot_to_offset(0)));
        assert!(drag.poll(0.25, geometry.slot_to_offset(0)));
        assert!(drag.is_armed());
        assert_eq!(drag.session().unwrap().start_offset, (16.0, 0.0));
    }

    #[test]
    fn test_early_move_becomes_scroll() {
        let (mut positions, geometry, config) = setup();
        let mut drag = DragController::press("A", (50.0, 50.0), 0.0, &config);
        let event = drag.pointer_move((50.0, 120.0), 0.1, &mut positions, &geometry).unwrap();
        assert_eq!(event, DragEvent::BecameScroll);
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert!(!drag.release());

        // Nothing moved
        assert_eq!(positions.ordered_ids(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_move_after_delay_arms_and_reorders() {
        let (mut positions, geometry, config) = setup();
        let mut drag = DragController::press("A", (50.0, 50.0), 0.0, &config);

        // One column right: slot 1
        let event = drag.pointer_move((50.0 + 188.0, 50.0), 0.3, &mut positions, &geometry).unwrap();
        assert_eq!(
            event,
            DragEvent::Moved { armed_now: true, reordered: true, live_offset: (16.0 + 188.0, 0.0) }
        );
        assert_eq!(positions.ordered_ids(), vec!["B", "A", "C", "D"]);
        assert_eq!(drag.session().unwrap().delta(), (188.0, 0.0));

        // Hovering within the same cell does not reorder again
        let event = drag.pointer_move((50.0 + 190.0, 55.0), 0.35, &mut positions, &geometry).unwrap();
        assert!(matches!(event, DragEvent::Moved { armed_now: false, reordered: false, .. }));
    }

    #[test]
    fn test_release_settles_then_idles() {
        let (mut positions, geometry, config) = setup();
        let mut drag = DragController::press("A", (50.0, 50.0), 0.0, &config);
        drag.poll(0.3, geometry.slot_to_offset(0));
        drag.pointer_move((50.0, 250.0), 0.4, &mut positions, &geometry).unwrap();

        assert!(drag.release());
        assert_eq!(drag.phase(), DragPhase::Settling);
        assert!(!drag.session().unwrap().active);
        assert_eq!(
            drag.pointer_move((0.0, 0.0), 0.5, &mut positions, &geometry).unwrap(),
            DragEvent::Ignored
        );

        drag.finish_settling();
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert!(drag.session().is_none());
    }

    #[test]
    fn test_tap_is_not_a_drag() {
        let config = GridConfig::default();
        let mut drag = DragController::press("A", (0.0, 0.0), 0.0, &config);
        assert!(!drag.release());
        assert_eq!(drag.phase(), DragPhase::Idle);
    }
}
