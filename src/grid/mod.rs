//! Sortable two-column grid
//!
//! `SortableGrid` owns the caller's items and the position map, lays the
//! cards out by slot, and routes pointer input to a single active
//! [`DragController`]. When a drag completes it reorders the items by final
//! slot and hands the new list to the `on_order_change` callback, once per
//! gesture.
//!
//! Pointer coordinates are local to the grid's viewport: (0, 0) is the top
//! left of the header area, before scrolling.
//!
//! Key types:
//! - `PositionMap`: id -> slot, always a permutation of `0..len`
//! - `GridGeometry`: slot <-> pixel mapping
//! - `DragController`: long-press gesture state machine
//! - `ItemMotion`: spring easing toward each card's slot

pub mod drag;
pub mod geometry;
pub mod motion;
pub mod positions;
pub mod view;

pub use drag::{DragController, DragEvent, DragPhase, DragSession};
pub use geometry::GridGeometry;
pub use motion::{ItemMotion, Spring};
pub use positions::PositionMap;
pub use view::{draw_grid, GridView};

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::GridConfig;
use crate::error::GridError;
use crate::ui::Rect;

/// Anything the grid can order. The id must be unique and stable.
pub trait GridItem {
    fn id(&self) -> &str;
}

/// What a pointer event did to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridResponse {
    /// Event not relevant to the grid
    Ignored,
    /// Pointer went down on a card, waiting for the long press
    Pressed,
    /// Content scrolled
    Scrolled,
    /// Long press satisfied, card lifted
    DragStarted,
    /// Dragged card crossed into a new slot
    Reordered,
    /// Dragged card moved within its slot
    Dragging,
    /// Drag completed; the order change was emitted
    Dropped,
    /// Pressed and released without arming
    Tapped,
}

/// A card ready to draw
#[derive(Debug)]
pub struct DrawItem<'a, T> {
    pub item: &'a T,
    pub slot: usize,
    /// Viewport-local rect, lift scale applied
    pub rect: Rect,
    pub lifted: bool,
    /// 0.0 at rest to 1.0 fully lifted, eased with the lift spring
    pub lift_amount: f32,
}

type OrderCallback<T> = Box<dyn FnMut(Vec<T>)>;

/// Drag-to-reorder grid container
pub struct SortableGrid<T> {
    items: Vec<T>,
    positions: PositionMap,
    motions: HashMap<String, ItemMotion>,
    geometry: GridGeometry,
    config: GridConfig,
    /// At most one controller, so the position map has a single writer
    drag: Option<DragController>,
    header_height: f32,
    viewport_height: f32,
    scroll_offset: f32,
    /// Last pointer y while the gesture scrolls the content
    scroll_anchor: Option<f32>,
    on_order_change: Option<OrderCallback<T>>,
}

impl<T: GridItem + Clone> SortableGrid<T> {
    /// Create a grid from the caller's items in their current order
    pub fn new(items: Vec<T>, viewport: Rect, config: GridConfig) -> Result<Self, GridError> {
        let positions = PositionMap::from_ids(items.iter().map(|item| item.id()))?;
        let geometry = GridGeometry::for_width(viewport.w, &config);
        let mut grid = Self {
            items,
            positions,
            motions: HashMap::new(),
            geometry,
            config,
            drag: None,
            header_height: 0.0,
            viewport_height: viewport.h,
            scroll_offset: 0.0,
            scroll_anchor: None,
            on_order_change: None,
        };
        grid.reset_motions();
        Ok(grid)
    }

    /// Register the callback that receives the reordered list after each drag
    pub fn on_order_change(mut self, callback: impl FnMut(Vec<T>) + 'static) -> Self {
        self.on_order_change = Some(Box::new(callback));
        self
    }

    /// Reserve space above the grid for a header element
    pub fn with_header(mut self, height: f32) -> Self {
        self.header_height = height.max(0.0);
        self.clamp_scroll();
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.as_ref().map_or(DragPhase::Idle, |drag| drag.phase())
    }

    /// Id of the card held by the active gesture
    pub fn active_id(&self) -> Option<&str> {
        self.drag.as_ref().map(|drag| drag.item_id())
    }

    /// Items sorted by current slot
    pub fn ordered_items(&self) -> Vec<T> {
        let mut ordered = self.items.clone();
        ordered.sort_by_key(|item| self.positions.get(item.id()).unwrap_or(usize::MAX));
        ordered
    }

    /// Header plus grid content height, used to size the scroll area
    pub fn content_height(&self) -> f32 {
        self.header_height + self.geometry.content_height(self.items.len())
    }

    fn max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    // ========================================================================
    // Item list and viewport
    // ========================================================================

    /// Replace the caller's items.
    ///
    /// When the identity set changes the position map is rebuilt from the
    /// new list order and any gesture in flight is dropped. Otherwise the
    /// current slots are kept and only the payloads are swapped.
    pub fn set_items(&mut self, items: Vec<T>) -> Result<(), GridError> {
        let fresh = PositionMap::from_ids(items.iter().map(|item| item.id()))?;
        let same_identities = fresh.len() == self.positions.len()
            && items.iter().all(|item| self.positions.contains(item.id()));

        self.items = items;
        if !same_identities {
            debug!(count = self.items.len(), "item set changed, resetting positions");
            self.positions = fresh;
            self.drag = None;
            self.scroll_anchor = None;
            self.reset_motions();
            self.clamp_scroll();
        }
        Ok(())
    }

    /// Resize to a new viewport. A width change relays all cards out.
    pub fn set_viewport(&mut self, viewport: Rect) {
        let geometry = GridGeometry::for_width(viewport.w, &self.config);
        self.viewport_height = viewport.h;
        if geometry != self.geometry {
            self.geometry = geometry;
            self.reset_motions();
            let armed = self.drag.as_ref().filter(|drag| drag.is_armed()).map(|drag| drag.item_id().to_string());
            if let Some(id) = armed {
                self.lift(&id);
            }
        }
        self.clamp_scroll();
    }

    /// Snap every card to its slot with no animation
    fn reset_motions(&mut self) {
        self.motions.clear();
        let revision = self.positions.revision();
        for item in &self.items {
            let slot = self.positions.get(item.id()).unwrap_or(0);
            let mut motion = ItemMotion::new(self.geometry.slot_to_offset(slot), &self.config);
            motion.seen_revision = revision;
            self.motions.insert(item.id().to_string(), motion);
        }
    }

    /// Retarget every resting card whose slot changed since it last looked
    fn sync_motions(&mut self) {
        let revision = self.positions.revision();
        for (id, motion) in self.motions.iter_mut() {
            if motion.seen_revision == revision {
                continue;
            }
            motion.seen_revision = revision;
            if motion.tracking_pointer {
                continue;
            }
            if let Some(slot) = self.positions.get(id) {
                motion.retarget(self.geometry.slot_to_offset(slot));
            }
        }
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    /// Scroll by a pixel delta (positive moves content up)
    pub fn scroll_by(&mut self, delta: f32) -> GridResponse {
        if self.drag.as_ref().is_some_and(|drag| drag.is_armed()) {
            return GridResponse::Ignored;
        }
        let before = self.scroll_offset;
        self.scroll_offset += delta;
        self.clamp_scroll();
        if (self.scroll_offset - before).abs() > f32::EPSILON {
            GridResponse::Scrolled
        } else {
            GridResponse::Ignored
        }
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    /// Viewport-local point to grid content coordinates
    fn to_content(&self, point: (f32, f32)) -> (f32, f32) {
        (point.0, point.1 + self.scroll_offset - self.header_height)
    }

    fn scroll_with_pointer(&mut self, y: f32) -> GridResponse {
        let Some(anchor) = self.scroll_anchor else {
            return GridResponse::Ignored;
        };
        self.scroll_anchor = Some(y);
        match self.scroll_by(anchor - y) {
            // Still a scroll gesture even when pinned at an edge
            GridResponse::Ignored => GridResponse::Scrolled,
            other => other,
        }
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    /// Card whose resting cell contains a content-space point
    fn hit_test(&self, content: (f32, f32)) -> Option<String> {
        self.items.iter().find_map(|item| {
            let slot = self.positions.get(item.id())?;
            self.geometry
                .cell_rect(slot)
                .contains(content.0, content.1)
                .then(|| item.id().to_string())
        })
    }

    /// Pointer went down at a viewport-local point
    pub fn pointer_down(&mut self, point: (f32, f32), now: f64) -> GridResponse {
        // A new press ends any settle animation; the order is already final
        if let Some(drag) = self.drag.take() {
            if let Some(motion) = self.motions.get_mut(drag.item_id()) {
                motion.tracking_pointer = false;
            }
        }

        self.scroll_anchor = Some(point.1);
        if self.items.is_empty() {
            return GridResponse::Ignored;
        }

        let content = self.to_content(point);
        match self.hit_test(content) {
            Some(id) => {
                debug!(%id, "press on card");
                self.drag = Some(DragController::press(id, content, now, &self.config));
                GridResponse::Pressed
            }
            None => GridResponse::Ignored,
        }
    }

    /// Pointer moved to a viewport-local point
    pub fn pointer_move(&mut self, point: (f32, f32), now: f64) -> GridResponse {
        let content = self.to_content(point);

        let Some(drag) = self.drag.as_mut() else {
            return self.scroll_with_pointer(point.1);
        };
        if matches!(drag.phase(), DragPhase::Idle | DragPhase::Settling) {
            return self.scroll_with_pointer(point.1);
        }

        let event = match drag.pointer_move(content, now, &mut self.positions, &self.geometry) {
            Ok(event) => event,
            // The dragged id vanished from the map; drop the gesture
            Err(_) => {
                self.drag = None;
                return GridResponse::Ignored;
            }
        };
        let id = drag.item_id().to_string();

        match event {
            DragEvent::Waiting | DragEvent::Ignored => GridResponse::Pressed,
            DragEvent::BecameScroll => {
                self.drag = None;
                self.scroll_with_pointer(point.1)
            }
            DragEvent::Moved { armed_now, reordered, live_offset } => {
                if armed_now {
                    self.lift(&id);
                }
                if let Some(motion) = self.motions.get_mut(&id) {
                    motion.place(live_offset);
                }
                if reordered {
                    self.sync_motions();
                }
                if armed_now {
                    GridResponse::DragStarted
                } else if reordered {
                    GridResponse::Reordered
                } else {
                    GridResponse::Dragging
                }
            }
        }
    }

    /// Pointer released
    pub fn pointer_up(&mut self, _now: f64) -> GridResponse {
        self.scroll_anchor = None;
        let Some(drag) = self.drag.as_mut() else {
            return GridResponse::Ignored;
        };
        if matches!(drag.phase(), DragPhase::Idle | DragPhase::Settling) {
            return GridResponse::Ignored;
        }

        if drag.release() {
            let id = drag.item_id().to_string();
            self.drop_card(&id);
            GridResponse::Dropped
        } else {
            self.drag = None;
            GridResponse::Tapped
        }
    }

    /// Host interrupted the gesture.
    ///
    /// An armed drag keeps whatever order it reached and completes like a
    /// release. A pending press is discarded.
    pub fn cancel(&mut self, now: f64) -> GridResponse {
        match self.drag_phase() {
            DragPhase::Armed => self.pointer_up(now),
            DragPhase::Pending => {
                self.drag = None;
                self.scroll_anchor = None;
                GridResponse::Ignored
            }
            _ => {
                self.scroll_anchor = None;
                GridResponse::Ignored
            }
        }
    }

    /// Per-frame update: arms a held press once the delay elapses and
    /// advances the card springs by `dt` seconds
    pub fn tick(&mut self, now: f64, dt: f32) -> GridResponse {
        let mut response = GridResponse::Ignored;

        if let Some(drag) = self.drag.as_mut() {
            if drag.phase() == DragPhase::Pending {
                let offset = self
                    .positions
                    .get(drag.item_id())
                    .map(|slot| self.geometry.slot_to_offset(slot));
                if let Some(offset) = offset {
                    if drag.poll(now, offset) {
                        let id = drag.item_id().to_string();
                        self.lift(&id);
                        response = GridResponse::DragStarted;
                    }
                }
            }
        }

        self.sync_motions();
        for motion in self.motions.values_mut() {
            motion.step(dt);
        }

        if let Some(drag) = self.drag.as_mut() {
            if drag.phase() == DragPhase::Settling {
                let settled = self.motions.get(drag.item_id()).map_or(true, |motion| motion.at_rest());
                if settled {
                    drag.finish_settling();
                    self.drag = None;
                }
            }
        }

        response
    }

    fn lift(&mut self, id: &str) {
        if let Some(motion) = self.motions.get_mut(id) {
            motion.tracking_pointer = true;
            motion.lift.target = self.config.lift_scale;
        }
    }

    /// Release the dragged card into its resolved slot and emit the new order
    fn drop_card(&mut self, id: &str) {
        if let Some(slot) = self.positions.get(id) {
            let target = self.geometry.slot_to_offset(slot);
            if let Some(motion) = self.motions.get_mut(id) {
                motion.tracking_pointer = false;
                motion.retarget(target);
                motion.lift.target = 1.0;
            }
        }
        self.sync_motions();
        self.emit_order_change();
    }

    fn emit_order_change(&mut self) {
        let ordered = self.ordered_items();
        self.items = ordered.clone();
        info!(count = ordered.len(), "order changed");
        if let Some(callback) = self.on_order_change.as_mut() {
            callback(ordered);
        }
    }

    // ========================================================================
    // Drawing support
    // ========================================================================

    /// Cards in paint order with their animated viewport-local rects.
    /// The active card comes last so it draws on top.
    pub fn items_in_draw_order(&self) -> Vec<DrawItem<'_, T>> {
        let active = self.active_id();
        let top = self.header_height - self.scroll_offset;

        let mut cards: Vec<DrawItem<'_, T>> = self
            .items
            .iter()
            .filter_map(|item| {
                let slot = self.positions.get(item.id())?;
                let motion = self.motions.get(item.id())?;
                let (x, y) = motion.offset();
                let rect = Rect::new(x, y + top, self.geometry.cell_width, self.geometry.cell_height)
                    .scale_about_center(motion.lift.value);
                let lifted = active == Some(item.id()) && self.drag_phase() == DragPhase::Armed;
                let lift_span = self.config.lift_scale - 1.0;
                let lift_amount = if lift_span.abs() > f32::EPSILON {
                    ((motion.lift.value - 1.0) / lift_span).clamp(0.0, 1.0)
                } else if lifted {
                    1.0
                } else {
                    0.0
                };
                Some(DrawItem { item, slot, rect, lifted, lift_amount })
            })
            .collect();

        cards.sort_by_key(|card| (active == Some(card.item.id()), card.slot));
        cards
    }
}
