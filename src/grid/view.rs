//! Drawing and input routing for `SortableGrid` with macroquad
//!
//! Immediate mode: call [`draw_grid`] once per frame with the sampled
//! pointer. Cards are drawn by the caller's render closure at their
//! animated rects; the grid itself only draws the card frame and shadow.

use macroquad::prelude::*;

use super::{GridItem, GridResponse, SortableGrid};
use crate::ui::{theme, PointerState, Rect};

/// Pixels scrolled per mouse wheel notch
const WHEEL_STEP: f32 = 40.0;

/// Shadow offset under a lifted card
const SHADOW_OFFSET: f32 = 6.0;

const CORNER_RADIUS: f32 = 10.0;

/// Caller-supplied visuals for one grid
pub struct GridView<'a, T> {
    render_item: Box<dyn FnMut(&T, Rect, bool) + 'a>,
    header: Option<Box<dyn FnMut(Rect) + 'a>>,
    empty: Option<Box<dyn FnMut(Rect) + 'a>>,
}

impl<'a, T> GridView<'a, T> {
    /// `render_item(item, rect, lifted)` draws one card's content
    pub fn new(render_item: impl FnMut(&T, Rect, bool) + 'a) -> Self {
        Self {
            render_item: Box::new(render_item),
            header: None,
            empty: None,
        }
    }

    /// Drawn above the grid, in the space reserved by `SortableGrid::with_header`
    pub fn header(mut self, header: impl FnMut(Rect) + 'a) -> Self {
        self.header = Some(Box::new(header));
        self
    }

    /// Drawn instead of the grid when there are no items
    pub fn empty(mut self, empty: impl FnMut(Rect) + 'a) -> Self {
        self.empty = Some(Box::new(empty));
        self
    }
}

/// Feed one frame of pointer input to the grid
fn route_input<T: GridItem + Clone>(
    grid: &mut SortableGrid<T>,
    area: Rect,
    pointer: &PointerState,
    now: f64,
) -> GridResponse {
    let (x, y) = pointer.pos();
    let local = (x - area.x, y - area.y);

    if pointer.cancelled {
        return grid.cancel(now);
    }
    if pointer.pressed_in(&area) {
        return grid.pointer_down(local, now);
    }
    if pointer.pressed {
        return GridResponse::Ignored;
    }
    if pointer.released {
        return grid.pointer_up(now);
    }
    if pointer.down {
        return grid.pointer_move(local, now);
    }
    if pointer.scroll != 0.0 && pointer.inside(&area) {
        return grid.scroll_by(-pointer.scroll.signum() * WHEEL_STEP);
    }
    GridResponse::Ignored
}

/// Update and draw the grid inside `area`.
///
/// Returns the most significant thing that happened this frame.
pub fn draw_grid<T: GridItem + Clone>(
    grid: &mut SortableGrid<T>,
    view: &mut GridView<'_, T>,
    area: Rect,
    pointer: &PointerState,
    now: f64,
    dt: f32,
) -> GridResponse {
    grid.set_viewport(area);
    let input = route_input(grid, area, pointer, now);
    let ticked = grid.tick(now, dt);
    let response = if input == GridResponse::Ignored { ticked } else { input };

    draw_rectangle(area.x, area.y, area.w, area.h, theme::BG_COLOR);

    let header_height = grid.header_height();
    if header_height > 0.0 {
        let header_rect = Rect::new(area.x, area.y - grid.scroll_offset(), area.w, header_height);
        if header_rect.intersects(&area) {
            if let Some(header) = view.header.as_mut() {
                header(header_rect);
            }
        }
    }

    if grid.is_empty() {
        let body = area.remaining_after_top(header_height);
        match view.empty.as_mut() {
            Some(empty) => empty(body),
            None => draw_empty_placeholder(body, "Nothing here yet"),
        }
        return response;
    }

    for card in grid.items_in_draw_order() {
        let rect = card.rect.translate(area.x, area.y);
        if !rect.intersects(&area) {
            continue;
        }
        draw_card_frame(rect, card.lifted, card.lift_amount);
        (view.render_item)(card.item, rect, card.lifted);
    }

    response
}

/// Card background, border and drop shadow.
///
/// `lift_amount` (0.0 to 1.0) fades the shadow in and out with the lift scale.
pub fn draw_card_frame(rect: Rect, lifted: bool, lift_amount: f32) {
    if lift_amount > 0.0 {
        // Plain rect: overlapping translucent pieces would darken the corners
        let shadow = rect.translate(0.0, SHADOW_OFFSET * lift_amount).pad(CORNER_RADIUS * 0.5);
        let color = Color { a: theme::CARD_SHADOW.a * lift_amount, ..theme::CARD_SHADOW };
        draw_rectangle(shadow.x, shadow.y, shadow.w, shadow.h, color);
    }
    let border = if lifted { theme::ACCENT_COLOR } else { theme::CARD_BORDER };
    let bg = if lifted { theme::CARD_LIFTED_BG } else { theme::CARD_BG };
    draw_rounded_rect(rect, CORNER_RADIUS, border);
    draw_rounded_rect(rect.pad(1.0), CORNER_RADIUS - 1.0, bg);
}

/// Centered hint text for an empty grid
pub fn draw_empty_placeholder(rect: Rect, message: &str) {
    let dims = measure_text(message, None, theme::FONT_SIZE_CONTENT as u16, 1.0);
    let x = (rect.center_x() - dims.width * 0.5).round();
    let y = (rect.y + rect.h.min(240.0) * 0.5).round();
    draw_text(message, x, y, theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
fn draw_rounded_rect(rect: Rect, r: f32, color: Color) {
    let r = r.min(rect.w * 0.5).min(rect.h * 0.5).max(0.0);
    let (x, y, w, h) = (rect.x, rect.y, rect.w, rect.h);
    // Main body
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    // Corners (circles)
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}
