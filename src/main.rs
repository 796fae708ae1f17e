//! notegrid demo: a notes board with drag-to-reorder cards
//!
//! Long-press a card (250ms by default) to lift it, drag, release. The new
//! order is saved to the data directory after every completed drag.

use std::cell::RefCell;
use std::rc::Rc;

use macroquad::prelude::*;
use tracing::{error, info, warn};

use notegrid::grid::{draw_grid, GridView};
use notegrid::store::{sample_notes, Note, NoteStore};
use notegrid::ui::{theme, PointerState, Rect};
use notegrid::{GridConfig, SortableGrid, VERSION};

/// Height reserved above the grid for the board title
const HEADER_HEIGHT: f32 = 56.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("notegrid v{}", VERSION),
        window_width: 420,
        window_height: 760,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

/// Load the saved board, seeding it with sample notes on first run
fn load_notes(store: Option<&NoteStore>) -> Vec<Note> {
    let Some(store) = store else {
        return sample_notes();
    };
    match store.load() {
        Ok(notes) if !notes.is_empty() => {
            info!(count = notes.len(), path = %store.path().display(), "loaded notes");
            notes
        }
        Ok(_) => sample_notes(),
        Err(e) => {
            warn!(error = %e, "could not read saved notes, starting from samples");
            sample_notes()
        }
    }
}

/// Title and first body line, wrapped to the card width
fn draw_note(note: &Note, rect: Rect, lifted: bool) {
    let inner = rect.pad(12.0);
    let title_color = if lifted { WHITE } else { theme::TEXT_COLOR };
    draw_text(&note.title, inner.x.round(), (inner.y + 18.0).round(), theme::FONT_SIZE_HEADER, title_color);

    let mut y = inner.y + 44.0;
    let mut line = String::new();
    for word in note.body.split_whitespace() {
        let candidate = if line.is_empty() { word.to_string() } else { format!("{} {}", line, word) };
        let width = measure_text(&candidate, None, theme::FONT_SIZE_CONTENT as u16, 1.0).width;
        if width > inner.w && !line.is_empty() {
            draw_text(&line, inner.x.round(), y.round(), theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
            y += theme::FONT_SIZE_CONTENT + 4.0;
            if y > inner.bottom() {
                return;
            }
            line = word.to_string();
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        draw_text(&line, inner.x.round(), y.round(), theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
    }
}

fn draw_header(rect: Rect) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::HEADER_COLOR);
    draw_text("Notes", (rect.x + 16.0).round(), (rect.y + 36.0).round(), theme::FONT_SIZE_HEADER + 6.0, WHITE);
    let hint = "hold to drag";
    let dims = measure_text(hint, None, theme::FONT_SIZE_CONTENT as u16, 1.0);
    draw_text(hint, (rect.right() - dims.width - 16.0).round(), (rect.y + 34.0).round(), theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    let config = GridConfig::load_or_default(GridConfig::default_path().as_deref());

    let store = match NoteStore::default_location() {
        Ok(store) => Some(store),
        Err(e) => {
            warn!(error = %e, "notes will not be saved");
            None
        }
    };
    let notes = load_notes(store.as_ref());

    // Order changes land here; saving happens outside the grid's borrow
    let pending_order: Rc<RefCell<Option<Vec<Note>>>> = Rc::new(RefCell::new(None));
    let sink = pending_order.clone();

    let viewport = Rect::screen(screen_width(), screen_height());
    let mut grid = match SortableGrid::new(notes, viewport, config.clone()) {
        Ok(grid) => grid,
        Err(e) => {
            error!(error = %e, "saved notes are inconsistent, starting from samples");
            match SortableGrid::new(sample_notes(), viewport, config) {
                Ok(grid) => grid,
                Err(e) => {
                    error!(error = %e, "sample notes rejected");
                    return;
                }
            }
        }
    }
    .with_header(HEADER_HEIGHT)
    .on_order_change(move |ordered| {
        *sink.borrow_mut() = Some(ordered);
    });

    let mut view = GridView::new(draw_note)
        .header(draw_header)
        .empty(|rect| notegrid::grid::view::draw_empty_placeholder(rect, "No notes yet"));

    info!("=== notegrid v{} ===", VERSION);

    loop {
        clear_background(theme::BG_COLOR);

        let area = Rect::screen(screen_width(), screen_height());
        let pointer = PointerState::sample();
        draw_grid(&mut grid, &mut view, area, &pointer, get_time(), get_frame_time());

        if let Some(ordered) = pending_order.borrow_mut().take() {
            if let Some(store) = store.as_ref() {
                if let Err(e) = store.save(&ordered) {
                    error!(error = %e, "failed to save note order");
                }
            }
        }

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        next_frame().await
    }
}
