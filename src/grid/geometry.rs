//! Slot <-> pixel mapping for the two-column grid
//!
//! Slots are row-major: row = slot / 2, column = slot % 2. Offsets are
//! relative to the top-left of the grid content (below any header).

use crate::config::GridConfig;
use crate::ui::Rect;

/// Number of columns in the grid
pub const COLUMNS: usize = 2;

/// Fixed cell layout for one grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub side_padding: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub gap: f32,
    pub vertical_gap: f32,
    pub footer_padding: f32,
}

impl GridGeometry {
    /// Derive the cell size from the available width: two cells, one gap,
    /// padding on both sides
    pub fn for_width(width: f32, config: &GridConfig) -> Self {
        let cell_width = ((width - config.side_padding * 2.0 - config.gap) / COLUMNS as f32).max(0.0);
        Self {
            side_padding: config.side_padding,
            cell_width,
            cell_height: config.cell_height,
            gap: config.gap,
            vertical_gap: config.vertical_gap,
            footer_padding: config.footer_padding,
        }
    }

    /// Horizontal distance between column origins
    fn column_pitch(&self) -> f32 {
        self.cell_width + self.gap
    }

    /// Vertical distance between row origins
    fn row_pitch(&self) -> f32 {
        self.cell_height + self.vertical_gap
    }

    /// Top-left pixel offset of a slot
    pub fn slot_to_offset(&self, slot: usize) -> (f32, f32) {
        let col = slot % COLUMNS;
        let row = slot / COLUMNS;
        (
            self.side_padding + col as f32 * self.column_pitch(),
            row as f32 * self.row_pitch(),
        )
    }

    /// Nearest existing slot for a pixel offset.
    ///
    /// Out-of-bounds offsets (above the grid, past the right edge, below the
    /// last row) clamp to a valid slot. Returns 0 when `item_count` is 0.
    pub fn offset_to_slot(&self, x: f32, y: f32, item_count: usize) -> usize {
        let col_pitch = self.column_pitch();
        let row_pitch = self.row_pitch();

        let col = if col_pitch > 0.0 {
            ((x - self.side_padding) / col_pitch).round().clamp(0.0, (COLUMNS - 1) as f32) as usize
        } else {
            0
        };
        // Clamped before widening so huge or infinite offsets cannot overflow
        let last_row = Self::row_count(item_count).saturating_sub(1);
        let row = if row_pitch > 0.0 {
            (y / row_pitch).round().clamp(0.0, last_row as f32) as usize
        } else {
            0
        };

        (row * COLUMNS + col).min(item_count.saturating_sub(1))
    }

    /// Cell rectangle of a slot in grid content coordinates
    pub fn cell_rect(&self, slot: usize) -> Rect {
        let (x, y) = self.slot_to_offset(slot);
        Rect::new(x, y, self.cell_width, self.cell_height)
    }

    /// Rows needed for `item_count` items
    pub fn row_count(item_count: usize) -> usize {
        item_count.div_ceil(COLUMNS)
    }

    /// Total scrollable height of the grid content, computed from the row
    /// count so the scroll area never has to measure its children
    pub fn content_height(&self, item_count: usize) -> f32 {
        Self::row_count(item_count) as f32 * self.row_pitch() + self.footer_padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GridGeometry {
        // 400px wide: cells are (400 - 32 - 8) / 2 = 180 wide
        GridGeometry::for_width(400.0, &GridConfig::default())
    }

    #[test]
    fn test_cell_width_from_viewport() {
        let g = geometry();
        assert!((g.cell_width - 180.0).abs() < 0.001);
        assert!((GridGeometry::for_width(10.0, &GridConfig::default()).cell_width).abs() < 0.001);
    }

    #[test]
    fn test_slot_to_offset() {
        let g = geometry();
        assert_eq!(g.slot_to_offset(0), (16.0, 0.0));
        assert_eq!(g.slot_to_offset(1), (16.0 + 188.0, 0.0));
        assert_eq!(g.slot_to_offset(2), (16.0, 192.0));
        assert_eq!(g.slot_to_offset(5), (16.0 + 188.0, 384.0));
    }

    #[test]
    fn test_round_trip_every_slot() {
        let g = geometry();
        for n in 1..=9 {
            for s in 0..n {
                let (x, y) = g.slot_to_offset(s);
                assert_eq!(g.offset_to_slot(x, y, n), s, "slot {} of {}", s, n);
            }
        }
    }

    #[test]
    fn test_offset_rounds_to_nearest_cell() {
        let g = geometry();
        // Just under half a column pitch to the right stays in column 0
        assert_eq!(g.offset_to_slot(16.0 + 93.0, 0.0, 4), 0);
        // Just over half a pitch moves to column 1
        assert_eq!(g.offset_to_slot(16.0 + 95.0, 0.0, 4), 1);
        // Over half a row pitch down moves to the next row
        assert_eq!(g.offset_to_slot(16.0, 100.0, 4), 2);
    }

    #[test]
    fn test_offset_clamps_out_of_bounds() {
        let g = geometry();
        // Above the grid top and left of the padding
        assert_eq!(g.offset_to_slot(-500.0, -500.0, 4), 0);
        // Far past the right edge stays in column 1
        assert_eq!(g.offset_to_slot(5000.0, 0.0, 4), 1);
        // Below the last row clamps to the last existing slot
        assert_eq!(g.offset_to_slot(16.0, 10_000.0, 3), 2);
        // Single item: everything maps to slot 0
        assert_eq!(g.offset_to_slot(5000.0, 5000.0, 1), 0);
        assert_eq!(g.offset_to_slot(5000.0, 5000.0, 0), 0);
    }

    #[test]
    fn test_extreme_offsets_do_not_overflow() {
        let g = geometry();
        assert_eq!(g.offset_to_slot(16.0, f32::INFINITY, 4), 2);
        assert_eq!(g.offset_to_slot(f32::INFINITY, f32::INFINITY, 4), 3);
        assert_eq!(g.offset_to_slot(16.0, f32::NEG_INFINITY, 4), 0);
        assert_eq!(g.offset_to_slot(16.0, f32::MAX, 5), 4);

        // A config with a vanishing row pitch turns every y into a huge row index
        let config = GridConfig { cell_height: 0.0, vertical_gap: 1e-30, ..GridConfig::default() };
        let degenerate = GridGeometry::for_width(400.0, &config);
        assert_eq!(degenerate.offset_to_slot(16.0, 50.0, 4), 2);
        assert_eq!(degenerate.offset_to_slot(16.0, 50.0, 0), 0);
    }

    #[test]
    fn test_content_height() {
        let g = geometry();
        assert_eq!(GridGeometry::row_count(0), 0);
        assert_eq!(GridGeometry::row_count(3), 2);
        assert_eq!(GridGeometry::row_count(4), 2);
        assert!((g.content_height(3) - (2.0 * 192.0 + 100.0)).abs() < 0.001);
        assert!((g.content_height(0) - 100.0).abs() < 0.001);
    }
}
