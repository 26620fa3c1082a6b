//! Where each board cell lands on screen.
//!
//! The same geometry drives rendering and mouse hit-testing, so a click
//! always maps to the cell drawn under the pointer.

use ratatui::layout::Rect;
use strictly_sos::Position;

/// Cell footprint when the board fits with borders.
const FRAMED_CELL: (u16, u16) = (5, 3);

/// Cell footprint for boards too large to frame.
const COMPACT_CELL: (u16, u16) = (3, 1);

/// Screen placement of an N×N board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Area the board was laid out in; cells outside it are clipped.
    pub area: Rect,
    /// Top-left corner of cell (0, 0).
    pub origin_x: u16,
    /// Top-left corner of cell (0, 0).
    pub origin_y: u16,
    /// Width of one cell in columns.
    pub cell_width: u16,
    /// Height of one cell in rows.
    pub cell_height: u16,
    /// Board side length.
    pub size: usize,
}

impl BoardGeometry {
    /// Centers a `size`×`size` board in `area`, framing cells when there is room.
    pub fn layout(area: Rect, size: usize) -> Self {
        let n = u16::try_from(size).unwrap_or(u16::MAX);
        let fits = |(w, h): (u16, u16)| {
            n.saturating_mul(w) <= area.width && n.saturating_mul(h) <= area.height
        };
        let (cell_width, cell_height) = if fits(FRAMED_CELL) {
            FRAMED_CELL
        } else {
            COMPACT_CELL
        };

        let board_width = n.saturating_mul(cell_width);
        let board_height = n.saturating_mul(cell_height);
        Self {
            area,
            origin_x: area.x + area.width.saturating_sub(board_width) / 2,
            origin_y: area.y + area.height.saturating_sub(board_height) / 2,
            cell_width,
            cell_height,
            size,
        }
    }

    /// Whether cells are drawn with borders.
    pub fn is_framed(&self) -> bool {
        (self.cell_width, self.cell_height) == FRAMED_CELL
    }

    /// Visible screen rectangle of a cell, or `None` if it is clipped away.
    pub fn cell_rect(&self, pos: Position) -> Option<Rect> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        let x = u32::from(self.origin_x) + pos.col as u32 * u32::from(self.cell_width);
        let y = u32::from(self.origin_y) + pos.row as u32 * u32::from(self.cell_height);
        let right = u32::from(self.area.x) + u32::from(self.area.width);
        let bottom = u32::from(self.area.y) + u32::from(self.area.height);
        if x + u32::from(self.cell_width) > right || y + u32::from(self.cell_height) > bottom {
            return None;
        }
        Some(Rect::new(x as u16, y as u16, self.cell_width, self.cell_height))
    }

    /// The cell under a terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        if column < self.origin_x || row < self.origin_y {
            return None;
        }
        let pos = Position::new(
            usize::from((row - self.origin_y) / self.cell_height),
            usize::from((column - self.origin_x) / self.cell_width),
        );
        self.cell_rect(pos).map(|_| pos)
    }
}
