//! A grid of styled cells. The renderer paints into one; the terminal
//! compares it with the previous frame and writes only what moved.

use crate::layout::Rect;
use crate::types::{Rgb, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a double-width glyph. Never printed.
    pub continuation: bool,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        symbol: ' ',
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        style: TextStyle::new(),
        continuation: false,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    area: Rect,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            area: Rect::from_size(width, height),
            cells: vec![Cell::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn width(&self) -> u16 {
        self.area.width
    }

    pub fn height(&self) -> u16 {
        self.area.height
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        self.area
            .contains(x, y)
            .then(|| usize::from(y) * usize::from(self.area.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.offset(x, y).and_then(|i| self.cells.get(i))
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.offset(x, y).and_then(|i| self.cells.get_mut(i))
    }

    /// Paint `rect` (clipped to the buffer) with a background colour,
    /// erasing whatever was there.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = Cell { bg, ..Cell::BLANK };
                }
            }
        }
    }

    /// Put a single glyph, keeping the cell's background.
    pub fn put(&mut self, x: u16, y: u16, symbol: char, fg: Rgb) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.symbol = symbol;
            cell.fg = fg;
            cell.continuation = false;
        }
    }

    /// Characters of row `y`, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        let mut row: String = (0..self.area.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.continuation)
            .map(|cell| cell.symbol)
            .collect();
        row.truncate(row.trim_end().len());
        row
    }

    /// Cells that differ from `previous`, with their coordinates.
    pub fn changes<'a>(
        &'a self,
        previous: &'a Buffer,
    ) -> impl Iterator<Item = (u16, u16, &'a Cell)> + 'a {
        let width = usize::from(self.area.width.max(1));
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::BLANK);
    }
}
