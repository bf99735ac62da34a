//! Character grid the game view draws into.
//!
//! A cell is a glyph plus a [`Paint`] role. The grid knows nothing about
//! colours; [`crate::renderer`] decides what each role looks like.

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

/// Glyph for an occupied board cell
pub const BLOCK: char = '█';

/// Glyph for an empty board cell
pub const EMPTY: char = '·';

/// What a cell is drawn as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Paint {
    #[default]
    Blank,
    Border,
    Block,
    Empty,
    Label,
    Value,
    Banner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub paint: Paint,
}

impl Cell {
    pub const BLANK: Cell = Cell::new(' ', Paint::Blank);

    pub const fn new(ch: char, paint: Paint) -> Self {
        Self { ch, paint }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of cells sized to the terminal viewport.
///
/// Writes outside the grid are dropped, so callers can draw a playfield that
/// only partly fits a small terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.reset(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Take on the given size and blank every cell. The allocation is reused.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, Cell::BLANK);
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn put(&mut self, x: u16, y: u16, ch: char, paint: Paint) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell::new(ch, paint);
        }
    }

    pub fn text(&mut self, x: u16, y: u16, s: &str, paint: Paint) {
        for (i, ch) in s.chars().enumerate() {
            self.put(x.saturating_add(i as u16), y, ch, paint);
        }
    }

    /// Decimal digits of `value`, left-aligned at `x`, without allocating.
    pub fn number(&mut self, x: u16, y: u16, value: u32, paint: Paint) {
        let digits = value.checked_ilog10().unwrap_or(0) as u16 + 1;
        let mut n = value;
        for i in (0..digits).rev() {
            self.put(x.saturating_add(i), y, char::from(b'0' + (n % 10) as u8), paint);
            n /= 10;
        }
    }

    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, paint: Paint) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x.saturating_add(dx), y.saturating_add(dy), ch, paint);
            }
        }
    }

    /// Draw the visible rows of an occupancy grid with its top-left corner at
    /// `(x, y)`. Each board cell covers `cell_w` x `cell_h` terminal cells;
    /// the first `HIDDEN_ROWS` rows are skipped.
    pub fn playfield(
        &mut self,
        x: u16,
        y: u16,
        grid: &[[u8; BOARD_WIDTH]; BOARD_HEIGHT],
        cell_w: u16,
        cell_h: u16,
    ) {
        for (row, cells) in grid[HIDDEN_ROWS..].iter().enumerate() {
            let py = y.saturating_add((row as u16).saturating_mul(cell_h));
            for (col, &cell) in cells.iter().enumerate() {
                let px = x.saturating_add((col as u16).saturating_mul(cell_w));
                let (ch, paint) = if cell == 0 {
                    (EMPTY, Paint::Empty)
                } else {
                    (BLOCK, Paint::Block)
                };
                self.fill(px, py, cell_w, cell_h, ch, paint);
            }
        }
    }

    /// One row as plain text, paint dropped
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}
