//! Board module - manages the game grid
//!
//! The board is a 22x10 occupancy grid: each cell is `0` (empty) or `1`
//! (occupied). No piece identity is stored. The active piece is mirrored into
//! the grid, so rendering and collision checks only ever read the board.
//!
//! Coordinates: `(row, col)` where row ranges 0..21 (top to bottom) and col
//! ranges 0..9 (left to right). Every query validates bounds before indexing.

use crate::piece::{Move, Piece};
use crate::types::{Point, BOARD_HEIGHT, BOARD_WIDTH};

/// Value of an empty cell
pub const EMPTY: u8 = 0;

/// Value of an occupied cell
pub const FILLED: u8 = 1;

/// One board row
pub type Row = [u8; BOARD_WIDTH];

/// The game board - 22 rows x 10 columns
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[EMPTY; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Create a board from explicit rows.
    ///
    /// Any non-zero value is stored as occupied.
    pub fn from_rows(rows: [Row; BOARD_HEIGHT]) -> Self {
        let mut board = Self { rows };
        for row in &mut board.rows {
            for cell in row.iter_mut() {
                if *cell != EMPTY {
                    *cell = FILLED;
                }
            }
        }
        board
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Get cell at `(row, col)`; `None` when out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<u8> {
        Point::new(row, col)
            .on_board()
            .map(|(r, c)| self.rows[r][c])
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(FILLED))
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(EMPTY))
    }

    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    pub fn rows(&self) -> &[Row; BOARD_HEIGHT] {
        &self.rows
    }

    /// Overwrite a whole row (values are normalised to 0/1)
    pub fn set_row(&mut self, row: usize, cells: Row) {
        if let Some(target) = self.rows.get_mut(row) {
            for (dst, src) in target.iter_mut().zip(cells) {
                *dst = if src == EMPTY { EMPTY } else { FILLED };
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|r| r.iter().all(|&cell| cell == FILLED))
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == FILLED)
            .count()
    }

    fn write_cells(&mut self, piece: &Piece, value: u8) {
        for cell in piece.cells() {
            if let Some((r, c)) = cell.on_board() {
                self.rows[r][c] = value;
            }
        }
    }

    /// Mark the piece's cells occupied.
    ///
    /// The caller is expected to have checked [`Board::can_place`]; cells off
    /// the board are skipped.
    pub fn place_piece(&mut self, piece: &Piece) {
        self.write_cells(piece, FILLED);
    }

    /// Mark the piece's cells empty
    pub fn remove_piece(&mut self, piece: &Piece) {
        self.write_cells(piece, EMPTY);
    }

    /// True iff every cell is on the board and currently empty
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|p| self.is_free(p.row, p.col))
    }

    /// True iff every cell has an in-bounds, empty cell directly beneath it.
    ///
    /// Horizontal bounds are not consulted.
    pub fn can_move_down(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|p| {
            let below = p.row as i16 + 1;
            if below < 0 || below >= BOARD_HEIGHT as i16 {
                return false;
            }
            match usize::try_from(p.col) {
                Ok(col) if col < BOARD_WIDTH => self.rows[below as usize][col] == EMPTY,
                _ => false,
            }
        })
    }

    /// Try a left/right/rotate move of a piece that is currently on the board.
    ///
    /// The piece is lifted off the grid so it cannot collide with itself, the
    /// candidate is checked, and the (possibly updated) piece is put back.
    /// Returns whether the piece changed. A rejected move leaves both the
    /// board and the piece exactly as they were.
    pub fn try_move(&mut self, piece: &mut Piece, mv: Move) -> bool {
        self.remove_piece(piece);
        let candidate = piece.moved(mv);
        let accepted = self.can_place(&candidate);
        if accepted {
            *piece = candidate;
        }
        self.place_piece(piece);
        accepted
    }

    /// Remove every completed row and return how many were removed.
    ///
    /// Scans bottom to top. A completed row is overwritten by shifting every
    /// row above it down by one (row 0 becomes empty), then the same index is
    /// examined again since it now holds what used to be the row above.
    /// Row 0 has nothing above it and is never examined itself; a full row 0
    /// only clears once it has been shifted down.
    pub fn clear_completed_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = BOARD_HEIGHT;
        while row > 1 {
            let current = row - 1;
            if !self.is_row_complete(current) {
                row -= 1;
                continue;
            }
            cleared += 1;
            self.rows.copy_within(0..current, 1);
            self.rows[0] = [EMPTY; BOARD_WIDTH];
        }
        cleared
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    const FULL: Row = [FILLED; BOARD_WIDTH];

    #[test]
    fn test_get_checks_bounds() {
        let board = Board::new();
        assert_eq!(board.get(0, 0), Some(EMPTY));
        assert_eq!(board.get(21, 9), Some(EMPTY));
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(22, 0), None);
        assert_eq!(board.get(0, 10), None);
    }

    #[test]
    fn test_from_rows_normalises_values() {
        let mut rows = [[EMPTY; BOARD_WIDTH]; BOARD_HEIGHT];
        rows[3][4] = 7;
        let board = Board::from_rows(rows);
        assert_eq!(board.get(3, 4), Some(FILLED));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_place_and_remove_piece() {
        let mut board = Board::new();
        let piece = Piece::spawn(PieceKind::O);
        board.place_piece(&piece);
        assert_eq!(board.occupied_count(), 4);
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(1, 1));
        board.remove_piece(&piece);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_clear_shifts_row_above_into_place() {
        let mut board = Board::new();
        board.set_row(19, [1, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
        board.set_row(20, FULL);
        board.set_row(21, FULL);

        assert_eq!(board.clear_completed_lines(), 2);
        assert_eq!(board.row(21), Some(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 1]));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut board = Board::new();
        let gap = [1, 1, 1, 1, 1, 0, 1, 1, 1, 1];
        board.set_row(18, FULL);
        board.set_row(19, gap);
        board.set_row(20, FULL);
        board.set_row(21, gap);

        assert_eq!(board.clear_completed_lines(), 2);
        assert_eq!(board.row(20), Some(&gap));
        assert_eq!(board.row(21), Some(&gap));
        assert_eq!(board.occupied_count(), 18);
    }

    #[test]
    fn test_full_top_row_is_not_examined() {
        let mut board = Board::new();
        board.set_row(0, FULL);
        assert_eq!(board.clear_completed_lines(), 0);
        assert!(board.is_row_complete(0));

        // Once shifted down by a clear below, it is examined and cleared too.
        board.set_row(21, FULL);
        assert_eq!(board.clear_completed_lines(), 2);
        assert_eq!(board, Board::new());
    }
}
