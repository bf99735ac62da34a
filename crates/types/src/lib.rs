//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be
//! shared by the core rules, the terminal host and the headless driver.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 22 rows (indexed 0-21, top to bottom)
//! - **Hidden rows**: rows 0-1 are the spawn buffer and are not drawn
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_TICK_MS` | 200 | Interval between gravity ticks |
//! | `FRAME_MS` | 16 | Render/input frame interval |
//!
//! # Scoring
//!
//! Every lock is worth `LOCK_SCORE` (10) points. Line clears add a bonus from
//! `LINE_SCORES` keyed on the number of lines removed by that lock.
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{Action, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Action::default(), Action::None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (22 rows, including the hidden spawn rows)
pub const BOARD_HEIGHT: usize = 22;

/// Number of rows at the top of the board used as the spawn buffer.
///
/// They take part in every rule but are not drawn by the renderer.
pub const HIDDEN_ROWS: usize = 2;

/// Number of rows a renderer shows (20)
pub const VISIBLE_HEIGHT: usize = BOARD_HEIGHT - HIDDEN_ROWS;

/// Interval between gravity ticks in milliseconds
pub const GRAVITY_TICK_MS: u64 = 200;

/// Render/input frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Points awarded for every piece that locks
pub const LOCK_SCORE: u32 = 10;

/// Line clear bonus table, indexed by lines cleared in a single lock.
///
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// A single grid cell address. Rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub row: i8,
    pub col: i8,
}

impl Point {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Return this point shifted by the given deltas
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Board coordinates as `(row, col)` when the point lies on the board
    pub fn on_board(self) -> Option<(usize, usize)> {
        if self.row < 0 || self.col < 0 {
            return None;
        }
        let (row, col) = (self.row as usize, self.col as usize);
        if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
            return None;
        }
        Some((row, col))
    }
}

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in table order. Spawning picks uniformly from this set.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Discrete player actions consumed by the game controller
///
/// `None` is a real action: it is what a frame without input produces, and
/// stepping with it only advances gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    /// Shift the piece one column left
    Left,
    /// Shift the piece one column right
    Right,
    /// Turn the piece 90° about its pivot
    Rotate,
    /// No input this frame
    #[default]
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_area_excludes_spawn_buffer() {
        assert_eq!(VISIBLE_HEIGHT, 20);
        assert_eq!(BOARD_HEIGHT, VISIBLE_HEIGHT + HIDDEN_ROWS);
    }

    #[test]
    fn line_scores_reward_multi_line_clears() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(LOCK_SCORE, 10);
    }

    #[test]
    fn point_on_board_checks_every_edge() {
        assert_eq!(Point::new(0, 0).on_board(), Some((0, 0)));
        assert_eq!(Point::new(21, 9).on_board(), Some((21, 9)));
        assert_eq!(Point::new(-1, 0).on_board(), None);
        assert_eq!(Point::new(0, -1).on_board(), None);
        assert_eq!(Point::new(22, 0).on_board(), None);
        assert_eq!(Point::new(0, 10).on_board(), None);
    }

    #[test]
    fn piece_kind_names_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn idle_frame_is_action_none() {
        assert_eq!(Action::default(), Action::None);
    }
}
