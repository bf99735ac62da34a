//! Piece module - tetromino geometry
//!
//! A piece is four absolute board cells plus its kind. Index 1 of the shape is
//! the pivot every rotation turns about. There is no orientation state and no
//! wall kick: a rotation either fits where it lands or the board rejects it.

use crate::types::{PieceKind, Point};

/// The four cells of a piece. Index 1 is the rotation pivot.
pub type Shape = [Point; 4];

/// Index of the pivot cell inside a [`Shape`]
pub const PIVOT: usize = 1;

/// A speculative transform requested against the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Rotate,
}

/// Spawn-orientation offsets for a piece kind, anchored at column 0.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    let p = Point::new;
    match kind {
        PieceKind::I => [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
        PieceKind::O => [p(1, 0), p(1, 1), p(0, 0), p(0, 1)],
        PieceKind::T => [p(1, 0), p(1, 1), p(1, 2), p(0, 1)],
        PieceKind::S => [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
        PieceKind::Z => [p(1, 0), p(1, 1), p(0, 1), p(0, 2)],
        PieceKind::J => [p(1, 0), p(0, 1), p(0, 0), p(0, 2)],
        PieceKind::L => [p(1, 0), p(1, 1), p(1, 2), p(0, 0)],
    }
}

/// The active falling piece
///
/// `Piece` is `Copy`, so a candidate for a move is simply a transformed copy;
/// the live piece is never touched until the board accepts the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
}

impl Piece {
    /// Create a piece of the given kind in its spawn orientation at column 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
        }
    }

    /// Create a piece from explicit cells
    pub fn from_shape(kind: PieceKind, shape: Shape) -> Self {
        Self { kind, shape }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn cells(&self) -> &Shape {
        &self.shape
    }

    pub fn pivot(&self) -> Point {
        self.shape[PIVOT]
    }

    /// Number of columns spanned by the piece
    pub fn width(&self) -> usize {
        let min = self.shape.iter().map(|p| p.col).min().unwrap_or(0);
        let max = self.shape.iter().map(|p| p.col).max().unwrap_or(0);
        (max - min + 1) as usize
    }

    /// Shift every cell by the given deltas
    pub fn translate(&mut self, d_row: i8, d_col: i8) {
        for cell in &mut self.shape {
            *cell = cell.offset(d_row, d_col);
        }
    }

    /// Turn the piece 90° about the pivot.
    ///
    /// The pivot stays fixed; each other cell maps to
    /// `(pivot.row - d_col, pivot.col + d_row)` where `d = pivot - cell`.
    pub fn rotate(&mut self) {
        let pivot = self.pivot();
        for (i, cell) in self.shape.iter_mut().enumerate() {
            if i == PIVOT {
                continue;
            }
            let d_row = pivot.row - cell.row;
            let d_col = pivot.col - cell.col;
            *cell = Point::new(pivot.row - d_col, pivot.col + d_row);
        }
    }

    /// Return a transformed copy, leaving `self` untouched
    pub fn moved(&self, mv: Move) -> Self {
        let mut candidate = *self;
        match mv {
            Move::Left => candidate.translate(0, -1),
            Move::Right => candidate.translate(0, 1),
            Move::Rotate => candidate.rotate(),
        }
        candidate
    }
}
