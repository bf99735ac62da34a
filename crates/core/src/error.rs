//! Error type for game construction.

use std::fmt;

use crate::piece::Piece;

/// Errors reported while building a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The first piece does not fit on the fresh board.
    ///
    /// Only reachable if the spawn geometry is inconsistent with the board.
    SpawnBlocked(Piece),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::SpawnBlocked(piece) => write!(
                f,
                "unable to create new game: {} piece cannot be placed at {:?}",
                piece.kind().as_str(),
                piece.cells()
            ),
        }
    }
}

impl std::error::Error for GameError {}
