use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Plain copy of everything a renderer or observer reads from a game.
///
/// The grid already contains the active piece, so no separate piece drawing
/// is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH]; BOARD_HEIGHT],
    pub score: u32,
    pub total_lines: u32,
    pub pieces_locked: u32,
    pub game_over: bool,
    pub active: Option<PieceKind>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH]; BOARD_HEIGHT],
            score: 0,
            total_lines: 0,
            pieces_locked: 0,
            game_over: false,
            active: None,
        }
    }
}
