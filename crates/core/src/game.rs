//! Game module - the controller state machine
//!
//! This module ties together the board, the active piece, the spawn RNG and
//! scoring. A game is either `Active` (a piece is falling and accepts actions)
//! or `GameOver` (terminal; every further call is a no-op).
//!
//! Hosts drive it with two calls:
//!
//! - [`Game::step`] once per gravity tick: one action, then one gravity tick.
//! - [`Game::do_action`] on frames in between, so controls stay responsive at
//!   low gravity rates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::error::GameError;
use crate::piece::{Move, Piece};
use crate::rng::random_piece;
use crate::scoring::line_clear_score;
use crate::snapshot::GameSnapshot;
use crate::types::{Action, LOCK_SCORE};

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    GameOver,
}

/// Result of one gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The piece could not move down and locked in place
    pub collided: bool,
    /// Lines removed by this tick's lock
    pub lines_cleared: u32,
    /// The game is over after this tick
    pub game_over: bool,
}

/// Result of one [`Game::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    pub game_over: bool,
    pub action: Action,
    pub score: u32,
    /// Lines cleared during this step
    pub lines_cleared: u32,
    /// Lines cleared since the game started
    pub total_lines: u32,
    pub collided: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    board: Board,
    active: Piece,
    rng: R,
    score: u32,
    total_lines: u32,
    pieces_locked: u32,
    status: GameStatus,
}

impl Game<StdRng> {
    /// Create a reproducible game from a seed
    pub fn with_seed(seed: u64) -> Result<Self, GameError> {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Create a new game on an empty board and spawn the first piece
    pub fn new(mut rng: R) -> Result<Self, GameError> {
        let first = random_piece(&mut rng);
        Self::with_board(Board::new(), first, rng)
    }

    /// Create a game from an existing board and active piece.
    ///
    /// Fails if the piece cannot be placed on the board.
    pub fn with_board(mut board: Board, active: Piece, rng: R) -> Result<Self, GameError> {
        if !board.can_place(&active) {
            return Err(GameError::SpawnBlocked(active));
        }
        board.place_piece(&active);
        Ok(Self {
            board,
            active,
            rng,
            score: 0,
            total_lines: 0,
            pieces_locked: 0,
            status: GameStatus::Active,
        })
    }

    /// Apply one action, then one gravity tick.
    ///
    /// `Action::None` skips the action and only advances gravity.
    pub fn step(&mut self, action: Action) -> StepResult {
        if action != Action::None {
            self.do_action(action);
        }
        let tick = self.gravity_tick();
        StepResult {
            game_over: tick.game_over,
            action,
            score: self.score,
            lines_cleared: tick.lines_cleared,
            total_lines: self.total_lines,
            collided: tick.collided,
        }
    }

    /// Advance gravity by one row, locking the piece if it cannot fall.
    ///
    /// On lock: +`LOCK_SCORE`, clear completed lines, add the line bonus and
    /// spawn the next piece. A blocked spawn ends the game; the blocked piece
    /// is never written to the board.
    pub fn gravity_tick(&mut self) -> TickOutcome {
        if self.status == GameStatus::GameOver {
            return TickOutcome {
                game_over: true,
                ..TickOutcome::default()
            };
        }

        self.board.remove_piece(&self.active);
        if self.board.can_move_down(&self.active) {
            self.active.translate(1, 0);
            self.board.place_piece(&self.active);
            return TickOutcome::default();
        }

        self.board.place_piece(&self.active);
        self.pieces_locked += 1;
        self.score += LOCK_SCORE;

        let lines = self.board.clear_completed_lines();
        self.total_lines += lines as u32;
        self.score += line_clear_score(lines);

        let game_over = !self.spawn_piece();
        TickOutcome {
            collided: true,
            lines_cleared: lines as u32,
            game_over,
        }
    }

    /// Spawn a random piece. Returns false (and ends the game) if it does not fit.
    fn spawn_piece(&mut self) -> bool {
        let next = random_piece(&mut self.rng);
        if !self.board.can_place(&next) {
            self.status = GameStatus::GameOver;
            return false;
        }
        self.active = next;
        self.board.place_piece(&self.active);
        true
    }
}

impl<R> Game<R> {
    /// Apply a movement action without gravity.
    ///
    /// Returns whether the piece moved. Illegal moves are silently rejected
    /// and leave the game untouched.
    pub fn do_action(&mut self, action: Action) -> bool {
        if self.status == GameStatus::GameOver {
            return false;
        }
        let mv = match action {
            Action::Left => Move::Left,
            Action::Right => Move::Right,
            Action::Rotate => Move::Rotate,
            Action::None => return false,
        };
        self.board.try_move(&mut self.active, mv)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// The falling piece, or `None` once the game is over
    pub fn active_piece(&self) -> Option<&Piece> {
        match self.status {
            GameStatus::Active => Some(&self.active),
            GameStatus::GameOver => None,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.rows();
        out.score = self.score;
        out.total_lines = self.total_lines;
        out.pieces_locked = self.pieces_locked;
        out.game_over = self.is_game_over();
        out.active = self.active_piece().map(Piece::kind);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
