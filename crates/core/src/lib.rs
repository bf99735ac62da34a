//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has no
//! dependency on rendering, input or I/O, which makes it:
//!
//! - **Deterministic**: the spawn RNG is passed in, so a seed replays a game
//! - **Testable**: every rule is a plain function call on owned state
//! - **Portable**: it runs in the terminal host, headless, or in benches
//!
//! # Module Structure
//!
//! - [`board`]: 22x10 occupancy grid, collision queries and line clearing
//! - [`piece`]: tetromino spawn table, translation and pivot rotation
//! - [`rng`]: uniform random piece and spawn column selection
//! - [`scoring`]: lock and line clear points
//! - [`game`]: the `Active`/`GameOver` controller driving everything above
//! - [`snapshot`]: a `Copy` view of the game for renderers and observers
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly from the seven kinds and spawn at a random
//!   column in the two top (hidden) rows
//! - Left, right and rotate are accepted only if the result fits; there are
//!   no wall kicks
//! - Rotation turns the piece 90° about its second cell
//! - A piece that cannot fall on a gravity tick locks (+10); completed lines
//!   are cleared and scored 100/300/500/800 for 1/2/3/4 lines
//! - If a new piece does not fit where it spawns, the game is over
//!
//! # Example
//!
//! ```
//! use blocktris_core::Game;
//! use blocktris_types::Action;
//!
//! let mut game = Game::with_seed(12345).unwrap();
//!
//! // Intermediate frames: input only.
//! game.do_action(Action::Left);
//!
//! // Gravity tick: input, then one row of gravity.
//! let result = game.step(Action::Rotate);
//! assert!(!result.game_over);
//! assert_eq!(result.score, 0);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::GameError;
pub use game::{Game, GameStatus, StepResult, TickOutcome};
pub use piece::{spawn_shape, Move, Piece, Shape};
pub use rng::{random_kind, random_piece, spawn_offset};
pub use scoring::{line_clear_score, lock_score};
pub use snapshot::GameSnapshot;
