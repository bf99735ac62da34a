//! Headless driver - line-delimited JSON over any reader/writer pair.
//!
//! Each input line is one command:
//!
//! ```text
//! {"action": "left"}                     // step: action, then one gravity tick
//! {"action": "rotate", "gravity": false} // action only, no gravity
//! ```
//!
//! Each command produces exactly one output line, either an observation of
//! the game after the command or an error for a line that could not be
//! parsed. Blank lines are skipped. The driver stops at end of input or right
//! after reporting game over.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::Game;
use crate::types::{Action, BOARD_HEIGHT, BOARD_WIDTH};

/// Lowercase action names on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionName {
    Left,
    Right,
    #[serde(alias = "turn")]
    Rotate,
    #[serde(alias = "sleep")]
    None,
}

impl From<ActionName> for Action {
    fn from(value: ActionName) -> Self {
        match value {
            ActionName::Left => Action::Left,
            ActionName::Right => Action::Right,
            ActionName::Rotate => Action::Rotate,
            ActionName::None => Action::None,
        }
    }
}

impl From<Action> for ActionName {
    fn from(value: Action) -> Self {
        match value {
            Action::Left => ActionName::Left,
            Action::Right => ActionName::Right,
            Action::Rotate => ActionName::Rotate,
            Action::None => ActionName::None,
        }
    }
}

fn default_gravity() -> bool {
    true
}

/// One input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Command {
    pub action: ActionName,
    #[serde(default = "default_gravity")]
    pub gravity: bool,
}

/// Game state after one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub seq: u64,
    pub action: ActionName,
    pub gravity: bool,
    /// Whether the action moved the piece (only reported for action-only commands)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved: Option<bool>,
    pub collided: bool,
    pub lines_cleared: u32,
    pub score: u32,
    pub total_lines: u32,
    pub game_over: bool,
    pub board: [[u8; BOARD_WIDTH]; BOARD_HEIGHT],
}

/// One output line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Observation(Observation),
    Error { seq: u64, message: String },
}

/// Totals reported when the driver stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeadlessSummary {
    pub commands: u64,
    pub errors: u64,
    pub score: u32,
    pub total_lines: u32,
    pub game_over: bool,
}

/// Apply one command to the game and describe the result.
pub fn apply<R: Rng>(game: &mut Game<R>, seq: u64, cmd: Command) -> Observation {
    let requested = Action::from(cmd.action);
    let (applied, moved, collided, lines_cleared) = if cmd.gravity {
        let result = game.step(requested);
        (result.action, None, result.collided, result.lines_cleared)
    } else {
        (requested, Some(game.do_action(requested)), false, 0)
    };
    Observation {
        seq,
        action: ActionName::from(applied),
        gravity: cmd.gravity,
        moved,
        collided,
        lines_cleared,
        score: game.score(),
        total_lines: game.total_lines(),
        game_over: game.is_game_over(),
        board: *game.board().rows(),
    }
}

/// Drive `game` from `input` until end of input or game over.
pub fn run<R, I, O>(game: &mut Game<R>, input: I, mut output: O) -> Result<HeadlessSummary>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut summary = HeadlessSummary::default();
    let mut seq = 0u64;

    for line in input.lines() {
        let line = line.context("read command line")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        seq += 1;

        let message = match serde_json::from_str::<Command>(trimmed) {
            Ok(cmd) => {
                summary.commands += 1;
                Message::Observation(apply(game, seq, cmd))
            }
            Err(e) => {
                summary.errors += 1;
                Message::Error {
                    seq,
                    message: format!("invalid command: {}", e),
                }
            }
        };

        serde_json::to_writer(&mut output, &message).context("encode message")?;
        output.write_all(b"\n").context("write message")?;
        output.flush().context("flush output")?;

        if game.is_game_over() {
            break;
        }
    }

    summary.score = game.score();
    summary.total_lines = game.total_lines();
    summary.game_over = game.is_game_over();
    Ok(summary)
}
