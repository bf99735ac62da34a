//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Action`] values. Input is
//! edge-triggered: only the transition into the pressed state produces an
//! action, and at most one action is handed to the game per frame.

pub mod frame;
pub mod map;

pub use blocktris_types as types;

pub use frame::FrameInput;
pub use map::{map_key, should_quit};
