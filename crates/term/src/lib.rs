//! Terminal rendering layer.
//!
//! A small, game-oriented renderer: the view draws a [`GameSnapshot`] into a
//! framebuffer of styled characters, and the terminal renderer flushes that
//! framebuffer to the real terminal with crossterm.
//!
//! - [`game_view`] is pure and unit-tested
//! - [`renderer`] owns all terminal I/O
//!
//! [`GameSnapshot`]: blocktris_core::GameSnapshot

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{Cell, FrameBuffer, Paint};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
