//! blocktris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and hosts the pieces that
//! only the binary needs: command-line configuration and the headless JSON
//! driver.

pub mod config;
pub mod headless;

pub use blocktris_core as core;
pub use blocktris_input as input;
pub use blocktris_term as term;
pub use blocktris_types as types;
