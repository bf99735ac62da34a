//! Command-line configuration for the `blocktris` binary.

use std::time::Duration;

use anyhow::{ensure, Result};
use clap::Parser;

use crate::types::{FRAME_MS, GRAVITY_TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "blocktris", version, about = "Falling-block puzzle game")]
pub struct Cli {
    /// Seed for the piece generator. A random seed is drawn (and logged) when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between gravity ticks.
    #[arg(long, default_value_t = GRAVITY_TICK_MS)]
    pub tick_ms: u64,

    /// Milliseconds between rendered frames (input is polled once per frame).
    #[arg(long, default_value_t = FRAME_MS)]
    pub frame_ms: u64,

    /// Read JSON commands from stdin and write JSON observations to stdout
    /// instead of opening the terminal UI.
    #[arg(long)]
    pub headless: bool,
}

impl Cli {
    /// Reject settings the game loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.tick_ms > 0, "--tick-ms must be greater than zero");
        ensure!(self.frame_ms > 0, "--frame-ms must be greater than zero");
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// The configured seed, or a fresh one from OS entropy
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_timing() {
        let cli = Cli::try_parse_from(["blocktris"]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.tick_ms, 200);
        assert_eq!(cli.frame_ms, 16);
        assert!(!cli.headless);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn explicit_seed_is_kept() {
        let cli = Cli::try_parse_from(["blocktris", "--seed", "42", "--headless"]).unwrap();
        assert_eq!(cli.resolve_seed(), 42);
        assert!(cli.headless);
    }

    #[test]
    fn zero_tick_is_rejected() {
        let cli = Cli::try_parse_from(["blocktris", "--tick-ms", "0"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn unknown_argument_is_an_error() {
        assert!(Cli::try_parse_from(["blocktris", "--hold"]).is_err());
    }
}
