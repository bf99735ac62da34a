//! blocktris runner (default binary).
//!
//! Terminal mode renders every frame, feeds at most one edge-triggered key
//! press per frame to the game, and advances gravity on a fixed interval.
//! Headless mode speaks line-delimited JSON on stdin/stdout.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use blocktris::config::Cli;
use blocktris::core::{Game, StepResult};
use blocktris::headless;
use blocktris::input::{map_key, should_quit, FrameInput};
use blocktris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate()?;

    let seed = cli.resolve_seed();
    eprintln!("[blocktris] seed {}", seed);
    let mut game = Game::with_seed(seed).context("start game")?;

    if cli.headless {
        let stdin = io::stdin();
        let summary = headless::run(&mut game, stdin.lock(), io::stdout().lock())?;
        eprintln!(
            "[blocktris] headless done: {} commands, {} errors, score {}, lines {}{}",
            summary.commands,
            summary.errors,
            summary.score,
            summary.total_lines,
            if summary.game_over { ", game over" } else { "" }
        );
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut game, &cli);
    // Restore the terminal before reporting anything.
    if let Err(e) = term.exit() {
        eprintln!("[blocktris] failed to restore terminal: {:#}", e);
    }

    let last = result?;
    match last {
        Some(step) if step.game_over => eprintln!(
            "[blocktris] game over: score {}, lines {}",
            step.score, step.total_lines
        ),
        _ => eprintln!(
            "[blocktris] quit: score {}, lines {}",
            game.score(),
            game.total_lines()
        ),
    }
    Ok(())
}

/// Run the interactive loop until the player quits or the game ends.
///
/// Returns the last gravity step taken, if any.
fn run(term: &mut TerminalRenderer, game: &mut Game, cli: &Cli) -> Result<Option<StepResult>> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut input = FrameInput::new();
    let mut last_step: Option<StepResult> = None;

    let frame = cli.frame_interval();
    let tick = cli.tick_interval();
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if game.is_game_over() {
            // Leave the final board on screen briefly.
            std::thread::sleep(Duration::from_millis(750));
            return Ok(last_step);
        }

        // Collect input until the frame budget is spent.
        loop {
            let timeout = frame.saturating_sub(frame_start.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(last_step);
                    }
                    if let Some(action) = map_key(key) {
                        input.push(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let action = input.take();
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            last_step = Some(game.step(action));
        } else {
            game.do_action(action);
        }
    }
}
