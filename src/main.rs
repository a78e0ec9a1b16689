//! Terminal maze-chase runner (default binary).
//!
//! Owns the event loop: one thread serializes key events and fixed-interval
//! ticks onto the session, and hands a snapshot to the renderer between them.
//! Uses crossterm for input and a custom framebuffer-based renderer.

mod cli;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent};
use tracing::{debug, error, info, trace};
use tracing_subscriber::EnvFilter;

use tui_pacman::core::{GameSnapshot, GameState, RandomWander, TickEvent};
use tui_pacman::input::handle_key_event;
use tui_pacman::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_pacman::types::{GameAction, Phase};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed_or_random();
    info!(seed, tick_ms = args.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.exit();
        error!(error = %err, "terminal setup failed");
        return Err(err.context("failed to start the terminal event loop"));
    }

    let result = run(&mut term, args.tick(), seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => info!("quit"),
        Err(err) => error!(error = %err, "event loop failed"),
    }
    result
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // stdout and stderr belong to the alternate screen.
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, tick: Duration, seed: u64) -> Result<()> {
    let mut game = GameState::new();
    let mut pursuers = RandomWander::seeded(seed);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        // Render.
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match on_key(&mut game, key) {
                    KeyOutcome::Quit => return Ok(()),
                    KeyOutcome::Changed => dirty = true,
                    KeyOutcome::Ignored => {}
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            if game.phase() == Phase::Playing {
                let events = game.step(&mut pursuers);
                for event in &events {
                    log_event(event, &game);
                }
                dirty = true;
            }
        }
    }
}

/// What a key press did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    Quit,
    Changed,
    Ignored,
}

fn on_key(game: &mut GameState, key: KeyEvent) -> KeyOutcome {
    let Some(action) = handle_key_event(key) else {
        return KeyOutcome::Ignored;
    };
    if action == GameAction::Quit {
        return KeyOutcome::Quit;
    }
    if game.apply_action(action) {
        log_action(action, game);
        KeyOutcome::Changed
    } else {
        KeyOutcome::Ignored
    }
}

fn log_action(action: GameAction, game: &GameState) {
    match action {
        GameAction::SetFacing(dir) => trace!(facing = dir.as_str(), "facing"),
        GameAction::TogglePause => info!(phase = game.phase().as_str(), "pause toggled"),
        GameAction::Restart => info!("restart"),
        GameAction::Quit => {}
    }
}

fn log_event(event: &TickEvent, game: &GameState) {
    let tick = game.ticks();
    match *event {
        TickEvent::PickupEaten { at } => {
            trace!(tick, x = at.x, y = at.y, left = game.remaining_pickups(), "pickup")
        }
        TickEvent::PowerPickupEaten { at } => {
            debug!(tick, x = at.x, y = at.y, "power mode on")
        }
        TickEvent::PursuerEaten { index } => debug!(tick, index, score = game.score(), "pursuer eaten"),
        TickEvent::PlayerCaught { index, lives_left } => {
            debug!(tick, index, lives_left, "player caught")
        }
        TickEvent::PowerModeEnded => debug!(tick, "power mode off"),
        TickEvent::Won => info!(tick, score = game.score(), "won"),
        TickEvent::Lost => info!(tick, score = game.score(), "lost"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};
    use tui_pacman::types::Direction;

    #[test]
    fn unmapped_and_repeated_keys_leave_the_session_alone() {
        let mut game = GameState::new();
        let before = game.clone();

        assert_eq!(on_key(&mut game, KeyEvent::from(KeyCode::Char('x'))), KeyOutcome::Ignored);
        let repeat = KeyEvent::new_with_kind_and_state(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::NONE,
        );
        assert_eq!(on_key(&mut game, repeat), KeyOutcome::Ignored);
        assert_eq!(game, before);
    }

    #[test]
    fn mapped_keys_change_the_session() {
        let mut game = GameState::new();
        assert_eq!(on_key(&mut game, KeyEvent::from(KeyCode::Down)), KeyOutcome::Changed);
        assert_eq!(game.player().facing, Direction::Down);

        assert_eq!(on_key(&mut game, KeyEvent::from(KeyCode::Char('p'))), KeyOutcome::Changed);
        assert_eq!(game.phase(), Phase::Paused);
    }

    #[test]
    fn quit_is_reported_to_the_loop() {
        let mut game = GameState::new();
        assert_eq!(on_key(&mut game, KeyEvent::from(KeyCode::Char('q'))), KeyOutcome::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(on_key(&mut game, ctrl_c), KeyOutcome::Quit);
    }
}
