//! Terminal runner (binary entrypoint).
//!
//! Single-threaded poll/tick/render loop: keyboard events and the gravity
//! timer feed the same serialized `GameState`, one stimulus at a time. The
//! gravity deadline is only consulted while the game is running and is
//! re-based whenever a run starts, so no stale tick can fire.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{is_start_key, map_key, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameStatus, GRAVITY_INTERVAL_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut state = GameState::new(seed);

    let view = GameView::default();
    let gravity = Duration::from_millis(GRAVITY_INTERVAL_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        // While idle or game over the gravity timer is disarmed; poll at a
        // relaxed rate just to stay responsive to resize and input.
        let timeout = if state.status() == GameStatus::Running {
            gravity
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO)
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Terminal auto-repeat stands in for held-key movement.
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_start_key(key) {
                        state.start();
                        last_tick = Instant::now();
                    } else if let Some(command) = map_key(key) {
                        state.command(command);
                    }
                }
            }
        }

        if state.status() == GameStatus::Running && last_tick.elapsed() >= gravity {
            last_tick = Instant::now();
            state.on_tick();
        }
    }
}
