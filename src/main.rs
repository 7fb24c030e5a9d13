//! Terminal Gridfall runner (default binary).
//!
//! Uses crossterm for input and a custom framebuffer-based renderer. The
//! core never reads a clock; this loop feeds it monotonic millisecond
//! timestamps and edge-triggered input intents.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use gridfall::core::{Game, RandomSupplier};
use gridfall::term::{GameView, TerminalRenderer, Viewport};
use gridfall::types::GameIntent;

const FRAME_MS: u64 = 16;

/// How long a soft drop stays active after the last Down press, for
/// terminals that never deliver key release events.
const SOFT_DROP_GRACE_MS: u64 = 150;

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
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = Game::new(Box::new(RandomSupplier::new(seed)));

    let view = GameView::default();
    let frame_duration = Duration::from_millis(FRAME_MS);
    let start = Instant::now();
    let mut last_frame = Instant::now();

    let mut soft_drop_deadline: Option<u64> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                let now_ms = start.elapsed().as_millis() as u64;
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        match key.code {
                            KeyCode::Left => game.handle(GameIntent::MoveLeft, now_ms),
                            KeyCode::Right => game.handle(GameIntent::MoveRight, now_ms),
                            KeyCode::Up => game.handle(GameIntent::Rotate, now_ms),
                            KeyCode::Down => {
                                game.handle(GameIntent::SoftDropPressed, now_ms);
                                soft_drop_deadline = Some(now_ms + SOFT_DROP_GRACE_MS);
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Release => {
                        if key.code == KeyCode::Down {
                            game.handle(GameIntent::SoftDropReleased, now_ms);
                            soft_drop_deadline = None;
                        }
                    }
                }
            }
        }

        if last_frame.elapsed() >= frame_duration {
            last_frame = Instant::now();
            let now_ms = start.elapsed().as_millis() as u64;

            // Grace timeout stands in for the release event when the
            // terminal only reports presses.
            if soft_drop_deadline.is_some_and(|deadline| now_ms >= deadline) {
                game.handle(GameIntent::SoftDropReleased, now_ms);
                soft_drop_deadline = None;
            }

            game.advance_time(now_ms);
        }
    }
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
}
