//! Terminal falling-block runner (default binary).
//!
//! Fixed-timestep loop: render, wait for input until the next tick deadline,
//! then advance gravity by the measured elapsed time.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};

use blockfall::config::Config;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, is_press, should_quit};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, Notice, TerminalRenderer, Viewport};
use blockfall::types::{GameEvent, TICK_MS};

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config)?;
    let game = config.build_game()?;
    info!(seed = ?config.seed, rules = ?game.rules(), "starting");

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, game));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut notice: Option<Notice> = None;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        view.render_into_with_notice(&snap, notice.as_ref().map(Notice::view), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        debug!(action = action.as_str(), "key action");
                        game.apply_action(action);
                        notice = notice.and_then(|n| n.retain_in(game.phase()));
                    }
                }
                Event::Resize(w, h) => {
                    debug!(w, h, "terminal resized");
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);

            game.tick(elapsed_ms);
            notice = notice.and_then(|n| n.advance(elapsed_ms));

            for event in game.drain_events() {
                if let GameEvent::GameOver { score } = event {
                    notice = Some(Notice::game_over(score));
                }
            }
        }
    }
}
