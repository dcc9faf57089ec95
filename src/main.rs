//! Terminal game runner (default binary).
//!
//! One thread, one loop: render the current snapshot, wait for input until
//! the next frame is due, then feed elapsed time to the gravity clock.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::audio::{Speaker, TerminalBell};
use blockfall::core::{Game, GameState, RandomPieces};
use blockfall::input::{handle_key_event, is_game_input, should_quit};
use blockfall::logging::init_log;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;
use blockfall::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if let Some(path) = &config.log_path {
        init_log(config.log_level, path)?;
    }
    for warning in &config.warnings {
        log::warn!("{warning}");
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("game loop failed: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut source = match config.seed {
        Some(seed) => RandomPieces::seeded(seed),
        None => RandomPieces::from_entropy(),
    };
    let state = GameState::new(&mut source).with_muted(config.muted);
    let mut game = Game::from_state(state, source);
    log::info!("new game, seed {:?}, muted {}", config.seed, config.muted);

    let mut speaker = Speaker::new(TerminalBell::stdout(), game.state().muted());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_game_input(&key) => {
                    if should_quit(key) {
                        log::info!("quit at score {}", game.state().score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        log::trace!("key action {}", action.as_str());
                        let effects = game.apply_action(action);
                        speaker.set_muted(game.state().muted());
                        speaker.emit(&effects.cues);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            if let Some(effects) = game.advance(elapsed_ms) {
                speaker.emit(&effects.cues);
            }
        }
    }
}
