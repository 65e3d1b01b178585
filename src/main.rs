//! Falling blocks terminal runner (default binary).
//!
//! Polls keys into the engine's input slots, ticks the engine at a fixed
//! cadence and redraws from snapshots. Logs go to `FALLING_BLOCKS_LOG_PATH`
//! only; the terminal is in raw mode for the whole run.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::info;

use falling_blocks::core::{Engine, GameSnapshot};
use falling_blocks::input::{handle_key_event, should_quit};
use falling_blocks::term::{
    CuePlayer, FrameBuffer, GameView, RunConfig, TerminalRenderer, Viewport,
};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("cannot create log file {path}"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    info!(seed = config.seed, tick_ms = config.tick_ms, "starting");

    let mut engine = Engine::with_seed(config.seed);
    let controls = engine.controls();
    let mut game = engine.new_game();

    let view = GameView::default();
    let cues = CuePlayer::new(config.bell);
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(config.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        // Input until the next tick is due.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    info!(score = game.score(), "quit");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    controls.submit(action);
                }
            }
        }

        if last_tick.elapsed() < tick {
            continue;
        }
        last_tick = Instant::now();

        if controls.take_new_game() {
            game = engine.new_game();
        }

        engine.update(&mut game);

        if cues.should_ring(game.events()) {
            term.bell()?;
        }
        game.drain_events().for_each(drop);

        game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
    }
}
