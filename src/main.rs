//! Terminal runner (default binary).
//!
//! Drives one simulation tick per frame, reads keys with crossterm and draws
//! through the framebuffer renderer.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_runner::core::{GameSession, RunnerConfig, Scene};
use tui_runner::input::{host_command, HostCommand, KeyTracker};
use tui_runner::level::DirSource;
use tui_runner::term::{FrameBuffer, SceneView, TerminalRenderer, Viewport};
use tui_runner::types::{InputEvent, SessionPhase};

fn main() -> Result<()> {
    let config = RunnerConfig::from_env();
    init_tracing(&config)?;
    info!(level_dir = %config.level_dir.display(), tick_ms = config.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file only; stdout belongs to the game.
fn init_tracing(config: &RunnerConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tui_runner=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunnerConfig) -> Result<()> {
    let mut session = GameSession::new(DirSource::new(config.level_dir.clone()), config.viewport);
    let view = SceneView::default();
    let mut keys = KeyTracker::new();
    let mut scene = Scene::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(config.tick_ms));

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 25));
        session.scene_into(&mut scene);
        view.render_into(&scene, &session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match host_command(key) {
                    Some(HostCommand::Quit) => return Ok(()),
                    Some(HostCommand::Start) => {
                        if session.phase() != SessionPhase::Running {
                            keys.reset();
                            session.start();
                        }
                    }
                    Some(HostCommand::Restart) => {
                        keys.reset();
                        session.restart();
                    }
                    None => {
                        for input in keys.handle_key(key) {
                            // Outside a run, escape leaves the end-of-run screen.
                            if input == InputEvent::Escape && session.phase().is_terminal() {
                                session.dismiss();
                            } else {
                                session.handle_input(input);
                            }
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for input in keys.update(config.tick_ms) {
                session.handle_input(input);
            }
            session.tick();

            if let Some(event) = session.take_last_event() {
                debug!(?event, "session event");
            }
        }
    }
}
