//! Terminal snake runner (default binary).
//!
//! Polls crossterm for keys, drives the fixed-step game loop once per frame
//! and draws through the framebuffer renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_snake::core::{FoodSampling, GameConfig, GameSnapshot};
use tui_snake::engine::GameLoop;
use tui_snake::input::{handle_key_event, should_quit, InputQueue};
use tui_snake::term::{Effects, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, FRAME_MS, GRID_SIZE, MAX_FRAME_DELTA_MS, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "tui-snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Cells per side of the square board
    #[arg(long, default_value_t = GRID_SIZE)]
    grid_size: u8,

    /// Milliseconds per snake step
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u32,

    /// Largest frame gap fed to the simulation, in milliseconds
    #[arg(long, default_value_t = MAX_FRAME_DELTA_MS)]
    max_frame_ms: u32,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pick food uniformly from free cells instead of retrying random cells
    #[arg(long)]
    exact_food: bool,

    /// Do not ring the terminal bell when food is eaten
    #[arg(long)]
    no_bell: bool,

    /// Write logs to this file (RUST_LOG controls the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::default()
            .with_grid_size(self.grid_size)
            .with_tick_ms(self.tick_ms)
            .with_max_frame_delta_ms(self.max_frame_ms)
            .with_food_sampling(if self.exact_food {
                FoodSampling::Exact
            } else {
                FoodSampling::Rejection
            });
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout is the game screen, so logs only go to a file.
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config();
    config.validate().context("invalid game configuration")?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config, !cli.no_bell));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "terminal_restore_failed");
    }
    info!("shutdown");
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, bell: bool) -> Result<()> {
    let mut game_loop = GameLoop::new(config);
    let mut queue = InputQueue::new();
    let mut effects = Effects::new(bell);
    let view = GameView::default();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let start = Instant::now();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut next_frame = start;
    let mut last_ms: u64 = 0;

    loop {
        // Collect input until the next frame is due.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if !queue.push(action) {
                            warn!(?action, "input_queue_full");
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            // A burst of key events must not starve frames.
            if Instant::now() < next_frame {
                continue;
            }
        }

        next_frame += frame;
        let now = Instant::now();
        if next_frame < now {
            // Fell behind (suspended or slow terminal); resync instead of
            // spinning through missed frames.
            next_frame = now + frame;
        }

        for action in queue.drain() {
            if action == GameAction::Restart {
                effects.clear();
            }
            game_loop.apply_action(action);
        }

        let now_ms = now.duration_since(start).as_millis() as u64;
        game_loop.frame(now_ms, |event| effects.on_event(&event));
        // Effects keep animating after the run ends, so they take wall time
        // rather than the simulation's frame report.
        effects.update(now_ms.saturating_sub(last_ms).min(MAX_FRAME_DELTA_MS as u64) as u32);
        last_ms = now_ms;

        game_loop.game().snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or_else(|_| {
            let v = view.preferred_viewport(config.grid_size);
            (v.width, v.height)
        });
        view.render_into(&snap, &effects, Viewport::new(w, h), &mut fb);
        term.present(&mut fb, effects.take_bell())?;
    }
}
