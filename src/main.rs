//! Blast Breakout - headless entry point
//!
//! Runs the simulation with the demo autopilot (or an idle player) and the
//! mesh renderer, logging a summary when the loop stops.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use blast_breakout::Config;
use blast_breakout::platform::{AutopilotInput, GameLoop, InputSource, LoopStats, ScriptedInput};
use blast_breakout::renderer::{MeshRenderer, resolve_font};
use blast_breakout::sim::{GameState, TickInput};

/// Ticks an idle run lasts when `--ticks` is not given
const IDLE_TICKS: u64 = 600;

/// Blast Breakout - Breakout with explosive bricks
#[derive(Parser)]
#[command(name = "blast-breakout")]
#[command(about = "Breakout with explosive bricks", long_about = None)]
struct Cli {
    /// JSON config file (defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for the explosive-brick layout (defaults to the clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many simulation ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Pace the loop to the tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Let the demo player drive the paddle
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    autopilot: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::info!(
        "Blast Breakout starting: {}x{} @ {} Hz ({:.4}s ticks), seed {seed}",
        config.window.width,
        config.window.height,
        config.window.tick_rate,
        config.tick_dt()
    );

    // No font backend in headless mode, so every candidate is unavailable
    let font = resolve_font(&config.fonts.candidates, |_| false);
    let renderer = MeshRenderer::new(font);
    let state = GameState::new(config, seed);

    let stats = if cli.autopilot {
        play(state, AutopilotInput::new(cli.ticks), renderer, cli.realtime)
    } else {
        let idle = std::iter::repeat_n(TickInput::default(), cli.ticks.unwrap_or(IDLE_TICKS) as usize);
        play(state, ScriptedInput::new(idle), renderer, cli.realtime)
    };

    log::info!(
        "Stopped after {} ticks / {} frames: {} bricks destroyed, {} balls lost, {} wins, {} render errors",
        stats.ticks,
        stats.frames,
        stats.bricks_destroyed,
        stats.balls_lost,
        stats.wins,
        stats.render_errors
    );
    Ok(())
}

fn play<I: InputSource>(
    state: GameState,
    input: I,
    renderer: MeshRenderer,
    realtime: bool,
) -> LoopStats {
    let mut game = GameLoop::new(state, input, renderer);
    let stats = if realtime {
        game.run_realtime().clone()
    } else {
        game.run_headless().clone()
    };
    log::info!(
        "Final score {} in match {} ({} vertices in last frame)",
        game.state.score(),
        game.state.matches,
        game.renderer().vertices().len()
    );
    stats
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
