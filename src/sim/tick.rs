//! Fixed timestep simulation tick
//!
//! Core game loop that advances the match deterministically.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::collision::BounceDirection;
use super::paddle::Paddle;
use super::state::{GamePhase, GameStateManager, PhaseEvent};
use super::wall::BrickWall;
use crate::config::Config;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer x in playfield coordinates (paddle center target)
    pub pointer_x: Option<f32>,
    /// Launch the docked ball (click/space)
    pub launch: bool,
    /// Start a new match after a win
    pub restart: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Fold a newer poll into input that is still waiting for a tick.
    ///
    /// One-shot actions accumulate; the pointer takes the latest reading.
    pub fn merge(&mut self, newer: &TickInput) {
        if newer.pointer_x.is_some() {
            self.pointer_x = newer.pointer_x;
        }
        self.launch |= newer.launch;
        self.restart |= newer.restart;
        self.pause |= newer.pause;
    }

    /// Forget one-shot actions after a tick has seen them
    pub fn consume_one_shots(&mut self) {
        self.launch = false;
        self.restart = false;
        self.pause = false;
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Launched,
    WallBounce,
    PaddleHit,
    BricksDestroyed { count: u32, exploded: bool },
    BallLost,
    Cleared,
    Restarted,
    Paused,
    Resumed,
}

/// What a tick did
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Number of paddle shrink calls made this tick
    pub shrinks: u32,
}

impl TickReport {
    pub fn contains(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }

    /// Bricks destroyed this tick, explosion casualties included
    pub fn bricks_destroyed(&self) -> u32 {
        self.events
            .iter()
            .map(|e| match e {
                GameEvent::BricksDestroyed { count, .. } => *count,
                _ => 0,
            })
            .sum()
    }
}

/// Complete match state, owned by the game loop
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub paddle: Paddle,
    pub ball: Ball,
    pub wall: BrickWall,
    pub manager: GameStateManager,
    /// Simulation tick counter (not advanced while paused)
    pub time_ticks: u64,
    /// Matches started, the current one included
    pub matches: u32,
}

impl GameState {
    /// Create a new match with the given seed
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let wall = BrickWall::generate(&config.bricks, config.window.width, &mut rng);
        let paddle = Paddle::new(&config);
        let ball = Ball::new(&config, &paddle);

        log::info!(
            "New match (seed {seed}): {} bricks, {} explosive",
            wall.bricks().len(),
            wall.special_count()
        );

        Self {
            config,
            seed,
            rng,
            paddle,
            ball,
            wall,
            manager: GameStateManager::new(),
            time_ticks: 0,
            matches: 1,
        }
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.manager.phase()
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.manager.score()
    }

    /// Milliseconds of simulated time
    pub fn elapsed_ms(&self) -> u64 {
        self.time_ticks * 1000 / u64::from(self.config.window.tick_rate)
    }

    /// Dock the ball above the paddle after it was lost. Score and wall persist.
    pub fn reset_ball(&mut self) {
        self.ball.reset_on(&self.paddle);
    }

    /// Discard wall, paddle, ball and score for a fresh match.
    ///
    /// The phase is not touched; `tick` drives it through `PhaseEvent::Restart`.
    /// The RNG keeps running, so the new wall gets a new explosive layout.
    pub fn restart(&mut self) {
        self.wall =
            BrickWall::generate(&self.config.bricks, self.config.window.width, &mut self.rng);
        self.paddle = Paddle::new(&self.config);
        self.ball = Ball::new(&self.config, &self.paddle);
        self.manager.clear_score();
        self.matches += 1;
        log::info!(
            "Match {} started: {} explosive bricks",
            self.matches,
            self.wall.special_count()
        );
    }

    /// Apply a phase event. Returns whether the phase changed.
    fn apply(&mut self, event: PhaseEvent) -> bool {
        self.manager.handle(event).is_some()
    }
}

/// Advance the match by one fixed tick.
///
/// Order: input edges, paddle, then either the docked ball follows the
/// paddle or the free ball moves and resolves walls, paddle, bricks, win and
/// out-of-bounds in that order.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();

    if input.pause && state.apply(PhaseEvent::TogglePause) {
        if state.manager.is_paused() {
            log::info!("Paused");
            report.events.push(GameEvent::Paused);
        } else {
            log::info!("Resumed");
            report.events.push(GameEvent::Resumed);
        }
    }
    if state.manager.is_paused() {
        return report;
    }

    if input.restart && state.apply(PhaseEvent::Restart) {
        state.restart();
        report.events.push(GameEvent::Restarted);
    }

    if input.launch && state.apply(PhaseEvent::Launch) {
        state.ball.start();
        log::info!("Ball launched");
        report.events.push(GameEvent::Launched);
    }

    state.time_ticks += 1;

    if let Some(x) = input.pointer_x {
        state.paddle.update(x);
    }

    match state.phase() {
        GamePhase::WaitingToStart => state.ball.follow_paddle(&state.paddle),
        GamePhase::Playing => step_playing(state, &mut report),
        GamePhase::Win | GamePhase::Paused { .. } => {}
    }

    report
}

fn step_playing(state: &mut GameState, report: &mut TickReport) {
    state.ball.advance();

    if state.ball.check_wall_collision() {
        report.events.push(GameEvent::WallBounce);
    }

    if state.ball.check_paddle_collision(&state.paddle) {
        report.events.push(GameEvent::PaddleHit);
    }

    let result = state.wall.check_collision(&state.ball.bounds());
    if result.hit {
        state
            .manager
            .add_score(state.config.scoring.points_per_brick * u64::from(result.hit_count));

        for _ in 0..result.hit_count {
            state.paddle.shrink();
            report.shrinks += 1;
        }
        log::debug!(
            "Destroyed {} brick(s), paddle width now {}",
            result.hit_count,
            state.paddle.width()
        );

        match result.direction {
            BounceDirection::Horizontal => state.ball.bounce_horizontal(),
            BounceDirection::Vertical => state.ball.bounce_vertical(),
        }
        report.events.push(GameEvent::BricksDestroyed {
            count: result.hit_count,
            exploded: result.exploded,
        });
    }

    if state.wall.remaining_count() == 0 && state.apply(PhaseEvent::WallCleared) {
        state.ball.halt();
        log::info!("Wall cleared! Final score {}", state.score());
        report.events.push(GameEvent::Cleared);
    }

    if state.ball.is_out_of_bounds() && state.apply(PhaseEvent::BallLost) {
        state.reset_ball();
        log::info!("Ball lost, score {}", state.score());
        report.events.push(GameEvent::BallLost);
    }
}
