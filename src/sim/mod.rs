//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod ball;
pub mod collision;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;
pub mod wall;

pub use autopilot::autopilot_input;
pub use ball::{Ball, BallState};
pub use collision::{BounceDirection, CollisionResult, bounce_direction};
pub use paddle::Paddle;
pub use rect::Rect;
pub use state::{GamePhase, GameStateManager, PhaseEvent, Resume, transition};
pub use tick::{GameEvent, GameState, TickInput, TickReport, tick};
pub use wall::{Brick, BrickWall, choose_special_indices};
