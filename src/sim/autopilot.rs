//! Idle/demo mode - the computer plays the game
//!
//! Deterministic: the output depends only on the game state.

use super::state::GamePhase;
use super::tick::{GameState, TickInput};

/// How far ahead (in ticks) to extrapolate the ball when tracking it
const LOOKAHEAD_TICKS: f32 = 6.0;

/// Build the input a demo player would give this tick
pub fn autopilot_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();

    match state.phase() {
        GamePhase::WaitingToStart => {
            // Serve from a slowly wandering spot instead of always dead center
            let t = state.time_ticks as f32 * 0.02;
            let half = state.config.window.width / 2.0;
            input.pointer_x = Some(half + t.sin() * half * 0.5);
            // Give the paddle a moment to move before serving
            input.launch = state.time_ticks % 30 == 29;
        }
        GamePhase::Playing => {
            let ball = &state.ball;
            let predicted = ball.pos.x + ball.vel.x * LOOKAHEAD_TICKS;

            // Oscillating offset so the ball does not retrace the same path
            let time_factor = state.time_ticks as f32 * 0.01;
            let offset = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15)
                * state.paddle.width()
                / 2.0;

            input.pointer_x = Some(predicted + offset);
        }
        GamePhase::Win => {
            input.restart = true;
        }
        GamePhase::Paused { .. } => {}
    }

    input
}
