//! Input sources
//!
//! A source is polled once per frame and yields the tick input plus a quit
//! signal. Window-system sources live with the host; this module provides the
//! headless ones.

use std::collections::VecDeque;

use crate::sim::{GameState, TickInput, autopilot_input};

/// One poll's worth of input
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    pub input: TickInput,
    /// Stop the game loop
    pub quit: bool,
}

impl InputFrame {
    pub fn quit() -> Self {
        Self {
            input: TickInput::default(),
            quit: true,
        }
    }
}

/// Delivers input to the game loop
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> InputFrame;
}

/// Demo player, optionally quitting after a number of simulation ticks
#[derive(Debug, Clone, Default)]
pub struct AutopilotInput {
    max_ticks: Option<u64>,
}

impl AutopilotInput {
    pub fn new(max_ticks: Option<u64>) -> Self {
        Self { max_ticks }
    }
}

impl InputSource for AutopilotInput {
    fn poll(&mut self, state: &GameState) -> InputFrame {
        if self.max_ticks.is_some_and(|max| state.time_ticks >= max) {
            return InputFrame::quit();
        }
        InputFrame {
            input: autopilot_input(state),
            quit: false,
        }
    }
}

/// Replays a fixed list of frames, then quits
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames
                .into_iter()
                .map(|input| InputFrame { input, quit: false })
                .collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> InputFrame {
        self.frames.pop_front().unwrap_or_else(InputFrame::quit)
    }
}
