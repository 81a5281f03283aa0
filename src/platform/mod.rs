//! Platform abstraction layer
//!
//! Handles the pieces between the simulation and the outside world:
//! - Time/ticks (fixed-step accumulator)
//! - Input sources (pointer, launch/restart/pause, quit)
//! - The host loop tying input, ticks and rendering together

pub mod input;
pub mod runner;
pub mod time;

pub use input::{AutopilotInput, InputFrame, InputSource, ScriptedInput};
pub use runner::{GameLoop, LoopStats};
pub use time::FixedStep;
