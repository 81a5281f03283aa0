//! Host-side game loop
//!
//! Polls input once per frame, runs however many fixed ticks the clock
//! allows, then hands a snapshot to the renderer. Input waits in `pending`
//! until a tick consumes it.

use std::time::{Duration, Instant};

use super::input::InputSource;
use super::time::FixedStep;
use crate::renderer::{FrameView, Renderer};
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Running totals kept by the loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub frames: u64,
    pub ticks: u64,
    pub bricks_destroyed: u64,
    pub balls_lost: u64,
    pub wins: u64,
    pub render_errors: u64,
}

pub struct GameLoop<I, R> {
    pub state: GameState,
    input: I,
    renderer: R,
    clock: FixedStep,
    /// Input not yet seen by a tick
    pending: TickInput,
    stats: LoopStats,
}

impl<I: InputSource, R: Renderer> GameLoop<I, R> {
    pub fn new(state: GameState, input: I, renderer: R) -> Self {
        let clock = FixedStep::new(state.config.window.tick_rate);
        Self {
            state,
            input,
            renderer,
            clock,
            pending: TickInput::default(),
            stats: LoopStats::default(),
        }
    }

    pub fn stats(&self) -> &LoopStats {
        &self.stats
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run one host frame of `frame_secs` seconds. Returns false on quit.
    pub fn frame(&mut self, frame_secs: f32) -> bool {
        let polled = self.input.poll(&self.state);
        if polled.quit {
            return false;
        }

        self.pending.merge(&polled.input);

        let steps = self.clock.advance(frame_secs);
        for _ in 0..steps {
            let report = tick(&mut self.state, &self.pending);
            self.pending.consume_one_shots();
            self.record(&report.events, report.bricks_destroyed());
            if report.contains(GameEvent::Restarted) {
                self.clock.reset();
            }
        }

        self.present();
        true
    }

    /// Run exactly one tick per frame as fast as possible until quit
    pub fn run_headless(&mut self) -> &LoopStats {
        let dt = self.clock.dt();
        while self.frame(dt) {}
        &self.stats
    }

    /// Run at wall-clock pace, sleeping off the rest of each tick period
    pub fn run_realtime(&mut self) -> &LoopStats {
        let period = Duration::from_secs_f32(self.clock.dt());
        let mut last = Instant::now();
        loop {
            let now = Instant::now();
            let elapsed = now.duration_since(last).as_secs_f32();
            last = now;
            if !self.frame(elapsed) {
                break;
            }
            if let Some(rest) = period.checked_sub(last.elapsed()) {
                std::thread::sleep(rest);
            }
        }
        &self.stats
    }

    fn record(&mut self, events: &[GameEvent], destroyed: u32) {
        self.stats.ticks += 1;
        self.stats.bricks_destroyed += u64::from(destroyed);
        for event in events {
            match event {
                GameEvent::BallLost => self.stats.balls_lost += 1,
                GameEvent::Cleared => self.stats.wins += 1,
                _ => {}
            }
        }
    }

    fn present(&mut self) {
        let view = FrameView::capture(&self.state);
        match self.renderer.draw(&view) {
            Ok(()) => {}
            Err(e) => {
                self.stats.render_errors += 1;
                log::warn!("Render error: {e}");
            }
        }
        self.stats.frames += 1;
    }
}
