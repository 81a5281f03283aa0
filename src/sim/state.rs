//! Game phase state machine and score keeping

/// Phase to return to when a pause ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    WaitingToStart,
    Playing,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Ball docked on the paddle, waiting for launch input
    #[default]
    WaitingToStart,
    /// Active gameplay
    Playing,
    /// Every brick destroyed; waiting for restart input
    Win,
    /// Frozen; nothing moves until resumed
    Paused { resume: Resume },
}

/// Inputs to the phase machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    Launch,
    WallCleared,
    BallLost,
    Restart,
    TogglePause,
}

/// Pure transition function. `None` means the event is ignored in `phase`.
pub fn transition(phase: GamePhase, event: PhaseEvent) -> Option<GamePhase> {
    use GamePhase::*;
    use PhaseEvent::*;

    match (phase, event) {
        (WaitingToStart, Launch) => Some(Playing),
        (Playing, WallCleared) => Some(Win),
        (Playing, BallLost) => Some(WaitingToStart),
        (Win, Restart) => Some(WaitingToStart),
        (WaitingToStart, TogglePause) => Some(Paused {
            resume: Resume::WaitingToStart,
        }),
        (Playing, TogglePause) => Some(Paused {
            resume: Resume::Playing,
        }),
        (Paused { resume }, TogglePause) => Some(match resume {
            Resume::WaitingToStart => WaitingToStart,
            Resume::Playing => Playing,
        }),
        _ => None,
    }
}

/// Owns the phase and the score for one match
#[derive(Debug, Clone, Default)]
pub struct GameStateManager {
    phase: GamePhase,
    score: u64,
}

impl GameStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.phase, GamePhase::Paused { .. })
    }

    /// Apply an event. Returns the new phase if it changed.
    pub fn handle(&mut self, event: PhaseEvent) -> Option<GamePhase> {
        let next = transition(self.phase, event)?;
        log::debug!("Phase {:?} --{:?}--> {:?}", self.phase, event, next);
        self.phase = next;
        Some(next)
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Zero the score for a fresh match. The phase is left to `handle`.
    pub fn clear_score(&mut self) {
        self.score = 0;
    }
}
