//! Game state and core simulation types
//!
//! Everything that changes between ticks lives in [`GameState`], owned by the
//! caller and passed into [`super::tick`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::LoseCause;

/// Position and velocity of the indirectly controlled body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetState {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl TargetState {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }

    pub fn at_rest(pos: DVec2) -> Self {
        Self::new(pos, DVec2::ZERO)
    }
}

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Target is free-flying
    Playing,
    /// Target reached the goal
    Won,
    /// Target hit a wall or obstacle
    Lost(LoseCause),
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Event reported to the presentation layer after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Continue,
    Won { ticks: u64 },
    Lost { cause: LoseCause, ticks: u64 },
}

impl GameEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameEvent::Continue)
    }
}

/// Complete run state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// The body being steered
    pub target: TargetState,
    /// Current phase
    pub phase: GamePhase,
    /// Ticks simulated so far
    pub time_ticks: u64,
    /// Acceleration applied on the last tick (display only)
    pub last_accel: DVec2,
}

impl GameState {
    pub fn new(target: TargetState) -> Self {
        Self {
            target,
            phase: GamePhase::Playing,
            time_ticks: 0,
            last_accel: DVec2::ZERO,
        }
    }

    /// Event matching the current phase
    pub fn event(&self) -> GameEvent {
        match self.phase {
            GamePhase::Playing => GameEvent::Continue,
            GamePhase::Won => GameEvent::Won {
                ticks: self.time_ticks,
            },
            GamePhase::Lost(cause) => GameEvent::Lost {
                cause,
                ticks: self.time_ticks,
            },
        }
    }

    /// Elapsed play time when ticks are driven at `frame_hz`
    pub fn elapsed_secs(&self, frame_hz: f64) -> f64 {
        self.time_ticks as f64 / frame_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_playing() {
        let state = GameState::new(TargetState::at_rest(DVec2::new(450.0, 400.0)));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.target.vel, DVec2::ZERO);
        assert_eq!(state.event(), GameEvent::Continue);
    }

    #[test]
    fn test_event_follows_phase() {
        let mut state = GameState::new(TargetState::at_rest(DVec2::ZERO));
        state.time_ticks = 42;
        state.phase = GamePhase::Won;
        assert_eq!(state.event(), GameEvent::Won { ticks: 42 });
        assert!(state.phase.is_over());

        state.phase = GamePhase::Lost(LoseCause::OutOfBounds);
        assert_eq!(
            state.event(),
            GameEvent::Lost {
                cause: LoseCause::OutOfBounds,
                ticks: 42
            }
        );
        assert!(state.event().is_terminal());
    }

    #[test]
    fn test_elapsed_secs() {
        let mut state = GameState::new(TargetState::at_rest(DVec2::ZERO));
        state.time_ticks = 90;
        assert!((state.elapsed_secs(60.0) - 1.5).abs() < 1e-12);
    }
}
