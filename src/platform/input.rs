//! Player bodies and their movement commands
//!
//! Each of the four slots is a point moved a fixed distance per tick by
//! directional commands, the way the arrow keys, WASD, TFGH and IJKL move the
//! bodies in the windowed game. Screen coordinates: y grows downward.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_SOURCES;
use crate::sim::TickInput;

/// Directional keys held for one player during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub down: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
}

impl Move {
    pub const NONE: Move = Move {
        up: false,
        down: false,
        left: false,
        right: false,
    };
    pub const UP: Move = Move { up: true, ..Move::NONE };
    pub const DOWN: Move = Move { down: true, ..Move::NONE };
    pub const LEFT: Move = Move { left: true, ..Move::NONE };
    pub const RIGHT: Move = Move { right: true, ..Move::NONE };

    /// Unit step for the held keys; opposite keys cancel
    pub fn direction(&self) -> DVec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f64;
        DVec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Positions of the four player bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBodies {
    positions: [DVec2; MAX_SOURCES],
    speed: f64,
}

impl PlayerBodies {
    pub fn new(positions: [DVec2; MAX_SOURCES], speed: f64) -> Self {
        Self { positions, speed }
    }

    pub fn positions(&self) -> &[DVec2; MAX_SOURCES] {
        &self.positions
    }

    /// Apply one tick of commands, slot by slot
    pub fn apply(&mut self, moves: &[Move; MAX_SOURCES]) {
        for (pos, m) in self.positions.iter_mut().zip(moves) {
            *pos += m.direction() * self.speed;
        }
    }

    /// Snapshot the current positions for the simulation
    pub fn tick_input(&self) -> TickInput {
        TickInput::new(&self.positions)
    }
}

/// A fixed sequence of per-tick commands, replayed in order.
///
/// Once exhausted every player holds still.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    steps: Vec<[Move; MAX_SOURCES]>,
    #[serde(skip)]
    cursor: usize,
}

impl Script {
    pub fn new(steps: Vec<[Move; MAX_SOURCES]>) -> Self {
        Self { steps, cursor: 0 }
    }

    /// Hold `moves` for `ticks` ticks
    pub fn hold(mut self, moves: [Move; MAX_SOURCES], ticks: usize) -> Self {
        self.steps.extend(std::iter::repeat_n(moves, ticks));
        self
    }

    pub fn next_moves(&mut self) -> [Move; MAX_SOURCES] {
        let moves = self
            .steps
            .get(self.cursor)
            .copied()
            .unwrap_or([Move::NONE; MAX_SOURCES]);
        self.cursor += 1;
        moves
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_direction() {
        assert_eq!(Move::UP.direction(), DVec2::new(0.0, -1.0));
        assert_eq!(Move::RIGHT.direction(), DVec2::new(1.0, 0.0));
        let both = Move {
            left: true,
            right: true,
            down: true,
            ..Move::NONE
        };
        assert_eq!(both.direction(), DVec2::new(0.0, 1.0));
    }

    #[test]
    fn test_apply_moves_each_slot() {
        let mut players = PlayerBodies::new([DVec2::ZERO; MAX_SOURCES], 5.0);
        players.apply(&[Move::RIGHT, Move::DOWN, Move::NONE, Move::LEFT]);
        assert_eq!(
            players.positions(),
            &[
                DVec2::new(5.0, 0.0),
                DVec2::new(0.0, 5.0),
                DVec2::ZERO,
                DVec2::new(-5.0, 0.0),
            ]
        );
        assert_eq!(players.tick_input().sources.len(), MAX_SOURCES);
    }

    #[test]
    fn test_script_replays_then_idles() {
        let mut script = Script::default().hold([Move::DOWN; MAX_SOURCES], 2);
        assert!(!script.is_finished());
        assert_eq!(script.next_moves(), [Move::DOWN; MAX_SOURCES]);
        assert_eq!(script.next_moves(), [Move::DOWN; MAX_SOURCES]);
        assert!(script.is_finished());
        assert_eq!(script.next_moves(), [Move::NONE; MAX_SOURCES]);
    }
}
