//! Goal and wall tests for the target's position
//!
//! Only the position at the end of a tick is tested, so a fast target can skip
//! over a thin wall between two ticks.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arena::ArenaGeometry;

/// What the target hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoseCause {
    /// Left the outer bounds
    OutOfBounds,
    /// Ran into the inner obstacle at this index
    Obstacle { index: usize },
}

/// Result of testing one position against the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Continue,
    Win,
    Lose(LoseCause),
}

impl Classification {
    /// Whether the run ends here
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Classification::Continue)
    }
}

/// Classify `pos` against the arena.
///
/// Checked in order, first match wins:
/// 1. strictly inside the goal → Win
/// 2. outside the outer bounds (bounds inclusive) → Lose
/// 3. inside an obstacle's extent and not inside its gap → Lose
/// 4. Continue
pub fn classify(pos: DVec2, arena: &ArenaGeometry) -> Classification {
    if arena.goal.contains(pos) {
        return Classification::Win;
    }

    if !arena.outer.contains_closed(pos) {
        return Classification::Lose(LoseCause::OutOfBounds);
    }

    if let Some(index) = arena.obstacles.iter().position(|o| o.blocks(pos.x, pos.y)) {
        return Classification::Lose(LoseCause::Obstacle { index });
    }

    Classification::Continue
}
