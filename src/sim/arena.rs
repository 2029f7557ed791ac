//! Arena layout
//!
//! One description of the walls, obstacles and goal shared by the collision
//! classifier and whatever draws the arena. Classification rectangles are in
//! terms of the target's center; the drawn rectangles are derived from them by
//! the target radius so the two never drift apart.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Span};
use crate::consts::*;

/// A vertical wall spanning part of the arena's width, optionally with a
/// passage the target can fly through
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Horizontal extent the target's center may not enter
    pub x: Span,
    /// Vertical band where the wall is open (None = solid across the arena)
    #[serde(default)]
    pub gap: Option<Span>,
}

impl Obstacle {
    pub fn new(x: Span, gap: Option<Span>) -> Self {
        Self { x, gap }
    }

    /// Whether the target center at `(x, y)` is inside the wall
    #[inline]
    pub fn blocks(&self, x: f64, y: f64) -> bool {
        self.x.contains_open(x) && !self.gap.is_some_and(|g| g.contains_open(y))
    }
}

/// The winning region: strictly inside an x extent and a y band whose
/// either side may be open, so a goal cut into a wall reaches past it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub x: Span,
    /// Exclusive lower y bound (None = open)
    #[serde(default)]
    pub y_min: Option<f64>,
    /// Exclusive upper y bound (None = open)
    #[serde(default)]
    pub y_max: Option<f64>,
}

impl Goal {
    pub fn new(x: Span, y_min: Option<f64>, y_max: Option<f64>) -> Self {
        Self { x, y_min, y_max }
    }

    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        self.x.contains_open(p.x)
            && self.y_min.is_none_or(|min| p.y > min)
            && self.y_max.is_none_or(|max| p.y < max)
    }

    /// Finite bounds with min < max on both axes
    pub fn is_well_formed(&self) -> bool {
        let finite = |v: Option<f64>| v.is_none_or(f64::is_finite);
        let ordered = match (self.y_min, self.y_max) {
            (Some(min), Some(max)) => min < max,
            _ => true,
        };
        self.x.is_well_formed() && finite(self.y_min) && finite(self.y_max) && ordered
    }

    /// Whether the goal overlaps or shares an edge with `rect`
    pub fn touches(&self, rect: &Rect) -> bool {
        self.x.touches(&rect.x)
            && self.y_min.is_none_or(|min| min <= rect.y.max)
            && self.y_max.is_none_or(|max| max >= rect.y.min)
    }
}

/// Kind of drawn arena shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Wall,
    Goal,
}

/// A rectangle for the presentation layer to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaShape {
    pub kind: ShapeKind,
    pub rect: Rect,
}

/// Fixed arena geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaGeometry {
    /// Region the target's center must stay inside (bounds inclusive)
    pub outer: Rect,
    /// Inner walls
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    /// Reaching the inside of this region wins the run
    pub goal: Goal,
}

impl Default for ArenaGeometry {
    fn default() -> Self {
        Self::reference()
    }
}

impl ArenaGeometry {
    /// The classic layout: a 600x500 box, one middle wall with a passage,
    /// and the finish line on the bottom wall left of the middle wall
    pub fn reference() -> Self {
        let inset = WALL_THICKNESS + TARGET_RADIUS;
        let outer = Rect::new(inset, ARENA_WIDTH - inset, inset, ARENA_HEIGHT - inset);

        // Drawn wall is x 295..305 with openings between y 110 and 230
        let middle = Obstacle::new(
            Span::new(295.0 - TARGET_RADIUS, 305.0 + TARGET_RADIUS),
            Some(Span::new(110.0 + TARGET_RADIUS, 230.0 - TARGET_RADIUS)),
        );

        Self {
            outer,
            obstacles: vec![middle],
            // Anything past the bottom bound inside the finish line's x extent
            goal: Goal::new(Span::new(80.0, 180.0), Some(outer.y.max), None),
        }
    }

    /// Rectangles to draw for a target of the given radius.
    ///
    /// The four boundary walls fill the band between the arena edge and the
    /// outer bound grown by `target_radius`; each obstacle is drawn as one rect
    /// per solid segment; the goal comes last.
    pub fn shapes(&self, target_radius: f64) -> Vec<ArenaShape> {
        let inner = self.outer.inflate(target_radius);
        let edge = inner.inflate(WALL_THICKNESS);
        let wall = |rect| ArenaShape {
            kind: ShapeKind::Wall,
            rect,
        };

        let mut shapes = vec![
            wall(Rect::new(edge.x.min, edge.x.max, edge.y.min, inner.y.min)),
            wall(Rect::new(edge.x.min, inner.x.min, edge.y.min, edge.y.max)),
            wall(Rect::new(inner.x.max, edge.x.max, edge.y.min, edge.y.max)),
            wall(Rect::new(edge.x.min, edge.x.max, inner.y.max, edge.y.max)),
        ];

        for obstacle in &self.obstacles {
            let x = Span::new(obstacle.x.min + target_radius, obstacle.x.max - target_radius);
            match obstacle.gap {
                Some(gap) => {
                    let gap_top = gap.min - target_radius;
                    let gap_bottom = gap.max + target_radius;
                    if gap_top > inner.y.min {
                        shapes.push(wall(Rect::new(x.min, x.max, inner.y.min, gap_top)));
                    }
                    if gap_bottom < inner.y.max {
                        shapes.push(wall(Rect::new(x.min, x.max, gap_bottom, inner.y.max)));
                    }
                }
                None => shapes.push(wall(Rect::new(x.min, x.max, inner.y.min, inner.y.max))),
            }
        }

        let top = self
            .goal
            .y_min
            .map_or(edge.y.min, |min| min + target_radius)
            .max(edge.y.min);
        let bottom = self
            .goal
            .y_max
            .map_or(edge.y.max, |max| max - target_radius)
            .min(edge.y.max);
        shapes.push(ArenaShape {
            kind: ShapeKind::Goal,
            rect: Rect::new(self.goal.x.min, self.goal.x.max, top, bottom),
        });
        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_bounds() {
        let arena = ArenaGeometry::reference();
        assert_eq!(arena.outer, Rect::new(20.0, 580.0, 20.0, 480.0));
        assert_eq!(arena.obstacles.len(), 1);
        assert_eq!(arena.obstacles[0].x, Span::new(285.0, 315.0));
        assert_eq!(arena.obstacles[0].gap, Some(Span::new(120.0, 220.0)));
        assert_eq!(arena.goal.x, Span::new(80.0, 180.0));
        assert_eq!(arena.goal.y_min, Some(480.0));
        assert_eq!(arena.goal.y_max, None);
    }

    #[test]
    fn test_obstacle_blocks() {
        let obstacle = Obstacle::new(Span::new(295.0, 305.0), Some(Span::new(120.0, 220.0)));
        assert!(obstacle.blocks(300.0, 50.0));
        assert!(!obstacle.blocks(300.0, 150.0));
        assert!(!obstacle.blocks(290.0, 50.0));
        // Gap edges are part of the wall
        assert!(obstacle.blocks(300.0, 120.0));

        let solid = Obstacle::new(Span::new(295.0, 305.0), None);
        assert!(solid.blocks(300.0, 150.0));
    }

    #[test]
    fn test_goal_open_side() {
        let goal = ArenaGeometry::reference().goal;
        assert!(goal.contains(DVec2::new(130.0, 485.0)));
        assert!(goal.contains(DVec2::new(130.0, 5_000.0)));
        assert!(!goal.contains(DVec2::new(130.0, 480.0)));
        assert!(!goal.contains(DVec2::new(180.0, 485.0)));
        assert!(goal.is_well_formed());

        let boxed = Goal::new(Span::new(80.0, 180.0), Some(480.0), Some(500.0));
        assert!(!boxed.contains(DVec2::new(130.0, 505.0)));
    }

    #[test]
    fn test_goal_well_formed_and_touches() {
        let outer = Rect::new(20.0, 580.0, 20.0, 480.0);
        assert!(!Goal::new(Span::new(80.0, 180.0), Some(500.0), Some(490.0)).is_well_formed());
        assert!(!Goal::new(Span::new(80.0, 180.0), Some(f64::NAN), None).is_well_formed());
        assert!(Goal::new(Span::new(80.0, 180.0), None, None).is_well_formed());

        assert!(Goal::new(Span::new(80.0, 180.0), Some(480.0), None).touches(&outer));
        assert!(!Goal::new(Span::new(80.0, 180.0), Some(481.0), None).touches(&outer));
        assert!(Goal::new(Span::new(80.0, 180.0), None, Some(20.0)).touches(&outer));
    }

    #[test]
    fn test_reference_shapes_match_classic_drawing() {
        let shapes = ArenaGeometry::reference().shapes(TARGET_RADIUS);
        let walls: Vec<Rect> = shapes
            .iter()
            .filter(|s| s.kind == ShapeKind::Wall)
            .map(|s| s.rect)
            .collect();

        assert!(walls.contains(&Rect::new(0.0, 600.0, 0.0, 10.0)));
        assert!(walls.contains(&Rect::new(0.0, 10.0, 0.0, 500.0)));
        assert!(walls.contains(&Rect::new(590.0, 600.0, 0.0, 500.0)));
        assert!(walls.contains(&Rect::new(0.0, 600.0, 490.0, 500.0)));
        assert!(walls.contains(&Rect::new(295.0, 305.0, 10.0, 110.0)));
        assert!(walls.contains(&Rect::new(295.0, 305.0, 230.0, 490.0)));
        assert_eq!(walls.len(), 6);

        let goal = shapes.last().map(|s| (s.kind, s.rect));
        assert_eq!(
            goal,
            Some((ShapeKind::Goal, Rect::new(80.0, 180.0, 490.0, 500.0)))
        );
    }
}
