//! Planar geometry helpers
//!
//! Axis-aligned rectangles and spans used by the arena, plus the bearing and
//! distance math the gravity field needs.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Bearing from `from` to `to` in radians.
///
/// Arctangent of the slope with the quadrant corrected for targets on the left.
/// When both points share an x coordinate the slope is undefined, so the bearing
/// is straight up or down (±π/2) depending on which side `to` lies.
#[inline]
pub fn bearing_angle(from: DVec2, to: DVec2) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx > 0.0 {
        (dy / dx).atan()
    } else if dx < 0.0 {
        (dy / dx).atan() + PI
    } else if dy > 0.0 {
        FRAC_PI_2
    } else {
        -FRAC_PI_2
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// A closed interval on one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// min < max and both finite
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    /// Strictly between the bounds
    #[inline]
    pub fn contains_open(&self, v: f64) -> bool {
        v > self.min && v < self.max
    }

    /// Between the bounds, bounds included
    #[inline]
    pub fn contains_closed(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Whether the closed spans share at least one point
    pub fn touches(&self, other: &Span) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// An axis-aligned rectangle given by its x and y extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: Span,
    pub y: Span,
}

impl Rect {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x: Span::new(x_min, x_max),
            y: Span::new(y_min, y_max),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.x.is_well_formed() && self.y.is_well_formed()
    }

    #[inline]
    pub fn contains_closed(&self, p: DVec2) -> bool {
        self.x.contains_closed(p.x) && self.y.contains_closed(p.y)
    }

    /// Grow (or shrink, for negative `by`) on every side
    pub fn inflate(&self, by: f64) -> Self {
        Self::new(self.x.min - by, self.x.max + by, self.y.min - by, self.y.max + by)
    }
}
