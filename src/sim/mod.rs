//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Sources summed in slot order
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod geometry;
pub mod gravity;
pub mod integrator;
pub mod state;
pub mod tick;

pub use arena::{ArenaGeometry, ArenaShape, Goal, Obstacle, ShapeKind};
pub use collision::{Classification, LoseCause, classify};
pub use geometry::{Rect, Span, bearing_angle, distance};
pub use gravity::{GravityField, compute_acceleration};
pub use state::{GameEvent, GamePhase, GameState, TargetState};
pub use tick::{Simulation, TickInput, tick};
