//! Antigravity - steer a free body into the goal with repelling players
//!
//! Core modules:
//! - `sim`: Fixed timestep simulation (gravity field, integration, collisions)
//! - `config`: Startup configuration and validation
//! - `platform`: Headless stand-ins for the input layer

pub mod config;
pub mod platform;
pub mod sim;

pub use config::{ConfigError, SimConfig};

/// Reference configuration constants
pub mod consts {
    /// Fixed simulation timestep (simulation accuracy, not frame time)
    pub const SIM_DT: f64 = 0.01;
    /// Frame rate the presentation layer drives ticks at
    pub const FRAME_HZ: f64 = 60.0;

    /// Gravitational constant
    pub const GRAVITY_G: f64 = 6.61e-11;
    /// Source mass; negative turns gravity into antigravity
    pub const SOURCE_MASS: f64 = -1e16;

    /// Most player bodies the field supports
    pub const MAX_SOURCES: usize = 4;
    /// Default number of active players
    pub const DEFAULT_PLAYERS: usize = 2;
    /// Player movement per frame (pixels)
    pub const PLAYER_SPEED: f64 = 5.0;

    /// Target spawn point
    pub const SPAWN_X: f64 = 450.0;
    pub const SPAWN_Y: f64 = 400.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f64 = 600.0;
    pub const ARENA_HEIGHT: f64 = 500.0;
    pub const WALL_THICKNESS: f64 = 10.0;
    /// Target radius; walls collide with the target's edge, not its center
    pub const TARGET_RADIUS: f64 = 10.0;
}
