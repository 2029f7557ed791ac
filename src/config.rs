//! Run configuration
//!
//! Read once at startup and never changed during a run. Any field missing from
//! a config file takes the reference value.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{ArenaGeometry, Classification, GravityField, classify};

/// Invalid configuration, detected before the first tick
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{requested} active sources requested, at most {max} supported")]
    TooManySources { requested: usize, max: usize },

    #[error("{active} active sources but only {available} positions supplied")]
    SourcesUnavailable { active: usize, available: usize },

    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),

    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("{0} must be positive and finite")]
    NotPositive(&'static str),

    #[error("{0} must not be negative")]
    Negative(&'static str),

    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    #[error("goal does not touch the outer bounds")]
    GoalOutsideBounds,

    #[error("obstacle {index} lies outside the outer bounds")]
    ObstacleOutsideBounds { index: usize },

    #[error("spawn position ({x}, {y}) is not playable: {classification:?}")]
    SpawnBlocked {
        x: f64,
        y: f64,
        classification: Classification,
    },

    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything a run needs to know up front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Where the target starts
    pub spawn: DVec2,
    /// Target velocity at spawn
    pub initial_velocity: DVec2,
    /// Simulation timestep
    pub dt: f64,
    /// Gravitational constant
    pub g: f64,
    /// Mass of every source (negative = antigravity)
    pub mass: f64,
    /// Number of player bodies acting on the target (0-4)
    pub players: usize,
    /// Player movement per tick
    pub player_speed: f64,
    /// Player body start positions, one per slot
    pub player_starts: [DVec2; MAX_SOURCES],
    /// Ticks per second of the driving loop (for reporting times)
    pub frame_hz: f64,
    /// Walls, obstacles and goal
    pub arena: ArenaGeometry,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            spawn: DVec2::new(SPAWN_X, SPAWN_Y),
            initial_velocity: DVec2::ZERO,
            dt: SIM_DT,
            g: GRAVITY_G,
            mass: SOURCE_MASS,
            players: DEFAULT_PLAYERS,
            player_speed: PLAYER_SPEED,
            player_starts: [DVec2::ZERO; MAX_SOURCES],
            frame_hz: FRAME_HZ,
            arena: ArenaGeometry::reference(),
        }
    }
}

impl SimConfig {
    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file and validate
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Field parameters for the configured players
    pub fn field(&self) -> GravityField {
        GravityField::new(self.g, self.mass, self.players)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field; the first problem found is returned
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players > MAX_SOURCES {
            return Err(ConfigError::TooManySources {
                requested: self.players,
                max: MAX_SOURCES,
            });
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimestep(self.dt));
        }
        if !self.g.is_finite() {
            return Err(ConfigError::NonFinite("g"));
        }
        if !self.mass.is_finite() {
            return Err(ConfigError::NonFinite("mass"));
        }
        if !self.spawn.is_finite() {
            return Err(ConfigError::NonFinite("spawn"));
        }
        if !self.initial_velocity.is_finite() {
            return Err(ConfigError::NonFinite("initial_velocity"));
        }
        if !self.player_starts.iter().all(|p| p.is_finite()) {
            return Err(ConfigError::NonFinite("player_starts"));
        }
        if !self.player_speed.is_finite() {
            return Err(ConfigError::NonFinite("player_speed"));
        }
        if self.player_speed < 0.0 {
            return Err(ConfigError::Negative("player_speed"));
        }
        if !(self.frame_hz.is_finite() && self.frame_hz > 0.0) {
            return Err(ConfigError::NotPositive("frame_hz"));
        }

        self.validate_arena()?;

        let classification = classify(self.spawn, &self.arena);
        if classification != Classification::Continue {
            return Err(ConfigError::SpawnBlocked {
                x: self.spawn.x,
                y: self.spawn.y,
                classification,
            });
        }

        Ok(())
    }

    fn validate_arena(&self) -> Result<(), ConfigError> {
        let arena = &self.arena;
        if !arena.outer.is_well_formed() {
            return Err(ConfigError::MalformedGeometry("outer bounds".to_string()));
        }
        if !arena.goal.is_well_formed() {
            return Err(ConfigError::MalformedGeometry("goal".to_string()));
        }
        if !arena.goal.touches(&arena.outer) {
            return Err(ConfigError::GoalOutsideBounds);
        }

        for (index, obstacle) in arena.obstacles.iter().enumerate() {
            if !obstacle.x.is_well_formed() {
                return Err(ConfigError::MalformedGeometry(format!(
                    "obstacle {index} extent"
                )));
            }
            if obstacle.gap.is_some_and(|gap| !gap.is_well_formed()) {
                return Err(ConfigError::MalformedGeometry(format!("obstacle {index} gap")));
            }
            if !obstacle.x.touches(&arena.outer.x) {
                return Err(ConfigError::ObstacleOutsideBounds { index });
            }
        }

        Ok(())
    }
}
