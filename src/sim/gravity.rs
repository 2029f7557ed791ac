//! Gravity field of the player bodies
//!
//! The net acceleration on the target is the sum of one inverse-square term
//! per active source. Sources are summed in slice order so identical inputs
//! always give bit-identical results.

use glam::DVec2;

use super::geometry::{bearing_angle, distance};
use crate::config::ConfigError;
use crate::consts::MAX_SOURCES;

/// Field parameters shared by every source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    /// Gravitational constant
    pub g: f64,
    /// Source mass (negative = repulsive)
    pub mass: f64,
    /// Number of leading sources that contribute
    pub active_count: usize,
}

impl GravityField {
    pub fn new(g: f64, mass: f64, active_count: usize) -> Self {
        Self {
            g,
            mass,
            active_count,
        }
    }

    /// Net acceleration on a target at `target`
    pub fn acceleration(&self, target: DVec2, sources: &[DVec2]) -> Result<DVec2, ConfigError> {
        compute_acceleration(target, sources, self.active_count, self.g, self.mass)
    }
}

/// Acceleration contributed by one source at `source` on a target at `target`.
///
/// Returns `None` when the two coincide; the inverse-square term is undefined
/// there and the caller treats it as no contribution.
pub fn source_contribution(target: DVec2, source: DVec2, g: f64, mass: f64) -> Option<DVec2> {
    let dist = distance(source, target);
    if dist == 0.0 {
        return None;
    }
    let theta = bearing_angle(target, source);
    let magnitude = g * mass / (dist * dist);
    Some(DVec2::new(magnitude * theta.cos(), magnitude * theta.sin()))
}

/// Sum the contributions of the first `active_count` sources.
///
/// Entries past `active_count` are ignored. Asking for more sources than
/// supplied, or more than the field supports, is a configuration error.
pub fn compute_acceleration(
    target: DVec2,
    sources: &[DVec2],
    active_count: usize,
    g: f64,
    mass: f64,
) -> Result<DVec2, ConfigError> {
    if active_count > MAX_SOURCES {
        return Err(ConfigError::TooManySources {
            requested: active_count,
            max: MAX_SOURCES,
        });
    }
    if active_count > sources.len() {
        return Err(ConfigError::SourcesUnavailable {
            active: active_count,
            available: sources.len(),
        });
    }

    let mut accel = DVec2::ZERO;
    for (index, &source) in sources[..active_count].iter().enumerate() {
        match source_contribution(target, source, g, mass) {
            Some(a) => accel += a,
            None => log::debug!(
                "source {} coincides with target at ({}, {}), skipping",
                index,
                target.x,
                target.y
            ),
        }
    }
    Ok(accel)
}
