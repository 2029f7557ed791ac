//! Fixed timestep integration of the target body
//!
//! Position advances with the velocity and acceleration from before the step,
//! then velocity advances with that same acceleration sample. The step size is
//! a fixed accuracy setting and does not follow frame time; large steps can
//! overshoot close encounters, which is left as is.

use glam::DVec2;

use super::state::TargetState;

/// Advance `state` by one step of `dt` under constant acceleration `accel`
#[inline]
pub fn step(state: TargetState, accel: DVec2, dt: f64) -> TargetState {
    let pos = state.pos + state.vel * dt + accel * (dt * dt / 2.0);
    let vel = state.vel + accel * dt;
    TargetState { pos, vel }
}
