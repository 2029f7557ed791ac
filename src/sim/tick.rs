//! Fixed timestep simulation tick
//!
//! One tick: sum the field at the target, integrate, classify the new position.

use glam::DVec2;

use super::collision::{Classification, classify};
use super::integrator;
use super::state::{GameEvent, GamePhase, GameState, TargetState};
use crate::config::{ConfigError, SimConfig};

/// Source positions for a single tick, already moved by the input layer
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Player body positions in slot order; slots past `players` are ignored
    pub sources: Vec<DVec2>,
}

impl TickInput {
    pub fn new(sources: &[DVec2]) -> Self {
        Self {
            sources: sources.to_vec(),
        }
    }
}

/// Advance the game state by one fixed timestep.
///
/// Once the run is over the state is left alone and the terminal event is
/// returned again. Fails only when fewer source positions are supplied than
/// the configured player count.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    config: &SimConfig,
) -> Result<GameEvent, ConfigError> {
    if state.phase.is_over() {
        return Ok(state.event());
    }

    let accel = config.field().acceleration(state.target.pos, &input.sources)?;

    state.target = integrator::step(state.target, accel, config.dt);
    state.last_accel = accel;
    state.time_ticks += 1;

    state.phase = match classify(state.target.pos, &config.arena) {
        Classification::Continue => GamePhase::Playing,
        Classification::Win => GamePhase::Won,
        Classification::Lose(cause) => GamePhase::Lost(cause),
    };

    let event = state.event();
    log::trace!(
        "tick {}: pos=({:.3}, {:.3}) vel=({:.3}, {:.3}) -> {:?}",
        state.time_ticks,
        state.target.pos.x,
        state.target.pos.y,
        state.target.vel.x,
        state.target.vel.y,
        event
    );
    Ok(event)
}

/// A validated configuration together with the run it drives
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    state: GameState,
}

impl Simulation {
    /// Validate `config` and spawn the target
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(TargetState::new(config.spawn, config.initial_velocity));
        log::info!(
            "Spawned target at ({}, {}) with {} active player(s)",
            config.spawn.x,
            config.spawn.y,
            config.players
        );
        Ok(Self { config, state })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one tick with the given source positions
    pub fn tick(&mut self, sources: &[DVec2]) -> Result<GameEvent, ConfigError> {
        tick(&mut self.state, &TickInput::new(sources), &self.config)
    }

    /// Tick until the run ends or `max_ticks` have run, asking `input` for
    /// source positions before every tick. Returns the last event.
    pub fn run<F>(&mut self, mut input: F, max_ticks: u64) -> Result<GameEvent, ConfigError>
    where
        F: FnMut(&GameState) -> TickInput,
    {
        let mut event = self.state.event();
        for _ in 0..max_ticks {
            if event.is_terminal() {
                break;
            }
            let tick_input = input(&self.state);
            event = tick(&mut self.state, &tick_input, &self.config)?;
        }
        Ok(event)
    }
}
