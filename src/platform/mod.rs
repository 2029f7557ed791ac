//! Platform abstraction layer
//!
//! Stand-ins for the keyboard/window side of the game. The simulation only ever
//! sees plain coordinates produced here.

pub mod input;

pub use input::{Move, PlayerBodies, Script};
