//! Core types: moves, objectives, game state, RNG.
//!
//! These are the building blocks the rules layer operates on. Nothing in
//! here decides rounds; `rules` does that.

pub mod moves;
pub mod objective;
pub mod rng;
pub mod state;

pub use moves::Move;
pub use objective::Objective;
pub use rng::GameRng;
pub use state::{GameState, Phase};
