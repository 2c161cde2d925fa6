//! # objective-rps
//!
//! Round engine for an objective-based rock-paper-scissors game: each round
//! the player faces a randomly drawn app move and a randomly drawn objective
//! ("win this round" or "lose this round"). Meeting the objective scores a
//! point; anything else, ties included, resets the score to zero.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: the engine never owns hidden UI-bound state.
//!    `resolve` and `acknowledge` take `&mut GameState` and hand back an
//!    outcome; callers render from a `Snapshot`.
//!
//! 2. **Injected randomness**: every draw goes through [`GameRng`], a
//!    seedable ChaCha8 wrapper. Same seed, same session.
//!
//! 3. **No error taxonomy**: the move domain is closed and total. The only
//!    "failure" is the game-defined loss, which is normal control flow.
//!
//! ## Modules
//!
//! - `core`: moves, objectives, game state, RNG
//! - `rules`: round resolution and acknowledgement
//! - `view`: render inputs for a UI layer
//!
//! ## Quick start
//!
//! ```
//! use objective_rps::{resolve, render, GameState, Move};
//!
//! let mut state = GameState::new(42);
//! let outcome = resolve(&mut state, Move::Rock);
//! assert!(outcome.is_some());
//!
//! let snapshot = render(&state);
//! assert!(snapshot.score == 0 || snapshot.score == 1);
//! ```

pub mod core;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{GameRng, GameState, Move, Objective, Phase};

pub use crate::rules::{acknowledge, resolve, scores, Outcome};

pub use crate::view::{render, Prompt, Snapshot};
