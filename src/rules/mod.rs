//! Round resolution rules.
//!
//! The rules layer is the only code that mutates `GameState`:
//! - `resolve` settles a round against the current draw
//! - `acknowledge` dismisses a loss prompt and starts the next round
//!
//! Both are guarded by the phase, so out-of-turn calls are no-ops
//! rather than errors.

pub mod engine;

pub use engine::{acknowledge, resolve, scores, Outcome};
