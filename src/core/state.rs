//! Game state: score, current draw, and the round phase.
//!
//! ## GameState
//!
//! The single piece of mutable state in a session. Owned by the caller,
//! mutated only through `rules::resolve` and `rules::acknowledge`.
//!
//! ## Phase
//!
//! Two-state machine: `AwaitingInput` (the player may move) and
//! `ShowingOutcome` (a loss prompt is up, pending acknowledgement).

use serde::{Deserialize, Serialize};

use super::moves::Move;
use super::objective::Objective;
use super::rng::GameRng;

/// Where the round state machine currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ready for the player's next move.
    AwaitingInput,
    /// A non-scoring resolution happened; waiting for the player to
    /// acknowledge before the next round starts.
    ShowingOutcome,
}

/// Full session state.
///
/// Fields are public so tests and callers can inspect them directly;
/// writing them outside the rules layer breaks the score invariant.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Consecutive objectives met. Reset to 0 on any miss.
    pub score: u32,

    /// The app's current move, drawn fresh every round.
    pub app_move: Move,

    /// What the player must do this round.
    pub objective: Objective,

    /// Round phase.
    pub phase: Phase,

    /// Deterministic RNG driving every draw.
    pub rng: GameRng,
}

impl GameState {
    /// Create a fresh session from a seed: score 0, randomized app move
    /// and objective, awaiting input.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a fresh session with OS-seeded randomness.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    fn with_rng(mut rng: GameRng) -> Self {
        let app_move = Move::random(&mut rng);
        let objective = Objective::random(&mut rng);
        Self {
            score: 0,
            app_move,
            objective,
            phase: Phase::AwaitingInput,
            rng,
        }
    }

    /// Start the next round: redraw the app move and the objective.
    ///
    /// Both draws are independent of their previous values; repeats are
    /// allowed. Runs on every scored round and on every acknowledged
    /// miss, so the pair is always fresh for a new round.
    pub(crate) fn refresh(&mut self) {
        self.app_move = Move::random(&mut self.rng);
        self.objective = Objective::random(&mut self.rng);
    }
}
