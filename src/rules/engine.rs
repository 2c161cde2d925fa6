//! The round engine: scoring rule and state transitions.
//!
//! A round resolves in one synchronous step. The player scores exactly
//! when their move meets the round's objective against the app's move:
//!
//! | Objective | Scores iff                  |
//! |-----------|-----------------------------|
//! | Win       | player move beats app move  |
//! | Lose      | app move beats player move  |
//!
//! Ties never score. A scored round increments the score and refreshes
//! the draw immediately. A missed round zeroes the score and parks the
//! state in `ShowingOutcome` until the player acknowledges.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move, Objective, Phase};

/// How a round resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The objective was met; score went up by one.
    Scored,
    /// The objective was missed; score reset to zero. Carries the
    /// objective that was missed so the UI can name it.
    Reset(Objective),
}

/// The scoring condition, as a pure predicate.
///
/// Total over the whole move domain; there is no invalid combination.
#[must_use]
pub fn scores(player_move: Move, app_move: Move, objective: Objective) -> bool {
    match objective {
        Objective::Win => player_move.beats(app_move),
        Objective::Lose => app_move.beats(player_move),
    }
}

/// Resolve a round against the current draw.
///
/// Only acts while awaiting input; returns `None` if a loss prompt is
/// still up. On a score the draw refreshes immediately and play
/// continues. On a miss the state waits in `ShowingOutcome` for
/// [`acknowledge`].
pub fn resolve(state: &mut GameState, player_move: Move) -> Option<Outcome> {
    if state.phase != Phase::AwaitingInput {
        return None;
    }

    if scores(player_move, state.app_move, state.objective) {
        state.score += 1;
        state.refresh();
        Some(Outcome::Scored)
    } else {
        let missed = state.objective;
        state.score = 0;
        state.phase = Phase::ShowingOutcome;
        Some(Outcome::Reset(missed))
    }
}

/// Dismiss the loss prompt and start the next round.
///
/// Returns true if a prompt was dismissed. Calling again without an
/// intervening miss is a no-op, so double-taps cannot double-refresh.
pub fn acknowledge(state: &mut GameState) -> bool {
    if state.phase != Phase::ShowingOutcome {
        return false;
    }

    state.phase = Phase::AwaitingInput;
    state.refresh();
    true
}
