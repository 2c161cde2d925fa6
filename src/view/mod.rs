//! Render inputs for a UI layer.
//!
//! The crate exposes no UI of its own; a front end calls [`render`] after
//! every engine call and draws from the returned [`Snapshot`]. Everything
//! in here is derived text, never authoritative state.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Objective, Phase};

/// The acknowledgement prompt shown after a missed objective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Fixed prompt title.
    pub title: String,
    /// Names the objective the player had to meet.
    pub message: String,
}

impl Prompt {
    fn for_missed(objective: Objective) -> Self {
        Self {
            title: "You lose!".to_string(),
            message: format!("You had to {} the round.", objective.label()),
        }
    }
}

/// Everything a front end needs to draw one frame.
///
/// Output-only surface, so it serializes but never deserializes (the
/// move label is a borrowed `&'static str`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Current score.
    pub score: u32,
    /// Label of the app's current move.
    pub app_move: &'static str,
    /// Label of the current objective ("WIN" / "LOSE").
    pub objective: &'static str,
    /// Present only while a missed round awaits acknowledgement.
    pub prompt: Option<Prompt>,
}

/// Derive the render inputs for the current state.
#[must_use]
pub fn render(state: &GameState) -> Snapshot {
    let prompt = match state.phase {
        Phase::AwaitingInput => None,
        Phase::ShowingOutcome => Some(Prompt::for_missed(state.objective)),
    };

    Snapshot {
        score: state.score,
        app_move: state.app_move.label(),
        objective: state.objective.label(),
        prompt,
    }
}
