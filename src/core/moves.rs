//! The move domain: Rock, Paper, Scissors.
//!
//! The domain is closed and the beating relation is total over distinct
//! moves, so there is no invalid-input path anywhere downstream.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// One of the three playable moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All variants in canonical order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Display label for this move.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// Check whether this move beats the other.
    ///
    /// Rock beats Scissors, Paper beats Rock, Scissors beats Paper.
    /// Ties are never a beat.
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Paper, Move::Rock)
                | (Move::Scissors, Move::Paper)
        )
    }

    /// Draw a move uniformly at random (1/3 each), independent per call.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Move {
        Move::ALL[rng.gen_range_usize(0..Move::ALL.len())]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
