//! The round objective: win or lose on purpose.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// What the player must do this round to score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    /// Player scores by beating the app's move.
    Win,
    /// Player scores by losing to the app's move.
    Lose,
}

impl Objective {
    /// Display label, uppercase as shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Objective::Win => "WIN",
            Objective::Lose => "LOSE",
        }
    }

    /// Draw an objective uniformly at random, independent of prior draws.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Objective {
        if rng.gen_bool(0.5) {
            Objective::Win
        } else {
            Objective::Lose
        }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Objective::Win.label(), "WIN");
        assert_eq!(Objective::Lose.label(), "LOSE");
        assert_eq!(Objective::Lose.to_string(), "LOSE");
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let mut rng1 = GameRng::new(3);
        let mut rng2 = GameRng::new(3);

        for _ in 0..50 {
            assert_eq!(Objective::random(&mut rng1), Objective::random(&mut rng2));
        }
    }

    #[test]
    fn test_random_hits_both_values() {
        let mut rng = GameRng::new(42);
        let mut saw_win = false;
        let mut saw_lose = false;

        for _ in 0..100 {
            match Objective::random(&mut rng) {
                Objective::Win => saw_win = true,
                Objective::Lose => saw_lose = true,
            }
        }

        assert!(saw_win && saw_lose);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Objective::Win).unwrap();
        let back: Objective = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Objective::Win);
    }
}
