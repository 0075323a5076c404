use core::fmt;

use crate::result::Outcome;

/// Wins, losses and ties for the current game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Rounds tied.
    pub ties: u32,
}

impl Score {
    /// Counts one finished round.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Returns the number of rounds counted.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {}, Losses: {}, Ties: {}",
            self.wins, self.losses, self.ties
        )
    }
}
