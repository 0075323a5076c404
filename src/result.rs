//! Round result types.

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins.
    Win,
    /// Player loses.
    Loss,
    /// Tie (push).
    Tie,
}

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Player reached 21; the dealer never plays.
    Blackjack,
    /// Player went over 21; the dealer never plays.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer finished with the higher total.
    DealerHigher,
    /// Player finished with the higher total.
    PlayerHigher,
    /// Equal totals.
    Push,
}

impl Resolution {
    /// Returns the outcome for the player.
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Self::Blackjack | Self::DealerBust | Self::PlayerHigher => Outcome::Win,
            Self::PlayerBust | Self::DealerHigher => Outcome::Loss,
            Self::Push => Outcome::Tie,
        }
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round was decided.
    pub resolution: Resolution,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// The chips wagered, if the round was played for chips.
    pub bet: Option<usize>,
}

impl RoundResult {
    /// Returns the outcome for the player.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.resolution.outcome()
    }

    /// Returns the signed chip delta: the bet on a win, minus the bet on a
    /// loss, zero on a tie. `None` when nothing was wagered.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bets fit in isize")]
    pub fn settlement(&self) -> Option<isize> {
        self.bet.map(|bet| match self.outcome() {
            Outcome::Win => bet as isize,
            Outcome::Loss => -(bet as isize),
            Outcome::Tie => 0,
        })
    }
}
