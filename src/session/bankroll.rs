use crate::error::BetError;
use crate::result::{Outcome, RoundResult};

/// Chips held by the player in a casino game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    chips: usize,
}

impl Bankroll {
    /// Creates a bankroll holding `chips`.
    #[must_use]
    pub const fn new(chips: usize) -> Self {
        Self { chips }
    }

    /// Returns the chip count.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns whether there is nothing left to wager.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chips == 0
    }

    /// Checks a wager against the bankroll. Chips only move at settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or more than the bankroll.
    pub const fn wager(&self, amount: usize) -> Result<usize, BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if amount > self.chips {
            return Err(BetError::InsufficientFunds);
        }

        Ok(amount)
    }

    /// Applies a round's result: plus the bet on a win, minus it on a loss,
    /// unchanged on a tie. The chip count never drops below zero.
    pub fn settle(&mut self, result: &RoundResult) {
        let Some(bet) = result.bet else {
            return;
        };

        match result.outcome() {
            Outcome::Win => self.chips = self.chips.saturating_add(bet),
            Outcome::Loss => self.chips = self.chips.saturating_sub(bet),
            Outcome::Tie => {}
        }
    }
}
