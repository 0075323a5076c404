//! Rulesets and game configuration.

use core::fmt;

use crate::hand::Hand;

/// Rules in force for a game, fixed until a new game is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ruleset {
    /// No betting; the dealer stands on every 17.
    #[default]
    Basic,
    /// Chip betting; the dealer hits soft 17.
    Casino,
}

impl Ruleset {
    /// Returns whether the dealer draws on a soft 17.
    #[must_use]
    pub const fn hits_soft_17(self) -> bool {
        matches!(self, Self::Casino)
    }

    /// Returns whether rounds are played for chips.
    #[must_use]
    pub const fn has_betting(self) -> bool {
        matches!(self, Self::Casino)
    }

    /// Returns whether the dealer must draw another card.
    ///
    /// ```
    /// use clbj::{Card, Hand, Ruleset, Suit};
    ///
    /// let soft_17 = Hand::from_cards(&[Card::new(Suit::Clubs, 1), Card::new(Suit::Hearts, 6)]);
    /// assert!(!Ruleset::Basic.dealer_draws(&soft_17));
    /// assert!(Ruleset::Casino.dealer_draws(&soft_17));
    /// ```
    #[must_use]
    pub fn dealer_draws(self, dealer: &Hand) -> bool {
        dealer.value() < 17 || (self.hits_soft_17() && dealer.is_soft_17())
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Casino => f.write_str("casino"),
        }
    }
}

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use clbj::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_bankroll(250)
///     .with_max_rounds(20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Chips granted at the start of every casino game.
    pub starting_bankroll: usize,
    /// Largest round count accepted for one batch.
    pub max_rounds: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 100,
            max_rounds: 1000,
        }
    }
}

impl GameOptions {
    /// Sets the chips granted at the start of a casino game.
    ///
    /// # Example
    ///
    /// ```
    /// use clbj::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(500);
    /// assert_eq!(options.starting_bankroll, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, chips: usize) -> Self {
        self.starting_bankroll = chips;
        self
    }

    /// Sets the largest round count accepted for one batch.
    ///
    /// Values below 1 are raised to 1.
    #[must_use]
    pub const fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = if rounds == 0 { 1 } else { rounds };
        self
    }
}
