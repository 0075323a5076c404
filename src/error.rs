//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out mid-round.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur when placing a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the bankroll.
    #[error("insufficient chips")]
    InsufficientFunds,
}

/// A line of player input that could not be understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The text matched none of the offered choices.
    #[error("unrecognized choice")]
    Unrecognized,
    /// The text is not a whole number.
    #[error("please enter a whole number")]
    NotANumber,
    /// The number lies outside the accepted range.
    #[error("please enter a number from {min} to {max}")]
    OutOfRange {
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },
}

/// Errors that end the conversation with the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input stream was closed.
    #[error("input closed")]
    Closed,
    /// Reading from the input failed.
    #[error("failed to read input")]
    ReadFailed,
}

/// Errors returned by round and session drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The round engine failed.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// The player could no longer be asked for input.
    #[error(transparent)]
    Input(#[from] InputError),
}
