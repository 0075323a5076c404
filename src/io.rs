//! Boundary traits between the engine and the player.
//!
//! The engine never reads or formats text itself. It asks an [`Input`] for
//! typed choices and reports every state change to a [`Presentation`].

use core::fmt;

use crate::error::{BetError, InputError};
use crate::hand::Hand;
use crate::options::Ruleset;
use crate::session::Score;

/// Player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// What to do once a batch of rounds is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Play another batch with the same score and bankroll.
    Continue,
    /// Pick a ruleset again and reset score and bankroll.
    New,
    /// End the session.
    Quit,
}

/// Whose hand is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Source of player choices.
///
/// Implementations re-ask until they can return a valid value. An error means
/// the player can no longer be asked at all.
pub trait Input {
    /// Asks for hit or stand.
    ///
    /// # Errors
    ///
    /// Returns an error if input is no longer available.
    fn decision(&mut self) -> Result<Decision, InputError>;

    /// Asks which ruleset to play.
    ///
    /// # Errors
    ///
    /// Returns an error if input is no longer available.
    fn ruleset(&mut self) -> Result<Ruleset, InputError>;

    /// Asks how many rounds to play, in `1..=max`.
    ///
    /// # Errors
    ///
    /// Returns an error if input is no longer available.
    fn rounds(&mut self, max: u32) -> Result<u32, InputError>;

    /// Asks for a wager in `1..=bankroll`, or all-in.
    ///
    /// # Errors
    ///
    /// Returns an error if input is no longer available.
    fn bet(&mut self, bankroll: usize) -> Result<usize, InputError>;

    /// Asks whether to continue, start a new game, or quit.
    ///
    /// # Errors
    ///
    /// Returns an error if input is no longer available.
    fn next_step(&mut self) -> Result<NextStep, InputError>;
}

/// Observer of the game. Nothing it does feeds back into game state.
pub trait Presentation {
    /// Shows a hand, optionally with the first card masked.
    fn show_hand(&mut self, seat: Seat, hand: &Hand, hide_first: bool);

    /// Shows the tally, and the chip count when playing for chips.
    fn show_score(&mut self, score: &Score, bankroll: Option<usize>);

    /// Shows an event.
    fn show_message(&mut self, message: &Message);
}

/// Events reported to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Session start.
    Welcome,
    /// A new game began under the given rules.
    NewGame(Ruleset),
    /// A round is about to be dealt.
    RoundStart {
        /// One-based round number within the batch.
        number: u32,
        /// Rounds requested for the batch.
        of: u32,
    },
    /// Player reached 21.
    Blackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer drew a card.
    DealerHits,
    /// Dealer went over 21.
    DealerBusts,
    /// Dealer has the higher total.
    DealerWins,
    /// Player has the higher total.
    PlayerWins,
    /// Equal totals.
    Tie,
    /// A wager was accepted.
    BetPlaced(usize),
    /// A wager was refused.
    BetRejected(BetError),
    /// Chips won this round.
    ChipsWon(usize),
    /// Chips lost this round.
    ChipsLost(usize),
    /// The wager came back on a tie.
    BetReturned(usize),
    /// The bankroll is empty; the game is over.
    OutOfChips,
    /// Session end.
    Farewell,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome => f.write_str("Welcome to Blackjack!"),
            Self::NewGame(ruleset) => write!(f, "Starting a new {ruleset} game."),
            Self::RoundStart { number, of } => write!(f, "Round {number} of {of}"),
            Self::Blackjack => f.write_str("Blackjack! You win!"),
            Self::PlayerBust => f.write_str("Bust! You lose."),
            Self::DealerHits => f.write_str("Dealer hits."),
            Self::DealerBusts => f.write_str("Dealer busts! You win!"),
            Self::DealerWins => f.write_str("Dealer wins!"),
            Self::PlayerWins => f.write_str("You win!"),
            Self::Tie => f.write_str("It's a tie!"),
            Self::BetPlaced(amount) => write!(f, "You bet {amount} chips."),
            Self::BetRejected(err) => write!(f, "Bet rejected: {err}."),
            Self::ChipsWon(amount) => write!(f, "You won {amount} chips."),
            Self::ChipsLost(amount) => write!(f, "You lost {amount} chips."),
            Self::BetReturned(amount) => write!(f, "Your {amount} chips are returned."),
            Self::OutOfChips => f.write_str("You're out of chips! Game over."),
            Self::Farewell => f.write_str("Thanks for playing!"),
        }
    }
}
