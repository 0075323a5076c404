//! Round engine and state management.

use tracing::info;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, GameError};
use crate::hand::Hand;
use crate::io::{Decision, Input, Message, Presentation, Seat};
use crate::options::Ruleset;
use crate::result::{Resolution, RoundResult};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::RoundState;

/// One hand of blackjack between the player and the dealer.
///
/// The round owns its deck and both hands. Drive it with [`Round::deal`],
/// [`Round::hit`] / [`Round::stand`], [`Round::dealer_play`] and finally
/// [`Round::resolve`], or let [`play_round`] do all of that against the
/// boundary traits.
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards left to draw.
    deck: Deck,
    /// Rules in force.
    ruleset: Ruleset,
    /// Chips at stake, if any.
    bet: Option<usize>,
    /// Current state.
    state: RoundState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand. The first card is the hole card.
    dealer: Hand,
}

impl Round {
    /// Creates a round that will deal from `deck`.
    #[must_use]
    pub const fn new(deck: Deck, ruleset: Ruleset, bet: Option<usize>) -> Self {
        Self {
            deck,
            ruleset,
            bet,
            state: RoundState::Dealing,
            player: Hand::new(),
            dealer: Hand::new(),
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, DeckError> {
        self.deck.draw()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the rules in force.
    #[must_use]
    pub const fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Returns the chips at stake.
    #[must_use]
    pub const fn bet(&self) -> Option<usize> {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}

/// Plays one full round, asking `ui` for the player's decisions and
/// reporting every step to it.
///
/// # Errors
///
/// Returns an error if the deck runs out or input is no longer available.
pub fn play_round<T>(
    deck: Deck,
    ruleset: Ruleset,
    bet: Option<usize>,
    ui: &mut T,
) -> Result<RoundResult, GameError>
where
    T: Input + Presentation + ?Sized,
{
    let mut round = Round::new(deck, ruleset, bet);
    round.deal()?;

    loop {
        ui.show_hand(Seat::Player, round.player_hand(), false);
        ui.show_hand(Seat::Dealer, round.dealer_hand(), true);

        if round.state() != RoundState::PlayerTurn {
            break;
        }

        match ui.decision()? {
            Decision::Hit => {
                round.hit()?;
            }
            Decision::Stand => {
                round.stand()?;
                break;
            }
        }
    }

    if round.state() == RoundState::DealerTurn {
        ui.show_hand(Seat::Dealer, round.dealer_hand(), false);
        while round.dealer_hit()?.is_some() {
            ui.show_message(&Message::DealerHits);
            ui.show_hand(Seat::Dealer, round.dealer_hand(), false);
        }
    }

    let result = round.resolve()?;
    info!(
        resolution = ?result.resolution,
        player = result.player_value,
        dealer = result.dealer_value,
        "round resolved"
    );

    let message = match result.resolution {
        Resolution::Blackjack => Message::Blackjack,
        Resolution::PlayerBust => Message::PlayerBust,
        Resolution::DealerBust => Message::DealerBusts,
        Resolution::DealerHigher => Message::DealerWins,
        Resolution::PlayerHigher => Message::PlayerWins,
        Resolution::Push => Message::Tie,
    };
    ui.show_message(&message);

    Ok(result)
}
