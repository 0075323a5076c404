extern crate alloc;

use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::RoundError;
use crate::result::{Resolution, RoundResult};

use super::{Round, RoundState};

impl Round {
    /// Takes one dealer step.
    ///
    /// Draws a card while the dealer is under 17, or on a soft 17 when the
    /// ruleset hits soft 17, and returns it. Once the dealer must stop, the
    /// round moves on to [`RoundState::DealerBust`] or
    /// [`RoundState::DealerStand`] and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_hit(&mut self) -> Result<Option<Card>, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        if self.ruleset.dealer_draws(&self.dealer) {
            let card = self.draw()?;
            self.dealer.add_card(card);
            debug!(%card, value = self.dealer.value(), "dealer hits");
            return Ok(Some(card));
        }

        self.state = if self.dealer.is_bust() {
            RoundState::DealerBust
        } else {
            RoundState::DealerStand
        };
        debug!(value = self.dealer.value(), state = ?self.state, "dealer done");

        Ok(None)
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        let mut drawn_cards = Vec::new();

        while let Some(card) = self.dealer_hit()? {
            drawn_cards.push(card);
        }

        Ok(drawn_cards)
    }

    /// Settles the round.
    ///
    /// A player blackjack or bust is decided without looking at the dealer.
    /// Otherwise a dealer bust wins for the player, and then the higher
    /// total wins with equal totals tied.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not ready to be settled.
    pub fn resolve(&mut self) -> Result<RoundResult, RoundError> {
        if !self.state.is_settleable() {
            return Err(RoundError::InvalidState);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        let resolution = match self.state {
            RoundState::PlayerBlackjack => Resolution::Blackjack,
            RoundState::PlayerBust => Resolution::PlayerBust,
            RoundState::DealerBust => Resolution::DealerBust,
            _ if dealer_value > player_value => Resolution::DealerHigher,
            _ if dealer_value < player_value => Resolution::PlayerHigher,
            _ => Resolution::Push,
        };

        self.state = RoundState::Resolved;

        Ok(RoundResult {
            resolution,
            player_value,
            dealer_value,
            bet: self.bet,
        })
    }
}
