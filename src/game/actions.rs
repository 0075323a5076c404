use tracing::debug;

use crate::card::Card;
use crate::error::RoundError;

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        Ok(())
    }

    /// Ends the player's turn early on 21 or a bust.
    pub(super) fn check_player(&mut self) {
        let value = self.player.value();

        if value == 21 {
            self.state = RoundState::PlayerBlackjack;
        } else if value > 21 {
            self.state = RoundState::PlayerBust;
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 wins immediately and going over loses immediately; in both
    /// cases the dealer never plays.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);
        debug!(%card, value = self.player.value(), "player hits");

        self.check_player();

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_player_turn()?;

        debug!(value = self.player.value(), "player stands");
        self.state = RoundState::DealerTurn;

        Ok(())
    }
}
