use tracing::debug;

use crate::error::RoundError;

use super::{Round, RoundState};

impl Round {
    /// Deals two cards each, alternating player then dealer.
    ///
    /// The dealer's first card is the hole card. A player already on 21 or
    /// over moves straight past their turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealing state or the deck
    /// holds fewer than four cards.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::Dealing {
            return Err(RoundError::InvalidState);
        }

        if self.deck.len() < 4 {
            return Err(RoundError::EmptyDeck);
        }

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        debug!(
            player = self.player.value(),
            up_card = %self.dealer.cards()[1],
            ruleset = %self.ruleset,
            "dealt"
        );

        self.state = RoundState::PlayerTurn;
        self.check_player();

        Ok(())
    }
}
