//! Hand representation and evaluation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::card::Card;

/// Best total not exceeding 21 if one exists, plus whether an ace is still
/// counted as 11.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// The cards held by the player or the dealer for one round.
///
/// A hand only grows. Its value is always derived from the cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards` in order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    ///
    /// ```
    /// use clbj::{Card, Hand, Suit};
    ///
    /// let hand = Hand::from_cards(&[Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 1)]);
    /// assert_eq!(hand.value(), 12);
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a soft 17.
    #[must_use]
    pub fn is_soft_17(&self) -> bool {
        evaluate_cards(&self.cards) == (17, true)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand totals exactly 21, with any number of cards.
    #[must_use]
    pub fn is_twenty_one(&self) -> bool {
        self.value() == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Formats the cards, optionally masking the first one (the dealer's
    /// hole card).
    ///
    /// ```
    /// use clbj::{Card, Hand, Suit};
    ///
    /// let hand = Hand::from_cards(&[Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 7)]);
    /// assert_eq!(hand.render(false), "A♠, 7♥");
    /// assert_eq!(hand.render(true), "[Hidden], 7♥");
    /// ```
    #[must_use]
    pub fn render(&self, hide_first: bool) -> String {
        let mut out = String::new();

        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            if index == 0 && hide_first {
                out.push_str("[Hidden]");
            } else {
                // Writing into a String cannot fail.
                let _ = write!(out, "{card}");
            }
        }

        out
    }
}
