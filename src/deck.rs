//! The 52-card deck and per-round deck sources.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// A single deck of cards. The top of the deck is the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the 52 cards in canonical suit-major order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a fresh deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck that yields `draws` in order.
    ///
    /// Useful for replaying a known sequence of cards:
    ///
    /// ```
    /// use clbj::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::stacked(&[Card::new(Suit::Hearts, 1), Card::new(Suit::Clubs, 13)]);
    /// assert_eq!(deck.draw().unwrap().rank, 1);
    /// assert_eq!(deck.draw().unwrap().rank, 13);
    /// assert!(deck.draw().is_err());
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the remaining cards in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Supplies the fresh deck used for each round.
pub trait DeckSource {
    /// Returns a deck ready for dealing.
    fn fresh_deck(&mut self) -> Deck;
}

/// Seeded source that shuffles a new deck for every round.
#[derive(Debug, Clone)]
pub struct Shuffler {
    rng: ChaCha8Rng,
}

impl Shuffler {
    /// Creates a shuffler with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DeckSource for Shuffler {
    fn fresh_deck(&mut self) -> Deck {
        Deck::shuffled(&mut self.rng)
    }
}

impl<F> DeckSource for F
where
    F: FnMut() -> Deck,
{
    fn fresh_deck(&mut self) -> Deck {
        self()
    }
}
