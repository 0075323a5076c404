//! A single-player blackjack simulator with optional `no_std` support.
//!
//! The crate provides a [`Round`] engine for one hand of play against a
//! fixed dealer policy, and a [`Session`] that runs batches of rounds under
//! a [`Ruleset`], keeping score and (for casino rules) a chip bankroll.
//! Player choices and display go through the [`Input`] and [`Presentation`]
//! traits; `console::Console` implements both over a terminal.
//!
//! # Example
//!
//! ```no_run
//! use clbj::{GameOptions, Session};
//! use clbj::console::Console;
//!
//! let mut console = Console::new(std::io::stdin().lock(), std::io::stdout());
//! let mut session = Session::new(GameOptions::default(), 42);
//! let _ = session.run(&mut console);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod io;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{Deck, DeckSource, Shuffler};
pub use error::{BetError, DeckError, GameError, InputError, InvalidInput, RoundError};
pub use game::{Round, RoundState, play_round};
pub use hand::Hand;
pub use io::{Decision, Input, Message, NextStep, Presentation, Seat};
pub use options::{GameOptions, Ruleset};
pub use result::{Outcome, Resolution, RoundResult};
pub use session::{Bankroll, BatchEnd, Score, Session};
