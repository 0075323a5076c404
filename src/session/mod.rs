//! Multi-round sessions: ruleset selection, score keeping and the bankroll.

use tracing::{info, warn};

use crate::deck::{DeckSource, Shuffler};
use crate::error::{GameError, InputError};
use crate::game::play_round;
use crate::io::{Input, Message, NextStep, Presentation};
use crate::options::{GameOptions, Ruleset};
use crate::result::Outcome;

mod bankroll;
mod score;

pub use bankroll::Bankroll;
pub use score::Score;

/// How a batch of rounds ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchEnd {
    /// Every requested round was played.
    Completed,
    /// The bankroll ran dry before the batch finished.
    OutOfChips,
}

/// A player's session: the current game's rules, score and chips.
///
/// A game lasts from ruleset selection until the player asks for a new
/// game. Score and bankroll persist across batches within a game.
///
/// # Example
///
/// ```no_run
/// use clbj::{GameOptions, Ruleset, Session};
///
/// let mut session = Session::new(GameOptions::default(), 42);
/// session.start_game(Ruleset::Casino);
/// assert_eq!(session.bankroll(), Some(100));
/// ```
#[derive(Debug, Clone)]
pub struct Session<D = Shuffler> {
    /// Session options.
    options: GameOptions,
    /// Supplies a fresh deck for every round.
    source: D,
    /// Rules for the current game.
    ruleset: Ruleset,
    /// Tally for the current game.
    score: Score,
    /// Chips for the current game, casino only.
    bankroll: Option<Bankroll>,
}

impl Session<Shuffler> {
    /// Creates a session whose decks are shuffled from the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, Shuffler::new(seed))
    }
}

impl<D: DeckSource> Session<D> {
    /// Creates a session drawing its decks from `source`.
    ///
    /// The session starts a basic game until a ruleset is selected.
    #[must_use]
    pub fn with_source(options: GameOptions, source: D) -> Self {
        Self {
            options,
            source,
            ruleset: Ruleset::Basic,
            score: Score::default(),
            bankroll: None,
        }
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the rules of the current game.
    #[must_use]
    pub const fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Returns the tally of the current game.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the chip count, if the current game is played for chips.
    #[must_use]
    pub fn bankroll(&self) -> Option<usize> {
        self.bankroll.map(|bankroll| bankroll.chips())
    }

    /// Starts a new game: resets the score, and the bankroll for casino
    /// rules.
    pub fn start_game(&mut self, ruleset: Ruleset) {
        self.ruleset = ruleset;
        self.score = Score::default();
        self.bankroll = ruleset
            .has_betting()
            .then(|| Bankroll::new(self.options.starting_bankroll));

        info!(%ruleset, bankroll = ?self.bankroll(), "game started");
    }

    /// Asks the player for a ruleset and starts a new game with it.
    ///
    /// # Errors
    ///
    /// Returns an error if input is no longer available.
    pub fn select_ruleset<I>(&mut self, input: &mut I) -> Result<Ruleset, InputError>
    where
        I: Input + ?Sized,
    {
        let ruleset = input.ruleset()?;
        self.start_game(ruleset);
        Ok(ruleset)
    }

    /// Plays up to `rounds` rounds under the current game's rules.
    ///
    /// In a casino game each round first checks the bankroll: an empty
    /// bankroll ends the batch with [`BatchEnd::OutOfChips`]. Otherwise a
    /// wager is requested until one fits the bankroll, and the round's
    /// result moves the chips.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or input is no longer available.
    pub fn play_game<T>(&mut self, rounds: u32, ui: &mut T) -> Result<BatchEnd, GameError>
    where
        T: Input + Presentation + ?Sized,
    {
        for number in 1..=rounds {
            let bet = match self.bankroll {
                Some(bankroll) if bankroll.is_empty() => {
                    info!(played = number - 1, "out of chips");
                    ui.show_message(&Message::OutOfChips);
                    return Ok(BatchEnd::OutOfChips);
                }
                Some(bankroll) => Some(Self::request_bet(bankroll, ui)?),
                None => None,
            };

            ui.show_message(&Message::RoundStart { number, of: rounds });
            let deck = self.source.fresh_deck();
            let result = play_round(deck, self.ruleset, bet, ui)?;

            self.score.record(result.outcome());
            if let Some(bankroll) = self.bankroll.as_mut() {
                bankroll.settle(&result);

                if let Some(bet) = result.bet {
                    let message = match result.outcome() {
                        Outcome::Win => Message::ChipsWon(bet),
                        Outcome::Loss => Message::ChipsLost(bet),
                        Outcome::Tie => Message::BetReturned(bet),
                    };
                    ui.show_message(&message);
                }
            }

            ui.show_score(&self.score, self.bankroll());
        }

        info!(rounds, score = %self.score, "batch complete");
        Ok(BatchEnd::Completed)
    }

    fn request_bet<T>(bankroll: Bankroll, ui: &mut T) -> Result<usize, InputError>
    where
        T: Input + Presentation + ?Sized,
    {
        loop {
            match bankroll.wager(ui.bet(bankroll.chips())?) {
                Ok(amount) => {
                    ui.show_message(&Message::BetPlaced(amount));
                    return Ok(amount);
                }
                Err(err) => {
                    warn!(%err, chips = bankroll.chips(), "wager rejected");
                    ui.show_message(&Message::BetRejected(err));
                }
            }
        }
    }

    /// Asks whether to keep playing this game, start a new one, or quit.
    ///
    /// # Errors
    ///
    /// Returns an error if input is no longer available.
    pub fn continue_or_new<I>(&mut self, input: &mut I) -> Result<NextStep, InputError>
    where
        I: Input + ?Sized,
    {
        input.next_step()
    }

    /// Runs the whole session until the player quits, returning the score
    /// of the last game.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or input is no longer available.
    pub fn run<T>(&mut self, ui: &mut T) -> Result<Score, GameError>
    where
        T: Input + Presentation + ?Sized,
    {
        ui.show_message(&Message::Welcome);

        loop {
            let ruleset = self.select_ruleset(ui)?;
            ui.show_message(&Message::NewGame(ruleset));

            loop {
                let rounds = ui.rounds(self.options.max_rounds)?;
                self.play_game(rounds, ui)?;

                match self.continue_or_new(ui)? {
                    NextStep::Continue => {}
                    NextStep::New => break,
                    NextStep::Quit => {
                        ui.show_score(&self.score, self.bankroll());
                        ui.show_message(&Message::Farewell);
                        return Ok(self.score);
                    }
                }
            }
        }
    }
}
