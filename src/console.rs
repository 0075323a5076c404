//! Line-oriented terminal adapter for the boundary traits.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::{InputError, InvalidInput};
use crate::hand::Hand;
use crate::io::{Decision, Input, Message, NextStep, Presentation, Seat};
use crate::options::Ruleset;
use crate::session::Score;

/// Matches a line against single-letter choices, ignoring case and
/// surrounding whitespace.
///
/// ```
/// use clbj::console::parse_choice;
///
/// assert_eq!(parse_choice(" H\n", &['h', 's']), Ok('h'));
/// assert!(parse_choice("x", &['h', 's']).is_err());
/// ```
///
/// # Errors
///
/// Returns [`InvalidInput::Unrecognized`] if the line is not one of `options`.
pub fn parse_choice(line: &str, options: &[char]) -> Result<char, InvalidInput> {
    let mut chars = line.trim().chars().flat_map(char::to_lowercase);

    match (chars.next(), chars.next()) {
        (Some(choice), None) if options.contains(&choice) => Ok(choice),
        _ => Err(InvalidInput::Unrecognized),
    }
}

/// Parses a whole number in `min..=max`. With `allow_all_in`, the words
/// `a`, `all`, `allin` and `all-in` stand for `max`.
///
/// ```
/// use clbj::console::parse_number;
///
/// assert_eq!(parse_number("25", 1, 100, false), Ok(25));
/// assert_eq!(parse_number("all-in", 1, 100, true), Ok(100));
/// assert!(parse_number("0", 1, 100, true).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the line is not a number or lies outside the range.
pub fn parse_number(
    line: &str,
    min: usize,
    max: usize,
    allow_all_in: bool,
) -> Result<usize, InvalidInput> {
    let text = line.trim().to_lowercase();

    if allow_all_in && matches!(text.as_str(), "a" | "all" | "all-in" | "allin") {
        return Ok(max);
    }

    let value: usize = text.parse().map_err(|_| InvalidInput::NotANumber)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InvalidInput::OutOfRange { min, max })
    }
}

/// Plays the game over a reader and a writer, such as stdin and stdout.
///
/// Invalid lines are answered with a hint and the question is asked again.
/// The end of input is reported as [`InputError::Closed`].
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console, returning the streams.
    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        let _ = write!(self.writer, "{prompt}");
        let _ = self.writer.flush();

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => Ok(line),
            Err(err) => {
                warn!(%err, "failed to read input");
                Err(InputError::ReadFailed)
            }
        }
    }

    /// Asks until the answer is one of `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if input is no longer available.
    pub fn request_choice(&mut self, prompt: &str, options: &[char]) -> Result<char, InputError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_choice(&line, options) {
                Ok(choice) => return Ok(choice),
                Err(err) => self.hint(&err),
            }
        }
    }

    /// Asks until the answer is a number in `min..=max` (or all-in).
    ///
    /// # Errors
    ///
    /// Returns an error if input is no longer available.
    pub fn request_number(
        &mut self,
        prompt: &str,
        min: usize,
        max: usize,
        allow_all_in: bool,
    ) -> Result<usize, InputError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_number(&line, min, max, allow_all_in) {
                Ok(value) => return Ok(value),
                Err(err) => self.hint(&err),
            }
        }
    }

    fn hint(&mut self, err: &InvalidInput) {
        let _ = writeln!(self.writer, "Invalid input: {err}.");
    }
}

impl<R: BufRead, W: Write> Input for Console<R, W> {
    fn decision(&mut self) -> Result<Decision, InputError> {
        match self.request_choice("Do you want to (H)it or (S)tand? ", &['h', 's'])? {
            'h' => Ok(Decision::Hit),
            _ => Ok(Decision::Stand),
        }
    }

    fn ruleset(&mut self) -> Result<Ruleset, InputError> {
        match self.request_choice("Choose (B)asic or (C)asino rules: ", &['b', 'c'])? {
            'c' => Ok(Ruleset::Casino),
            _ => Ok(Ruleset::Basic),
        }
    }

    fn rounds(&mut self, max: u32) -> Result<u32, InputError> {
        let prompt = format!("How many rounds would you like to play (1-{max})? ");
        let rounds = self.request_number(&prompt, 1, max as usize, false)?;
        Ok(u32::try_from(rounds).unwrap_or(max))
    }

    fn bet(&mut self, bankroll: usize) -> Result<usize, InputError> {
        let prompt =
            format!("You have {bankroll} chips. Place your bet (1-{bankroll}, or 'all-in'): ");
        self.request_number(&prompt, 1, bankroll, true)
    }

    fn next_step(&mut self) -> Result<NextStep, InputError> {
        match self.request_choice(
            "(C)ontinue, start a (N)ew game, or (Q)uit? ",
            &['c', 'n', 'q'],
        )? {
            'c' => Ok(NextStep::Continue),
            'n' => Ok(NextStep::New),
            _ => Ok(NextStep::Quit),
        }
    }
}

impl<R: BufRead, W: Write> Presentation for Console<R, W> {
    fn show_hand(&mut self, seat: Seat, hand: &Hand, hide_first: bool) {
        let cards = hand.render(hide_first);
        let _ = match (seat, hide_first) {
            (Seat::Player, _) => writeln!(self.writer, "Your hand: {cards} ({})", hand.value()),
            (Seat::Dealer, true) => writeln!(self.writer, "Dealer's hand: {cards}"),
            (Seat::Dealer, false) => {
                writeln!(self.writer, "Dealer's hand: {cards} ({})", hand.value())
            }
        };
    }

    fn show_score(&mut self, score: &Score, bankroll: Option<usize>) {
        let _ = match bankroll {
            Some(chips) => writeln!(self.writer, "Score - {score} | Chips: {chips}"),
            None => writeln!(self.writer, "Score - {score}"),
        };
    }

    fn show_message(&mut self, message: &Message) {
        let _ = writeln!(self.writer, "{message}");
    }
}
