//! Command-line blackjack.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use clbj::console::Console;
use clbj::{GameError, GameOptions, InputError, Session};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play blackjack against the dealer")]
struct Args {
    /// Seed for shuffling. Defaults to the current time.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Chips at the start of every casino game.
    #[arg(short, long, default_value_t = 100)]
    chips: usize,

    /// Most rounds accepted for one batch.
    #[arg(long, default_value_t = 1000)]
    max_rounds: u32,

    /// Log verbosity (logs go to stderr).
    #[arg(long, default_value_t = tracing::Level::WARN)]
    log_level: tracing::Level,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!(seed, "starting session");

    let options = GameOptions::default()
        .with_starting_bankroll(args.chips)
        .with_max_rounds(args.max_rounds);
    let mut session = Session::new(options, seed);
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    match session.run(&mut console) {
        Ok(score) => {
            info!(%score, "session finished");
            Ok(())
        }
        // End of input is an ordinary way to leave.
        Err(GameError::Input(InputError::Closed)) => {
            println!();
            Ok(())
        }
        Err(err) => Err(err).context("game aborted"),
    }
}
