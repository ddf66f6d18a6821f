//! Terminal Pontoon.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use pontoon::{Console, MAX_STARTING_CHIPS, STARTING_CHIPS, ShuffleMode, TableOptions, session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Shuffle {
    /// Every ordering equally likely.
    Uniform,
    /// Swap each card with any position, as dealt at the kitchen table.
    SwapAny,
}

impl From<Shuffle> for ShuffleMode {
    fn from(shuffle: Shuffle) -> Self {
        match shuffle {
            Shuffle::Uniform => Self::Uniform,
            Shuffle::SwapAny => Self::SwapAny,
        }
    }
}

/// Play a round of Pontoon against the banker.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the shuffle; defaults to the current time.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Chips each player starts with.
    #[arg(short, long, default_value_t = STARTING_CHIPS, value_parser = parse_chips)]
    chips: usize,

    /// How the deck is shuffled.
    #[arg(long, value_enum, default_value_t = Shuffle::Uniform)]
    shuffle: Shuffle,
}

fn parse_chips(arg: &str) -> Result<usize, String> {
    let chips: usize = arg.parse().map_err(|err| format!("{err}"))?;
    if chips > MAX_STARTING_CHIPS {
        return Err(format!("at most {MAX_STARTING_CHIPS} chips"));
    }
    Ok(chips)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("dealing with seed {seed}");

    let options = TableOptions::default()
        .with_starting_chips(args.chips)
        .with_shuffle(args.shuffle.into());

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    session::run(options, seed, &mut console).context("the game was interrupted")?;

    Ok(())
}
