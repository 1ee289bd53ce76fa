//! scrawl: a solo terminal word game
//!
//! Deal a hand of letters, play words from it, chase a high score
//! across a series of hands.

mod console;
mod game;

use anyhow::Context;
use clap::Parser;
use console::StdConsole;
use game::dictionary::Dictionary;
use game::session::{prompt_hand_count, GameSession};
use game::HAND_SIZE;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scrawl", about = "Solo terminal word game")]
struct Args {
    /// Number of hands to play (prompted for when omitted)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    hands: Option<u32>,

    /// Letters dealt into each hand
    #[arg(long, default_value_t = HAND_SIZE)]
    hand_size: usize,

    /// Wordlist file, one word per line (defaults to the embedded list)
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// Seed the letter generator for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let loaded;
    let dictionary = match &args.wordlist {
        Some(path) => {
            loaded = Dictionary::load(path)
                .with_context(|| format!("reading wordlist {}", path.display()))?;
            &loaded
        }
        None => Dictionary::embedded(),
    };
    log::info!("{} words loaded", dictionary.len());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut console = StdConsole::new();
    let num_hands = match args.hands {
        Some(n) => n,
        None => prompt_hand_count(&mut console)?,
    };

    let mut session = GameSession::new(dictionary, &mut console, &mut rng, args.hand_size);
    session.run(num_hands)?;
    Ok(())
}
