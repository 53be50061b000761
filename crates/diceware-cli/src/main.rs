//! Diceware CLI entry point.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::{fs, io};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use diceware_app::{Runtime, RuntimeError, Session, SessionConfig};
use diceware_cli::{TermConsole, TermError};
use diceware_core::{WordStore, WordStoreError};

/// Interactive diceware passphrase generator
#[derive(Parser, Debug)]
#[command(name = "diceware")]
#[command(about = "Roll dice rows and build a passphrase from a diceware word list")]
#[command(version)]
struct Args {
    /// How many dice rows you want to roll
    #[arg(short = 'n', long = "numdice", default_value = "5")]
    numdice: NonZeroUsize,

    /// Path to the word list (EFF large word list format)
    #[arg(short, long, default_value = "eff_large_wordlist.txt")]
    wordlist: PathBuf,

    /// Seed the session RNG for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,
}

/// Startup and session failures surfaced to the shell.
#[derive(Debug, Error)]
enum CliError {
    /// The word list file could not be read.
    #[error("cannot read word list {path}: {source}")]
    ReadWordList {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The word list file could not be parsed.
    #[error("invalid word list: {0}")]
    WordList(#[from] WordStoreError),

    /// The interactive loop failed (console I/O or data integrity).
    #[error(transparent)]
    Runtime(#[from] RuntimeError<TermError>),
}

fn run(args: Args) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.wordlist)
        .map_err(|source| CliError::ReadWordList { path: args.wordlist.clone(), source })?;
    let store = WordStore::parse(&text)?;
    tracing::debug!(entries = store.len(), complete = store.is_complete(), "word list loaded");

    let config = SessionConfig::new(args.numdice);
    let session = match args.seed {
        Some(seed) => Session::with_rng(config, store, StdRng::seed_from_u64(seed)),
        None => Session::new(config, store),
    };

    Runtime::new(session, TermConsole::stdout()).run()?;
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        },
    }
}
