//! Command-line word-search generator.
//!
//! Generates one puzzle per `--words` list and prints the grids, word lists
//! and seeds. Set `RUST_LOG=debug` to see placement attempts.
//!
//! ```sh
//! wordsearch --difficulty medium --words gato,perro,casa --words sol,luna,mar
//! ```

use std::{
    io::{self, Write as _},
    process,
};

use clap::{Parser, ValueEnum};
use wordsearch_book::{BookGenerator, PuzzleRequest, WordList};
use wordsearch_generator::{
    DEFAULT_MAX_ATTEMPTS, Difficulty, DifficultyTable, GridSizeError, PlacementSeed,
};

mod render;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty profile; sets grid-size bounds and word directions.
    #[arg(short, long, value_name = "LEVEL", default_value = "easy")]
    difficulty: DifficultyArg,

    /// Grid size; must lie within the profile's bounds.
    #[arg(short, long, value_name = "N")]
    size: Option<usize>,

    /// Comma-separated words for one puzzle. Repeat for more puzzles.
    #[arg(short, long = "words", value_name = "WORDS", required = true)]
    word_lists: Vec<String>,

    /// Book seed as 64 hex digits; random if omitted.
    #[arg(long, value_name = "HEX")]
    seed: Option<PlacementSeed>,

    /// Placement attempts per puzzle before it is skipped.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Also print the solution of each puzzle.
    #[arg(long)]
    solutions: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    GridSize(#[from] GridSizeError),
    #[display("failed to write output: {_0}")]
    Output(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::GridSize(_) => 2,
            Self::Output(_) => 1,
        }
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("No puzzle could be generated.");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(err.exit_code());
        }
    }
}

/// Generates and prints the book. Returns `false` if every puzzle was skipped.
fn run(args: &Args) -> Result<bool, CliError> {
    let profile = DifficultyTable::STANDARD.profile(args.difficulty.into());
    let seed = args.seed.unwrap_or_else(PlacementSeed::random);
    let books =
        BookGenerator::new(profile, args.size, seed)?.with_max_attempts(args.max_attempts);

    let requests = args
        .word_lists
        .iter()
        .enumerate()
        .map(|(i, list)| {
            PuzzleRequest::new(format!("Puzzle {}", i + 1), WordList::from_raw(list.split(',')))
        })
        .collect::<Vec<_>>();
    let book = books.generate(&requests);

    let mut stdout = io::stdout().lock();
    render::write_book(&mut stdout, &book, args.solutions)?;
    stdout.flush()?;

    for skipped in &book.skipped {
        eprintln!("warning: skipped {skipped}");
    }
    Ok(!book.all_skipped())
}
