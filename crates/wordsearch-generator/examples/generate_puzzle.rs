//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Pick a difficulty profile and build a `PuzzleGenerator`
//! - Generate a puzzle and print the grid, solution, and seed
//! - Estimate how often a single placement pass succeeds for a word list
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --words gato,perro,casa,arbol
//! ```
//!
//! Pick a difficulty and grid size:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --size 16 --words ...
//! ```
//!
//! Sample many single passes in parallel and report the fit rate (default: 0,
//! no sampling):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --words ... --samples 10000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use wordsearch_core::Word;
use wordsearch_generator::{
    Difficulty, DifficultyTable, GeneratedPuzzle, GridPlacer, PlacementSeed, PuzzleGenerator,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyKind {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyKind> for Difficulty {
    fn from(kind: DifficultyKind) -> Self {
        match kind {
            DifficultyKind::Easy => Difficulty::Easy,
            DifficultyKind::Medium => Difficulty::Medium,
            DifficultyKind::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty profile.
    #[arg(short, long, value_name = "LEVEL", default_value = "easy")]
    difficulty: DifficultyKind,

    /// Grid size; defaults to the profile's default.
    #[arg(short, long, value_name = "N")]
    size: Option<usize>,

    /// Words to hide, comma-separated.
    #[arg(
        short,
        long,
        value_name = "WORDS",
        value_delimiter = ',',
        required = true
    )]
    words: Vec<String>,

    /// Single placement passes to sample for the fit rate.
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    samples: usize,
}

fn main() {
    let args = Args::parse();
    let profile = DifficultyTable::STANDARD[args.difficulty.into()];

    let words = args
        .words
        .iter()
        .filter_map(|w| Word::clean(w))
        .collect::<Vec<_>>();
    let placer = match profile.placer(args.size) {
        Ok(placer) => placer,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let generator = PuzzleGenerator::new(placer);

    match generator.generate(&words) {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }

    if args.samples > 0 {
        let (fits, total) = sample_fit_rate(&placer, &words, args.samples);
        println!();
        println!("Fit rate:");
        #[expect(clippy::cast_precision_loss)]
        let rate = fits as f64 / total as f64 * 100.0;
        println!("  {fits} / {total} single passes ({rate:.1}%)");
    }
}

fn sample_fit_rate(placer: &GridPlacer, words: &[Word], samples: usize) -> (usize, usize) {
    let base = PlacementSeed::random();
    let fits = (0..samples)
        .into_par_iter()
        .filter(|i| {
            let seed = base.derive(&format!("sample-{i}"));
            placer.place_with_seed(words, seed).is_ok()
        })
        .count();
    (fits, samples)
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Attempts:");
    println!("  {}", puzzle.attempts);
    println!();

    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Solution:");
    for line in puzzle.solution_view().to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Words:");
    for placement in &puzzle.placements {
        println!("  {placement}");
    }
}
