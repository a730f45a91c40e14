//! Word-search puzzle generation.
//!
//! # Overview
//!
//! - [`GridPlacer`] hides a list of words in a square grid in one greedy pass
//!   and fills the remaining cells with random letters.
//! - [`PuzzleGenerator`] retries the placer from scratch until it succeeds or
//!   runs out of attempts.
//! - [`DifficultyTable`] maps each [`Difficulty`] to grid-size bounds and the
//!   directions words may take.
//! - [`PlacementSeed`] makes every run reproducible.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::Word;
//! use wordsearch_generator::{Difficulty, DifficultyTable, PlacementSeed, PuzzleGenerator};
//!
//! let profile = DifficultyTable::STANDARD.profile(Difficulty::Easy);
//! let generator = PuzzleGenerator::new(profile.placer(None)?);
//!
//! let words = vec![Word::new("gato")?, Word::new("perro")?, Word::new("casa")?];
//! let seed = PlacementSeed::from_bytes([1; 32]);
//! let puzzle = generator.generate_with_seed(&words, seed)?;
//!
//! assert_eq!(puzzle.grid.size(), 10);
//! for placement in &puzzle.placements {
//!     assert!(placement.matches(&puzzle.grid));
//!     assert!(!placement.direction().is_reversed());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{generator::*, placer::*, profile::*, seed::*};

mod generator;
mod placer;
mod profile;
mod seed;
#[cfg(test)]
mod testing;
