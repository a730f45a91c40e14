use rayon::prelude::*;
use wordsearch_generator::{
    DifficultyProfile, GenerateError, GeneratedPuzzle, GridSizeError, PlacementSeed,
    PuzzleGenerator,
};

use crate::WordList;

/// One puzzle to generate: a title and its words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRequest {
    /// Title printed above the puzzle.
    pub title: String,
    /// Words to hide.
    pub words: WordList,
}

impl PuzzleRequest {
    /// Creates a request.
    pub fn new(title: impl Into<String>, words: WordList) -> Self {
        Self {
            title: title.into(),
            words,
        }
    }
}

/// A puzzle that made it into the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPuzzle {
    /// Position of the request, starting at 0.
    pub index: usize,
    /// Title from the request.
    pub title: String,
    /// Words from the request.
    pub words: WordList,
    /// The generated grid and its solution.
    pub puzzle: GeneratedPuzzle,
}

/// A puzzle that could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("puzzle {index} ({title}): {error}")]
pub struct SkippedPuzzle {
    /// Position of the request, starting at 0.
    pub index: usize,
    /// Title from the request.
    pub title: String,
    /// Why generation failed.
    pub error: GenerateError,
}

/// The outcome of a book run. Both lists keep request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Seed every puzzle seed was derived from.
    pub seed: PlacementSeed,
    /// Successfully generated puzzles.
    pub puzzles: Vec<BookPuzzle>,
    /// Requests that failed.
    pub skipped: Vec<SkippedPuzzle>,
}

impl Book {
    /// Returns `true` if requests were made and every one of them failed.
    #[must_use]
    pub fn all_skipped(&self) -> bool {
        self.puzzles.is_empty() && !self.skipped.is_empty()
    }
}

/// Generates every puzzle of a book with one difficulty profile.
///
/// Each request gets its own seed, derived from the book seed and the request
/// index, so the book is reproducible no matter how the work is scheduled.
/// Requests are generated in parallel. A request that fails is recorded in
/// [`Book::skipped`] and logged; the remaining requests are unaffected.
///
/// # Examples
///
/// ```
/// use wordsearch_book::{BookGenerator, PuzzleRequest, WordList};
/// use wordsearch_generator::{Difficulty, DifficultyTable, PlacementSeed};
///
/// let profile = DifficultyTable::STANDARD.profile(Difficulty::Easy);
/// let seed = PlacementSeed::from_bytes([3; 32]);
/// let books = BookGenerator::new(profile, None, seed)?;
///
/// let requests = [
///     PuzzleRequest::new("Animals", WordList::from_raw(["gato", "perro", "oso"])),
///     PuzzleRequest::new("Too long", WordList::from_raw(["electroencefalografista"])),
/// ];
/// let book = books.generate(&requests);
///
/// assert_eq!(book.puzzles.len(), 1);
/// assert_eq!(book.puzzles[0].title, "Animals");
/// assert_eq!(book.skipped.len(), 1);
/// assert_eq!(book.skipped[0].index, 1);
/// assert_eq!(books.generate(&requests), book);
/// # Ok::<(), wordsearch_generator::GridSizeError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BookGenerator {
    generator: PuzzleGenerator,
    seed: PlacementSeed,
}

impl BookGenerator {
    /// Creates a book generator for `profile` at `size` (or the profile default).
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError`] if `size` does not suit `profile`.
    pub fn new(
        profile: &DifficultyProfile,
        size: Option<usize>,
        seed: PlacementSeed,
    ) -> Result<Self, GridSizeError> {
        let generator = PuzzleGenerator::new(profile.placer(size)?);
        Ok(Self { generator, seed })
    }

    /// Sets the attempt cap for each puzzle.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.generator = self.generator.with_max_attempts(max_attempts);
        self
    }

    /// Returns the book seed.
    #[must_use]
    pub fn seed(&self) -> PlacementSeed {
        self.seed
    }

    /// Returns the grid size used for every puzzle.
    #[must_use]
    pub fn size(&self) -> usize {
        self.generator.placer().size()
    }

    /// Returns the seed used for the request at `index`.
    #[must_use]
    pub fn puzzle_seed(&self, index: usize) -> PlacementSeed {
        self.seed.derive(&format!("puzzle-{index}"))
    }

    /// Generates a puzzle for every request.
    pub fn generate(&self, requests: &[PuzzleRequest]) -> Book {
        let size = self.size();
        log::info!(
            "generating {} puzzle(s) on a {size}x{size} grid from seed {}",
            requests.len(),
            self.seed
        );

        let results = requests
            .par_iter()
            .enumerate()
            .map(|(index, request)| self.generate_one(index, request))
            .collect::<Vec<_>>();

        let mut puzzles = Vec::with_capacity(results.len());
        let mut skipped = Vec::new();
        for result in results {
            match result {
                Ok(puzzle) => puzzles.push(puzzle),
                Err(skip) => skipped.push(skip),
            }
        }

        log::info!(
            "generated {} puzzle(s), skipped {}",
            puzzles.len(),
            skipped.len()
        );
        Book {
            seed: self.seed,
            puzzles,
            skipped,
        }
    }

    fn generate_one(
        &self,
        index: usize,
        request: &PuzzleRequest,
    ) -> Result<BookPuzzle, SkippedPuzzle> {
        let seed = self.puzzle_seed(index);
        match self.generator.generate_with_seed(&request.words, seed) {
            Ok(puzzle) => {
                log::debug!(
                    "puzzle {index} ({}) placed in {} attempt(s)",
                    request.title,
                    puzzle.attempts
                );
                Ok(BookPuzzle {
                    index,
                    title: request.title.clone(),
                    words: request.words.clone(),
                    puzzle,
                })
            }
            Err(error) => {
                let skip = SkippedPuzzle {
                    index,
                    title: request.title.clone(),
                    error,
                };
                if skip.error.is_word_too_long() {
                    log::warn!("skipping {skip}; drop the word or use a larger grid");
                } else {
                    log::warn!("skipping {skip}");
                }
                Err(skip)
            }
        }
    }
}
