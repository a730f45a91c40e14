use std::collections::BTreeSet;

use rand::seq::SliceRandom as _;
use wordsearch_core::{Placement, Position, PuzzleGrid, SolutionView, Word, placement};

use crate::{GridPlacer, PlacementError, PlacementSeed};

/// Attempts made by [`PuzzleGenerator`] before giving up, unless overridden.
pub const DEFAULT_MAX_ATTEMPTS: usize = 500;

/// Errors returned by [`PuzzleGenerator`].
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum GenerateError {
    /// The word list is empty.
    #[display("no words to place")]
    NoWords,
    /// A word is longer than the grid and can never be placed.
    #[display("{word} has {len} letters but the grid is only {size}x{size}")]
    WordTooLong {
        /// The oversized word.
        word: Word,
        /// Its length.
        len: usize,
        /// Grid size.
        size: usize,
    },
    /// Every attempt ended with a word that had no room.
    #[display("could not fit {word} after {attempts} attempts; try fewer words or a larger grid")]
    Exhausted {
        /// Number of attempts made.
        attempts: usize,
        /// The word that failed on the last attempt.
        word: Word,
    },
}

/// A successfully generated puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Seed that reproduces this puzzle with the same words and settings.
    pub seed: PlacementSeed,
    /// The fully-populated grid.
    pub grid: PuzzleGrid,
    /// Where each word was hidden, longest word first.
    pub placements: Vec<Placement>,
    /// Number of placement attempts it took, starting at 1.
    pub attempts: usize,
}

impl GeneratedPuzzle {
    /// Returns the cells covered by at least one word.
    #[must_use]
    pub fn solution_cells(&self) -> BTreeSet<Position> {
        placement::solution_cells(&self.placements)
    }

    /// Returns a view of the grid with non-solution cells masked.
    #[must_use]
    pub fn solution_view(&self) -> SolutionView<'_> {
        SolutionView::new(&self.grid, &self.placements)
    }
}

/// Runs [`GridPlacer`] repeatedly until a placement succeeds.
///
/// A single placement pass never backtracks, so an unlucky early choice can
/// leave no room for a later word. The generator restarts from an empty grid,
/// reshuffling the word order, up to a fixed number of attempts. All attempts
/// draw from one generator built from the seed, so the outcome (including
/// the attempt count) is reproducible.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{DirectionSet, Word};
/// use wordsearch_generator::{GridPlacer, PuzzleGenerator};
///
/// let placer = GridPlacer::new(10, DirectionSet::all())?;
/// let generator = PuzzleGenerator::new(placer);
/// let words = ["arbol", "cielo", "luna", "sol"]
///     .map(Word::new)
///     .into_iter()
///     .collect::<Result<Vec<_>, _>>()?;
///
/// let puzzle = generator.generate(&words)?;
/// assert_eq!(puzzle.placements.len(), 4);
/// assert!(puzzle.attempts >= 1);
///
/// let again = generator.generate_with_seed(&words, puzzle.seed)?;
/// assert_eq!(again, puzzle);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    placer: GridPlacer,
    max_attempts: usize,
}

impl PuzzleGenerator {
    /// Creates a generator with [`DEFAULT_MAX_ATTEMPTS`].
    #[must_use]
    pub fn new(placer: GridPlacer) -> Self {
        Self {
            placer,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the attempt cap. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Returns the underlying placer.
    #[must_use]
    pub fn placer(&self) -> &GridPlacer {
        &self.placer
    }

    /// Returns the attempt cap.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_seed`].
    pub fn generate(&self, words: &[Word]) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(words, PlacementSeed::random())
    }

    /// Generates a puzzle from `seed`.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::NoWords`] if `words` is empty.
    /// - [`GenerateError::WordTooLong`] if a word exceeds the grid size. No
    ///   attempt is made in that case.
    /// - [`GenerateError::Exhausted`] if every attempt failed.
    pub fn generate_with_seed(
        &self,
        words: &[Word],
        seed: PlacementSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        self.check_words(words)?;

        let mut rng = seed.rng();
        let mut order = words.to_vec();
        let mut attempts = 1;
        loop {
            let word = match self.placer.place(&order, &mut rng) {
                Ok(placed) => {
                    log::debug!("placed {} words in {attempts} attempt(s)", words.len());
                    let (grid, placements) = placed.into_parts();
                    return Ok(GeneratedPuzzle {
                        seed,
                        grid,
                        placements,
                        attempts,
                    });
                }
                Err(PlacementError::Unfittable { word, .. }) => word,
            };

            if attempts >= self.max_attempts {
                log::debug!("giving up after {attempts} attempts, last failure on {word}");
                return Err(GenerateError::Exhausted { attempts, word });
            }
            log::debug!("attempt {attempts} failed on {word}, retrying");
            attempts += 1;
            order.shuffle(&mut rng);
        }
    }

    fn check_words(&self, words: &[Word]) -> Result<(), GenerateError> {
        if words.is_empty() {
            return Err(GenerateError::NoWords);
        }
        let size = self.placer.size();
        if let Some(word) = words.iter().find(|word| word.len() > size) {
            return Err(GenerateError::WordTooLong {
                word: word.clone(),
                len: word.len(),
                size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wordsearch_core::DirectionSet;

    use super::*;
    use crate::testing::PlacementChecker;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(s).unwrap()).collect()
    }

    fn seed(n: u8) -> PlacementSeed {
        PlacementSeed::from_bytes([n; 32])
    }

    fn generator(size: usize, directions: DirectionSet) -> PuzzleGenerator {
        PuzzleGenerator::new(GridPlacer::new(size, directions).unwrap())
    }

    #[test]
    fn test_rejects_empty_word_list() {
        let generator = generator(5, DirectionSet::all());
        assert_eq!(
            generator.generate_with_seed(&[], seed(0)),
            Err(GenerateError::NoWords)
        );
    }

    #[test]
    fn test_rejects_oversized_word_upfront() {
        let generator = generator(8, DirectionSet::RIGHT);
        let input = words(&["GATO", "SUPERCALIFRAGILISTIC"]);
        let err = generator.generate_with_seed(&input, seed(0)).unwrap_err();
        assert_eq!(
            err,
            GenerateError::WordTooLong {
                word: input[1].clone(),
                len: 20,
                size: 8,
            }
        );
        assert!(err.is_word_too_long());
    }

    #[test]
    fn test_exhaustion_reports_attempts() {
        let generator = generator(2, DirectionSet::RIGHT).with_max_attempts(7);
        let input = words(&["AB", "CD", "EF"]);
        let err = generator.generate_with_seed(&input, seed(1)).unwrap_err();
        let GenerateError::Exhausted { attempts, word } = err else {
            panic!("expected exhaustion, got {err:?}");
        };
        assert_eq!(attempts, 7);
        assert!(input.contains(&word));
    }

    #[test]
    fn test_max_attempts_is_at_least_one() {
        let generator = generator(5, DirectionSet::all()).with_max_attempts(0);
        assert_eq!(generator.max_attempts(), 1);
        assert_eq!(
            PuzzleGenerator::new(*generator.placer()).max_attempts(),
            DEFAULT_MAX_ATTEMPTS
        );
    }

    #[test]
    fn test_solvable_list_succeeds() {
        let generator = generator(12, DirectionSet::all());
        let input = words(&[
            "PYTHON", "CODIGO", "AMAZON", "KDP", "LIBRO", "PUZZLE", "PRINT", "CASA", "PERRO",
            "GATO",
        ]);
        for n in 0..5 {
            let puzzle = generator.generate_with_seed(&input, seed(n)).unwrap();
            assert_eq!(puzzle.seed, seed(n));
            assert!(puzzle.attempts <= DEFAULT_MAX_ATTEMPTS);
            PlacementChecker::from_parts(&puzzle.grid, &puzzle.placements)
                .assert_covers(&input)
                .assert_in_bounds()
                .assert_spelled()
                .assert_non_conflicting()
                .assert_fully_populated();
        }
    }

    #[test]
    fn test_retries_recover_from_unlucky_first_pass() {
        // The only solutions are ABC/DEF/GHI stacked as rows with ADG as the
        // first column, or the transpose, so most first passes fail.
        let generator = generator(3, DirectionSet::FORWARD);
        let input = words(&["ABC", "DEF", "GHI", "ADG"]);
        let retried = (0..=255)
            .filter_map(|n| generator.generate_with_seed(&input, seed(n)).ok())
            .inspect(|puzzle| {
                PlacementChecker::from_parts(&puzzle.grid, &puzzle.placements)
                    .assert_covers(&input)
                    .assert_non_conflicting();
            })
            .filter(|puzzle| puzzle.attempts > 1)
            .count();
        assert!(retried > 0);
    }

    #[test]
    fn test_generate_is_reproducible() {
        let generator = generator(10, DirectionSet::DESCENDING);
        let input = words(&["ARBOL", "CIELO", "LUNA", "SOL", "MAR"]);
        let a = generator.generate_with_seed(&input, seed(4)).unwrap();
        let b = generator.generate_with_seed(&input, seed(4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_solution_cells_and_view() {
        let generator = generator(6, DirectionSet::RIGHT);
        let input = words(&["SOL"]);
        let puzzle = generator.generate_with_seed(&input, seed(8)).unwrap();
        let cells = puzzle.solution_cells();
        assert_eq!(cells.len(), 3);
        let view = puzzle.solution_view().to_string();
        assert_eq!(view.chars().filter(char::is_ascii_uppercase).count(), 3);
        assert_eq!(view.lines().count(), 6);
    }

    #[test]
    fn test_exhausted_message_suggests_fix() {
        let err = GenerateError::Exhausted {
            attempts: 500,
            word: Word::new("MURCIELAGO").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "could not fit MURCIELAGO after 500 attempts; try fewer words or a larger grid"
        );
    }
}
