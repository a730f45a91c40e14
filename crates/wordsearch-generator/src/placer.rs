use std::cmp::Reverse;

use rand::{
    Rng,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use wordsearch_core::{
    Direction, DirectionSet, Letter, LetterGrid, Placement, Position, PuzzleGrid, SolutionView,
    Word,
};

use crate::PlacementSeed;

/// Errors returned when configuring a [`GridPlacer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacerError {
    /// The grid size is zero.
    #[display("grid size must be at least 1")]
    ZeroSize,
    /// The direction set is empty.
    #[display("at least one direction must be allowed")]
    NoDirections,
}

/// Errors returned by [`GridPlacer::place`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// No candidate position accepts the word in the current grid state.
    ///
    /// Either the word is longer than the grid, or the words placed before it
    /// left no line it can occupy.
    #[display("no room for {word} in the {size}x{size} grid")]
    Unfittable {
        /// The word that could not be placed.
        word: Word,
        /// Grid size used for the attempt.
        size: usize,
    },
}

/// A finished grid together with the placement of every word.
///
/// Placements are listed in the order the words were processed: longest
/// first, ties kept in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedGrid {
    grid: PuzzleGrid,
    placements: Vec<Placement>,
}

impl PlacedGrid {
    /// Returns the fully-populated grid.
    #[must_use]
    pub fn grid(&self) -> &PuzzleGrid {
        &self.grid
    }

    /// Returns the placements in processing order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns a view highlighting the cells covered by words.
    #[must_use]
    pub fn solution_view(&self) -> SolutionView<'_> {
        SolutionView::new(&self.grid, &self.placements)
    }

    /// Splits into the grid and the placements.
    #[must_use]
    pub fn into_parts(self) -> (PuzzleGrid, Vec<Placement>) {
        (self.grid, self.placements)
    }
}

/// Places words on a square grid and fills the rest with random letters.
///
/// Placement is a single greedy pass:
///
/// 1. Words are sorted longest first. The sort is stable, so words of equal
///    length keep their input order.
/// 2. For each word, every `(row, col, direction)` candidate is shuffled and
///    scanned; the first one whose cells are all in bounds and either empty or
///    already holding the needed letter is committed. Words may therefore
///    cross where their letters agree.
/// 3. If no candidate fits, the whole attempt fails immediately. Earlier words
///    are never moved and the placer never retries on its own; retrying is
///    the caller's job (see [`PuzzleGenerator`](crate::PuzzleGenerator)).
/// 4. Remaining empty cells get uniformly random letters `A`-`Z`.
///
/// Word lengths are not validated against the grid size. A word longer than
/// the grid simply has no valid candidate and fails the attempt.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{DirectionSet, Word};
/// use wordsearch_generator::{GridPlacer, PlacementSeed};
///
/// let placer = GridPlacer::new(5, DirectionSet::FORWARD)?;
/// let words = [Word::new("cat")?, Word::new("dog")?];
/// let seed = PlacementSeed::from_bytes([7; 32]);
///
/// let placed = placer.place_with_seed(&words, seed)?;
/// assert_eq!(placed.grid().size(), 5);
/// assert_eq!(placed.placements().len(), 2);
/// for placement in placed.placements() {
///     assert!(placement.matches(placed.grid()));
/// }
///
/// // Same seed, same puzzle.
/// assert_eq!(placer.place_with_seed(&words, seed)?, placed);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacer {
    size: usize,
    directions: DirectionSet,
}

impl GridPlacer {
    /// Creates a placer for a `size`×`size` grid allowing `directions`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacerError::ZeroSize`] if `size` is zero and
    /// [`PlacerError::NoDirections`] if `directions` is empty.
    pub fn new(size: usize, directions: DirectionSet) -> Result<Self, PlacerError> {
        if size == 0 {
            return Err(PlacerError::ZeroSize);
        }
        if directions.is_empty() {
            return Err(PlacerError::NoDirections);
        }
        Ok(Self::new_unchecked(size, directions))
    }

    /// Caller guarantees `size > 0` and a non-empty `directions`.
    pub(crate) const fn new_unchecked(size: usize, directions: DirectionSet) -> Self {
        debug_assert!(size > 0 && !directions.is_empty());
        Self { size, directions }
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the allowed directions.
    #[must_use]
    pub fn directions(&self) -> DirectionSet {
        self.directions
    }

    /// Returns the number of candidates scanned per word: `size² × |directions|`.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.size * self.size * self.directions.len()
    }

    /// Places `words` using randomness from `rng`.
    ///
    /// See the [type-level documentation](GridPlacer) for the algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Unfittable`] naming the first word that has no
    /// valid candidate. No partial grid is returned.
    pub fn place<R>(&self, words: &[Word], rng: &mut R) -> Result<PlacedGrid, PlacementError>
    where
        R: Rng + ?Sized,
    {
        let mut order = words.iter().collect::<Vec<_>>();
        order.sort_by_key(|word| Reverse(word.len()));

        let mut grid = LetterGrid::new(self.size);
        let mut placements = Vec::with_capacity(words.len());
        let mut candidates = Vec::with_capacity(self.candidate_count());

        for word in order {
            candidates.clear();
            candidates.extend(self.candidates());
            candidates.shuffle(rng);

            let Some(&(start, direction)) = candidates
                .iter()
                .find(|&&(start, direction)| fits(&grid, word, start, direction))
            else {
                log::debug!(
                    "no candidate for {word} after placing {} of {} words",
                    placements.len(),
                    words.len()
                );
                return Err(PlacementError::Unfittable {
                    word: word.clone(),
                    size: self.size,
                });
            };

            let placement = Placement::new(word.clone(), start, direction);
            for (pos, letter) in placement.cell_letters() {
                grid[pos] = Some(letter);
            }
            log::trace!("placed {placement}");
            placements.push(placement);
        }

        let grid = grid.fill_empty(|_| filler_letter(rng));
        Ok(PlacedGrid { grid, placements })
    }

    /// Places `words` with a generator built from `seed`.
    ///
    /// # Errors
    ///
    /// See [`GridPlacer::place`].
    pub fn place_with_seed(
        &self,
        words: &[Word],
        seed: PlacementSeed,
    ) -> Result<PlacedGrid, PlacementError> {
        self.place(words, &mut seed.rng())
    }

    /// Every `(start, direction)` pair, row-major then in direction order.
    fn candidates(&self) -> impl Iterator<Item = (Position, Direction)> + use<> {
        let Self { size, directions } = *self;
        (0..size).flat_map(move |row| {
            (0..size).flat_map(move |col| {
                directions
                    .directions()
                    .map(move |direction| (Position::new(row, col), direction))
            })
        })
    }
}

/// Returns `true` if `word` can be written from `start` in `direction`: every
/// cell is inside the grid and either empty or already holds the same letter.
fn fits(grid: &LetterGrid, word: &Word, start: Position, direction: Direction) -> bool {
    word.letters().iter().enumerate().all(|(i, &letter)| {
        start
            .step(direction, i, grid.size())
            .is_some_and(|pos| grid[pos].is_none_or(|existing| existing == letter))
    })
}

fn filler_letter<R>(rng: &mut R) -> Letter
where
    R: Rng + ?Sized,
{
    *Letter::ALL.choose(rng).expect("alphabet is non-empty")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::PlacementChecker;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(s).unwrap()).collect()
    }

    fn seed(n: u8) -> PlacementSeed {
        PlacementSeed::from_bytes([n; 32])
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(
            GridPlacer::new(0, DirectionSet::all()),
            Err(PlacerError::ZeroSize)
        );
    }

    #[test]
    fn test_new_rejects_empty_directions() {
        assert_eq!(
            GridPlacer::new(5, DirectionSet::empty()),
            Err(PlacerError::NoDirections)
        );
    }

    #[test]
    fn test_candidate_count() {
        let placer = GridPlacer::new(4, DirectionSet::FORWARD).unwrap();
        assert_eq!(placer.candidate_count(), 32);
        assert_eq!(placer.candidates().count(), 32);

        let placer = GridPlacer::new(3, DirectionSet::all()).unwrap();
        assert_eq!(placer.candidates().count(), 72);
    }

    #[test]
    fn test_places_cat_and_dog() {
        let placer = GridPlacer::new(5, DirectionSet::RIGHT | DirectionSet::DOWN).unwrap();
        let input = words(&["CAT", "DOG"]);

        for n in 0..20 {
            let placed = placer.place_with_seed(&input, seed(n)).unwrap();
            assert_eq!(placed.grid().size(), 5);
            PlacementChecker::new(&placed)
                .assert_covers(&input)
                .assert_in_bounds()
                .assert_spelled()
                .assert_non_conflicting()
                .assert_fully_populated()
                .assert_directions_within(DirectionSet::FORWARD);
        }
    }

    #[test]
    fn test_longer_words_are_placed_first() {
        let placer = GridPlacer::new(10, DirectionSet::all()).unwrap();
        let input = words(&["SOL", "MAR", "ARBOL", "CIELO", "GATO", "LUNA"]);
        let placed = placer.place_with_seed(&input, seed(1)).unwrap();

        let order = placed
            .placements()
            .iter()
            .map(|p| p.word().to_string())
            .collect::<Vec<_>>();
        assert_eq!(order, ["ARBOL", "CIELO", "GATO", "LUNA", "SOL", "MAR"]);
    }

    #[test]
    fn test_word_longer_than_grid_fails() {
        let placer = GridPlacer::new(8, DirectionSet::RIGHT).unwrap();
        let input = words(&["SUPERCALIFRAGILISTIC"]);
        assert_eq!(
            placer.place_with_seed(&input, seed(0)),
            Err(PlacementError::Unfittable {
                word: input[0].clone(),
                size: 8,
            })
        );
    }

    #[test]
    fn test_word_one_longer_than_grid_fails_in_every_direction() {
        for size in 1..=6 {
            let placer = GridPlacer::new(size, DirectionSet::all()).unwrap();
            let input = vec![Word::new(&"A".repeat(size + 1)).unwrap()];
            let result = placer.place_with_seed(&input, seed(3));
            assert!(
                matches!(result, Err(PlacementError::Unfittable { .. })),
                "size {size}: {result:?}"
            );
        }
    }

    #[test]
    fn test_word_exactly_grid_size_fits() {
        let placer = GridPlacer::new(6, DirectionSet::DOWN_RIGHT).unwrap();
        let input = words(&["PUZZLE"]);
        let placed = placer.place_with_seed(&input, seed(5)).unwrap();
        let placement = &placed.placements()[0];
        assert_eq!(placement.start(), Position::new(0, 0));
        assert_eq!(placement.direction(), Direction::DownRight);
    }

    #[test]
    fn test_crowded_grid_fails_without_partial_result() {
        // Two rows, three words that can only run left to right and share no letters.
        let placer = GridPlacer::new(2, DirectionSet::RIGHT).unwrap();
        let input = words(&["AB", "CD", "EF"]);
        for n in 0..10 {
            assert_eq!(
                placer.place_with_seed(&input, seed(n)),
                Err(PlacementError::Unfittable {
                    word: input[2].clone(),
                    size: 2,
                })
            );
        }
    }

    #[test]
    fn test_fits_allows_matching_overlap() {
        let grid: LetterGrid = "CAT ... ...".parse().unwrap();
        let car = Word::new("CAR").unwrap();
        assert!(fits(&grid, &car, Position::new(0, 0), Direction::Down));
        assert!(!fits(&grid, &car, Position::new(0, 0), Direction::Right));
        assert!(fits(&grid, &car, Position::new(1, 0), Direction::Right));
        assert!(!fits(&grid, &car, Position::new(1, 1), Direction::Right));
        assert!(!fits(&grid, &car, Position::new(2, 2), Direction::UpLeft));
    }

    #[test]
    fn test_crossing_words_share_letter() {
        // With rows and columns only, CAT and CAR can cross on their shared C.
        let placer = GridPlacer::new(3, DirectionSet::FORWARD).unwrap();
        let input = words(&["CAT", "CAR"]);

        // They can also cross on A, e.g. CAT along row 1 and CAR down column 1.
        let mut crossed_on_c = 0;
        for n in 0..=255 {
            let placed = placer.place_with_seed(&input, seed(n)).unwrap();
            let checker = PlacementChecker::new(&placed)
                .assert_spelled()
                .assert_non_conflicting();
            for shared in checker.shared_cells() {
                let ch = placed.grid()[shared].as_char();
                assert!(ch == 'C' || ch == 'A', "unexpected crossing on {ch:?}");
                if ch == 'C' {
                    crossed_on_c += 1;
                }
            }
        }
        assert!(crossed_on_c > 0, "CAT and CAR never crossed on C");
    }

    #[test]
    fn test_places_accented_words() {
        let placer = GridPlacer::new(10, DirectionSet::all()).unwrap();
        let input = words(&["niño", "árbol", "canción", "pingüino"]);
        let placed = (0..=255)
            .find_map(|n| placer.place_with_seed(&input, seed(n)).ok())
            .unwrap();
        PlacementChecker::new(&placed)
            .assert_covers(&input)
            .assert_spelled()
            .assert_non_conflicting()
            .assert_fully_populated();

        let spelled = placed
            .placements()
            .iter()
            .map(|p| p.word().to_string())
            .collect::<Vec<_>>();
        assert!(spelled.contains(&"NIÑO".to_owned()));
        assert!(spelled.contains(&"CANCIÓN".to_owned()));
    }

    #[test]
    fn test_empty_word_list_fills_grid() {
        let placer = GridPlacer::new(4, DirectionSet::all()).unwrap();
        let placed = placer.place_with_seed(&[], seed(9)).unwrap();
        assert!(placed.placements().is_empty());
        PlacementChecker::new(&placed).assert_fully_populated();
    }

    #[test]
    fn test_same_seed_same_result() {
        let placer = GridPlacer::new(12, DirectionSet::all()).unwrap();
        let input = words(&["PYTHON", "CODIGO", "AMAZON", "KDP", "LIBRO", "PUZZLE", "PRINT"]);
        let a = placer.place_with_seed(&input, seed(42));
        let b = placer.place_with_seed(&input, seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_vary_grid() {
        let placer = GridPlacer::new(10, DirectionSet::all()).unwrap();
        let input = words(&["GATO", "PERRO", "CASA"]);
        let grids = (0..8)
            .map(|n| placer.place_with_seed(&input, seed(n)).unwrap().into_parts().0)
            .collect::<Vec<_>>();
        assert!(grids.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_solution_view_covers_placements() {
        let placer = GridPlacer::new(6, DirectionSet::all()).unwrap();
        let input = words(&["LUNA", "SOL"]);
        let placed = placer.place_with_seed(&input, seed(2)).unwrap();
        let view = placed.solution_view();
        for placement in placed.placements() {
            assert!(placement.cells().all(|pos| view.is_solution_cell(pos)));
        }
        assert!(view.cells().len() <= 7);
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        // A small alphabet makes crossings likely.
        "[ABCDE]{1,6}".prop_map(|s| Word::new(&s).unwrap())
    }

    fn direction_set_strategy() -> impl Strategy<Value = DirectionSet> {
        (1u8..=u8::MAX).prop_map(DirectionSet::from_bits_truncate)
    }

    proptest! {
        #[test]
        fn prop_successful_placements_hold_invariants(
            input in prop::collection::vec(word_strategy(), 0..8),
            size in 1usize..10,
            directions in direction_set_strategy(),
            bytes in any::<[u8; 32]>(),
        ) {
            let placer = GridPlacer::new(size, directions).unwrap();
            match placer.place_with_seed(&input, PlacementSeed::from_bytes(bytes)) {
                Ok(placed) => {
                    prop_assert_eq!(placed.grid().size(), size);
                    PlacementChecker::new(&placed)
                        .assert_covers(&input)
                        .assert_in_bounds()
                        .assert_spelled()
                        .assert_non_conflicting()
                        .assert_fully_populated()
                        .assert_directions_within(directions)
                        .assert_longest_first();
                }
                Err(PlacementError::Unfittable { word, size: failed_size }) => {
                    prop_assert!(input.contains(&word));
                    prop_assert_eq!(failed_size, size);
                }
            }
        }

        #[test]
        fn prop_oversized_word_always_fails(
            size in 1usize..12,
            directions in direction_set_strategy(),
            bytes in any::<[u8; 32]>(),
        ) {
            let placer = GridPlacer::new(size, directions).unwrap();
            let input = vec![Word::new(&"Q".repeat(size + 1)).unwrap()];
            let result = placer.place_with_seed(&input, PlacementSeed::from_bytes(bytes));
            prop_assert!(result.is_err());
        }
    }
}
