//! Word placements and solution views.

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
};

use crate::{Direction, Letter, Position, PuzzleGrid, Word, grid};

/// Where one word sits in a grid: a start cell and a direction.
///
/// The word's length is implied by the word itself, so a placement is enough
/// to reconstruct the solution path: cell `i` is `start` moved `i` steps in
/// `direction`.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, Placement, Position, Word};
///
/// let placement = Placement::new(Word::new("SOL")?, Position::new(4, 2), Direction::UpRight);
/// assert_eq!(
///     placement.cells().collect::<Vec<_>>(),
///     [Position::new(4, 2), Position::new(3, 3), Position::new(2, 4)]
/// );
/// assert_eq!(placement.end(), Some(Position::new(2, 4)));
/// assert!(placement.is_within(5));
/// assert!(!placement.is_within(4));
/// # Ok::<(), wordsearch_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    word: Word,
    start: Position,
    direction: Direction,
}

impl Placement {
    /// Creates a placement.
    ///
    /// No bounds are checked here; see [`Placement::is_within`].
    #[must_use]
    pub fn new(word: Word, start: Position, direction: Direction) -> Self {
        Self {
            word,
            start,
            direction,
        }
    }

    /// Returns the placed word.
    #[must_use]
    #[inline]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the cell holding the first letter.
    #[must_use]
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the direction the word reads in.
    #[must_use]
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of cells the word covers.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Always `false`; words have at least one letter.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Returns the cells covered by the word, first letter first.
    ///
    /// Iteration stops early if the path would leave non-negative coordinates,
    /// which can only happen for a placement that does not fit any grid.
    pub fn cells(&self) -> impl Iterator<Item = Position> + Clone + use<> {
        let Self {
            start, direction, ..
        } = *self;
        (0..self.len()).map_while(move |i| start.step(direction, i, usize::MAX))
    }

    /// Returns `(cell, letter)` pairs, first letter first.
    pub fn cell_letters(&self) -> impl Iterator<Item = (Position, Letter)> + '_ {
        self.cells().zip(self.word.letters().iter().copied())
    }

    /// Returns the cell holding the last letter.
    ///
    /// Returns `None` if the path leaves non-negative coordinates.
    #[must_use]
    pub fn end(&self) -> Option<Position> {
        self.start
            .step(self.direction, self.len() - 1, usize::MAX)
    }

    /// Returns `true` if every cell lies in a `size`×`size` grid.
    #[must_use]
    pub fn is_within(&self, size: usize) -> bool {
        self.start.is_within(size) && self.end().is_some_and(|end| end.is_within(size))
    }

    /// Returns `true` if `grid` spells the word along this placement.
    #[must_use]
    pub fn matches(&self, grid: &PuzzleGrid) -> bool {
        self.is_within(grid.size())
            && self
                .cell_letters()
                .all(|(pos, letter)| grid.get(pos) == Some(letter))
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} {}", self.word, self.start, self.direction)
    }
}

/// A grid view that shows only the cells covered by placed words.
///
/// Renderers use this to draw the solution page; its `Display` form masks
/// every other cell with `.`.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, Placement, Position, PuzzleGrid, SolutionView, Word};
///
/// let grid: PuzzleGrid = "CATX QWER ZXCV DOGS".parse()?;
/// let placements = [
///     Placement::new(Word::new("CAT")?, Position::new(0, 0), Direction::Right),
///     Placement::new(Word::new("DOG")?, Position::new(3, 0), Direction::Right),
/// ];
/// let view = SolutionView::new(&grid, &placements);
/// assert_eq!(view.cells().len(), 6);
/// assert_eq!(view.to_string(), "CAT.\n....\n....\nDOG.");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SolutionView<'a> {
    grid: &'a PuzzleGrid,
    cells: BTreeSet<Position>,
}

impl<'a> SolutionView<'a> {
    /// Creates a view of `grid` highlighting the cells of `placements`.
    #[must_use]
    pub fn new(grid: &'a PuzzleGrid, placements: &[Placement]) -> Self {
        Self {
            grid,
            cells: solution_cells(placements),
        }
    }

    /// Returns the underlying grid.
    #[must_use]
    pub fn grid(&self) -> &'a PuzzleGrid {
        self.grid
    }

    /// Returns the cells covered by at least one placement.
    #[must_use]
    pub fn cells(&self) -> &BTreeSet<Position> {
        &self.cells
    }

    /// Returns `true` if `pos` is covered by a placement.
    #[must_use]
    pub fn is_solution_cell(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

impl Display for SolutionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = self
            .grid
            .positions()
            .map(|pos| self.is_solution_cell(pos).then(|| self.grid[pos]))
            .collect::<Vec<_>>();
        grid::write_rows(f, self.grid.size(), &masked, |cell| {
            cell.map_or('.', Letter::as_char)
        })
    }
}

/// Returns the set of cells covered by at least one placement.
#[must_use]
pub fn solution_cells(placements: &[Placement]) -> BTreeSet<Position> {
    placements.iter().flat_map(Placement::cells).collect()
}
