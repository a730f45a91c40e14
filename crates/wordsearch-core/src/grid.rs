//! Square letter grids.
//!
//! - [`LetterGrid`] is the working grid: cells may still be empty while words
//!   are being placed.
//! - [`PuzzleGrid`] is the finished grid: every cell holds a [`Letter`].
//!
//! Both use the same text form: one row per line, `.` (or `_`) for an empty
//! cell. When parsing, whitespace is ignored and the cell count must be a
//! perfect square.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Letter, Position};

/// Errors returned when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// A character is neither a letter, `.`, `_`, nor whitespace.
    #[display("invalid grid character {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The number of cells is zero or not a perfect square.
    #[display("{cells} cells do not form a square grid")]
    NotSquare {
        /// Number of cells found.
        cells: usize,
    },
    /// A finished grid was expected but some cells are empty.
    #[display("grid has {empty} empty cells")]
    Incomplete {
        /// Number of empty cells.
        empty: usize,
    },
}

/// A square grid whose cells are either empty or hold a letter.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Letter, LetterGrid, Position};
///
/// let mut grid = LetterGrid::new(3);
/// assert_eq!(grid.empty_cells(), 9);
///
/// grid[Position::new(1, 1)] = Letter::from_char('x');
/// assert_eq!(grid.empty_cells(), 8);
/// assert_eq!(grid.to_string(), "...\n.X.\n...");
///
/// let parsed: LetterGrid = "... .X. ...".parse()?;
/// assert_eq!(parsed, grid);
/// # Ok::<(), wordsearch_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Option<Letter>>,
}

impl LetterGrid {
    /// Creates a `size`×`size` grid with every cell empty.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `pos`.
    ///
    /// Returns `None` if the cell is empty or `pos` is outside the grid.
    #[must_use]
    #[inline]
    pub fn letter_at(&self, pos: Position) -> Option<Letter> {
        if pos.is_within(self.size) {
            self.cells[self.index_of(pos)]
        } else {
            None
        }
    }

    /// Returns all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        positions(self.size)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if every cell holds a letter.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Fills every empty cell using `fill` and returns the finished grid.
    ///
    /// `fill` is called once per empty cell, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::{Letter, LetterGrid};
    ///
    /// let grid: LetterGrid = "A. .D".parse()?;
    /// let filled = grid.fill_empty(|_| Letter::ALL[25]);
    /// assert_eq!(filled.to_string(), "AZ\nZD");
    /// # Ok::<(), wordsearch_core::GridParseError>(())
    /// ```
    #[must_use]
    pub fn fill_empty<F>(self, mut fill: F) -> PuzzleGrid
    where
        F: FnMut(Position) -> Letter,
    {
        let Self { size, cells } = self;
        let cells = positions(size)
            .zip(cells)
            .map(|(pos, cell)| cell.unwrap_or_else(|| fill(pos)))
            .collect();
        PuzzleGrid { size, cells }
    }

    #[inline]
    fn index_of(&self, pos: Position) -> usize {
        assert!(pos.is_within(self.size), "{pos} is outside a {0}x{0} grid", self.size);
        pos.row() * self.size + pos.col()
    }
}

impl Index<Position> for LetterGrid {
    type Output = Option<Letter>;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.index_of(pos)]
    }
}

impl IndexMut<Position> for LetterGrid {
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let i = self.index_of(pos);
        &mut self.cells[i]
    }
}

impl From<PuzzleGrid> for LetterGrid {
    fn from(grid: PuzzleGrid) -> Self {
        Self {
            size: grid.size,
            cells: grid.cells.into_iter().map(Some).collect(),
        }
    }
}

impl FromStr for LetterGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| match ch {
                '.' | '_' => Ok(None),
                _ => Letter::from_char(ch)
                    .map(Some)
                    .ok_or(GridParseError::InvalidCharacter { ch }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let size = square_side(cells.len()).ok_or(GridParseError::NotSquare { cells: cells.len() })?;
        Ok(Self { size, cells })
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.size, &self.cells, |cell| {
            cell.map_or('.', Letter::as_char)
        })
    }
}

/// A square grid in which every cell holds a letter.
///
/// Produced by [`LetterGrid::fill_empty`] once all words are placed.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Position, PuzzleGrid};
///
/// let grid: PuzzleGrid = "
///     CAT
///     XOY
///     QZG
/// ".parse()?;
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid[Position::new(2, 2)].as_char(), 'G');
/// assert_eq!(grid.rows().nth(1).unwrap().len(), 3);
///
/// assert!("CA. XOY QZG".parse::<PuzzleGrid>().is_err());
/// # Ok::<(), wordsearch_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGrid {
    size: usize,
    cells: Vec<Letter>,
}

impl PuzzleGrid {
    /// Returns the number of rows (and columns).
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        pos.is_within(self.size)
            .then(|| self.cells[pos.row() * self.size + pos.col()])
    }

    /// Returns the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Letter]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Returns all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        positions(self.size)
    }
}

impl Index<Position> for PuzzleGrid {
    type Output = Letter;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(pos.is_within(self.size), "{pos} is outside a {0}x{0} grid", self.size);
        &self.cells[pos.row() * self.size + pos.col()]
    }
}

impl TryFrom<LetterGrid> for PuzzleGrid {
    type Error = GridParseError;

    fn try_from(grid: LetterGrid) -> Result<Self, Self::Error> {
        let empty = grid.empty_cells();
        if empty > 0 {
            return Err(GridParseError::Incomplete { empty });
        }
        Ok(grid.fill_empty(|_| unreachable!("grid has no empty cells")))
    }
}

impl FromStr for PuzzleGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<LetterGrid>()?.try_into()
    }
}

impl Display for PuzzleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.size, &self.cells, Letter::as_char)
    }
}

pub(crate) fn positions(size: usize) -> impl Iterator<Item = Position> + Clone {
    (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
}

pub(crate) fn write_rows<T, F>(
    f: &mut fmt::Formatter<'_>,
    size: usize,
    cells: &[T],
    mut to_char: F,
) -> fmt::Result
where
    T: Copy,
    F: FnMut(T) -> char,
{
    for (i, row) in cells.chunks(size.max(1)).enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        for &cell in row {
            write!(f, "{}", to_char(cell))?;
        }
    }
    Ok(())
}

fn square_side(cells: usize) -> Option<usize> {
    (1..=cells)
        .take_while(|side| side * side <= cells)
        .find(|side| side * side == cells)
}
