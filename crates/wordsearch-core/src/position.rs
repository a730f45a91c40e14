//! Grid coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate: `row` counts down from the top, `col` right from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns `true` if the position lies in a `size`×`size` grid.
    #[must_use]
    #[inline]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Moves `steps` cells in `direction`, staying inside a `size`×`size` grid.
    ///
    /// Returns `None` if the destination falls outside the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::{Direction, Position};
    ///
    /// let start = Position::new(2, 2);
    /// assert_eq!(start.step(Direction::UpLeft, 2, 5), Some(Position::new(0, 0)));
    /// assert_eq!(start.step(Direction::UpLeft, 3, 5), None);
    /// assert_eq!(start.step(Direction::Right, 2, 5), Some(Position::new(2, 4)));
    /// assert_eq!(start.step(Direction::Right, 3, 5), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, steps: usize, size: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let steps = isize::try_from(steps).ok()?;
        let row = offset(self.row, dr, steps)?;
        let col = offset(self.col, dc, steps)?;
        let pos = Self::new(row, col);
        pos.is_within(size).then_some(pos)
    }
}

fn offset(base: usize, delta: isize, steps: isize) -> Option<usize> {
    let moved = isize::try_from(base)
        .ok()?
        .checked_add(delta.checked_mul(steps)?)?;
    usize::try_from(moved).ok()
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
