//! Placement directions.
//!
//! A [`Direction`] is a unit step `(dr, dc)` through grid coordinates; a
//! [`DirectionSet`] is the set of directions a puzzle allows.

use std::fmt::{self, Display};

/// One of the eight compass directions a word can run in.
///
/// `delta()` gives the row/column step between consecutive letters. Rows grow
/// downward and columns grow rightward.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Direction;
///
/// assert_eq!(Direction::DownLeft.delta(), (1, -1));
/// assert_eq!(Direction::from_delta(-1, 0), Some(Direction::Up));
/// assert_eq!(Direction::from_delta(0, 0), None);
///
/// assert!(!Direction::Right.is_reversed());
/// assert!(Direction::Left.is_reversed());
/// assert!(!Direction::DownLeft.is_reversed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Left to right along a row: `(0, 1)`.
    Right,
    /// Right to left along a row: `(0, -1)`.
    Left,
    /// Top to bottom along a column: `(1, 0)`.
    Down,
    /// Bottom to top along a column: `(-1, 0)`.
    Up,
    /// Diagonal toward the bottom right: `(1, 1)`.
    DownRight,
    /// Diagonal toward the bottom left: `(1, -1)`.
    DownLeft,
    /// Diagonal toward the top right: `(-1, 1)`.
    UpRight,
    /// Diagonal toward the top left: `(-1, -1)`.
    UpLeft,
}

impl Direction {
    /// All directions, in the order [`DirectionSet::directions`] yields them.
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Down,
        Self::Up,
        Self::DownRight,
        Self::DownLeft,
        Self::UpRight,
        Self::UpLeft,
    ];

    /// Returns the `(dr, dc)` step between consecutive letters.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Up => (-1, 0),
            Self::DownRight => (1, 1),
            Self::DownLeft => (1, -1),
            Self::UpRight => (-1, 1),
            Self::UpLeft => (-1, -1),
        }
    }

    /// Returns the direction with the given `(dr, dc)` step.
    ///
    /// Returns `None` unless both components are in `{-1, 0, 1}` and not both zero.
    #[must_use]
    pub fn from_delta(dr: isize, dc: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == (dr, dc))
    }

    /// Returns `true` if words in this direction read against natural reading
    /// order: upward, or leftward along a row.
    ///
    /// Downward diagonals toward the left still read top to bottom and are not
    /// reversed.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        let (dr, dc) = self.delta();
        dr < 0 || (dr == 0 && dc < 0)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::DownRight => Self::UpLeft,
            Self::DownLeft => Self::UpRight,
            Self::UpRight => Self::DownLeft,
            Self::UpLeft => Self::DownRight,
        }
    }

    /// Returns a lowercase name for display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Down => "down",
            Self::Up => "up",
            Self::DownRight => "down-right",
            Self::DownLeft => "down-left",
            Self::UpRight => "up-right",
            Self::UpLeft => "up-left",
        }
    }

    /// Returns the single-direction set for this direction.
    #[must_use]
    pub const fn flag(self) -> DirectionSet {
        match self {
            Self::Right => DirectionSet::RIGHT,
            Self::Left => DirectionSet::LEFT,
            Self::Down => DirectionSet::DOWN,
            Self::Up => DirectionSet::UP,
            Self::DownRight => DirectionSet::DOWN_RIGHT,
            Self::DownLeft => DirectionSet::DOWN_LEFT,
            Self::UpRight => DirectionSet::UP_RIGHT,
            Self::UpLeft => DirectionSet::UP_LEFT,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// A set of allowed placement directions.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::{Direction, DirectionSet};
    ///
    /// let set = DirectionSet::RIGHT | DirectionSet::DOWN;
    /// assert_eq!(set, DirectionSet::FORWARD);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(
    ///     set.directions().collect::<Vec<_>>(),
    ///     [Direction::Right, Direction::Down]
    /// );
    ///
    /// assert_eq!(DirectionSet::all().without_reversed().len(), 4);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirectionSet: u8 {
        /// [`Direction::Right`].
        const RIGHT = 1 << 0;
        /// [`Direction::Left`].
        const LEFT = 1 << 1;
        /// [`Direction::Down`].
        const DOWN = 1 << 2;
        /// [`Direction::Up`].
        const UP = 1 << 3;
        /// [`Direction::DownRight`].
        const DOWN_RIGHT = 1 << 4;
        /// [`Direction::DownLeft`].
        const DOWN_LEFT = 1 << 5;
        /// [`Direction::UpRight`].
        const UP_RIGHT = 1 << 6;
        /// [`Direction::UpLeft`].
        const UP_LEFT = 1 << 7;
    }
}

impl DirectionSet {
    /// Rightward and downward only.
    pub const FORWARD: Self = Self::RIGHT.union(Self::DOWN);

    /// Rightward, downward, and both downward diagonals.
    pub const DESCENDING: Self = Self::FORWARD
        .union(Self::DOWN_RIGHT)
        .union(Self::DOWN_LEFT);

    /// Returns the directions in this set, in [`Direction::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = Direction> + Clone {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.contains(direction.flag()))
    }

    /// Returns `true` if the set allows `direction`.
    #[must_use]
    #[inline]
    pub const fn allows(self, direction: Direction) -> bool {
        self.contains(direction.flag())
    }

    /// Returns the number of directions in the set.
    #[must_use]
    pub fn len(self) -> usize {
        self.directions().count()
    }

    /// Returns this set with every reversed direction removed.
    ///
    /// See [`Direction::is_reversed`].
    #[must_use]
    pub fn without_reversed(self) -> Self {
        self.directions()
            .filter(|direction| !direction.is_reversed())
            .collect()
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        direction.flag()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, direction| set | direction.flag())
    }
}
