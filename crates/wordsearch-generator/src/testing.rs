//! Test utilities for placement results.
//!
//! [`PlacementChecker`] wraps a finished grid and its placements and checks
//! the properties every successful placement must have.

use std::collections::HashMap;

use wordsearch_core::{DirectionSet, Letter, Placement, Position, PuzzleGrid, Word};

use crate::PlacedGrid;

/// A test harness for verifying placement results.
///
/// # Method Chaining
///
/// All assertion methods return `self`, enabling fluent method chaining.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub(crate) struct PlacementChecker<'a> {
    grid: &'a PuzzleGrid,
    placements: &'a [Placement],
}

impl<'a> PlacementChecker<'a> {
    /// Creates a checker for a placer result.
    pub(crate) fn new(placed: &'a PlacedGrid) -> Self {
        Self::from_parts(placed.grid(), placed.placements())
    }

    /// Creates a checker from a grid and its placements.
    pub(crate) fn from_parts(grid: &'a PuzzleGrid, placements: &'a [Placement]) -> Self {
        Self { grid, placements }
    }

    /// Asserts that every word appears exactly once among the placements.
    #[track_caller]
    pub(crate) fn assert_covers(self, words: &[Word]) -> Self {
        let mut expected = words.iter().collect::<Vec<_>>();
        let mut actual = self.placements.iter().map(Placement::word).collect::<Vec<_>>();
        expected.sort();
        actual.sort();
        assert_eq!(
            actual, expected,
            "Expected placements to cover the input words exactly once"
        );
        self
    }

    /// Asserts that every placement lies inside the grid.
    #[track_caller]
    pub(crate) fn assert_in_bounds(self) -> Self {
        let size = self.grid.size();
        for placement in self.placements {
            assert!(
                placement.is_within(size),
                "Expected {placement} to fit in a {size}x{size} grid"
            );
        }
        self
    }

    /// Asserts that the grid spells each word along its placement.
    #[track_caller]
    pub(crate) fn assert_spelled(self) -> Self {
        for placement in self.placements {
            assert!(
                placement.matches(self.grid),
                "Expected grid to spell {placement}, grid is:\n{}",
                self.grid
            );
        }
        self
    }

    /// Asserts that placements sharing a cell agree on its letter.
    #[track_caller]
    pub(crate) fn assert_non_conflicting(self) -> Self {
        let mut claimed = HashMap::<Position, (Letter, &Placement)>::new();
        for placement in self.placements {
            for (pos, letter) in placement.cell_letters() {
                let (existing, owner) = *claimed.entry(pos).or_insert((letter, placement));
                assert_eq!(
                    existing, letter,
                    "Expected {placement} to agree with {owner} at {pos}"
                );
            }
        }
        self
    }

    /// Asserts that every cell holds an uppercase letter.
    #[track_caller]
    pub(crate) fn assert_fully_populated(self) -> Self {
        let size = self.grid.size();
        assert_eq!(self.grid.positions().count(), size * size);
        for pos in self.grid.positions() {
            let ch = self.grid[pos].as_char();
            assert!(
                ch.is_alphabetic() && !ch.is_lowercase(),
                "Expected an uppercase letter at {pos}, found {ch:?}"
            );
        }
        self
    }

    /// Asserts that every placement uses one of `directions`.
    #[track_caller]
    pub(crate) fn assert_directions_within(self, directions: DirectionSet) -> Self {
        for placement in self.placements {
            assert!(
                directions.allows(placement.direction()),
                "Expected {placement} to use one of {directions:?}"
            );
        }
        self
    }

    /// Asserts that placements are ordered by non-increasing word length.
    #[track_caller]
    pub(crate) fn assert_longest_first(self) -> Self {
        for pair in self.placements.windows(2) {
            assert!(
                pair[0].len() >= pair[1].len(),
                "Expected {} to be placed before {}",
                pair[1],
                pair[0]
            );
        }
        self
    }

    /// Returns the cells covered by more than one placement.
    pub(crate) fn shared_cells(&self) -> Vec<Position> {
        let mut counts = HashMap::<Position, usize>::new();
        for pos in self.placements.iter().flat_map(Placement::cells) {
            *counts.entry(pos).or_default() += 1;
        }
        let mut shared = counts
            .into_iter()
            .filter_map(|(pos, count)| (count > 1).then_some(pos))
            .collect::<Vec<_>>();
        shared.sort();
        shared
    }
}
