//! Core data structures for word-search puzzles.
//!
//! This crate provides the types shared by placement, generation, and any
//! consumer that renders a finished puzzle.
//!
//! # Overview
//!
//! 1. **Values** - What goes into a cell and what gets hidden
//!    - [`letter`]: A single uppercase letter `A`-`Z`
//!    - [`word`]: A non-empty sequence of letters to hide in a grid
//!
//! 2. **Geometry** - Where things go
//!    - [`position`]: `(row, col)` coordinates
//!    - [`direction`]: The eight compass directions and [`DirectionSet`]
//!
//! 3. **Grids** - The puzzle itself
//!    - [`grid`]: [`LetterGrid`] (cells may be empty, used while placing) and
//!      [`PuzzleGrid`] (every cell holds a letter)
//!    - [`placement`]: Where a word sits, and [`SolutionView`] for showing the
//!      solution cells of a grid
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Direction, LetterGrid, Placement, Position, Word};
//!
//! let word: Word = "cat".parse()?;
//! let placement = Placement::new(word, Position::new(1, 0), Direction::Right);
//!
//! let mut grid = LetterGrid::new(3);
//! for (pos, letter) in placement.cells().zip(placement.word().letters()) {
//!     grid[pos] = Some(*letter);
//! }
//! assert_eq!(grid.to_string(), "...\nCAT\n...");
//! # Ok::<(), wordsearch_core::WordError>(())
//! ```

pub mod direction;
pub mod grid;
pub mod letter;
pub mod placement;
pub mod position;
pub mod word;

pub use self::{
    direction::{Direction, DirectionSet},
    grid::{GridParseError, LetterGrid, PuzzleGrid},
    letter::Letter,
    placement::{Placement, SolutionView},
    position::Position,
    word::{Word, WordError},
};
