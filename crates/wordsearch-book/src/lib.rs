//! Batch generation of word-search puzzles for a book.
//!
//! A book is a list of [`PuzzleRequest`]s generated with one difficulty
//! profile. [`BookGenerator`] turns the requests into a [`Book`], generating
//! puzzles in parallel with per-puzzle seeds derived from one book seed.
//! Requests that cannot be placed are skipped rather than aborting the run.

pub use self::{book::*, word_list::*};

mod book;
mod word_list;
