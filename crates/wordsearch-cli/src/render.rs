//! Plain-text rendering of a generated book.

use std::io::{self, Write};

use wordsearch_book::{Book, BookPuzzle};
use wordsearch_core::PuzzleGrid;

/// Writes every puzzle of `book`, followed by its solution when `solutions` is set.
pub(crate) fn write_book<W>(out: &mut W, book: &Book, solutions: bool) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Book seed: {}", book.seed)?;
    for puzzle in &book.puzzles {
        writeln!(out)?;
        write_puzzle(out, puzzle, solutions)?;
    }
    Ok(())
}

fn write_puzzle<W>(out: &mut W, entry: &BookPuzzle, solutions: bool) -> io::Result<()>
where
    W: Write,
{
    let puzzle = &entry.puzzle;
    writeln!(out, "Puzzle {}: {}", entry.index + 1, entry.title)?;
    writeln!(out, "Seed: {}", puzzle.seed)?;
    writeln!(out)?;
    write_grid(out, &puzzle.grid)?;
    writeln!(out)?;

    let words = entry
        .words
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    writeln!(out, "Words: {}", words.join(", "))?;

    if solutions {
        writeln!(out)?;
        writeln!(out, "Solution:")?;
        for line in puzzle.solution_view().to_string().lines() {
            writeln!(out, "  {}", spaced(line))?;
        }
        for placement in &puzzle.placements {
            writeln!(out, "  {placement}")?;
        }
    }
    Ok(())
}

fn write_grid<W>(out: &mut W, grid: &PuzzleGrid) -> io::Result<()>
where
    W: Write,
{
    for line in grid.to_string().lines() {
        writeln!(out, "  {}", spaced(line))?;
    }
    Ok(())
}

fn spaced(line: &str) -> String {
    line.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
