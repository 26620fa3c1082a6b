//! Board geometry and storage.

use super::types::{Placement, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of a square SOS board, between [`BoardSize::MIN`] and [`BoardSize::MAX`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

/// Rejected board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Board size must be between 3 and 99, got {requested}")]
pub struct BoardSizeError {
    /// The size that was asked for.
    pub requested: usize,
}

impl BoardSize {
    /// Smallest playable board.
    pub const MIN: usize = 3;

    /// Largest board the front ends can lay out.
    pub const MAX: usize = 99;

    /// Size used when none is given.
    pub const DEFAULT: BoardSize = BoardSize(Self::MIN);

    /// Creates a board size, rejecting anything outside `MIN..=MAX`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if !(Self::MIN..=Self::MAX).contains(&size) {
            return Err(BoardSizeError { requested: size });
        }
        Ok(Self(size))
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells on the board.
    pub fn cell_count(self) -> usize {
        // Capped at MAX squared for any constructed size.
        self.0.checked_mul(self.0).unwrap_or(usize::MAX)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// A cell coordinate, zero-based.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display("({}, {})", row, col)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An N×N SOS board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a board with every cell empty.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cell_count()],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Checks whether the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size.get() && pos.col < self.size.get()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.row * self.size.get() + pos.col)
    }

    /// Gets the square at the given position, or `None` when off the board.
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.index(pos).map(|i| self.squares[i])
    }

    /// Writes a square. Off-board positions are ignored and reported as `false`.
    pub(crate) fn set(&mut self, pos: Position, square: Square) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.squares[i] = square;
                true
            }
            None => false,
        }
    }

    /// Writes a placement into a cell.
    pub(crate) fn place(&mut self, pos: Position, placement: Placement) -> bool {
        self.set(pos, Square::Occupied(placement))
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size.get())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns every empty position in row-major order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        let n = self.size.get();
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| Position::new(i / n, i % n))
            .collect()
    }

    /// Formats the board as a human-readable grid with row and column numbers.
    ///
    /// Empty cells show as `.`.
    pub fn display(&self) -> String {
        let n = self.size.get();
        let width = (n - 1).to_string().len();
        let mut result = format!("{:width$} ", "");
        for col in 0..n {
            result.push_str(&format!(" {:>width$}", col));
        }
        for (row, squares) in self.rows().enumerate() {
            result.push('\n');
            result.push_str(&format!("{:>width$} ", row));
            for square in squares {
                let symbol = square.letter().map_or('.', |l| l.as_char());
                result.push_str(&format!(" {:>width$}", symbol));
            }
        }
        result
    }
}
