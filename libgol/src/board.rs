use itertools::Itertools;
use thiserror::Error;

use super::pos::Position;

/// Offsets of the 8-cell Moore neighborhood, (0, 0) excluded.
const NEIGHBOR_OFFSETS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

/// A fixed-size rectangular board with toroidal wraparound, stored row-major.
///
/// The dimensions never change after construction; each generation is a fresh
/// `Board`, never an in-place edit of the one being read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates an all-dead board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::default(); rows * cols],
        })
    }

    /// An all-dead board with the same dimensions. The transition engine
    /// writes each next generation into one of these.
    pub fn cleared(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![CellState::default(); self.rows * self.cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Reads the cell at `pos`.
    ///
    /// Panics if `pos` is outside the board. Callers are expected to only
    /// pass coordinates produced by the wraparound arithmetic, which cannot
    /// leave the board.
    pub fn cell<P>(&self, pos: P) -> CellState
    where
        P: Into<Position>,
    {
        self.cells[self.index_of(pos.into())]
    }

    /// Writes the cell at `pos`. Panics if `pos` is outside the board.
    pub fn set<P>(&mut self, pos: P, state: CellState)
    where
        P: Into<Position>,
    {
        let index = self.index_of(pos.into());
        self.cells[index] = state;
    }

    /// All coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..self.rows)
            .cartesian_product(0..self.cols)
            .map(Position::from)
    }

    /// Counts live cells in the 8-cell neighborhood of `pos`, wrapping both
    /// axes. On boards a single cell wide or tall, distinct offsets can wrap
    /// onto the same cell (including `pos` itself) and each one still counts;
    /// a live 1x1 board reports 8.
    pub fn live_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        NEIGHBOR_OFFSETS
            .iter()
            .filter(|[dr, dc]| {
                let row = (pos.row as isize + dr).rem_euclid(self.rows as isize) as usize;
                let col = (pos.col as isize + dc).rem_euclid(self.cols as isize) as usize;

                self.cell(Position { row, col }).is_alive()
            })
            .count()
    }

    /// Full-scan live count. The simulation maintains its count
    /// incrementally; this exists for loaders and reconciliation tests.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn index_of(&self, pos: Position) -> usize {
        // Both axes checked separately: an oversized col would otherwise
        // alias into the next row.
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "position ({}, {}) outside {}x{} board",
            pos.row,
            pos.col,
            self.rows,
            self.cols,
        );

        pos.row * self.cols + pos.col
    }
}
