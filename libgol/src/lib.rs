//! Conway's Game of Life on a fixed-size toroidal board.
//!
//! The engine double-buffers: each transition reads only the previous
//! generation and writes a freshly allocated board, so no cell ever sees a
//! partially updated neighborhood. The live-cell count is threaded through
//! every transition as an explicit value instead of being recomputed by
//! scanning.

use board::{Board, CellState};
use rule::Rule;

pub mod board;
pub mod pos;
pub mod rule;

/// Computes the next generation and the updated live-cell count.
///
/// One full row-major pass; every cell's neighbor count is recomputed from
/// scratch against `board`. The next board starts all dead, so only births
/// and survivals are written. `live_cells` is the caller's running count for
/// `board`; the returned count replaces it outright.
pub fn step(board: &Board, rule: &Rule, live_cells: usize) -> (Board, usize) {
    let mut next = board.cleared();
    let mut live_cells = live_cells;

    for pos in board.positions() {
        let current = board.cell(pos);
        let neighbors = board.live_neighbors(pos);

        match (current, rule.next_state(current, neighbors)) {
            (CellState::Alive, CellState::Alive) => {
                next.set(pos, CellState::Alive);
            }
            (CellState::Alive, CellState::Dead) => {
                live_cells = live_cells.saturating_sub(1);
            }
            (CellState::Dead, CellState::Alive) => {
                next.set(pos, CellState::Alive);
                live_cells += 1;
            }
            (CellState::Dead, CellState::Dead) => {}
        }
    }

    (next, live_cells)
}

/// A running simulation: the current board, the rule, and the bookkeeping
/// the entry point reports when the run finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    pub board: Board,
    pub rule: Rule,
    live_cells: usize,
    generation: usize,
}

impl Simulation {
    /// Starts a simulation at generation 0.
    ///
    /// `live_cells` is supplied by the loader and trusted as-is, without
    /// reconciling it against the board.
    pub fn new(board: Board, rule: Rule, live_cells: usize) -> Self {
        Self {
            board,
            rule,
            live_cells,
            generation: 0,
        }
    }

    /// Live-cell count of the current generation.
    pub fn live_cells(&self) -> usize {
        self.live_cells
    }

    /// Number of transitions applied so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Applies one transition.
    pub fn tick(&mut self) {
        let (next, live_cells) = step(&self.board, &self.rule, self.live_cells);

        self.board = next;
        self.live_cells = live_cells;
        self.generation += 1;
    }

    /// Runs the configured number of rounds without observing them.
    pub fn run(self, iterations: usize) -> Self {
        self.run_with(iterations, |_, _, _| {})
    }

    /// Runs `iterations - 1` transitions; generation 0 is the initial load
    /// and is never produced by a transition, and `iterations <= 1` runs
    /// none at all. After each transition, `on_generation` is called
    /// synchronously with the finished board, its generation index, and the
    /// live-cell count, before the next transition starts. The loop never
    /// stops early, even when the board has gone stable or cyclic.
    pub fn run_with<F>(mut self, iterations: usize, mut on_generation: F) -> Self
    where
        F: FnMut(&Board, usize, usize),
    {
        for generation in 1..iterations {
            self.tick();

            debug_assert_eq!(self.generation, generation);
            on_generation(&self.board, generation, self.live_cells);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(rows: usize, cols: usize, live: &[[usize; 2]]) -> Board {
        let mut board = Board::new(rows, cols).unwrap();
        for pos in live {
            board.set(*pos, CellState::Alive);
        }
        board
    }

    fn sim(board: Board) -> Simulation {
        let live_cells = board.population();
        Simulation::new(board, Rule::conway(), live_cells)
    }

    #[test]
    fn empty_board_is_a_fixpoint() {
        let result = sim(Board::new(6, 6).unwrap()).run(10);

        assert_eq!(result.board.population(), 0);
        assert_eq!(result.live_cells(), 0);
        assert_eq!(result.generation(), 9);
    }

    #[test]
    fn lone_cell_dies_in_one_transition() {
        let mut simulation = sim(board_with(3, 3, &[[1, 1]]));

        simulation.tick();

        assert_eq!(simulation.board, Board::new(3, 3).unwrap());
        assert_eq!(simulation.live_cells(), 0);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = board_with(4, 4, &[[1, 1], [1, 2], [2, 1], [2, 2]]);
        let mut simulation = sim(block.clone());

        simulation.tick();

        assert_eq!(simulation.board, block);
        assert_eq!(simulation.live_cells(), 4);
    }

    #[test]
    fn birth_on_exactly_three_neighbors() {
        // Three cells in an L; the diagonal corner between them is born.
        let (next, live_cells) = step(
            &board_with(5, 5, &[[1, 1], [1, 2], [2, 1]]),
            &Rule::conway(),
            3,
        );

        assert_eq!(next.cell([2, 2]), CellState::Alive);
        assert_eq!(next.population(), live_cells);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = board_with(5, 5, &[[2, 1], [2, 2], [2, 3]]);
        let vertical = board_with(5, 5, &[[1, 2], [2, 2], [3, 2]]);

        let mut simulation = sim(horizontal.clone());

        simulation.tick();
        assert_eq!(simulation.board, vertical);
        assert_eq!(simulation.live_cells(), 3);

        simulation.tick();
        assert_eq!(simulation.board, horizontal);
        assert_eq!(simulation.live_cells(), 3);
    }

    #[test]
    fn counter_matches_full_scan_every_generation() {
        // R-pentomino, busy enough to exercise births and deaths for a while.
        let board = board_with(8, 8, &[[1, 2], [1, 3], [2, 1], [2, 2], [3, 2]]);

        sim(board).run_with(20, |board, _, live_cells| {
            assert_eq!(live_cells, board.population());
        });
    }

    #[test]
    fn callback_sees_each_generation_in_order() {
        let board = board_with(5, 5, &[[2, 1], [2, 2], [2, 3]]);
        let mut seen = Vec::new();

        sim(board).run_with(4, |_, generation, _| seen.push(generation));

        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn zero_or_one_iterations_run_no_transitions() {
        let board = board_with(5, 5, &[[2, 1], [2, 2], [2, 3]]);

        for iterations in [0, 1] {
            let result = sim(board.clone()).run(iterations);
            assert_eq!(result.board, board);
            assert_eq!(result.generation(), 0);
            assert_eq!(result.live_cells(), 3);
        }
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let board = board_with(8, 8, &[[1, 2], [1, 3], [2, 1], [2, 2], [3, 2]]);

        let mut first = Vec::new();
        let mut second = Vec::new();

        sim(board.clone()).run_with(15, |board, _, _| first.push(board.clone()));
        sim(board).run_with(15, |board, _, _| second.push(board.clone()));

        assert_eq!(first, second);
    }

    #[test]
    fn supplied_live_count_is_trusted() {
        // The loader owns reconciliation; the core takes what it is given.
        let board = board_with(3, 3, &[[1, 1]]);
        let simulation = Simulation::new(board, Rule::conway(), 7);

        assert_eq!(simulation.live_cells(), 7);
    }
}
