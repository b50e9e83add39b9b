use crate::board::CellState;

/// A birth/survival rule over live-neighbor counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    /// Standard Conway's Game of Life: B3/S23.
    pub fn conway() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }

    /// Decides a cell's next state from its current state and live-neighbor
    /// count. Under the Conway rule this is the classic five-way split:
    /// underpopulation (n < 2) and overpopulation (n > 3) kill, n in {2, 3}
    /// survives, and exactly 3 neighbors births a dead cell.
    pub fn next_state(&self, current: CellState, live_neighbors: usize) -> CellState {
        let alive = match current {
            CellState::Alive => self.survive.contains(&live_neighbors),
            CellState::Dead => self.birth.contains(&live_neighbors),
        };

        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellState::{Alive, Dead};

    #[test]
    fn default_is_conway() {
        assert_eq!(Rule::default(), Rule::conway());
    }

    #[test]
    fn conway_branches() {
        let rule = Rule::conway();

        // Live cells: die below 2 and above 3, survive on 2 or 3.
        assert_eq!(rule.next_state(Alive, 0), Dead);
        assert_eq!(rule.next_state(Alive, 1), Dead);
        assert_eq!(rule.next_state(Alive, 2), Alive);
        assert_eq!(rule.next_state(Alive, 3), Alive);
        for n in 4..=8 {
            assert_eq!(rule.next_state(Alive, n), Dead);
        }

        // Dead cells: born on exactly 3.
        for n in 0..=8 {
            let expected = if n == 3 { Alive } else { Dead };
            assert_eq!(rule.next_state(Dead, n), expected);
        }
    }
}
