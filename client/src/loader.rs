use std::{fs, path::Path};

use anyhow::{ensure, Context};
use libgol::board::{Board, CellState};

/// A parsed seed file: the initial board plus the run parameters that travel
/// with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub board: Board,
    pub iterations: usize,
    /// The live-cell count as declared by the file header. Handed to the
    /// simulation as-is; duplicate coordinate pairs collapse on the board
    /// but do not adjust this number.
    pub live_cells: usize,
}

/// Reads and parses a seed file.
///
/// Format: whitespace-separated integers `rows cols iterations live_count`,
/// followed by `live_count` pairs of `row col`.
pub fn load_seed<P>(path: P) -> anyhow::Result<Seed>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Reading seed file {}", path.display()))?;

    parse_seed(&contents).with_context(|| format!("Parsing seed file {}", path.display()))
}

pub fn parse_seed(contents: &str) -> anyhow::Result<Seed> {
    let mut fields = contents.split_whitespace();

    let mut next_field = |name: &'static str| -> anyhow::Result<usize> {
        fields
            .next()
            .with_context(|| format!("Missing {name}"))?
            .parse::<usize>()
            .with_context(|| format!("Invalid {name}"))
    };

    let rows = next_field("row count")?;
    let cols = next_field("column count")?;
    let iterations = next_field("iteration count")?;
    let live_cells = next_field("live cell count")?;

    let mut board = Board::new(rows, cols)?;

    for i in 0..live_cells {
        let row = next_field("live cell row")
            .with_context(|| format!("Reading live cell #{}", i + 1))?;
        let col = next_field("live cell column")
            .with_context(|| format!("Reading live cell #{}", i + 1))?;

        ensure!(
            row < rows && col < cols,
            "Live cell #{} at ({row}, {col}) is outside the {rows}x{cols} board",
            i + 1,
        );

        board.set([row, col], CellState::Alive);
    }

    Ok(Seed {
        board,
        iterations,
        live_cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_file() {
        let seed = parse_seed("4 5 20 3\n0 0\n1 2\n3 4\n").unwrap();

        assert_eq!(seed.board.rows(), 4);
        assert_eq!(seed.board.cols(), 5);
        assert_eq!(seed.iterations, 20);
        assert_eq!(seed.live_cells, 3);
        assert_eq!(seed.board.population(), 3);
        assert!(seed.board.cell([1, 2]).is_alive());
    }

    #[test]
    fn duplicate_pairs_collapse_but_header_count_stands() {
        let seed = parse_seed("3 3 5 2  1 1  1 1").unwrap();

        assert_eq!(seed.board.population(), 1);
        assert_eq!(seed.live_cells, 2);
    }

    #[test]
    fn truncated_file_is_rejected() {
        assert!(parse_seed("3 3 5").is_err());
        assert!(parse_seed("3 3 5 2  1 1").is_err());
    }

    #[test]
    fn garbage_field_is_rejected() {
        assert!(parse_seed("3 x 5 0").is_err());
    }

    #[test]
    fn out_of_range_cell_is_rejected() {
        let err = parse_seed("3 3 5 1  3 0").unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(parse_seed("0 3 5 0").is_err());
    }
}
