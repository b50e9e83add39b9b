use libgol::board::Board;

/// Clears the terminal before the next round is drawn.
pub fn clear() {
    // ANSI: erase the screen, home the cursor.
    eprint!("\x1b[2J\x1b[H");
}

/// Prints one round to stderr: round header, the board as ` @`/` .` cells,
/// and the live-cell count.
pub fn print_board(board: &Board, round: usize, live_cells: usize) {
    eprintln!("Round: {round}");

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.cell([row, col]).is_alive() {
                eprint!(" @");
            } else {
                eprint!(" .");
            }
        }
        eprintln!();
    }

    eprintln!("Live cells: {live_cells}\n");
}
