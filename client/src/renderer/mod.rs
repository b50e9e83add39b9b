mod frame;
mod pacer;
mod window;

use std::sync::{Arc, Mutex};

use anyhow::Context;
use frame::RenderFrame;
use libgol::board::Board;
use window::{GolWindow, WindowConfig};
use winit::event_loop::EventLoop;

/// A finished generation, published by the simulation thread and consumed
/// read-only by the draw loop. Whatever snapshot is latest gets drawn.
pub struct Snapshot {
    pub board: Board,
    pub generation: usize,
    pub live_cells: usize,
}

const LIVE_COLOR: [u8; 4] = [240, 90, 160, 255];
const DEAD_COLOR: [u8; 4] = [0, 0, 0, 255];
const BACKGROUND_COLOR: [u8; 4] = [10, 10, 10, 255];

const HALF_CELL_MARGIN: u32 = 1;

/// Opens the window and drives the redraw loop on the calling thread until
/// the window is closed. Never writes back into the snapshot.
pub fn run(snapshot_arc: Arc<Mutex<Snapshot>>) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("Creating event loop")?;

    let mut window = GolWindow::new(WindowConfig {
        title: "gol".to_owned(),
        width: 480,
        height: 480,
        target_fps: 30,
        draw_callback: Box::new(move |frame| {
            let snapshot = snapshot_arc.lock().unwrap();
            draw(&snapshot, frame);
        }),
    });

    event_loop.run_app(&mut window)?;
    Ok(())
}

fn draw(snapshot: &Snapshot, mut frame: RenderFrame) {
    let board = &snapshot.board;

    let cell_width = frame.width / board.cols() as u32;
    let cell_height = frame.height / board.rows() as u32;

    frame.fill(BACKGROUND_COLOR);

    for pos in board.positions() {
        let screen_x = pos.col as u32 * cell_width;
        let screen_y = pos.row as u32 * cell_height;

        let color = if board.cell(pos).is_alive() {
            LIVE_COLOR
        } else {
            DEAD_COLOR
        };

        frame.draw_square(
            screen_x + HALF_CELL_MARGIN,
            screen_y + HALF_CELL_MARGIN,
            cell_width.saturating_sub(HALF_CELL_MARGIN * 2),
            cell_height.saturating_sub(HALF_CELL_MARGIN * 2),
            color,
        );
    }
}
