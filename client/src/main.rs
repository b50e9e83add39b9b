use std::{
    env,
    process::exit,
    sync::{Arc, Mutex},
    thread,
    time::{Duration, Instant},
};

use anyhow::bail;
use libgol::{rule::Rule, Simulation};

mod ascii;
mod loader;
mod renderer;

/// Fixed delay between animated generations. Change this to make the
/// animation run faster or slower.
const GENERATION_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    /// No animation, just the timed run.
    Headless,
    /// Board printed to the terminal each round.
    Ascii,
    /// Windowed animation on a render thread.
    Graphical,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);

    let (Some(seed_path), Some(mode_arg)) = (args.next(), args.next()) else {
        eprintln!("usage: client <seedfile> <output_mode>[0|1|2]");
        eprintln!("(0: no visualization, 1: ASCII, 2: graphical)");
        exit(1);
    };

    let mode = match mode_arg.as_str() {
        "0" => OutputMode::Headless,
        "1" => OutputMode::Ascii,
        "2" => OutputMode::Graphical,
        other => bail!("Invalid output mode {other:?} (expected 0, 1 or 2)"),
    };

    let seed = loader::load_seed(&seed_path)?;
    log::info!(
        "loaded {}x{} board with {} live cells, running {} iterations ({mode:?})",
        seed.board.rows(),
        seed.board.cols(),
        seed.live_cells,
        seed.iterations,
    );

    let iterations = seed.iterations;
    let simulation = Simulation::new(seed.board, Rule::conway(), seed.live_cells);

    match mode {
        OutputMode::Headless => {
            let started = Instant::now();
            let result = simulation.run(iterations);

            report(started.elapsed(), iterations, result.live_cells());
        }

        OutputMode::Ascii => {
            ascii::clear();
            ascii::print_board(&simulation.board, 0, simulation.live_cells());

            let started = Instant::now();
            let result = simulation.run_with(iterations, |board, round, live_cells| {
                ascii::clear();
                ascii::print_board(board, round, live_cells);
                spin_sleep::sleep(GENERATION_DELAY);
            });
            let elapsed = started.elapsed();

            ascii::clear();
            ascii::print_board(&result.board, iterations, result.live_cells());

            report(elapsed, iterations, result.live_cells());
        }

        OutputMode::Graphical => {
            let snapshot_arc = Arc::new(Mutex::new(renderer::Snapshot {
                board: simulation.board.clone(),
                generation: 0,
                live_cells: simulation.live_cells(),
            }));

            // The simulation owns its state on a worker thread and publishes
            // one snapshot per finished generation; the window below only
            // ever reads them. Nothing flows back from the renderer.
            let worker_arc = snapshot_arc.clone();
            thread::spawn(move || {
                simulation.run_with(iterations, |board, generation, live_cells| {
                    *worker_arc.lock().unwrap() = renderer::Snapshot {
                        board: board.clone(),
                        generation,
                        live_cells,
                    };

                    spin_sleep::sleep(GENERATION_DELAY);
                });
            });

            // The event loop wants the main thread, and runs until the
            // window is closed. No totals are printed in this mode.
            renderer::run(snapshot_arc)?;
        }
    }

    Ok(())
}

/// The two report lines the run is expected to print verbatim.
fn report(elapsed: Duration, iterations: usize, live_cells: usize) {
    println!("Total time: {:.3} seconds", elapsed.as_secs_f64());
    println!("Number of live cells after {iterations} rounds: {live_cells}\n");
}
