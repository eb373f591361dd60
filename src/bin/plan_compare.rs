//! Compare RandomPlanner and OptimalPlanner on synthetic worlds.
//!
//! Runs the random walker a number of times (it is stochastic) and the
//! breadth-first planner once per world, reporting success rate, mean
//! path length, and runtime.
//!
//! ```bash
//! # Defaults: 31x31 serpentine maze + open grid, 10 random runs
//! RUST_LOG=info cargo run --release --bin plan_compare
//!
//! cargo run --release --bin plan_compare -- --size 63 --budget 50000
//! ```

use std::time::Instant;

use clap::Parser;
use log::info;

use marga_plan::{Cell, OptimalPlanner, RandomPlanner};

/// Planner comparison driver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World side length in cells
    #[arg(long, default_value_t = 31)]
    size: usize,

    /// Random walker step budget
    #[arg(long, default_value_t = 10_000)]
    budget: usize,

    /// Number of random walker attempts per world
    #[arg(long, default_value_t = 10)]
    runs: usize,

    /// Random seed (0 = seed from the clock)
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// Serpentine maze: every other row is a wall with a single gap at an
/// alternating end, forcing one long winding corridor.
fn serpentine(size: usize) -> Vec<Vec<u8>> {
    let mut rows = vec![vec![0u8; size]; size];
    for r in (1..size).step_by(2) {
        for cell in rows[r].iter_mut() {
            *cell = 1;
        }
        let gap = if (r / 2) % 2 == 0 { size - 1 } else { 0 };
        rows[r][gap] = 0;
    }
    rows
}

fn compare(name: &str, rows: Vec<Vec<u8>>, start: Cell, goal: Cell, args: &Args) {
    info!("=== {} ({}x{}) ===", name, rows.len(), rows[0].len());

    let t = Instant::now();
    let optimal = OptimalPlanner::new().search(rows.clone(), start, goal);
    let optimal_time = t.elapsed();
    match &optimal {
        Some(path) => info!(
            "optimal: {} cells in {:.2?}",
            path.len(),
            optimal_time
        ),
        None => info!("optimal: no path ({:.2?})", optimal_time),
    }

    let mut lengths = Vec::new();
    let t = Instant::now();
    for run in 0..args.runs {
        let mut walker = if args.seed == 0 {
            RandomPlanner::new(args.budget)
        } else {
            RandomPlanner::with_seed(args.budget, args.seed + run as u64)
        };
        if let Some(path) = walker.search(rows.clone(), start, goal) {
            lengths.push(path.len());
        }
    }
    let random_time = t.elapsed();

    info!(
        "random:  {}/{} runs found a path in {:.2?} total",
        lengths.len(),
        args.runs,
        random_time
    );
    if !lengths.is_empty() {
        let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
        info!("random:  mean path length {:.1} cells", mean);
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let size = args.size.max(3);
    let start = (0, 0);
    let goal = (size - 1, size - 1);

    compare("open grid", vec![vec![0u8; size]; size], start, goal, &args);

    // Goal sits on the last open corridor row.
    let maze_goal = if (size - 1) % 2 == 0 {
        (size - 1, size - 1)
    } else {
        (size - 2, size - 1)
    };
    compare("serpentine maze", serpentine(size), start, maze_goal, &args);
}
