//! Planning benchmarks
//!
//! Benchmarks for the grid planners and the frontier queue:
//! - Breadth-first search on open grids and serpentine mazes
//! - Frontier queue churn across grow/shrink cycles
//! - Random walker with a fixed seed
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use marga_plan::{FrontierQueue, GridWorld, OptimalPlanner, RandomPlanner};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Serpentine maze: every other row is a wall with one gap at an
/// alternating end. Worst-ish case for BFS: the frontier crawls down one
/// long corridor.
fn serpentine_maze(size: usize) -> Vec<Vec<u8>> {
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

fn open_world(size: usize) -> GridWorld {
    GridWorld::new(size, size)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_breadth_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("breadth_first");
    let planner = OptimalPlanner::new();

    for size in [32, 64, 128] {
        let world = open_world(size);
        group.bench_function(format!("open_{}x{}", size, size), |b| {
            b.iter(|| {
                planner
                    .plan(black_box(&world), (0, 0), (size - 1, size - 1))
                    .unwrap()
            })
        });
    }

    for size in [31, 63, 127] {
        let world = GridWorld::rectangularize(serpentine_maze(size));
        group.bench_function(format!("maze_{}x{}", size, size), |b| {
            b.iter(|| {
                planner
                    .plan(black_box(&world), (0, 0), (size - 1, size - 1))
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_random_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_walk");
    // Fixed seed so every sample walks the same trajectory.
    let world = open_world(32);
    let planner = RandomPlanner::with_seed(50_000, 42);

    group.bench_function("open_32x32_seeded", |b| {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            planner.plan_with_rng(black_box(&world), (0, 0), (31, 31), &mut rng)
        })
    });

    group.finish();
}

fn bench_frontier_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_queue");

    group.bench_function("churn_10k", |b| {
        b.iter(|| {
            let mut q = FrontierQueue::new();
            // Ramp up through several doublings, then drain through the
            // matching halvings.
            for i in 0..10_000usize {
                q.enqueue(black_box((i, i)));
            }
            while !q.is_empty() {
                black_box(q.dequeue());
            }
        })
    });

    group.bench_function("steady_window", |b| {
        b.iter(|| {
            let mut q = FrontierQueue::new();
            for i in 0..64usize {
                q.enqueue((i, i));
            }
            // Fixed-occupancy sliding window: no resizes after warmup.
            for i in 0..10_000usize {
                q.enqueue(black_box((i, i)));
                black_box(q.dequeue());
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_breadth_first,
    bench_random_walk,
    bench_frontier_queue
);
criterion_main!(benches);
