//! Unguided random-walk planner with decaying revisit avoidance.
//!
//! The walker moves to a uniformly random navigable neighbor each step,
//! refusing cells visited within the last `floor(sqrt(budget))` steps
//! unless no other neighbor qualifies. The avoidance window keeps the
//! walk from oscillating in open space, while the fallback guarantees it
//! is never permanently stuck because of its own memory.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::{PlanningError, Result};
use crate::grid::{Cell, GridWorld};

/// Randomized walker with a hard step budget.
///
/// The walk is the only source of non-determinism in the crate. The
/// planner owns a seeded [`StdRng`]; tests and replay tooling inject
/// their own generator through [`plan_with_rng`](Self::plan_with_rng).
#[derive(Debug)]
pub struct RandomPlanner {
    /// Step budget: the walk takes strictly fewer than this many steps.
    max_steps: usize,
    rng: StdRng,
}

impl RandomPlanner {
    /// Create a planner with the given step budget, seeded from the
    /// system clock.
    pub fn new(max_steps: usize) -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(12345);
        Self::with_seed(max_steps, seed)
    }

    /// Create a planner with a fixed seed for deterministic replay.
    pub fn with_seed(max_steps: usize, seed: u64) -> Self {
        Self {
            max_steps,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Step budget this planner was built with.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Search a raw grid for any path from `start` to `goal`.
    ///
    /// Normalizes `rows` (jagged rows are padded with blocked cells) and
    /// walks until the goal is reached, the walker dead-ends, or the
    /// step budget runs out. Returns `None` on any failure; use
    /// [`plan`](Self::plan) for the failure reason.
    pub fn search(&mut self, rows: Vec<Vec<u8>>, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
        let world = GridWorld::rectangularize(rows);
        self.plan(&world, start, goal).ok()
    }

    /// Walk `world` from `start` toward `goal` using the planner's own
    /// generator.
    pub fn plan(&mut self, world: &GridWorld, start: Cell, goal: Cell) -> Result<Vec<Cell>> {
        walk(self.max_steps, world, start, goal, &mut self.rng)
    }

    /// Walk with an injected random source.
    pub fn plan_with_rng<R: Rng + ?Sized>(
        &self,
        world: &GridWorld,
        start: Cell,
        goal: Cell,
        rng: &mut R,
    ) -> Result<Vec<Cell>> {
        walk(self.max_steps, world, start, goal, rng)
    }
}

fn walk<R: Rng + ?Sized>(
    max_steps: usize,
    world: &GridWorld,
    start: Cell,
    goal: Cell,
    rng: &mut R,
) -> Result<Vec<Cell>> {
    if !world.is_navigable(start) {
        return Err(PlanningError::InvalidStart);
    }
    if !world.is_navigable(goal) {
        return Err(PlanningError::InvalidGoal);
    }

    // A cell counts as recently visited while `t - last_visit` is at most
    // `forgetfulness`. Seeding the ledger with -forgetfulness makes every
    // cell already forgotten at t = 1, except the start stamped at 0.
    let forgetfulness = (max_steps as f64).sqrt() as i64;
    let mut visits = vec![-forgetfulness; world.cell_count()];
    visits[world.index(start)] = 0;

    let mut pose = start;
    let mut path = vec![start];

    for t in 1..max_steps as i64 {
        if pose == goal {
            log::debug!("random walk reached goal in {} cells", path.len());
            return Ok(path);
        }

        let neighbors = world.neighbors(pose);
        if neighbors.is_empty() {
            return Err(PlanningError::DeadEnd);
        }

        let eligible: Vec<Cell> = neighbors
            .iter()
            .copied()
            .filter(|&cell| t - visits[world.index(cell)] > forgetfulness)
            .collect();
        // All neighbors seen too recently: ignore the memory rather than
        // freeze in place.
        let candidates = if eligible.is_empty() { neighbors } else { eligible };

        pose = candidates[rng.random_range(0..candidates.len())];
        visits[world.index(pose)] = t;
        path.push(pose);
    }

    Err(PlanningError::BudgetExhausted)
}
