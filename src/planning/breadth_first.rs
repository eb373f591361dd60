//! Breadth-first shortest-path planner.
//!
//! Standard BFS over the grid's unweighted 4-connectivity: a visited
//! array, a write-once predecessor map, and a [`FrontierQueue`] frontier.
//! The first time the goal is discovered, the predecessor chain yields a
//! path of globally minimum length; ties among equally short paths are
//! broken by the fixed neighbor expansion order, so results are fully
//! deterministic and reproducible.

use super::frontier::FrontierQueue;
use crate::error::{PlanningError, Result};
use crate::grid::{Cell, GridWorld};

/// Breadth-first search planner.
///
/// Stateless: every call owns its visited/predecessor arrays and
/// frontier, so one planner value can serve any number of searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalPlanner;

impl OptimalPlanner {
    /// Create a planner.
    pub fn new() -> Self {
        Self
    }

    /// Search a raw grid for a shortest path from `start` to `goal`.
    ///
    /// Normalizes `rows` (jagged rows are padded with blocked cells)
    /// before searching. Returns `None` if either pose is invalid or the
    /// goal is unreachable; use [`plan`](Self::plan) for the reason.
    pub fn search(&self, rows: Vec<Vec<u8>>, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
        let world = GridWorld::rectangularize(rows);
        self.plan(&world, start, goal).ok()
    }

    /// Find a shortest path from `start` to `goal` in `world`.
    pub fn plan(&self, world: &GridWorld, start: Cell, goal: Cell) -> Result<Vec<Cell>> {
        if !world.is_navigable(start) {
            return Err(PlanningError::InvalidStart);
        }
        if !world.is_navigable(goal) {
            return Err(PlanningError::InvalidGoal);
        }
        if start == goal {
            return Ok(vec![start]);
        }

        let mut visited = vec![false; world.cell_count()];
        // First writer wins: BFS layer order makes that writer a cell on
        // some shortest path from start.
        let mut predecessor: Vec<Option<Cell>> = vec![None; world.cell_count()];
        visited[world.index(start)] = true;

        let mut frontier = FrontierQueue::new();
        frontier.enqueue(start);

        while !frontier.is_empty() {
            let cell = frontier.dequeue();
            for neighbor in world.neighbors(cell) {
                let idx = world.index(neighbor);
                if visited[idx] {
                    continue;
                }
                visited[idx] = true;
                predecessor[idx] = Some(cell);
                frontier.enqueue(neighbor);

                if neighbor == goal {
                    return Ok(reconstruct_path(world, &predecessor, start, goal));
                }
            }
        }

        Err(PlanningError::Unreachable)
    }
}

/// Walk predecessor links backward from `goal` to `start`, then flip the
/// collected cells so the path runs start to goal inclusive.
///
/// A missing link means BFS terminated without connecting the goal to the
/// start, which the search loop rules out; hitting it is a programmer
/// error, not a planning failure.
fn reconstruct_path(
    world: &GridWorld,
    predecessor: &[Option<Cell>],
    start: Cell,
    goal: Cell,
) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cell = goal;
    while cell != start {
        cell = predecessor[world.index(cell)]
            .expect("predecessor chain broken between goal and start");
        path.push(cell);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_poses() {
        let world = GridWorld::rectangularize(vec![vec![0, 1], vec![0, 0]]);
        let planner = OptimalPlanner::new();
        assert_eq!(
            planner.plan(&world, (0, 1), (1, 1)),
            Err(PlanningError::InvalidStart)
        );
        assert_eq!(
            planner.plan(&world, (0, 0), (2, 0)),
            Err(PlanningError::InvalidGoal)
        );
    }

    #[test]
    fn test_start_equals_goal_short_circuits() {
        let world = GridWorld::new(3, 3);
        let planner = OptimalPlanner::new();
        assert_eq!(planner.plan(&world, (1, 2), (1, 2)), Ok(vec![(1, 2)]));
    }

    #[test]
    fn test_straight_corridor() {
        let world = GridWorld::rectangularize(vec![vec![0, 0, 0, 0]]);
        let planner = OptimalPlanner::new();
        assert_eq!(
            planner.plan(&world, (0, 0), (0, 3)),
            Ok(vec![(0, 0), (0, 1), (0, 2), (0, 3)])
        );
    }

    #[test]
    fn test_tie_break_follows_neighbor_order() {
        // Many shortest paths exist on an open 3x3 grid; the expansion
        // order (down, right, up, left) pins which one comes back.
        let world = GridWorld::new(3, 3);
        let planner = OptimalPlanner::new();
        assert_eq!(
            planner.plan(&world, (0, 0), (2, 2)),
            Ok(vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)])
        );
    }

    #[test]
    fn test_detour_around_obstacle() {
        let world = GridWorld::rectangularize(vec![
            vec![0, 1, 0],
            vec![0, 1, 0],
            vec![0, 0, 0],
        ]);
        let planner = OptimalPlanner::new();
        let path = planner.plan(&world, (0, 0), (0, 2)).unwrap();
        // Around the wall: 2 down, 2 right, 2 up.
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(0, 2)));
    }

    #[test]
    fn test_unreachable_goal() {
        let world = GridWorld::rectangularize(vec![vec![0, 1, 0]]);
        let planner = OptimalPlanner::new();
        assert_eq!(
            planner.plan(&world, (0, 0), (0, 2)),
            Err(PlanningError::Unreachable)
        );
    }

    #[test]
    fn test_search_is_deterministic() {
        let rows = vec![
            vec![0, 0, 0, 0],
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 0],
        ];
        let planner = OptimalPlanner::new();
        let a = planner.search(rows.clone(), (0, 0), (2, 3));
        let b = planner.search(rows, (0, 0), (2, 3));
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_jagged_input_is_padded() {
        // The short first row gains a blocked cell at (0, 2), forcing
        // the path through the long second row.
        let planner = OptimalPlanner::new();
        let path = planner
            .search(vec![vec![0, 0], vec![0, 0, 0]], (0, 0), (1, 2))
            .unwrap();
        assert_eq!(path, vec![(0, 0), (1, 0), (1, 1), (1, 2)]);
    }
}
