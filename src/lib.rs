//! MargaPlan - Discrete motion planners for a point robot
//!
//! Computes motion paths for a single point-robot on a static, fully
//! observed 2D occupancy grid. Two strategies are provided:
//!
//! - **RandomPlanner**: an unguided randomized walker with bounded memory
//!   of recent visits and a hard step budget
//! - **OptimalPlanner**: breadth-first search producing a provably
//!   shortest path via predecessor backtracking
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   planning/                         │  ← Planners
//! │      (random_walk, breadth_first, frontier)         │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     grid                            │  ← Foundation
//! │            (GridWorld, Cell, CellState)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use marga_plan::{OptimalPlanner, RandomPlanner};
//!
//! let rows = vec![
//!     vec![0, 0, 1],
//!     vec![0, 0, 0],
//!     vec![1, 0, 0],
//! ];
//!
//! let planner = OptimalPlanner::new();
//! let path = planner.search(rows.clone(), (0, 0), (2, 2));
//! assert!(path.is_some());
//!
//! let mut walker = RandomPlanner::with_seed(200, 42);
//! let _maybe = walker.search(rows, (0, 0), (2, 2));
//! ```
//!
//! Both planners accept a raw row-major grid of `u8` (0 = free, nonzero =
//! blocked). Jagged input is right-padded with blocked cells, so callers
//! never have to pre-normalize. `search` returns `Option<Vec<Cell>>`;
//! callers that want the failure reason use `plan` on a [`GridWorld`].

// Layer 1: Grid foundation (no internal deps)
pub mod grid;

// Error taxonomy shared by both planners
pub mod error;

// Layer 2: Planners (depend on grid, error)
pub mod planning;

pub use error::{PlanningError, Result};
pub use grid::{Cell, CellState, GridWorld};
pub use planning::{FrontierQueue, OptimalPlanner, RandomPlanner};
