//! Error types for MargaPlan.

use thiserror::Error;

/// Planning failure modes.
///
/// Every variant is recoverable by the caller: re-specify the poses,
/// raise the step budget, or switch to the other planner. The `search`
/// entry points collapse all of them to `None`; `plan` callers get the
/// full taxonomy. No retries happen inside the crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanningError {
    /// Start pose outside grid bounds or on a blocked cell.
    #[error("start pose is out of bounds or blocked")]
    InvalidStart,

    /// Goal pose outside grid bounds or on a blocked cell.
    #[error("goal pose is out of bounds or blocked")]
    InvalidGoal,

    /// No sequence of free cells connects start to goal.
    #[error("goal is not reachable from start")]
    Unreachable,

    /// The random walker reached a cell with zero navigable neighbors.
    #[error("walker reached a cell with no navigable neighbors")]
    DeadEnd,

    /// The random walker used up its step budget without reaching goal.
    #[error("step budget exhausted before reaching goal")]
    BudgetExhausted,
}

pub type Result<T> = std::result::Result<T, PlanningError>;
