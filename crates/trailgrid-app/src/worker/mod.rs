//! Background solving off the interactive thread.
//!
//! Requests queue up for one lazily started, named solver thread. Each request
//! gets its own answer channel, wrapped in a handle the caller polls between
//! prompts or blocks on when the answer is needed right away.

use trailgrid_core::{Grid, Position};
use trailgrid_solver::{BranchOrder, PathSolver, SolverResult};

use self::native::{WorkHandle, enqueue};

mod native;

/// A request that can be offloaded to the background worker.
#[derive(Debug, Clone)]
enum WorkRequest {
    /// Find the longest path from `start`.
    Solve {
        grid: Grid,
        start: Position,
        order: BranchOrder,
    },
}

/// A response produced by background work.
#[derive(Debug, Clone)]
enum WorkResponse {
    /// The solver finished.
    Solved(SolverResult),
}

/// Errors that can occur while scheduling or receiving background work.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WorkError {
    /// The background channel was disconnected unexpectedly.
    #[display("worker disconnected")]
    WorkerDisconnected,
    /// The solver thread could not be started.
    #[display("worker thread could not be started")]
    WorkerUnavailable,
}

impl WorkRequest {
    /// Handle a request and produce the corresponding response.
    #[must_use]
    fn handle(self) -> WorkResponse {
        match self {
            WorkRequest::Solve { grid, start, order } => {
                let result = PathSolver::with_branch_order(order).solve(&grid, start);
                WorkResponse::Solved(result)
            }
        }
    }
}

/// A solve running on the worker thread.
#[derive(Debug)]
pub struct PendingSolve {
    handle: WorkHandle,
}

impl PendingSolve {
    /// Returns the result if the solve has finished.
    ///
    /// # Errors
    ///
    /// Returns [`WorkError::WorkerDisconnected`] if the worker stopped without
    /// answering.
    pub fn poll(&mut self) -> Result<Option<SolverResult>, WorkError> {
        Ok(self.handle.poll()?.map(into_solution))
    }

    /// Blocks until the solve finishes.
    ///
    /// # Errors
    ///
    /// Returns [`WorkError::WorkerDisconnected`] if the worker stopped without
    /// answering.
    pub fn wait(self) -> Result<SolverResult, WorkError> {
        self.handle.wait().map(into_solution)
    }
}

fn into_solution(response: WorkResponse) -> SolverResult {
    match response {
        WorkResponse::Solved(result) => result,
    }
}

/// Enqueues a solve of `grid` from `start` on the background worker.
///
/// # Errors
///
/// Returns [`WorkError::WorkerUnavailable`] if the solver thread cannot be
/// started, or [`WorkError::WorkerDisconnected`] if it has gone away.
pub fn request_solve(
    grid: Grid,
    start: Position,
    order: BranchOrder,
) -> Result<PendingSolve, WorkError> {
    let handle = enqueue(WorkRequest::Solve { grid, start, order })?;
    Ok(PendingSolve { handle })
}
