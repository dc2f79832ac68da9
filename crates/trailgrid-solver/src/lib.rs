//! Longest-path solver for daily path puzzles.
//!
//! Par for a puzzle is the length of the longest simple path from its start
//! cell under the movement rules in [`trailgrid_core::rules`]. This crate finds
//! it by exhaustive depth-first search.
//!
//! # Search
//!
//! The search keeps one visited matrix and one path buffer per solve and walks
//! an explicit stack of frames instead of recursing, so stack depth does not
//! grow with the path length. At each cell the legal moves are ordered by
//! [`BranchOrder`]; the default tries the most constrained move first, which
//! reaches full-coverage paths quickly. Once a path visits every cell no longer
//! path can exist and the search stops.
//!
//! # Tie-break
//!
//! When several paths share the maximal length the first one entered in
//! exploration order is reported. Exploration order is the branch order, with
//! equal onward-move counts falling back to neighbour order
//! ([`trailgrid_core::NEIGHBOR_OFFSETS`]).
//!
//! # Examples
//!
//! ```
//! use trailgrid_core::Grid;
//! use trailgrid_solver::solve_optimal_path;
//!
//! let grid: Grid = "
//!     55555
//!     52555
//!     55355
//!     55555
//!     55555
//! "
//! .parse()?;
//! let result = solve_optimal_path(&grid, grid.start());
//! assert_eq!(result.optimal_length, 2);
//! # Ok::<(), trailgrid_core::CoreError>(())
//! ```

mod path_solver;
mod search;

pub use self::path_solver::{
    BranchOrder, PathSolver, SolverResult, SolverStats, solve_optimal_path,
};
pub use trailgrid_core::rules::is_valid_move;
