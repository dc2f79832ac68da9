//! Movement rules shared by live move validation and the solver.
//!
//! A move extends a path from its last cell to a candidate cell. It is legal
//! when the candidate
//!
//! - lies inside the grid,
//! - is not already on the path,
//! - is a king move away from the last cell, and
//! - holds a value within one of the last cell's value.

use crate::{Grid, Position};

/// Returns `true` if two cell values may follow each other on a path.
#[must_use]
#[inline]
pub const fn values_compatible(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= 1
}

/// Checks the local part of the rules: bounds, adjacency and value step.
///
/// Whether `to` is already visited is left to the caller.
#[must_use]
#[inline]
pub fn is_legal_step(grid: &Grid, from: Position, to: Position) -> bool {
    let (Some(from_value), Some(to_value)) = (grid.get(from), grid.get(to)) else {
        return false;
    };
    from.is_adjacent(to) && values_compatible(from_value, to_value)
}

/// Returns `true` if `candidate` may be appended to `path`.
///
/// An empty path accepts nothing.
///
/// # Examples
///
/// ```
/// use trailgrid_core::{Grid, GridSize, Position, rules};
///
/// let grid: Grid = "
///     11111
///     11111
///     11311
///     11211
///     11111
/// "
/// .parse()?;
/// let path = [grid.start()];
/// assert!(rules::is_valid_move(&grid, &path, Position::new(3, 2)));
/// assert!(!rules::is_valid_move(&grid, &path, Position::new(1, 2)));
/// assert!(!rules::is_valid_move(&grid, &path, Position::new(4, 2)));
/// # Ok::<(), trailgrid_core::CoreError>(())
/// ```
#[must_use]
pub fn is_valid_move(grid: &Grid, path: &[Position], candidate: Position) -> bool {
    let Some(&last) = path.last() else {
        return false;
    };
    is_legal_step(grid, last, candidate) && !path.contains(&candidate)
}

/// Lists the legal next cells for `path` in neighbour order.
#[must_use]
pub fn valid_moves(grid: &Grid, path: &[Position]) -> Vec<Position> {
    let Some(&last) = path.last() else {
        return Vec::new();
    };
    last.neighbors(grid.size())
        .filter(|&candidate| is_valid_move(grid, path, candidate))
        .collect()
}
