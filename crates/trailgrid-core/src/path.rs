//! Simple paths through a grid.

use std::ops::Deref;

use serde::Serialize;

use crate::{CoreError, Grid, Position, rules};

/// A non-empty, self-avoiding path that starts at the grid's start cell.
///
/// Every step is a legal move under [`rules::is_valid_move`]. The start cell
/// can never be removed.
///
/// # Examples
///
/// ```
/// use trailgrid_core::{Grid, GridSize, Path, Position};
///
/// let grid = Grid::filled(GridSize::Small, 3);
/// let mut path = Path::new(grid.start());
/// path.try_push(&grid, Position::new(1, 1))?;
/// path.try_push(&grid, Position::new(0, 0))?;
/// assert_eq!(path.len(), 3);
///
/// // revisiting is rejected
/// assert!(path.try_push(&grid, Position::new(1, 1)).is_err());
///
/// assert_eq!(path.pop(), Some(Position::new(0, 0)));
/// assert_eq!(path.pop(), Some(Position::new(1, 1)));
/// assert_eq!(path.pop(), None);
/// # Ok::<(), trailgrid_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    /// Creates a path holding only the start cell.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self { cells: vec![start] }
    }

    /// Validates externally produced cells against `grid` and wraps them.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyPath`] for an empty list,
    /// [`CoreError::PathStartMismatch`] if the first cell is not the start,
    /// [`CoreError::PositionOutOfBounds`] for a cell outside the grid, and
    /// [`CoreError::IllegalMove`] for the first step that breaks the rules.
    pub fn from_cells(grid: &Grid, cells: &[Position]) -> Result<Self, CoreError> {
        let (&first, rest) = cells.split_first().ok_or(CoreError::EmptyPath)?;
        if first != grid.start() {
            return Err(CoreError::PathStartMismatch {
                expected: grid.start(),
                found: first,
            });
        }
        let mut path = Self::new(first);
        for &pos in rest {
            path.try_push(grid, pos)?;
        }
        Ok(path)
    }

    /// Appends `pos` if it is a legal move.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PositionOutOfBounds`] if `pos` lies outside `grid`,
    /// or [`CoreError::IllegalMove`] if the move breaks the rules.
    pub fn try_push(&mut self, grid: &Grid, pos: Position) -> Result<(), CoreError> {
        if !grid.contains(pos) {
            return Err(CoreError::PositionOutOfBounds { pos });
        }
        if !rules::is_valid_move(grid, &self.cells, pos) {
            return Err(CoreError::IllegalMove {
                from: self.last(),
                to: pos,
            });
        }
        self.cells.push(pos);
        Ok(())
    }

    /// Removes and returns the last cell, keeping the start cell.
    pub fn pop(&mut self) -> Option<Position> {
        if self.cells.len() > 1 {
            self.cells.pop()
        } else {
            None
        }
    }

    /// Truncates the path back to the start cell.
    pub fn clear(&mut self) {
        self.cells.truncate(1);
    }

    /// Returns the current end of the path.
    #[must_use]
    #[inline]
    pub fn last(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    /// Returns the start cell.
    #[must_use]
    #[inline]
    pub fn first(&self) -> Position {
        self.cells[0]
    }

    /// Returns the cells in visiting order.
    #[must_use]
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.cells
    }

    /// Lists the legal next cells in neighbour order.
    #[must_use]
    pub fn valid_moves(&self, grid: &Grid) -> Vec<Position> {
        rules::valid_moves(grid, &self.cells)
    }

    /// Re-checks every invariant of the path against `grid`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Path::from_cells`].
    pub fn validate(&self, grid: &Grid) -> Result<(), CoreError> {
        Self::from_cells(grid, &self.cells).map(|_| ())
    }
}

impl Deref for Path {
    type Target = [Position];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

impl From<Path> for Vec<Position> {
    fn from(path: Path) -> Self {
        path.cells
    }
}
