//! Core data structures for the daily path puzzle.
//!
//! A puzzle is a square [`Grid`] of values `1..=5` with a fixed start cell at
//! its center. Players build a [`Path`] from the start by king moves, never
//! revisiting a cell and never stepping between values that differ by more
//! than one.
//!
//! # Overview
//!
//! - [`position`]: `(row, col)` coordinates and king-move adjacency
//! - [`grid_size`]: the two supported sizes, 5×5 and 7×7
//! - [`grid`]: the value grid
//! - [`rules`]: the legal-move predicate shared by gameplay and the solver
//! - [`path`]: a validated, self-avoiding path
//!
//! # Examples
//!
//! ```
//! use trailgrid_core::{Grid, GridSize, Position, rules};
//!
//! let grid = Grid::filled(GridSize::Small, 1);
//! let path = [grid.start()];
//! assert_eq!(rules::valid_moves(&grid, &path).len(), 8);
//! assert!(rules::is_valid_move(&grid, &path, Position::new(1, 1)));
//! ```

pub mod grid;
pub mod grid_size;
pub mod path;
pub mod position;
pub mod rules;

mod error;

pub use self::{
    error::CoreError,
    grid::Grid,
    grid_size::GridSize,
    path::Path,
    position::{NEIGHBOR_OFFSETS, Position},
};
