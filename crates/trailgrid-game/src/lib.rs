//! Interactive play on a daily trailgrid puzzle.
//!
//! A [`Game`] wraps a generated puzzle and the player's path. Moves are
//! checked against the movement rules, every change is recorded for undo and
//! redo, and the finished path is rated against the solver's par.
//!
//! Progress is saved as a [`GameSnapshot`] holding only the date, size, path
//! and par. Restoring regenerates the grid and replays the path, so a snapshot
//! never carries a grid that could disagree with the generator.

mod error;
mod game;
mod snapshot;
mod undo_redo_stack;

pub use self::{
    error::GameError,
    game::{Game, MoveOutcome, Rating},
    snapshot::GameSnapshot,
};
