//! Command-line interface definition.

use std::{num::NonZero, path::PathBuf};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use trailgrid_core::GridSize;
use trailgrid_generator::parse_date;
use trailgrid_solver::BranchOrder;

/// Daily path puzzles on a grid of numbers.
///
/// Starting from the center cell, step to any of the eight neighbours whose
/// value differs by at most one, never revisiting a cell. Par is the longest
/// path the puzzle allows.
#[derive(Debug, Parser)]
#[command(name = "trailgrid", version = crate::version::version(), about)]
pub struct Cli {
    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of `trailgrid`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the grid of a daily puzzle.
    Show(PuzzleArgs),
    /// Compute par and a longest path for a daily puzzle.
    Solve {
        /// Puzzle selection.
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Order in which the solver tries moves.
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
    },
    /// Compute par for every day in a date range.
    Range {
        /// First day, inclusive.
        #[arg(long, value_name = "DATE", value_parser = parse_date)]
        from: NaiveDate,
        /// Last day, inclusive.
        #[arg(long, value_name = "DATE", value_parser = parse_date)]
        to: NaiveDate,
        /// Grid size: small (5x5) or large (7x7).
        #[arg(long, value_name = "SIZE")]
        size: Option<GridSize>,
        /// Order in which the solver tries moves.
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
    },
    /// Play a daily puzzle interactively.
    Play {
        /// Puzzle selection.
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Save progress to this file and resume from it when it exists.
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
        /// Number of moves that can be undone.
        #[arg(long, value_name = "N")]
        history: Option<NonZero<usize>>,
    },
}

/// Selects one daily puzzle.
#[derive(Debug, Clone, Args)]
pub struct PuzzleArgs {
    /// Puzzle date as YEAR-MONTH-DAY [default: today].
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub date: Option<NaiveDate>,
    /// Grid size: small (5x5) or large (7x7) [default: small].
    #[arg(long, value_name = "SIZE")]
    pub size: Option<GridSize>,
}

/// Solver branch order as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Try the most constrained move first.
    Fanout,
    /// Try moves in plain neighbour order.
    Neighbor,
}

impl From<OrderArg> for BranchOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Fanout => BranchOrder::FewestOnwardMoves,
            OrderArg::Neighbor => BranchOrder::NeighborOrder,
        }
    }
}
