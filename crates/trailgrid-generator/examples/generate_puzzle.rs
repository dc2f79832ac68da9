//! Example demonstrating daily puzzle generation.
//!
//! This example shows how to:
//! - Derive the seed for a date and grid size
//! - Generate the puzzle grid
//! - Compute par with the longest-path solver
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --date 2024-3-7
//! ```
//!
//! Generate the large grid and skip solving:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --date 2024-3-7 --size large --no-solve
//! ```

use std::process;

use chrono::NaiveDate;
use clap::Parser;
use trailgrid_core::GridSize;
use trailgrid_generator::{PuzzleGenerator, parse_date};
use trailgrid_solver::PathSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle date as YEAR-MONTH-DAY.
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    date: NaiveDate,

    /// Grid size: small (5x5) or large (7x7).
    #[arg(long, value_name = "SIZE", default_value = "small")]
    size: GridSize,

    /// Only print the grid.
    #[arg(long)]
    no_solve: bool,
}

fn main() {
    let args = Args::parse();
    let puzzle = PuzzleGenerator::new().generate(args.date, args.size);

    println!("Date key:");
    println!("  {}", puzzle.seed.date_key());
    println!();
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Grid:");
    for row in puzzle.grid.rows() {
        let row = row.iter().map(u8::to_string).collect::<Vec<_>>();
        println!("  {}", row.join(" "));
    }
    println!();
    println!("Start:");
    println!("  {}", puzzle.start);

    if args.no_solve {
        return;
    }

    let result = PathSolver::new().solve(&puzzle.grid, puzzle.start);
    if result.optimal_path.validate(&puzzle.grid).is_err() {
        eprintln!("Solver produced an invalid path.");
        process::exit(1);
    }
    println!();
    println!("Par:");
    println!("  {}", result.optimal_length);
    println!();
    println!("Path:");
    for pos in result.optimal_path.positions() {
        println!("  {pos}");
    }
}
