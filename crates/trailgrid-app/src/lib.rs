//! Command-line front end for trailgrid daily puzzles.
//!
//! The binary parses a [`Cli`], merges its flags into [`Settings`] and hands
//! both to [`run`]. Solving for interactive play happens on the background
//! [`worker`] so the prompt stays responsive; batch solving over a date range
//! uses `rayon`.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use chrono::{Local, NaiveDate};
use rayon::prelude::*;
use trailgrid_core::GridSize;
use trailgrid_game::{Game, GameError};
use trailgrid_generator::{GeneratedPuzzle, PuzzleGenerator};
use trailgrid_solver::{PathSolver, SolverResult};

pub use self::{
    cli::{Cli, Command, OrderArg, PuzzleArgs},
    settings::Settings,
    worker::WorkError,
};
use self::{
    play::Session,
    render::{render_board, render_path},
};

pub mod cli;
mod persistence;
mod play;
mod render;
pub mod settings;
pub mod version;
pub mod worker;

/// Errors reported by the `trailgrid` binary.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// Reading input or writing output failed.
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    /// A save file could not be encoded or decoded.
    #[display("save file error: {_0}")]
    Json(#[from] serde_json::Error),
    /// A saved game could not be restored.
    #[display("cannot resume game: {_0}")]
    Game(#[from] GameError),
    /// Background work could not be scheduled.
    #[display("background work failed: {_0}")]
    Work(#[from] WorkError),
    /// The date range ends before it starts.
    #[display("date range {from} to {to} is empty")]
    EmptyRange {
        /// First day.
        from: NaiveDate,
        /// Last day.
        to: NaiveDate,
    },
}

/// Runs one parsed command against standard input and output.
///
/// # Errors
///
/// Returns [`AppError`] if output cannot be written, a save file cannot be
/// read or written, or the arguments describe nothing to do.
pub fn run(cli: Cli, settings: Settings) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Show(puzzle) => {
            let settings = settings.with_size(puzzle.size);
            show(&generate(puzzle.date, settings.size), &mut out)
        }
        Command::Solve { puzzle, order } => {
            let settings = settings
                .with_size(puzzle.size)
                .with_order(order.map(Into::into));
            solve(&generate(puzzle.date, settings.size), &settings, &mut out)
        }
        Command::Range {
            from,
            to,
            size,
            order,
        } => {
            let settings = settings.with_size(size).with_order(order.map(Into::into));
            range(from, to, &settings, &mut out)
        }
        Command::Play {
            puzzle,
            save,
            history,
        } => {
            let settings = settings
                .with_size(puzzle.size)
                .with_history_capacity(history);
            let date = puzzle.date.unwrap_or_else(today);
            play(date, &settings, save.as_deref(), io::stdin().lock(), &mut out)
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn generate(date: Option<NaiveDate>, size: GridSize) -> GeneratedPuzzle {
    PuzzleGenerator::new().generate(date.unwrap_or_else(today), size)
}

fn show<W: Write>(puzzle: &GeneratedPuzzle, out: &mut W) -> Result<(), AppError> {
    writeln!(
        out,
        "{} {} (seed {})",
        puzzle.seed.date_key(),
        puzzle.size(),
        puzzle.seed
    )?;
    write!(out, "{}", render_board(&puzzle.grid, None))?;
    writeln!(out, "start {}", puzzle.start)?;
    Ok(())
}

fn solve<W: Write>(
    puzzle: &GeneratedPuzzle,
    settings: &Settings,
    out: &mut W,
) -> Result<(), AppError> {
    show(puzzle, out)?;
    let solver = PathSolver::with_branch_order(settings.order);
    let (result, stats) = solver.solve_with_stats(&puzzle.grid, puzzle.start);
    writeln!(out, "par {}", result.optimal_length)?;
    writeln!(out, "path {}", render_path(result.optimal_path.positions()))?;
    writeln!(
        out,
        "searched {} nodes ({}){}",
        stats.nodes_visited(),
        settings.order,
        if stats.perfect_coverage() {
            ", every cell covered"
        } else {
            ""
        }
    )?;
    Ok(())
}

fn range<W: Write>(
    from: NaiveDate,
    to: NaiveDate,
    settings: &Settings,
    out: &mut W,
) -> Result<(), AppError> {
    if from > to {
        return Err(AppError::EmptyRange { from, to });
    }
    let dates: Vec<NaiveDate> = from.iter_days().take_while(|date| *date <= to).collect();
    log::info!("solving {} {} puzzles", dates.len(), settings.size);

    let solver = PathSolver::with_branch_order(settings.order);
    let results: Vec<(GeneratedPuzzle, SolverResult)> = dates
        .into_par_iter()
        .map(|date| {
            let puzzle = PuzzleGenerator::new().generate(date, settings.size);
            let result = solver.solve(&puzzle.grid, puzzle.start);
            (puzzle, result)
        })
        .collect();

    for (puzzle, result) in &results {
        let marker = if result.optimal_length == puzzle.size().cell_count() {
            " *"
        } else {
            ""
        };
        writeln!(
            out,
            "{} {} par {:>2}{marker}",
            puzzle.date(),
            puzzle.size(),
            result.optimal_length
        )?;
    }
    Ok(())
}

fn play<R, W>(
    date: NaiveDate,
    settings: &Settings,
    save: Option<&Path>,
    input: R,
    out: &mut W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let game = open_game(date, settings, save)?;
    writeln!(
        out,
        "{} {}: start at {}",
        game.puzzle().seed.date_key(),
        game.puzzle().size(),
        game.puzzle().start
    )?;

    // a saved par is shown right away, the solve still supplies hints
    let pending = worker::request_solve(game.grid().clone(), game.puzzle().start, settings.order)?;

    let mut session = Session::new(game, Some(pending));
    session.run(input, out)?;

    if let Some(path) = save {
        persistence::save_snapshot(path, &session.game().snapshot())?;
        writeln!(out, "saved to {}", path.display())?;
    }
    Ok(())
}

fn open_game(date: NaiveDate, settings: &Settings, save: Option<&Path>) -> Result<Game, AppError> {
    let snapshot = match save {
        Some(path) => persistence::load_snapshot(path)?,
        None => None,
    };
    match snapshot {
        Some(snapshot) if snapshot.date == date && snapshot.size == settings.size => {
            log::info!("resuming saved game for {date}");
            Ok(Game::from_snapshot_with_history_capacity(
                &snapshot,
                settings.history_capacity,
            )?)
        }
        Some(snapshot) => {
            log::info!(
                "saved game is for {} {}, starting {date} {} fresh",
                snapshot.date,
                snapshot.size,
                settings.size
            );
            Ok(new_game(date, settings))
        }
        None => Ok(new_game(date, settings)),
    }
}

fn new_game(date: NaiveDate, settings: &Settings) -> Game {
    let puzzle = PuzzleGenerator::new().generate(date, settings.size);
    Game::with_history_capacity(puzzle, settings.history_capacity)
}
