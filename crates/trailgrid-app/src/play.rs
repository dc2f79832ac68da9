//! Interactive text session.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use trailgrid_core::Position;
use trailgrid_game::{Game, MoveOutcome};

use crate::{
    AppError,
    render::{render_board, render_path},
    worker::PendingSolve,
};

const HELP: &str = "\
commands:
  ROW COL   extend the path to the cell at ROW, COL
  u, undo   take back the last change
  r, redo   reapply an undone change
  reset     go back to the start cell
  m, moves  list the legal moves
  h, hint   show the next cell of a longest path
  ?, help   show this help
  q, quit   save and leave";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlayCommand {
    Move(Position),
    Undo,
    Redo,
    Reset,
    Moves,
    Hint,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unrecognized command {input:?}, type `help` for a list")]
pub(crate) struct ParseCommandError {
    input: String,
}

impl FromStr for PlayCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let command = match input.to_ascii_lowercase().as_str() {
            "u" | "undo" => Self::Undo,
            "r" | "redo" => Self::Redo,
            "reset" => Self::Reset,
            "m" | "moves" => Self::Moves,
            "h" | "hint" => Self::Hint,
            "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => parse_position(other).map(Self::Move).ok_or_else(|| ParseCommandError {
                input: input.to_owned(),
            })?,
        };
        Ok(command)
    }
}

fn parse_position(s: &str) -> Option<Position> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some(Position::new(row, col))
}

/// A game plus the solve computing its par.
#[derive(Debug)]
pub(crate) struct Session {
    game: Game,
    pending: Option<PendingSolve>,
}

impl Session {
    pub(crate) fn new(game: Game, pending: Option<PendingSolve>) -> Self {
        Self { game, pending }
    }

    pub(crate) fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub(crate) fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), AppError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(out, "{HELP}")?;
        writeln!(out)?;
        self.print_board(out)?;

        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                writeln!(out)?;
                break;
            };
            self.refresh_par();
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<PlayCommand>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };
            if command == PlayCommand::Quit {
                break;
            }
            self.apply(command, out)?;
        }
        Ok(())
    }

    fn apply<W: Write>(&mut self, command: PlayCommand, out: &mut W) -> Result<(), AppError> {
        match command {
            PlayCommand::Move(pos) => match self.game.try_move(pos) {
                Ok(outcome) => {
                    self.print_board(out)?;
                    if !outcome.is_moved() {
                        self.print_finish(outcome, out)?;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            PlayCommand::Undo => {
                if self.game.undo() {
                    self.print_board(out)?;
                } else {
                    writeln!(out, "nothing to undo")?;
                }
            }
            PlayCommand::Redo => {
                if self.game.redo() {
                    self.print_board(out)?;
                } else {
                    writeln!(out, "nothing to redo")?;
                }
            }
            PlayCommand::Reset => {
                self.game.reset();
                self.print_board(out)?;
            }
            PlayCommand::Moves => {
                let moves = self.game.valid_moves();
                if moves.is_empty() {
                    writeln!(out, "no legal moves")?;
                } else {
                    writeln!(out, "legal moves: {}", render_path(&moves).replace(" ->", ","))?;
                }
            }
            PlayCommand::Hint => {
                self.wait_for_par(out)?;
                match self.game.hint() {
                    Some(pos) => writeln!(out, "try {} {}", pos.row(), pos.col())?,
                    None if self.game.par().is_some() => {
                        writeln!(out, "no hint: the path has left the longest route")?;
                    }
                    None => writeln!(out, "no hint available")?,
                }
            }
            PlayCommand::Help => writeln!(out, "{HELP}")?,
            PlayCommand::Quit => {}
        }
        Ok(())
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        write!(out, "{}", render_board(self.game.grid(), Some(self.game.path())))?;
        match self.game.par() {
            Some(par) => writeln!(out, "score {} / par {par}", self.game.score())?,
            None => writeln!(out, "score {} / par ...", self.game.score())?,
        }
        Ok(())
    }

    fn print_finish<W: Write>(&mut self, outcome: MoveOutcome, out: &mut W) -> Result<(), AppError> {
        if outcome.is_perfect_coverage() {
            writeln!(out, "every cell visited!")?;
        } else {
            writeln!(out, "no moves left")?;
        }
        self.wait_for_par(out)?;
        if let Some(rating) = self.game.rating() {
            writeln!(out, "result: {rating} (undo to keep trying)")?;
        }
        Ok(())
    }

    fn refresh_par(&mut self) {
        let Some(pending) = &mut self.pending else {
            return;
        };
        match pending.poll() {
            Ok(Some(result)) => {
                self.pending = None;
                self.accept_par(result);
            }
            Ok(None) => {}
            Err(err) => {
                log::warn!("par unavailable: {err}");
                self.pending = None;
            }
        }
    }

    fn wait_for_par<W: Write>(&mut self, out: &mut W) -> Result<(), AppError> {
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        writeln!(out, "computing par...")?;
        out.flush()?;
        match pending.wait() {
            Ok(result) => self.accept_par(result),
            Err(err) => log::warn!("par unavailable: {err}"),
        }
        Ok(())
    }

    fn accept_par(&mut self, result: trailgrid_solver::SolverResult) {
        let length = result.optimal_length;
        match self.game.set_par(result) {
            Ok(()) => log::info!("par is {length}"),
            Err(err) => log::warn!("discarding solver result: {err}"),
        }
    }
}
