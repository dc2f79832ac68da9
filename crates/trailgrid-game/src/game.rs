use std::num::NonZero;

use chrono::NaiveDate;
use trailgrid_core::{Grid, GridSize, Path, Position};
use trailgrid_generator::{GeneratedPuzzle, PuzzleGenerator};
use trailgrid_solver::SolverResult;

use crate::{GameError, GameSnapshot, undo_redo_stack::UndoRedoStack};

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The path grew and more moves are available.
    Moved,
    /// The path grew and no legal move remains.
    Stuck,
    /// The path now covers every cell.
    PerfectCoverage,
}

/// How a finished path compares with par.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, derive_more::Display)]
pub enum Rating {
    /// Shorter than par.
    #[display("below par")]
    Below,
    /// Matches par.
    #[display("par")]
    Par,
    /// Matches par and covers every cell.
    #[display("perfect")]
    Perfect,
}

/// A path-building session on one daily puzzle.
///
/// The player extends a path from the start cell one legal move at a time.
/// Every change of the path is recorded so it can be undone and redone.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use trailgrid_core::{GridSize, Position};
/// use trailgrid_game::Game;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// let mut game = Game::for_date(date, GridSize::Small);
/// assert_eq!(game.score(), 1);
///
/// game.try_move(Position::new(2, 1))?;
/// assert_eq!(game.score(), 2);
///
/// assert!(game.undo());
/// assert_eq!(game.path().positions(), [Position::new(2, 2)]);
/// # Ok::<(), trailgrid_game::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    puzzle: GeneratedPuzzle,
    path: Path,
    history: UndoRedoStack<Path>,
    solution: Option<SolverResult>,
    saved_par: Option<usize>,
}

impl Game {
    /// Default number of path states kept for undo.
    pub const DEFAULT_HISTORY_CAPACITY: NonZero<usize> = NonZero::new(500).unwrap();

    /// Starts a session on `puzzle` with the default history capacity.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self::with_history_capacity(puzzle, Self::DEFAULT_HISTORY_CAPACITY)
    }

    /// Starts a session on `puzzle` keeping at most `capacity` path states.
    #[must_use]
    pub fn with_history_capacity(puzzle: GeneratedPuzzle, capacity: NonZero<usize>) -> Self {
        let path = Path::new(puzzle.start);
        Self {
            history: UndoRedoStack::new(path.clone(), capacity),
            path,
            puzzle,
            solution: None,
            saved_par: None,
        }
    }

    /// Generates the puzzle for `date` and `size` and starts a session on it.
    #[must_use]
    pub fn for_date(date: NaiveDate, size: GridSize) -> Self {
        Self::new(PuzzleGenerator::new().generate(date, size))
    }

    /// Restores a session from a snapshot.
    ///
    /// The grid is regenerated from the snapshot's date and size, and the saved
    /// path is replayed against it. The restored path becomes the first entry
    /// of a fresh history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSnapshot`] if the saved path does not follow
    /// the rules on the regenerated grid, or [`GameError::ParOutOfRange`] if the
    /// saved par is shorter than the path or longer than the cell count.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, GameError> {
        Self::from_snapshot_with_history_capacity(snapshot, Self::DEFAULT_HISTORY_CAPACITY)
    }

    /// Restores a session from a snapshot keeping at most `capacity` path
    /// states.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::from_snapshot`].
    pub fn from_snapshot_with_history_capacity(
        snapshot: &GameSnapshot,
        capacity: NonZero<usize>,
    ) -> Result<Self, GameError> {
        let puzzle = PuzzleGenerator::new().generate(snapshot.date, snapshot.size);
        let path = Path::from_cells(&puzzle.grid, &snapshot.path)
            .map_err(GameError::InvalidSnapshot)?;
        let impossible_par = snapshot
            .optimal_length
            .filter(|&par| par < path.len() || par > snapshot.size.cell_count());
        if let Some(par) = impossible_par {
            return Err(GameError::ParOutOfRange { par });
        }

        Ok(Self {
            history: UndoRedoStack::new(path.clone(), capacity),
            path,
            puzzle,
            solution: None,
            saved_par: snapshot.optimal_length,
        })
    }

    /// Captures the date, size, path and par for saving.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            date: self.puzzle.date(),
            size: self.puzzle.size(),
            path: self.path.positions().to_vec(),
            optimal_length: self.par(),
        }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &GeneratedPuzzle {
        &self.puzzle
    }

    /// Returns the puzzle grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    /// Returns the current path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of cells on the path, the start included.
    #[must_use]
    pub fn score(&self) -> usize {
        self.path.len()
    }

    /// Returns the legal next cells in neighbour order.
    #[must_use]
    pub fn valid_moves(&self) -> Vec<Position> {
        self.path.valid_moves(self.grid())
    }

    /// Returns `true` if `pos` can be appended to the path.
    #[must_use]
    pub fn is_valid_move(&self, pos: Position) -> bool {
        trailgrid_core::rules::is_valid_move(self.grid(), &self.path, pos)
    }

    /// Returns `true` if no legal move remains.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.valid_moves().is_empty()
    }

    /// Extends the path to `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Move`] if `pos` lies outside the grid or the move
    /// breaks the rules. The path is left unchanged.
    pub fn try_move(&mut self, pos: Position) -> Result<MoveOutcome, GameError> {
        self.path.try_push(&self.puzzle.grid, pos)?;
        self.history.record(self.path.clone());

        let outcome = if self.path.len() == self.puzzle.size().cell_count() {
            MoveOutcome::PerfectCoverage
        } else if self.is_stuck() {
            MoveOutcome::Stuck
        } else {
            MoveOutcome::Moved
        };
        log::trace!("moved to {pos}: {outcome:?}");
        Ok(outcome)
    }

    /// Returns `true` if there is a change to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Reverts the last change. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(path) = self.history.undo() else {
            return false;
        };
        self.path.clone_from(path);
        true
    }

    /// Returns `true` if there is an undone change to reapply.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Reapplies the last undone change. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let Some(path) = self.history.redo() else {
            return false;
        };
        self.path.clone_from(path);
        true
    }

    /// Shrinks the path back to the start cell.
    ///
    /// The reset is recorded and can be undone. Nothing is recorded if the path
    /// is already at the start.
    pub fn reset(&mut self) {
        if self.path.len() == 1 {
            return;
        }
        self.path.clear();
        self.history.record(self.path.clone());
    }

    /// Stores the solver's result as par and as the source of hints.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SolutionMismatch`] if the solution's path is not a
    /// legal path on this grid or disagrees with its length.
    pub fn set_par(&mut self, solution: SolverResult) -> Result<(), GameError> {
        if solution.optimal_path.validate(self.grid()).is_err()
            || solution.optimal_path.len() != solution.optimal_length
        {
            return Err(GameError::SolutionMismatch);
        }
        self.saved_par = None;
        self.solution = Some(solution);
        Ok(())
    }

    /// Returns the par length if it is known.
    #[must_use]
    pub fn par(&self) -> Option<usize> {
        self.solution
            .as_ref()
            .map(|solution| solution.optimal_length)
            .or(self.saved_par)
    }

    /// Compares the path with par once no legal move remains.
    ///
    /// Returns `None` while moves remain or par is unknown.
    #[must_use]
    pub fn rating(&self) -> Option<Rating> {
        if !self.is_stuck() {
            return None;
        }
        let par = self.par()?;
        let rating = if self.score() < par {
            Rating::Below
        } else if self.score() == self.puzzle.size().cell_count() {
            Rating::Perfect
        } else {
            Rating::Par
        };
        Some(rating)
    }

    /// Suggests the next cell of the solver's path.
    ///
    /// Only available while the current path is a prefix of that path.
    #[must_use]
    pub fn hint(&self) -> Option<Position> {
        let solution = self.solution.as_ref()?;
        let optimal = solution.optimal_path.positions();
        let current = self.path.positions();
        if optimal.starts_with(current) {
            optimal.get(current.len()).copied()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use trailgrid_core::CoreError;
    use trailgrid_generator::DailySeed;
    use trailgrid_solver::solve_optimal_path;

    use super::*;

    fn march_7() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn daily_game() -> Game {
        Game::for_date(march_7(), GridSize::Small)
    }

    fn custom_game(text: &str) -> Game {
        let grid: Grid = text.parse().unwrap();
        let puzzle = GeneratedPuzzle {
            seed: DailySeed::new(march_7(), grid.size()),
            start: grid.start(),
            grid,
        };
        Game::new(puzzle)
    }

    fn solved(mut game: Game) -> Game {
        let solution = solve_optimal_path(game.grid(), game.puzzle().start);
        game.set_par(solution).unwrap();
        game
    }

    fn play_hints(game: &mut Game) -> Option<MoveOutcome> {
        let mut last = None;
        while let Some(next) = game.hint() {
            last = Some(game.try_move(next).unwrap());
        }
        last
    }

    #[test]
    fn starts_at_center() {
        let game = daily_game();
        assert_eq!(game.path().positions(), [Position::new(2, 2)]);
        assert_eq!(game.score(), 1);
        assert!(!game.can_undo());
        assert!(!game.can_redo());
        assert_eq!(game.par(), None);
        assert_eq!(game.rating(), None);
        assert_eq!(
            game.valid_moves(),
            [
                Position::new(1, 3),
                Position::new(2, 1),
                Position::new(3, 1),
                Position::new(3, 3),
            ]
        );
    }

    #[test]
    fn illegal_move_leaves_path_unchanged() {
        let mut game = daily_game();
        let err = game.try_move(Position::new(1, 2)).unwrap_err();
        assert_eq!(
            err,
            GameError::Move(CoreError::IllegalMove {
                from: Position::new(2, 2),
                to: Position::new(1, 2),
            })
        );
        let err = game.try_move(Position::new(9, 9)).unwrap_err();
        assert!(err.is_move());
        assert!(!game.is_valid_move(Position::new(2, 2)));
        assert_eq!(game.score(), 1);
        assert!(!game.can_undo());
    }

    #[test]
    fn undo_restores_previous_path() {
        let mut game = daily_game();
        game.try_move(Position::new(2, 1)).unwrap();
        let before = game.path().clone();
        game.try_move(Position::new(3, 1)).unwrap();

        assert!(game.undo());
        assert_eq!(game.path(), &before);
        assert!(game.can_redo());
        assert!(game.redo());
        assert_eq!(game.path().last(), Position::new(3, 1));
        assert!(!game.redo());
    }

    #[test]
    fn move_after_undo_discards_redo() {
        let mut game = daily_game();
        game.try_move(Position::new(2, 1)).unwrap();
        assert!(game.undo());
        game.try_move(Position::new(1, 3)).unwrap();
        assert!(!game.can_redo());
        assert!(game.undo());
        assert_eq!(game.score(), 1);
        assert!(!game.undo());
    }

    #[test]
    fn reset_is_undoable() {
        let mut game = daily_game();
        game.try_move(Position::new(2, 1)).unwrap();
        game.try_move(Position::new(3, 1)).unwrap();
        game.reset();
        assert_eq!(game.score(), 1);
        assert!(game.undo());
        assert_eq!(game.score(), 3);

        let mut fresh = daily_game();
        fresh.reset();
        assert!(!fresh.can_undo());
    }

    #[test]
    fn history_capacity_limits_undo() {
        let puzzle = generate(march_7());
        let mut game = Game::with_history_capacity(puzzle, NonZero::new(2).unwrap());
        game.try_move(Position::new(2, 1)).unwrap();
        game.try_move(Position::new(3, 1)).unwrap();
        assert!(game.undo());
        assert!(!game.undo());
        assert_eq!(game.score(), 2);
    }

    fn generate(date: NaiveDate) -> GeneratedPuzzle {
        PuzzleGenerator::new().generate(date, GridSize::Small)
    }

    #[test]
    fn following_hints_reaches_par() {
        let mut game = solved(daily_game());
        assert_eq!(game.par(), Some(17));
        assert_eq!(game.hint(), Some(Position::new(2, 1)));

        assert_eq!(play_hints(&mut game), Some(MoveOutcome::Stuck));
        assert_eq!(game.score(), 17);
        assert!(game.is_stuck());
        assert_eq!(game.rating(), Some(Rating::Par));
    }

    #[test]
    fn hint_disappears_after_leaving_the_solution() {
        let mut game = solved(daily_game());
        game.try_move(Position::new(1, 3)).unwrap();
        assert_eq!(game.hint(), None);
        assert!(game.undo());
        assert_eq!(game.hint(), Some(Position::new(2, 1)));
    }

    #[test]
    fn dead_end_rates_below_par() {
        let mut game = solved(custom_game(
            "
            35555
            53555
            55335
            55555
            55555
            ",
        ));
        assert_eq!(game.par(), Some(3));
        assert_eq!(
            game.try_move(Position::new(2, 3)).unwrap(),
            MoveOutcome::Stuck
        );
        assert_eq!(game.rating(), Some(Rating::Below));
    }

    #[test]
    fn full_cover_is_perfect() {
        let mut game = solved(custom_game(
            "
            11111
            11111
            11111
            11111
            11111
            ",
        ));
        assert_eq!(play_hints(&mut game), Some(MoveOutcome::PerfectCoverage));
        assert_eq!(game.rating(), Some(Rating::Perfect));
    }

    #[test]
    fn rejects_solution_for_another_grid() {
        let mut game = daily_game();
        let other = generate(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        let solution = solve_optimal_path(&other.grid, other.start);
        assert_eq!(game.set_par(solution), Err(GameError::SolutionMismatch));
        assert_eq!(game.par(), None);
    }

    #[test]
    fn snapshot_roundtrip_through_json() {
        let mut game = solved(daily_game());
        game.try_move(Position::new(2, 1)).unwrap();
        game.try_move(Position::new(3, 1)).unwrap();

        let json = serde_json::to_string(&game.snapshot()).unwrap();
        let snapshot: GameSnapshot = serde_json::from_str(&json).unwrap();
        let restored = Game::from_snapshot(&snapshot).unwrap();

        assert_eq!(restored.path(), game.path());
        assert_eq!(restored.grid(), game.grid());
        assert_eq!(restored.par(), Some(17));
        assert_eq!(restored.hint(), None);
        assert!(!restored.can_undo());
    }

    #[test]
    fn snapshot_with_illegal_path_is_rejected() {
        let snapshot = GameSnapshot {
            date: march_7(),
            size: GridSize::Small,
            path: vec![Position::new(2, 2), Position::new(1, 2)],
            optimal_length: None,
        };
        let err = Game::from_snapshot(&snapshot).unwrap_err();
        assert!(err.is_invalid_snapshot());

        let snapshot = GameSnapshot {
            path: vec![Position::new(0, 0)],
            ..snapshot
        };
        assert!(Game::from_snapshot(&snapshot).unwrap_err().is_invalid_snapshot());
    }

    #[test]
    fn snapshot_with_impossible_par_is_rejected() {
        let snapshot = GameSnapshot {
            date: march_7(),
            size: GridSize::Small,
            path: vec![Position::new(2, 2), Position::new(2, 1)],
            optimal_length: Some(1),
        };
        assert_eq!(
            Game::from_snapshot(&snapshot).unwrap_err(),
            GameError::ParOutOfRange { par: 1 }
        );
    }
}
