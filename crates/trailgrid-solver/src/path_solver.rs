use trailgrid_core::{Grid, Path, Position};

use crate::search::Search;

/// Order in which the solver tries the moves out of each cell.
///
/// The order never changes the optimal length, only how fast it is found and
/// which of several equally long paths is reported.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant, derive_more::Display,
)]
pub enum BranchOrder {
    /// Try the move with the fewest onward moves first, breaking ties by
    /// neighbour order.
    #[default]
    #[display("fewest onward moves")]
    FewestOnwardMoves,
    /// Try moves in plain neighbour order.
    #[display("neighbor order")]
    NeighborOrder,
}

/// The longest path found from the start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverResult {
    /// Number of cells on the longest path, the start included.
    pub optimal_length: usize,
    /// A longest path: the first one reached in exploration order.
    pub optimal_path: Path,
}

/// Counters collected while solving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    nodes_visited: u64,
    perfect_coverage: bool,
}

impl SolverStats {
    /// Returns the number of path cells the search entered.
    #[must_use]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Returns `true` if the best path covers every cell.
    ///
    /// The search stops as soon as such a path is found.
    #[must_use]
    pub fn perfect_coverage(&self) -> bool {
        self.perfect_coverage
    }
}

/// Exhaustive longest-path solver.
///
/// Searches every simple path from the start cell depth first, keeping the
/// longest seen. Ties keep the path found first, so the result is fully
/// determined by the grid and the [`BranchOrder`]. The search ends early once
/// a path visits every cell.
///
/// Solving holds no shared state: separate calls may run on separate threads.
///
/// # Examples
///
/// ```
/// use trailgrid_core::{Grid, GridSize};
/// use trailgrid_solver::PathSolver;
///
/// let grid = Grid::filled(GridSize::Small, 3);
/// let result = PathSolver::new().solve(&grid, grid.start());
/// assert_eq!(result.optimal_length, 25);
/// assert!(result.optimal_path.validate(&grid).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSolver {
    order: BranchOrder,
}

impl PathSolver {
    /// Creates a solver using [`BranchOrder::FewestOnwardMoves`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given branch order.
    #[must_use]
    pub fn with_branch_order(order: BranchOrder) -> Self {
        Self { order }
    }

    /// Returns the configured branch order.
    #[must_use]
    pub fn branch_order(&self) -> BranchOrder {
        self.order
    }

    /// Finds a longest path from `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` lies outside `grid`.
    #[must_use]
    pub fn solve(&self, grid: &Grid, start: Position) -> SolverResult {
        self.solve_with_stats(grid, start).0
    }

    /// Finds a longest path from `start` and reports search counters.
    ///
    /// # Panics
    ///
    /// Panics if `start` lies outside `grid`.
    #[must_use]
    pub fn solve_with_stats(&self, grid: &Grid, start: Position) -> (SolverResult, SolverStats) {
        assert!(
            grid.contains(start),
            "start {start} is outside the {} grid",
            grid.size()
        );

        let (best, nodes_visited) = Search::new(grid, self.order).run(start);
        let optimal_path = Path::from_cells(grid, &best)
            .unwrap_or_else(|err| unreachable!("solver produced an illegal path: {err}"));
        let optimal_length = optimal_path.len();
        let stats = SolverStats {
            nodes_visited,
            perfect_coverage: optimal_length == grid.size().cell_count(),
        };

        log::debug!(
            "solved {} grid: length {optimal_length}, {nodes_visited} nodes ({})",
            grid.size(),
            self.order
        );

        (
            SolverResult {
                optimal_length,
                optimal_path,
            },
            stats,
        )
    }
}

/// Finds a longest path from `start` with the default branch order.
///
/// Shorthand for [`PathSolver::solve`].
///
/// # Panics
///
/// Panics if `start` lies outside `grid`.
#[must_use]
pub fn solve_optimal_path(grid: &Grid, start: Position) -> SolverResult {
    PathSolver::new().solve(grid, start)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use trailgrid_core::{GridSize, rules};
    use trailgrid_generator::generate_puzzle;

    use super::*;

    fn daily(y: i32, m: u32, d: u32, size: GridSize) -> Grid {
        generate_puzzle(NaiveDate::from_ymd_opt(y, m, d).unwrap(), size).grid
    }

    fn assert_valid_result(grid: &Grid, result: &SolverResult) {
        let cells = result.optimal_path.positions();
        assert_eq!(cells.len(), result.optimal_length);
        assert_eq!(cells[0], grid.start());
        for i in 1..cells.len() {
            assert!(
                rules::is_valid_move(grid, &cells[..i], cells[i]),
                "step {i} to {} is illegal",
                cells[i]
            );
        }
    }

    fn positions(cells: &[(u8, u8)]) -> Vec<Position> {
        cells.iter().map(|&(r, c)| Position::new(r, c)).collect()
    }

    #[test]
    fn uniform_grids_are_fully_covered() {
        for size in GridSize::ALL {
            let grid = Grid::filled(size, 2);
            let (result, stats) = PathSolver::new().solve_with_stats(&grid, grid.start());
            assert_eq!(result.optimal_length, size.cell_count());
            assert!(stats.perfect_coverage());
            assert_valid_result(&grid, &result);
        }
    }

    #[test]
    fn isolated_start_has_length_one() {
        let grid: Grid = "
            55555
            55555
            55155
            55555
            55555
        "
        .parse()
        .unwrap();
        let (result, stats) = PathSolver::new().solve_with_stats(&grid, grid.start());
        assert_eq!(result.optimal_length, 1);
        assert_eq!(result.optimal_path.positions(), [grid.start()]);
        assert_eq!(stats.nodes_visited(), 1);
        assert!(!stats.perfect_coverage());
    }

    #[test]
    fn follows_the_only_corridor() {
        // a single run of 2s and 3s leads from the center to the corner
        let grid: Grid = "
            35555
            52555
            55355
            55555
            55555
        "
        .parse()
        .unwrap();
        let result = solve_optimal_path(&grid, grid.start());
        assert_eq!(result.optimal_length, 3);
        assert_eq!(
            result.optimal_path.positions(),
            positions(&[(2, 2), (1, 1), (0, 0)])
        );
    }

    #[test]
    fn golden_2024_03_07_small() {
        let grid = daily(2024, 3, 7, GridSize::Small);
        let result = PathSolver::new().solve(&grid, grid.start());
        assert_eq!(result.optimal_length, 17);
        assert_eq!(
            result.optimal_path.positions(),
            positions(&[
                (2, 2),
                (2, 1),
                (3, 1),
                (2, 0),
                (1, 0),
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 3),
                (1, 4),
                (0, 3),
                (1, 2),
                (2, 3),
                (3, 2),
                (4, 2),
                (4, 1),
                (3, 0),
            ])
        );
        assert_valid_result(&grid, &result);
    }

    #[test]
    fn golden_small_lengths() {
        let cases = [((2024, 12, 25), 22), ((2025, 1, 1), 15)];
        for ((y, m, d), expected) in cases {
            let grid = daily(y, m, d, GridSize::Small);
            let result = solve_optimal_path(&grid, grid.start());
            assert_eq!(result.optimal_length, expected, "{y}-{m}-{d}");
            assert_valid_result(&grid, &result);
        }
    }

    #[test]
    #[cfg_attr(debug_assertions, ignore = "exhaustive 7x7 search is slow without optimizations")]
    fn golden_2024_03_07_large() {
        let grid = daily(2024, 3, 7, GridSize::Large);
        let result = solve_optimal_path(&grid, grid.start());
        assert_eq!(result.optimal_length, 37);
        assert_valid_result(&grid, &result);
    }

    #[test]
    fn solving_twice_gives_the_same_path() {
        let grid = daily(2024, 12, 25, GridSize::Small);
        let solver = PathSolver::new();
        let first = solver.solve(&grid, grid.start());
        let second = solver.solve(&grid, grid.start());
        assert_eq!(first, second);
    }

    #[test]
    fn neighbor_order_prefers_first_neighbor_on_ties() {
        // every cell is reachable, so the first full path found in plain
        // neighbour order starts by going up-left
        let grid = Grid::filled(GridSize::Small, 1);
        let result = PathSolver::with_branch_order(BranchOrder::NeighborOrder)
            .solve(&grid, grid.start());
        assert_eq!(result.optimal_length, 25);
        assert_eq!(result.optimal_path[1], Position::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn start_outside_grid_panics() {
        let grid = Grid::filled(GridSize::Small, 1);
        let _ = solve_optimal_path(&grid, Position::new(5, 5));
    }

    fn small_grid() -> impl Strategy<Value = Grid> {
        prop::collection::vec(1_u8..=5, GridSize::Small.cell_count())
            .prop_map(|values| Grid::from_values(GridSize::Small, values).unwrap())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn result_is_a_legal_path(grid in small_grid()) {
            let result = solve_optimal_path(&grid, grid.start());
            prop_assert!(result.optimal_length >= 1);
            prop_assert_eq!(result.optimal_path.len(), result.optimal_length);
            prop_assert!(result.optimal_path.validate(&grid).is_ok());
        }

        #[test]
        fn branch_order_does_not_change_length(grid in small_grid()) {
            let fanout = PathSolver::with_branch_order(BranchOrder::FewestOnwardMoves)
                .solve(&grid, grid.start());
            let plain = PathSolver::with_branch_order(BranchOrder::NeighborOrder)
                .solve(&grid, grid.start());
            prop_assert_eq!(fanout.optimal_length, plain.optimal_length);
        }
    }
}
