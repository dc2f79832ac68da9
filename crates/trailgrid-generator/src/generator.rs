use chrono::NaiveDate;
use trailgrid_core::{
    Grid, GridSize, Position,
    grid::{MAX_VALUE, MIN_VALUE},
};

use crate::{DailySeed, Lcg};

/// A generated puzzle: the grid and start cell for one `(date, size)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The seed the grid was drawn from.
    pub seed: DailySeed,
    /// The cell values.
    pub grid: Grid,
    /// The start cell, always the center of the grid.
    pub start: Position,
}

impl GeneratedPuzzle {
    /// Returns the puzzle date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.seed.date()
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }
}

/// Generates daily puzzles.
///
/// Each call starts a fresh [`Lcg`] from the [`DailySeed`] of its
/// `(date, size)` pair and draws one value per cell in row-major order.
/// Nothing else influences the result.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trailgrid_core::{GridSize, Position};
/// use trailgrid_generator::PuzzleGenerator;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// let puzzle = PuzzleGenerator::new().generate(date, GridSize::Small);
/// assert_eq!(puzzle.start, Position::new(2, 2));
/// assert_eq!(puzzle.grid.to_string(), "33245\n25523\n22251\n51415\n14313");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {}

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Generates the puzzle for `date` and `size`.
    #[must_use]
    pub fn generate(&self, date: NaiveDate, size: GridSize) -> GeneratedPuzzle {
        self.generate_with_seed(DailySeed::new(date, size))
    }

    /// Generates the puzzle for an already derived seed.
    #[must_use]
    pub fn generate_with_seed(&self, seed: DailySeed) -> GeneratedPuzzle {
        let size = seed.size();
        let mut rng = Lcg::new(seed.value());
        let grid = fill_grid(size, &mut rng);
        log::debug!(
            "generated {size} puzzle for {} (seed {seed})",
            seed.date_key()
        );
        GeneratedPuzzle {
            seed,
            grid,
            start: size.start(),
        }
    }
}

fn fill_grid(size: GridSize, rng: &mut Lcg) -> Grid {
    Grid::from_fn(size, |_| {
        let value = rng.next_int(u32::from(MIN_VALUE), u32::from(MAX_VALUE));
        u8::try_from(value).unwrap_or(MAX_VALUE)
    })
}

/// Generates the puzzle for `date` and `size`.
///
/// Shorthand for [`PuzzleGenerator::generate`].
#[must_use]
pub fn generate_puzzle(date: NaiveDate, size: GridSize) -> GeneratedPuzzle {
    PuzzleGenerator::new().generate(date, size)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn golden_2024_03_07_small() {
        let puzzle = generate_puzzle(date(2024, 3, 7), GridSize::Small);
        assert_eq!(puzzle.seed.value(), 1_922_423_040);
        let expected: Grid = "
            33245
            25523
            22251
            51415
            14313
        "
        .parse()
        .unwrap();
        assert_eq!(puzzle.grid, expected);
        assert_eq!(puzzle.start, Position::new(2, 2));
    }

    #[test]
    fn golden_2024_03_07_large() {
        let puzzle = generate_puzzle(date(2024, 3, 7), GridSize::Large);
        assert_eq!(puzzle.seed.value(), 1_922_424_040);
        let expected: Grid = "
            3112533
            5231341
            1353513
            4135142
            5231554
            3444314
            4421252
        "
        .parse()
        .unwrap();
        assert_eq!(puzzle.grid, expected);
        assert_eq!(puzzle.start, Position::new(3, 3));
    }

    #[test]
    fn golden_2024_12_25_small() {
        let puzzle = generate_puzzle(date(2024, 12, 25), GridSize::Small);
        let expected: Grid = "
            25521
            54554
            15453
            42523
            45334
        "
        .parse()
        .unwrap();
        assert_eq!(puzzle.grid, expected);
    }

    #[test]
    fn sizes_do_not_share_a_prefix() {
        let d = date(2024, 3, 7);
        let small = generate_puzzle(d, GridSize::Small);
        let large = generate_puzzle(d, GridSize::Large);
        let small_first_row = small.grid.rows().next().unwrap();
        let large_first_row = &large.grid.rows().next().unwrap()[..5];
        assert_ne!(small_first_row, large_first_row);
    }

    proptest! {
        #[test]
        fn generation_is_deterministic(days in 0_i64..40_000, large in any::<bool>()) {
            let d = date(1970, 1, 1) + chrono::Duration::days(days);
            let size = if large { GridSize::Large } else { GridSize::Small };
            let a = generate_puzzle(d, size);
            let b = generate_puzzle(d, size);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.start, size.start());
            prop_assert_eq!(a.size(), size);
        }

        #[test]
        fn values_stay_in_range(days in 0_i64..40_000, large in any::<bool>()) {
            let d = date(1970, 1, 1) + chrono::Duration::days(days);
            let size = if large { GridSize::Large } else { GridSize::Small };
            let puzzle = generate_puzzle(d, size);
            for row in puzzle.grid.rows() {
                for &value in row {
                    prop_assert!((MIN_VALUE..=MAX_VALUE).contains(&value));
                }
            }
        }
    }
}
