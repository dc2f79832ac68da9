//! Square grid of cell values.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{CoreError, GridSize, Position};

/// Smallest cell value.
pub const MIN_VALUE: u8 = 1;
/// Largest cell value.
pub const MAX_VALUE: u8 = 5;

/// An `N×N` grid of values in `1..=5`, stored in row-major order.
///
/// # Examples
///
/// ```
/// use trailgrid_core::{Grid, GridSize, Position};
///
/// let grid: Grid = "
///     12345
///     23451
///     34512
///     45123
///     51234
/// "
/// .parse()?;
/// assert_eq!(grid.size(), GridSize::Small);
/// assert_eq!(grid[Position::new(1, 2)], 4);
/// assert_eq!(grid.get(Position::new(5, 0)), None);
/// # Ok::<(), trailgrid_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    size: GridSize,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates a grid with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside `1..=5`.
    #[must_use]
    pub fn filled(size: GridSize, value: u8) -> Self {
        assert!(
            (MIN_VALUE..=MAX_VALUE).contains(&value),
            "cell value {value} is outside 1..=5"
        );
        Self {
            size,
            cells: vec![value; size.cell_count()],
        }
    }

    /// Builds a grid by calling `f` once per cell in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns a value outside `1..=5`.
    #[must_use]
    pub fn from_fn<F>(size: GridSize, mut f: F) -> Self
    where
        F: FnMut(Position) -> u8,
    {
        let cells = size
            .positions()
            .map(|pos| {
                let value = f(pos);
                assert!(
                    (MIN_VALUE..=MAX_VALUE).contains(&value),
                    "cell value {value} at {pos} is outside 1..=5"
                );
                value
            })
            .collect();
        Self { size, cells }
    }

    /// Builds a grid from row-major values produced by an iterator.
    ///
    /// Values are taken in order until the grid is full.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CellValueOutOfRange`] for any value outside `1..=5`,
    /// or [`CoreError::NonSquareGrid`] if the iterator ends early.
    pub fn from_values<I>(size: GridSize, values: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut cells = Vec::with_capacity(size.cell_count());
        let mut values = values.into_iter();
        for pos in size.positions() {
            let Some(value) = values.next() else {
                return Err(CoreError::NonSquareGrid {
                    row: usize::from(pos.row()),
                    len: usize::from(pos.col()),
                    expected: usize::from(size.side()),
                });
            };
            check_value(pos, value)?;
            cells.push(value);
        }
        Ok(Self { size, cells })
    }

    /// Builds a grid from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedGridSize`] if the row count is not 5 or 7,
    /// [`CoreError::NonSquareGrid`] if any row has the wrong length, and
    /// [`CoreError::CellValueOutOfRange`] for values outside `1..=5`.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, CoreError> {
        let size = GridSize::try_from(rows.len())?;
        let expected = usize::from(size.side());
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(CoreError::NonSquareGrid {
                row,
                len: cells.len(),
                expected,
            });
        }
        Self::from_values(size, rows.into_iter().flatten())
    }

    /// Returns the grid size.
    #[must_use]
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the start cell of this grid.
    #[must_use]
    #[inline]
    pub fn start(&self) -> Position {
        self.size.start()
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size)
    }

    /// Returns the value at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.contains(pos).then(|| self.cells[pos.index(self.size)])
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> {
        self.cells.chunks_exact(usize::from(self.size.side()))
    }

    /// Returns the grid as nested row vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }
}

fn check_value(pos: Position, value: u8) -> Result<(), CoreError> {
    if (MIN_VALUE..=MAX_VALUE).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::CellValueOutOfRange { pos, value })
    }
}

impl Index<Position> for Grid {
    type Output = u8;

    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(
            self.contains(pos),
            "position {pos} is outside the {} grid",
            self.size
        );
        &self.cells[pos.index(self.size)]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for value in row {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = CoreError;

    /// Parses digits in row-major order; whitespace is ignored.
    ///
    /// The grid size is inferred from the digit count (25 or 49).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::with_capacity(GridSize::Large.cell_count());
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let value = ch
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(CoreError::InvalidGridText { ch })?;
            values.push(value);
        }
        let size = GridSize::ALL
            .into_iter()
            .find(|size| size.cell_count() == values.len())
            .ok_or(CoreError::UnsupportedGridSize {
                side: values.len().isqrt(),
            })?;
        Self::from_values(size, values)
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = CoreError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}
