//! Grid cell coordinates.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::GridSize;

/// Offsets of the eight king-move neighbours, in exploration order.
///
/// The order is row-major around the cell: the row above left to right, then
/// the left and right cells, then the row below left to right.
pub const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A zero-indexed `(row, col)` cell coordinate.
///
/// # Examples
///
/// ```
/// use trailgrid_core::Position;
///
/// let center = Position::new(2, 2);
/// assert!(center.is_adjacent(Position::new(1, 3)));
/// assert!(!center.is_adjacent(center));
/// assert!(!center.is_adjacent(Position::new(0, 2)));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "[u8; 2]", into = "[u8; 2]")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns `true` if `other` is one king move away from `self`.
    ///
    /// A position is never adjacent to itself.
    #[must_use]
    #[inline]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr != 0 || dc != 0)
    }

    /// Returns `true` if the position lies inside a grid of the given size.
    #[must_use]
    #[inline]
    pub const fn is_within(self, size: GridSize) -> bool {
        self.row < size.side() && self.col < size.side()
    }

    /// Moves by `(dr, dc)`, returning `None` if the result leaves the grid.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8, size: GridSize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let pos = Self::new(row, col);
        pos.is_within(size).then_some(pos)
    }

    /// Iterates over the in-bounds neighbours in [`NEIGHBOR_OFFSETS`] order.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailgrid_core::{GridSize, Position};
    ///
    /// let corner = Position::new(0, 0);
    /// let neighbors: Vec<_> = corner.neighbors(GridSize::Small).collect();
    /// assert_eq!(
    ///     neighbors,
    ///     [Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
    /// );
    /// ```
    pub fn neighbors(self, size: GridSize) -> impl Iterator<Item = Self> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc, size))
    }

    /// Returns the row-major index of this position in a grid of the given size.
    #[must_use]
    #[inline]
    pub const fn index(self, size: GridSize) -> usize {
        self.row as usize * size.side() as usize + self.col as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<[u8; 2]> for Position {
    fn from([row, col]: [u8; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for [u8; 2] {
    fn from(pos: Position) -> Self {
        [pos.row, pos.col]
    }
}
