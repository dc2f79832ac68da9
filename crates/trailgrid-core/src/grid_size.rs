//! Supported grid dimensions.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{CoreError, Position};

/// One of the two supported square grid sizes.
///
/// # Examples
///
/// ```
/// use trailgrid_core::{GridSize, Position};
///
/// assert_eq!(GridSize::Small.side(), 5);
/// assert_eq!(GridSize::Large.cell_count(), 49);
/// assert_eq!(GridSize::Large.start(), Position::new(3, 3));
/// assert_eq!("7".parse::<GridSize>()?, GridSize::Large);
/// # Ok::<(), trailgrid_core::CoreError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum GridSize {
    /// The 5×5 grid.
    Small,
    /// The 7×7 grid.
    Large,
}

impl GridSize {
    /// Both sizes, smallest first.
    pub const ALL: [Self; 2] = [Self::Small, Self::Large];

    /// Length of one side of the grid.
    #[must_use]
    #[inline]
    pub const fn side(self) -> u8 {
        match self {
            Self::Small => 5,
            Self::Large => 7,
        }
    }

    /// Number of cells in the grid.
    #[must_use]
    #[inline]
    pub const fn cell_count(self) -> usize {
        let side = self.side() as usize;
        side * side
    }

    /// Index of the center row and column.
    ///
    /// This also scales the per-size seed offset used by the generator.
    #[must_use]
    #[inline]
    pub const fn center_offset(self) -> u8 {
        self.side() / 2
    }

    /// The start cell, always the geometric center.
    #[must_use]
    #[inline]
    pub const fn start(self) -> Position {
        Position::new(self.center_offset(), self.center_offset())
    }

    /// Iterates over every position in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let side = self.side();
        (0..side).flat_map(move |row| (0..side).map(move |col| Position::new(row, col)))
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.side();
        write!(f, "{side}x{side}")
    }
}

impl TryFrom<usize> for GridSize {
    type Error = CoreError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            5 => Ok(Self::Small),
            7 => Ok(Self::Large),
            _ => Err(CoreError::UnsupportedGridSize { side }),
        }
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        usize::from(size.side())
    }
}

impl FromStr for GridSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("small") {
            return Ok(Self::Small);
        }
        if s.eq_ignore_ascii_case("large") {
            return Ok(Self::Large);
        }
        let side = s
            .parse::<usize>()
            .map_err(|_| CoreError::UnknownGridSizeName)?;
        Self::try_from(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        assert_eq!(GridSize::Small.side(), 5);
        assert_eq!(GridSize::Small.cell_count(), 25);
        assert_eq!(GridSize::Small.center_offset(), 2);
        assert_eq!(GridSize::Large.side(), 7);
        assert_eq!(GridSize::Large.center_offset(), 3);
    }

    #[test]
    fn positions_are_row_major() {
        let all: Vec<_> = GridSize::Small.positions().collect();
        assert_eq!(all.len(), 25);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(0, 1));
        assert_eq!(all[5], Position::new(1, 0));
        for (i, pos) in all.iter().enumerate() {
            assert_eq!(pos.index(GridSize::Small), i);
        }
    }

    #[test]
    fn parse_names_and_sides() {
        assert_eq!("small".parse::<GridSize>().unwrap(), GridSize::Small);
        assert_eq!("LARGE".parse::<GridSize>().unwrap(), GridSize::Large);
        assert_eq!("5".parse::<GridSize>().unwrap(), GridSize::Small);
        assert!(matches!(
            "6".parse::<GridSize>(),
            Err(CoreError::UnsupportedGridSize { side: 6 })
        ));
        assert!(matches!(
            "medium".parse::<GridSize>(),
            Err(CoreError::UnknownGridSizeName)
        ));
    }
}
