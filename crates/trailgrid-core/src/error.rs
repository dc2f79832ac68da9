use crate::Position;

/// Errors produced when building grids or paths from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CoreError {
    /// The side length is neither 5 nor 7.
    #[display("unsupported grid size: {side}x{side}")]
    UnsupportedGridSize {
        /// The rejected side length.
        side: usize,
    },
    /// A grid size name could not be recognized.
    #[display("unknown grid size name")]
    UnknownGridSizeName,
    /// A row does not have as many cells as the grid has rows.
    #[display("row {row} has {len} cells, expected {expected}")]
    NonSquareGrid {
        /// Index of the offending row.
        row: usize,
        /// Number of cells found in the row.
        len: usize,
        /// Required number of cells.
        expected: usize,
    },
    /// A cell value is outside `1..=5`.
    #[display("cell value {value} at {pos} is outside 1..=5")]
    CellValueOutOfRange {
        /// Location of the value.
        pos: Position,
        /// The rejected value.
        value: u8,
    },
    /// Grid text contained an unexpected character.
    #[display("invalid grid text character {ch:?}")]
    InvalidGridText {
        /// The rejected character.
        ch: char,
    },
    /// A position lies outside the grid.
    #[display("position {pos} is outside the grid")]
    PositionOutOfBounds {
        /// The rejected position.
        pos: Position,
    },
    /// A path does not begin at the grid's start cell.
    #[display("path starts at {found}, expected {expected}")]
    PathStartMismatch {
        /// The grid's start cell.
        expected: Position,
        /// The first cell of the rejected path.
        found: Position,
    },
    /// A path is empty.
    #[display("path is empty")]
    EmptyPath,
    /// A step breaks the movement rules.
    #[display("illegal move from {from} to {to}")]
    IllegalMove {
        /// Current end of the path.
        from: Position,
        /// The rejected destination.
        to: Position,
    },
}
