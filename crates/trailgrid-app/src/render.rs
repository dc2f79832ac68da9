//! Plain-text rendering of grids and paths.

use std::fmt::Write as _;

use trailgrid_core::{Grid, Path, Position};

/// Renders `grid` with row and column indices.
///
/// Cells on `path` are bracketed and the end of the path is marked with
/// angle brackets:
///
/// ```text
///     0  1  2  3  4
///  0  3  3  2  4  5
///  1  2  5  5  2  3
///  2  2 <2>[2] 5  1
/// ```
#[must_use]
pub(crate) fn render_board(grid: &Grid, path: Option<&Path>) -> String {
    let side = grid.size().side();
    let mut out = String::from("   ");
    for col in 0..side {
        let _ = write!(out, " {col} ");
    }
    out.push('\n');

    for (row, values) in (0..side).zip(grid.rows()) {
        let _ = write!(out, "{row:>2} ");
        for (col, value) in (0..side).zip(values) {
            let pos = Position::new(row, col);
            let (open, close) = match path {
                Some(path) if path.last() == pos => ('<', '>'),
                Some(path) if path.contains(&pos) => ('[', ']'),
                _ => (' ', ' '),
            };
            let _ = write!(out, "{open}{value}{close}");
        }
        out.push('\n');
    }
    out
}

/// Renders path cells as `(r, c) -> (r, c) -> ...`.
#[must_use]
pub(crate) fn render_path(path: &[Position]) -> String {
    path.iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
