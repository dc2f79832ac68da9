use trailgrid_core::CoreError;

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The requested move was rejected.
    #[display("move rejected: {_0}")]
    Move(#[from] CoreError),
    /// A saved path does not fit the regenerated grid.
    #[display("saved path is invalid: {_0}")]
    #[from(ignore)]
    InvalidSnapshot(CoreError),
    /// A saved par cannot belong to the saved puzzle.
    #[display("saved par {par} is out of range")]
    ParOutOfRange {
        /// The rejected par.
        par: usize,
    },
    /// A solver result does not describe a legal path on this grid.
    #[display("solution does not match the puzzle")]
    SolutionMismatch,
}

#[cfg(test)]
mod tests {
    use trailgrid_core::Position;

    use super::*;

    #[test]
    fn core_errors_convert_to_rejected_moves() {
        let err = GameError::from(CoreError::PositionOutOfBounds {
            pos: Position::new(9, 9),
        });
        assert!(err.is_move());
        assert_eq!(err.to_string(), "move rejected: position (9, 9) is outside the grid");
    }
}
