use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trailgrid_core::{GridSize, Position};

/// Serializable progress of a [`Game`](crate::Game).
///
/// Only the inputs of generation are stored. The grid itself is regenerated
/// from `date` and `size` on restore.
///
/// ```
/// use chrono::NaiveDate;
/// use trailgrid_core::{GridSize, Position};
/// use trailgrid_game::GameSnapshot;
///
/// let snapshot = GameSnapshot {
///     date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
///     size: GridSize::Small,
///     path: vec![Position::new(2, 2), Position::new(2, 1)],
///     optimal_length: Some(17),
/// };
/// let json = serde_json::to_string(&snapshot).unwrap();
/// assert_eq!(
///     json,
///     r#"{"date":"2024-03-07","size":5,"path":[[2,2],[2,1]],"optimal_length":17}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Puzzle date.
    pub date: NaiveDate,
    /// Grid size, stored as its side length.
    pub size: GridSize,
    /// Path cells as `[row, col]` pairs, start first.
    pub path: Vec<Position>,
    /// Par, if it was known when saving.
    #[serde(default)]
    pub optimal_length: Option<usize>,
}
