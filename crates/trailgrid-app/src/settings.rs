//! Runtime settings with command-line overrides.

use std::num::NonZero;

use trailgrid_core::GridSize;
use trailgrid_solver::BranchOrder;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Grid size used when none is given.
    pub size: GridSize,
    /// Branch order handed to the solver.
    pub order: BranchOrder,
    /// Number of path states kept for undo while playing.
    pub history_capacity: NonZero<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: GridSize::Small,
            order: BranchOrder::FewestOnwardMoves,
            history_capacity: trailgrid_game::Game::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl Settings {
    /// Replaces the grid size if one was given.
    #[must_use]
    pub fn with_size(mut self, size: Option<GridSize>) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        self
    }

    /// Replaces the branch order if one was given.
    #[must_use]
    pub fn with_order(mut self, order: Option<BranchOrder>) -> Self {
        if let Some(order) = order {
            self.order = order;
        }
        self
    }

    /// Replaces the history capacity if one was given.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: Option<NonZero<usize>>) -> Self {
        if let Some(capacity) = capacity {
            self.history_capacity = capacity;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_given_values() {
        let settings = Settings::default()
            .with_size(Some(GridSize::Large))
            .with_order(None)
            .with_history_capacity(NonZero::new(8));
        assert_eq!(settings.size, GridSize::Large);
        assert_eq!(settings.order, BranchOrder::FewestOnwardMoves);
        assert_eq!(settings.history_capacity.get(), 8);
    }
}
