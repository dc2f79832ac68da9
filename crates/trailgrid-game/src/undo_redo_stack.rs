use std::{collections::VecDeque, num::NonZero};

/// Bounded undo/redo history of whole-state snapshots.
///
/// The cursor points at the current snapshot. Recording after an undo drops
/// every snapshot past the cursor; recording at capacity drops the oldest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UndoRedoStack<T> {
    entries: VecDeque<T>,
    capacity: NonZero<usize>,
    cursor: usize,
}

impl<T> UndoRedoStack<T> {
    /// Creates a history whose only snapshot is `initial`.
    pub(crate) fn new(initial: T, capacity: NonZero<usize>) -> Self {
        Self {
            entries: VecDeque::from([initial]),
            capacity,
            cursor: 0,
        }
    }

    pub(crate) fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub(crate) fn record(&mut self, item: T) {
        self.entries.truncate(self.cursor + 1);
        if self.entries.len() == self.capacity.get() {
            self.entries.pop_front();
        }
        self.entries.push_back(item);
        self.cursor = self.entries.len() - 1;
    }

    pub(crate) fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub(crate) fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub(crate) fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub(crate) fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::UndoRedoStack;

    fn stack(capacity: usize) -> UndoRedoStack<i32> {
        UndoRedoStack::new(0, NonZero::new(capacity).unwrap())
    }

    #[test]
    fn undo_redo_roundtrip() {
        let mut history = stack(10);
        history.record(1);
        history.record(2);

        assert_eq!(history.current(), &2);
        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.undo(), Some(&0));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some(&1));
        assert_eq!(history.redo(), Some(&2));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn record_after_undo_drops_redo_branch() {
        let mut history = stack(10);
        history.record(1);
        history.record(2);
        history.undo();
        history.record(3);

        assert!(!history.can_redo());
        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.redo(), Some(&3));
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut history = stack(3);
        history.record(1);
        history.record(2);
        history.record(3);

        assert_eq!(history.current(), &3);
        assert_eq!(history.undo(), Some(&2));
        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn fresh_history_cannot_move() {
        let mut history = stack(1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), None);
        history.record(7);
        assert_eq!(history.current(), &7);
        assert!(!history.can_undo());
    }
}
