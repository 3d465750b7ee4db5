//! Undo/redo: the call contract the shortcut handler consumes, and the
//! bounded snapshot stack the scene uses to honour it.

/// Undo/redo availability flags and operations.
pub trait History {
    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;
    /// Step back one state. Returns false when there is nothing to undo.
    fn undo(&mut self) -> bool;
    /// Step forward one state. Returns false when there is nothing to redo.
    fn redo(&mut self) -> bool;
}

/// Linear history of snapshots with a cursor.
///
/// `states[index]` is always the current state. Pushing while the cursor is
/// behind the newest state prunes the redo branch.
#[derive(Debug, Clone)]
pub struct HistoryStack<T> {
    states: Vec<T>,
    index: usize,
    capacity: usize,
}

impl<T: Clone> HistoryStack<T> {
    pub fn new(initial: T, capacity: usize) -> Self {
        Self {
            states: vec![initial],
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record a new current state.
    pub fn push(&mut self, state: T) {
        self.states.truncate(self.index + 1);
        self.states.push(state);
        if self.states.len() > self.capacity {
            let overflow = self.states.len() - self.capacity;
            self.states.drain(..overflow);
        }
        self.index = self.states.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.states.len()
    }

    /// Move the cursor back and return the state to restore.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.states.get(self.index)
    }

    /// Move the cursor forward and return the state to restore.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.states.get(self.index)
    }

    pub fn current(&self) -> &T {
        &self.states[self.index]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
