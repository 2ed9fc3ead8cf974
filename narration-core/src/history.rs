//! Two-stack command history.
//!
//! Commands are plain values; they touch only the target handed to
//! [`Command::apply`] / [`Command::invert`], so one log can be replayed
//! against any collection of the right shape.

use std::collections::VecDeque;

/// A reversible edit of `T`.
pub trait Command<T> {
    fn apply(&self, target: &mut T);
    fn invert(&self, target: &mut T);
}

pub struct UndoLog<C> {
    undo_stack: VecDeque<C>,
    redo_stack: VecDeque<C>,
    max_depth: usize,
}

impl<C> UndoLog<C> {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Apply `command` to `target` and make it the newest undo entry.
    /// Any redo history is discarded.
    pub fn execute<T>(&mut self, command: C, target: &mut T)
    where
        C: Command<T>,
    {
        command.apply(target);
        self.record(command);
    }

    /// Record a command whose effect is already present in the target.
    pub fn record(&mut self, command: C) {
        self.undo_stack.push_back(command);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Returns false when there was nothing to undo.
    pub fn undo<T>(&mut self, target: &mut T) -> bool
    where
        C: Command<T>,
    {
        let Some(command) = self.undo_stack.pop_back() else {
            return false;
        };
        command.invert(target);
        self.redo_stack.push_back(command);
        true
    }

    pub fn redo<T>(&mut self, target: &mut T) -> bool
    where
        C: Command<T>,
    {
        let Some(command) = self.redo_stack.pop_back() else {
            return false;
        };
        command.apply(target);
        self.undo_stack.push_back(command);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Edit {
        Push(i32),
        Set { index: usize, from: i32, to: i32 },
    }

    impl Command<Vec<i32>> for Edit {
        fn apply(&self, target: &mut Vec<i32>) {
            match *self {
                Edit::Push(v) => target.push(v),
                Edit::Set { index, to, .. } => target[index] = to,
            }
        }

        fn invert(&self, target: &mut Vec<i32>) {
            match *self {
                Edit::Push(_) => {
                    target.pop();
                }
                Edit::Set { index, from, .. } => target[index] = from,
            }
        }
    }

    #[test]
    fn test_undo_redo_lifo() {
        let mut log = UndoLog::new(10);
        let mut values = Vec::new();
        log.execute(Edit::Push(1), &mut values);
        log.execute(Edit::Push(2), &mut values);
        log.execute(Edit::Set { index: 0, from: 1, to: 9 }, &mut values);
        assert_eq!(values, vec![9, 2]);

        assert!(log.undo(&mut values));
        assert_eq!(values, vec![1, 2]);
        assert!(log.undo(&mut values));
        assert_eq!(values, vec![1]);
        assert!(log.can_redo());

        assert!(log.redo(&mut values));
        assert!(log.redo(&mut values));
        assert_eq!(values, vec![9, 2]);
        assert!(!log.can_redo());
    }

    #[test]
    fn test_execute_clears_redo() {
        let mut log = UndoLog::new(10);
        let mut values = Vec::new();
        log.execute(Edit::Push(1), &mut values);
        log.undo(&mut values);
        assert!(log.can_redo());
        log.execute(Edit::Push(5), &mut values);
        assert!(!log.can_redo());
        assert_eq!(values, vec![5]);
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut log: UndoLog<Edit> = UndoLog::new(10);
        let mut values = vec![3];
        assert!(!log.undo(&mut values));
        assert!(!log.redo(&mut values));
        assert_eq!(values, vec![3]);
    }

    #[test]
    fn test_max_depth_drops_oldest() {
        let mut log = UndoLog::new(2);
        let mut values = Vec::new();
        for v in 0..4 {
            log.execute(Edit::Push(v), &mut values);
        }
        assert_eq!(log.undo_len(), 2);
        while log.undo(&mut values) {}
        assert_eq!(values, vec![0, 1]);
    }

    #[test]
    fn test_record_skips_apply() {
        let mut log = UndoLog::new(4);
        let mut values = vec![7];
        log.record(Edit::Push(7));
        assert_eq!(values, vec![7]);
        log.undo(&mut values);
        assert!(values.is_empty());
        log.clear();
        assert!(!log.can_undo() && !log.can_redo());
    }
}
