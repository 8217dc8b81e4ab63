// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Operations on a shared list, as plain data.
//!
//! Every mutating call on [`ToDoList`](crate::list::ToDoList) has a
//! matching `Op` variant, so a host can queue, log, or forward edits and
//! replay them later with [`ToDoList::apply`](crate::list::ToDoList::apply).
//!
//! Replay order does not matter for the resolved view: writes are ordered by
//! (timestamp, value, user), never by arrival. Only the relative order of
//! permission changes is significant, since the last toggle for a user wins.

use super::id::EntryId;
use super::id::Timestamp;
use super::id::UserId;

/// A single edit or permission change.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Create (or re-create) an entry and set its name.
    Add {
        entry: EntryId,
        user: UserId,
        timestamp: Timestamp,
        name: String,
    },

    /// Remove an entry, leaving a tombstone.
    Remove {
        entry: EntryId,
        user: UserId,
        timestamp: Timestamp,
    },

    /// Mark an entry done.
    MarkDone {
        entry: EntryId,
        user: UserId,
        timestamp: Timestamp,
    },

    /// Mark an entry undone.
    MarkUndone {
        entry: EntryId,
        user: UserId,
        timestamp: Timestamp,
    },

    /// Hide every write by a user.
    Dismiss { user: UserId },

    /// Make a user's writes visible again.
    Allow { user: UserId },
}

impl Op {
    /// Create an add operation.
    pub fn add(entry: EntryId, user: UserId, name: impl Into<String>, timestamp: Timestamp) -> Op {
        return Op::Add { entry, user, timestamp, name: name.into() };
    }

    /// Create a remove operation.
    pub fn remove(entry: EntryId, user: UserId, timestamp: Timestamp) -> Op {
        return Op::Remove { entry, user, timestamp };
    }

    /// Create a mark-done operation.
    pub fn mark_done(entry: EntryId, user: UserId, timestamp: Timestamp) -> Op {
        return Op::MarkDone { entry, user, timestamp };
    }

    /// Create a mark-undone operation.
    pub fn mark_undone(entry: EntryId, user: UserId, timestamp: Timestamp) -> Op {
        return Op::MarkUndone { entry, user, timestamp };
    }

    /// The entry an edit targets, or None for permission changes.
    pub fn entry(&self) -> Option<EntryId> {
        return match self {
            Op::Add { entry, .. }
            | Op::Remove { entry, .. }
            | Op::MarkDone { entry, .. }
            | Op::MarkUndone { entry, .. } => Some(*entry),
            Op::Dismiss { .. } | Op::Allow { .. } => None,
        };
    }

    /// The user the operation is attributed to.
    pub fn user(&self) -> UserId {
        return match self {
            Op::Add { user, .. }
            | Op::Remove { user, .. }
            | Op::MarkDone { user, .. }
            | Op::MarkUndone { user, .. }
            | Op::Dismiss { user }
            | Op::Allow { user } => *user,
        };
    }

    /// Check if this changes permissions rather than entry data.
    pub fn is_permission_change(&self) -> bool {
        return matches!(self, Op::Dismiss { .. } | Op::Allow { .. });
    }
}

/// An ordered batch of operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpLog {
    ops: Vec<Op>,
}

impl OpLog {
    /// Create a new empty operation log.
    pub fn new() -> OpLog {
        return OpLog { ops: Vec::new() };
    }

    /// Append an operation.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Get all operations, in append order.
    pub fn ops(&self) -> &[Op] {
        return &self.ops;
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        return self.ops.len();
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        return self.ops.is_empty();
    }

    /// Iterate over operations, in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        return self.ops.iter();
    }
}

impl FromIterator<Op> for OpLog {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        return OpLog { ops: iter.into_iter().collect() };
    }
}

impl<'a> IntoIterator for &'a OpLog {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        return self.ops.iter();
    }
}
