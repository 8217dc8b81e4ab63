// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! A list shared across threads behind one lock.
//!
//! Registers are not built for concurrent mutation, so the whole engine
//! sits behind a single mutex. Every call takes the lock once and runs to
//! completion. Callers that need several reads to agree should use
//! [`SharedToDoList::with`] or [`SharedToDoList::snapshot`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::crdt::Crdt;
use crate::crdt::id::EntryId;
use crate::crdt::id::Timestamp;
use crate::crdt::id::UserId;
use crate::crdt::op::Op;
use crate::digest::Digest;
use crate::list::Entry;
use crate::list::ToDoList;

/// A cloneable handle to a list guarded by one mutex.
#[derive(Clone, Debug, Default)]
pub struct SharedToDoList {
    inner: Arc<Mutex<ToDoList>>,
}

impl SharedToDoList {
    /// Create a handle to a new empty list.
    pub fn new() -> SharedToDoList {
        return SharedToDoList::from_list(ToDoList::new());
    }

    /// Wrap an existing list.
    pub fn from_list(list: ToDoList) -> SharedToDoList {
        return SharedToDoList {
            inner: Arc::new(Mutex::new(list)),
        };
    }

    pub fn add_entry(&self, entry: EntryId, user: UserId, name: &str, timestamp: Timestamp) {
        self.inner.lock().add_entry(entry, user, name, timestamp);
    }

    pub fn remove_entry(&self, entry: EntryId, user: UserId, timestamp: Timestamp) {
        self.inner.lock().remove_entry(entry, user, timestamp);
    }

    pub fn mark_done(&self, entry: EntryId, user: UserId, timestamp: Timestamp) {
        self.inner.lock().mark_done(entry, user, timestamp);
    }

    pub fn mark_undone(&self, entry: EntryId, user: UserId, timestamp: Timestamp) {
        self.inner.lock().mark_undone(entry, user, timestamp);
    }

    pub fn dismiss_user(&self, user: UserId) {
        self.inner.lock().dismiss_user(user);
    }

    pub fn allow_user(&self, user: UserId) {
        self.inner.lock().allow_user(user);
    }

    pub fn apply(&self, op: &Op) {
        self.inner.lock().apply(op);
    }

    /// Merge a replica into the shared list.
    pub fn merge(&self, other: &ToDoList) {
        self.inner.lock().merge(other);
    }

    pub fn count(&self) -> usize {
        return self.inner.lock().count();
    }

    /// Copy out the visible entries under one lock.
    pub fn snapshot(&self) -> Vec<Entry> {
        return self.inner.lock().iter().cloned().collect();
    }

    pub fn digest(&self) -> Digest {
        return self.inner.lock().digest();
    }

    /// Run a closure against the list while holding the lock.
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&ToDoList) -> R,
    {
        let guard = self.inner.lock();
        return f(&guard);
    }
}
