// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! A multi-user to-do list that merges edits without coordination.
//!
//! Each entry is a [`Section`] of three last-writer-wins registers
//! (existence, name, done state). Every edit writes into one or two of
//! them and re-resolves that section; every permission change re-resolves
//! all of them. Enumeration only ever reads the cached result.
//!
//! The externally visible state is a pure function of the retained writes
//! and the set of allowed users, so the order in which edits arrive does
//! not matter.
//!
//! ```
//! use together_todo::list::ToDoList;
//! use together_todo::crdt::id::{EntryId, Timestamp, UserId};
//!
//! let mut list = ToDoList::new();
//! list.add_entry(EntryId(1), UserId(7), "Buy milk", Timestamp(10));
//! list.mark_done(EntryId(1), UserId(3), Timestamp(11));
//!
//! let entry = list.get(EntryId(1)).unwrap();
//! assert_eq!(entry.name, "Buy milk");
//! assert!(entry.done);
//!
//! list.dismiss_user(UserId(3));
//! assert!(!list.get(EntryId(1)).unwrap().done);
//! ```

mod entry;
mod section;
mod store;
mod users;

pub use entry::Entry;
pub use entry::EntryState;
pub use entry::InvalidState;
pub use section::Section;
pub use store::EntryStore;
pub use store::Iter;
pub use users::User;
pub use users::UserRegistry;

use log::debug;
use log::trace;

use crate::crdt::Crdt;
use crate::crdt::id::EntryId;
use crate::crdt::id::Timestamp;
use crate::crdt::id::UserId;
use crate::crdt::op::Op;
use crate::crdt::op::OpLog;
use crate::digest::Digest;
use crate::digest::hash_entries;

/// The conflict-resolution engine behind a shared to-do list.
///
/// All operations are total: unknown entries and users are created on
/// demand, and late or conflicting edits are resolved rather than rejected.
#[derive(Clone, Debug, Default)]
pub struct ToDoList {
    users: UserRegistry,
    store: EntryStore,
}

impl ToDoList {
    /// Create an empty list.
    pub fn new() -> ToDoList {
        return ToDoList {
            users: UserRegistry::new(),
            store: EntryStore::new(),
        };
    }

    /// Assert that an entry exists with the given name.
    pub fn add_entry(&mut self, entry: EntryId, user: UserId, name: &str, timestamp: Timestamp) {
        trace!("event=add entry={} user={} ts={}", entry, user, timestamp);
        self.users.get_or_create(user);
        self.store.update(entry, &self.users, |section| {
            section.apply_add(user, timestamp, name);
        });
    }

    /// Assert that an entry does not exist.
    pub fn remove_entry(&mut self, entry: EntryId, user: UserId, timestamp: Timestamp) {
        trace!("event=remove entry={} user={} ts={}", entry, user, timestamp);
        self.users.get_or_create(user);
        self.store.update(entry, &self.users, |section| {
            section.apply_remove(user, timestamp);
        });
    }

    /// Assert that an entry is done.
    pub fn mark_done(&mut self, entry: EntryId, user: UserId, timestamp: Timestamp) {
        self.mark(entry, user, timestamp, EntryState::Done);
    }

    /// Assert that an entry is not done.
    pub fn mark_undone(&mut self, entry: EntryId, user: UserId, timestamp: Timestamp) {
        self.mark(entry, user, timestamp, EntryState::Undone);
    }

    /// Assert an entry's state.
    pub fn mark(&mut self, entry: EntryId, user: UserId, timestamp: Timestamp, state: EntryState) {
        trace!("event=mark entry={} user={} ts={} state={:?}", entry, user, timestamp, state);
        self.users.get_or_create(user);
        self.store.update(entry, &self.users, |section| {
            section.apply_mark(user, timestamp, state);
        });
    }

    /// Hide every write by a user, past and future, until they are allowed again.
    pub fn dismiss_user(&mut self, user: UserId) {
        self.set_allowed(user, false);
    }

    /// Make a user's writes visible again.
    pub fn allow_user(&mut self, user: UserId) {
        self.set_allowed(user, true);
    }

    fn set_allowed(&mut self, user: UserId, allowed: bool) {
        let changed = self.users.set_allowed(user, allowed);
        let visited = self.store.recompute_all(&self.users);
        debug!(
            "event=permission_change user={} allowed={} changed={} dismissed={} sections={} visible={}",
            user, allowed, changed, self.users.dismissed_count(), visited, self.store.count()
        );
    }

    /// Apply an operation.
    pub fn apply(&mut self, op: &Op) {
        match op {
            Op::Add { entry, user, timestamp, name } => {
                self.add_entry(*entry, *user, name, *timestamp);
            }
            Op::Remove { entry, user, timestamp } => {
                self.remove_entry(*entry, *user, *timestamp);
            }
            Op::MarkDone { entry, user, timestamp } => {
                self.mark_done(*entry, *user, *timestamp);
            }
            Op::MarkUndone { entry, user, timestamp } => {
                self.mark_undone(*entry, *user, *timestamp);
            }
            Op::Dismiss { user } => self.dismiss_user(*user),
            Op::Allow { user } => self.allow_user(*user),
        }
    }

    /// Apply every operation in a log, in order.
    pub fn replay(&mut self, log: &OpLog) {
        let mut permission_changes = 0;
        for op in log {
            if op.is_permission_change() {
                permission_changes += 1;
            }
            self.apply(op);
        }
        debug!(
            "event=replay ops={} permission_changes={} sections={} visible={}",
            log.len(), permission_changes, self.store.section_count(), self.store.count()
        );
    }

    /// Iterate over visible entries in ascending id order.
    ///
    /// The iterator is finite and can be restarted by calling `iter` again.
    pub fn iter(&self) -> Iter<'_> {
        return self.store.iter();
    }

    /// Number of visible entries. Always equal to `self.iter().count()`.
    #[inline]
    pub fn count(&self) -> usize {
        return self.store.count();
    }

    /// Check if no entry is visible.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.store.count() == 0;
    }

    /// Get a visible entry.
    pub fn get(&self, entry: EntryId) -> Option<&Entry> {
        return self.store.get(entry).and_then(|section| section.entry());
    }

    /// Get the section behind an entry, visible or not.
    pub fn section(&self, entry: EntryId) -> Option<&Section> {
        return self.store.get(entry);
    }

    /// Number of sections ever referenced, tombstones included.
    #[inline]
    pub fn section_count(&self) -> usize {
        return self.store.section_count();
    }

    /// Check whether a user's writes are currently visible.
    #[inline]
    pub fn is_allowed(&self, user: UserId) -> bool {
        return self.users.is_allowed(user);
    }

    /// The user registry.
    pub fn users(&self) -> &UserRegistry {
        return &self.users;
    }

    /// A fingerprint of the visible entries.
    pub fn digest(&self) -> Digest {
        return hash_entries(self.iter());
    }
}

/// Merge another replica's writes into this one.
///
/// Allowance is local: users first seen through the merge start out
/// allowed, and flags already set on this replica are kept.
impl Crdt for ToDoList {
    fn merge(&mut self, other: &Self) {
        for user in other.users.iter() {
            self.users.get_or_create(user.id);
        }
        for section in other.store.sections() {
            for user in section.writers() {
                self.users.get_or_create(user);
            }
            self.store.get_or_create(section.id()).merge_writes(section);
        }

        let visited = self.store.recompute_all(&self.users);
        debug!(
            "event=merge sections={} visible={} users={}",
            visited, self.store.count(), self.users.len()
        );
    }
}

impl<'a> IntoIterator for &'a ToDoList {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl Extend<Op> for ToDoList {
    fn extend<I: IntoIterator<Item = Op>>(&mut self, iter: I) {
        for op in iter {
            self.apply(&op);
        }
    }
}
