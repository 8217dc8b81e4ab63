// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The three registers behind one entry, plus its materialized view.
//!
//! A section is never deleted. Removing an entry writes `false` into the
//! existence register, which leaves a tombstone that later adds (or a
//! permission change) can outvote.

use log::trace;

use crate::crdt::id::EntryId;
use crate::crdt::id::Timestamp;
use crate::crdt::id::UserId;
use crate::crdt::register::Register;
use crate::crdt::register::Write;

use super::entry::Entry;
use super::entry::EntryState;
use super::users::UserRegistry;

/// Registers and cached view for one entry.
#[derive(Clone, Debug)]
pub struct Section {
    id: EntryId,
    existence: Register<bool>,
    name: Register<String>,
    state: Register<EntryState>,
    /// Cached resolution of the registers. Only meaningful if `visible`.
    entry: Entry,
    visible: bool,
}

impl Section {
    /// Create a section seeded with sentinel writes: absent, unnamed, undone.
    pub fn new(id: EntryId) -> Section {
        return Section {
            id,
            existence: Register::new(false),
            name: Register::new(String::new()),
            state: Register::new(EntryState::Undone),
            entry: Entry::undone(id, ""),
            visible: false,
        };
    }

    /// The entry this section belongs to.
    #[inline]
    pub fn id(&self) -> EntryId {
        return self.id;
    }

    /// Record an add: existence and name at the same timestamp.
    pub(crate) fn apply_add(&mut self, user: UserId, timestamp: Timestamp, name: &str) {
        self.existence.write(Write::new(true, user, timestamp));
        self.name.write(Write::new(name.to_string(), user, timestamp));
    }

    /// Record a removal. The name and state registers are left alone.
    pub(crate) fn apply_remove(&mut self, user: UserId, timestamp: Timestamp) {
        self.existence.write(Write::new(false, user, timestamp));
    }

    /// Record a mark. Only the state register is touched.
    pub(crate) fn apply_mark(&mut self, user: UserId, timestamp: Timestamp, state: EntryState) {
        self.state.write(Write::new(state, user, timestamp));
    }

    /// Re-resolve every register against the current allowance.
    pub(crate) fn recompute(&mut self, users: &UserRegistry) {
        let allowed = |user: UserId| users.is_allowed(user);

        self.visible = *self.existence.resolve(allowed);
        let name = self.name.resolve(allowed);
        let done = *self.state.resolve(allowed) == EntryState::Done;

        if self.entry.name != *name {
            self.entry.name.clone_from(name);
        }
        self.entry.done = done;

        trace!(
            "event=section_recompute entry={} visible={} done={}",
            self.id, self.visible, done
        );
    }

    /// The materialized entry, if it currently exists.
    #[inline]
    pub fn entry(&self) -> Option<&Entry> {
        if self.visible {
            return Some(&self.entry);
        }
        return None;
    }

    /// Check whether the resolved existence is true.
    #[inline]
    pub fn is_visible(&self) -> bool {
        return self.visible;
    }

    /// The existence register.
    pub fn existence(&self) -> &Register<bool> {
        return &self.existence;
    }

    /// The name register.
    pub fn name(&self) -> &Register<String> {
        return &self.name;
    }

    /// The state register.
    pub fn state(&self) -> &Register<EntryState> {
        return &self.state;
    }

    /// Every user with a retained write in any of the three registers.
    pub fn writers(&self) -> impl Iterator<Item = UserId> + '_ {
        let existence = self.existence.writes().iter().map(|w| w.user);
        let name = self.name.writes().iter().map(|w| w.user);
        let state = self.state.writes().iter().map(|w| w.user);
        return existence.chain(name).chain(state);
    }

    /// Fold another replica's writes for the same entry into this one.
    ///
    /// The caller is responsible for recomputing afterwards.
    pub(crate) fn merge_writes(&mut self, other: &Section) {
        use crate::crdt::Crdt;

        debug_assert_eq!(self.id, other.id);
        self.existence.merge(&other.existence);
        self.name.merge(&other.name);
        self.state.merge(&other.state);
    }
}
