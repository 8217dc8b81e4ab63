// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The materialized, read-only view of one to-do entry.

use std::cmp::Ordering;

use thiserror::Error;

use crate::crdt::id::EntryId;
use crate::crdt::register::TieBreak;

/// Whether an entry has been completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntryState {
    #[default]
    Undone,
    Done,
}

/// Returned when an integer does not name an [`EntryState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid entry state {0}, expected 0 (undone) or 1 (done)")]
pub struct InvalidState(pub i32);

/// Undone wins a tie against Done.
impl TieBreak for EntryState {
    fn tie_break(&self, other: &Self) -> Ordering {
        return match (self, other) {
            (EntryState::Undone, EntryState::Done) => Ordering::Greater,
            (EntryState::Done, EntryState::Undone) => Ordering::Less,
            _ => Ordering::Equal,
        };
    }
}

impl TryFrom<i32> for EntryState {
    type Error = InvalidState;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        return match raw {
            0 => Ok(EntryState::Undone),
            1 => Ok(EntryState::Done),
            other => Err(InvalidState(other)),
        };
    }
}

impl From<EntryState> for i32 {
    fn from(state: EntryState) -> i32 {
        return match state {
            EntryState::Undone => 0,
            EntryState::Done => 1,
        };
    }
}

/// A visible entry as resolved from its section's registers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub done: bool,
}

impl Entry {
    /// Create an entry that is not done.
    pub fn undone(id: EntryId, name: impl Into<String>) -> Entry {
        return Entry { id, name: name.into(), done: false };
    }

    /// Create an entry that is done.
    pub fn done(id: EntryId, name: impl Into<String>) -> Entry {
        return Entry { id, name: name.into(), done: true };
    }

    /// The entry's state as an enum.
    #[inline]
    pub fn state(&self) -> EntryState {
        if self.done {
            return EntryState::Done;
        }
        return EntryState::Undone;
    }

    /// A copy of this entry marked done.
    pub fn mark_done(&self) -> Entry {
        return Entry::done(self.id, self.name.clone());
    }

    /// A copy of this entry marked undone.
    pub fn mark_undone(&self) -> Entry {
        return Entry::undone(self.id, self.name.clone());
    }
}
