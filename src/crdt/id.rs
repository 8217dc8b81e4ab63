// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Identifier types for list entries, writers, and logical time.
//!
//! All three are caller-chosen. The engine never allocates identities and
//! never interprets a timestamp beyond comparing it.

use std::fmt;

/// Identity of one to-do entry.
///
/// Entry identities are never invalidated: the section behind an id lives
/// for as long as the list does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub i32);

/// Identity of a writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i32);

impl UserId {
    /// The reserved "no writer" identity used for sentinel writes.
    ///
    /// Sentinel writes are only ever a fallback and never compete with real
    /// writes, so a real writer may use the same value without conflict.
    pub const NOBODY: UserId = UserId(i32::MIN);

    /// Check if this is the reserved sentinel identity.
    #[inline]
    pub fn is_nobody(&self) -> bool {
        return *self == UserId::NOBODY;
    }
}

/// An opaque, totally ordered logical timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The smallest timestamp, carried by sentinel writes.
    pub const MIN: Timestamp = Timestamp(i64::MIN);
}

impl From<i32> for EntryId {
    fn from(id: i32) -> Self {
        return EntryId(id);
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        return UserId(id);
    }
}

impl From<i64> for Timestamp {
    fn from(time: i64) -> Self {
        return Timestamp(time);
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nobody() {
            return write!(f, "nobody");
        }
        return write!(f, "{}", self.0);
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
