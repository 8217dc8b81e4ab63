// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Last-writer-wins registers with per-user retention.
//!
//! A register is one field of one entry. Unlike a classic LWW register,
//! which keeps only the global winner, this one keeps the best write of
//! *every* user. Dismissing a user hides their writes; allowing them again
//! brings the same writes back, so nothing may be thrown away.
//!
//! # Ordering
//!
//! Writes are totally ordered, and the greatest allowed write wins:
//!
//! 1. Higher timestamp wins.
//! 2. On a timestamp tie, the field's [`TieBreak`] decides.
//! 3. On a full tie, the lower user id wins.
//!
//! Complexity:
//! - write: O(u) where u is the number of users who wrote this field
//! - resolve: O(u)
//! - merge: O(u * u')

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::Crdt;
use super::id::Timestamp;
use super::id::UserId;

/// Field-specific ordering of two values written at the same timestamp.
///
/// `Ordering::Greater` means `self` beats `other`.
pub trait TieBreak {
    fn tie_break(&self, other: &Self) -> Ordering;
}

/// Removal beats creation: `false` wins a tie against `true`.
impl TieBreak for bool {
    fn tie_break(&self, other: &Self) -> Ordering {
        return other.cmp(self);
    }
}

/// The lexicographically greater name wins.
impl TieBreak for String {
    fn tie_break(&self, other: &Self) -> Ordering {
        return self.as_str().cmp(other.as_str());
    }
}

/// A single immutable fact: `user` asserted `value` at `timestamp`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Write<T> {
    pub value: T,
    pub user: UserId,
    pub timestamp: Timestamp,
}

impl<T> Write<T> {
    /// Create a new write.
    pub fn new(value: T, user: UserId, timestamp: Timestamp) -> Write<T> {
        return Write { value, user, timestamp };
    }

    /// The sentinel write seeded into every fresh register.
    pub fn sentinel(value: T) -> Write<T> {
        return Write {
            value,
            user: UserId::NOBODY,
            timestamp: Timestamp::MIN,
        };
    }
}

impl<T: TieBreak> Write<T> {
    /// Compare two writes. `Greater` means `self` wins.
    pub fn precedence(&self, other: &Write<T>) -> Ordering {
        return self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| self.value.tie_break(&other.value))
            .then_with(|| other.user.cmp(&self.user));
    }
}

/// One conflict-resolving field, holding at most one write per user.
#[derive(Clone, Debug)]
pub struct Register<T> {
    /// Fallback when no allowed user has written.
    seed: Write<T>,
    /// Best write per user, in first-write order.
    writes: SmallVec<[Write<T>; 2]>,
}

impl<T: TieBreak> Register<T> {
    /// Create a register resolving to `seed` until someone writes.
    pub fn new(seed: T) -> Register<T> {
        return Register {
            seed: Write::sentinel(seed),
            writes: SmallVec::new(),
        };
    }

    /// Record a write.
    ///
    /// If the user already has a retained write, the greater of the two is
    /// kept, so replaying an older or identical write is a no-op.
    /// Returns true if the retained set changed.
    pub fn write(&mut self, write: Write<T>) -> bool {
        if let Some(slot) = self.writes.iter_mut().find(|w| w.user == write.user) {
            if write.precedence(slot) == Ordering::Greater {
                *slot = write;
                return true;
            }
            return false;
        }

        self.writes.push(write);
        return true;
    }

    /// The winning write among users accepted by `allowed`, if any.
    pub fn winner<F>(&self, allowed: F) -> Option<&Write<T>>
    where
        F: Fn(UserId) -> bool,
    {
        return self.writes
            .iter()
            .filter(|w| allowed(w.user))
            .max_by(|a, b| a.precedence(b));
    }

    /// Resolve the field's value for the given allowance.
    ///
    /// Falls back to the sentinel value when no allowed user has written.
    pub fn resolve<F>(&self, allowed: F) -> &T
    where
        F: Fn(UserId) -> bool,
    {
        return match self.winner(allowed) {
            Some(write) => &write.value,
            None => &self.seed.value,
        };
    }

    /// The sentinel write.
    #[inline]
    pub fn seed(&self) -> &Write<T> {
        return &self.seed;
    }

    /// All retained writes, one per user.
    #[inline]
    pub fn writes(&self) -> &[Write<T>] {
        return &self.writes;
    }

    /// Look up the retained write for a user.
    pub fn write_of(&self, user: UserId) -> Option<&Write<T>> {
        return self.writes.iter().find(|w| w.user == user);
    }
}

impl<T: TieBreak + Clone> Crdt for Register<T> {
    fn merge(&mut self, other: &Self) {
        for write in other.writes.iter() {
            self.write(write.clone());
        }
    }
}
