// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Registry of writers and whether each may contribute to the view.
//!
//! Users are created lazily on first reference and start out allowed.
//! Nobody is ever removed: dismissing only flips a flag, so the user's
//! writes stay in the registers and come back when they are allowed again.
//!
//! - Get or create: O(1) average case (hash map)
//! - Allowance check: O(1)

use rustc_hash::FxHashMap;

use crate::crdt::id::UserId;

/// A writer and their current allowance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub allowed: bool,
}

impl User {
    /// Create a user that is allowed.
    pub fn new(id: UserId) -> User {
        return User { id, allowed: true };
    }
}

/// A table of every user seen so far.
#[derive(Clone, Debug, Default)]
pub struct UserRegistry {
    users: FxHashMap<UserId, User>,
}

impl UserRegistry {
    /// Create an empty registry.
    pub fn new() -> UserRegistry {
        return UserRegistry {
            users: FxHashMap::default(),
        };
    }

    /// Get or create a user, returning a mutable handle.
    pub fn get_or_create(&mut self, id: UserId) -> &mut User {
        return self.users.entry(id).or_insert_with(|| User::new(id));
    }

    /// Get a user, if they have been seen.
    #[inline]
    pub fn get(&self, id: UserId) -> Option<&User> {
        return self.users.get(&id);
    }

    /// Set a user's allowance, creating them if needed.
    /// Returns true if the flag changed.
    pub fn set_allowed(&mut self, id: UserId, allowed: bool) -> bool {
        let user = self.get_or_create(id);
        let changed = user.allowed != allowed;
        user.allowed = allowed;
        return changed;
    }

    /// Check whether a user's writes are visible.
    ///
    /// Users never seen are allowed.
    #[inline]
    pub fn is_allowed(&self, id: UserId) -> bool {
        return self.users.get(&id).is_none_or(|user| user.allowed);
    }

    /// Number of known users.
    #[inline]
    pub fn len(&self) -> usize {
        return self.users.len();
    }

    /// Check if no user has been seen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.users.is_empty();
    }

    /// Iterate over all known users, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        return self.users.values();
    }

    /// Number of users currently dismissed.
    pub fn dismissed_count(&self) -> usize {
        return self.users.values().filter(|user| !user.allowed).count();
    }
}
