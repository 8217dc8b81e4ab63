// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! CRDT primitives for the shared list.

pub mod id;
pub mod op;
pub mod register;

/// A CRDT is a data type with a merge operator that is commutative,
/// associative, and idempotent.
pub trait Crdt {
    /// Merge another instance into this one.
    fn merge(&mut self, other: &Self);
}
