// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Fingerprints of the materialized view.
//!
//! Two replicas that resolved to the same visible entries produce the same
//! digest, which is cheaper to exchange than the entries themselves.

use crate::list::Entry;

/// Type constant for view digests.
pub const TYPE_VIEW: u8 = 0x10;

/// A blake3 hash, 32 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; 32]);

/// Hash a sequence of entries, in the order given.
///
/// Names are length-prefixed so that no two distinct views share an
/// encoding.
pub fn hash_entries<'a, I>(entries: I) -> Digest
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut hasher = blake3::Hasher::new();
    hasher.update(&[TYPE_VIEW]);

    let mut count: u64 = 0;
    for entry in entries {
        hasher.update(&entry.id.0.to_le_bytes());
        hasher.update(&(entry.name.len() as u64).to_le_bytes());
        hasher.update(entry.name.as_bytes());
        hasher.update(&[entry.done as u8]);
        count += 1;
    }
    hasher.update(&count.to_le_bytes());

    return Digest(*hasher.finalize().as_bytes());
}

impl Digest {
    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        return self.0.iter().map(|b| format!("{:02x}", b)).collect();
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "Digest({})", self.to_hex());
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", self.to_hex());
    }
}
