// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Lazily created sections, keyed by entry id.
//!
//! Sections live in a `BTreeMap`, so enumeration is in ascending entry id
//! order. That order only depends on which ids exist, which keeps it stable
//! for a fixed state and identical across replicas.
//!
//! The number of visible sections is tracked on every update, so `count` is
//! O(1) and always equals the length of `iter`.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::crdt::id::EntryId;

use super::entry::Entry;
use super::section::Section;
use super::users::UserRegistry;

/// All sections ever referenced.
#[derive(Clone, Debug, Default)]
pub struct EntryStore {
    sections: BTreeMap<EntryId, Section>,
    visible: usize,
}

impl EntryStore {
    /// Create an empty store.
    pub fn new() -> EntryStore {
        return EntryStore {
            sections: BTreeMap::new(),
            visible: 0,
        };
    }

    /// Get or create the section for an entry.
    ///
    /// Fresh sections are seeded with sentinel writes and start invisible,
    /// so creating one never changes the count.
    pub(crate) fn get_or_create(&mut self, id: EntryId) -> &mut Section {
        return self.sections.entry(id).or_insert_with(|| Section::new(id));
    }

    /// Get a section, if it has been referenced.
    #[inline]
    pub fn get(&self, id: EntryId) -> Option<&Section> {
        return self.sections.get(&id);
    }

    /// Mutate one section and recompute its view.
    ///
    /// This is the only way to change a section from outside the crate, so
    /// the visible count always sees the before and after state.
    pub fn update<F>(&mut self, id: EntryId, users: &UserRegistry, apply: F)
    where
        F: FnOnce(&mut Section),
    {
        let section = self.sections.entry(id).or_insert_with(|| Section::new(id));
        let was_visible = section.is_visible();

        apply(section);
        section.recompute(users);

        match (was_visible, section.is_visible()) {
            (false, true) => self.visible += 1,
            (true, false) => self.visible -= 1,
            _ => {}
        }
    }

    /// Recompute every section. Returns the number of sections visited.
    pub fn recompute_all(&mut self, users: &UserRegistry) -> usize {
        let mut visible = 0;
        for section in self.sections.values_mut() {
            section.recompute(users);
            if section.is_visible() {
                visible += 1;
            }
        }
        self.visible = visible;
        return self.sections.len();
    }

    /// Iterate over visible entries in ascending id order.
    pub fn iter(&self) -> Iter<'_> {
        return Iter {
            sections: self.sections.values(),
            remaining: self.visible,
        };
    }

    /// Iterate over every section, tombstones included.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        return self.sections.values();
    }

    /// Number of visible entries.
    #[inline]
    pub fn count(&self) -> usize {
        return self.visible;
    }

    /// Number of sections, tombstones included.
    #[inline]
    pub fn section_count(&self) -> usize {
        return self.sections.len();
    }
}

/// Iterator over the visible entries of a store.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    sections: btree_map::Values<'a, EntryId, Section>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        if self.remaining == 0 {
            return None;
        }
        for section in self.sections.by_ref() {
            if let Some(entry) = section.entry() {
                self.remaining -= 1;
                return Some(entry);
            }
        }
        return None;
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl ExactSizeIterator for Iter<'_> {}
