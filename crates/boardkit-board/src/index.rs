//! Position-indexed lookup from a site to its occupant.

use boardkit_arena::EntryHandle;
use indexmap::IndexMap;
use std::hash::Hash;

/// Map from an occupied site to the pool entry placed there.
///
/// Holds handles only; the pool owns the entries. At most one occupant per
/// site. Iteration follows placement order, and removing a placement keeps
/// the relative order of the others.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionIndex<S: Hash + Eq> {
    occupants: IndexMap<S, EntryHandle>,
}

impl<S: Hash + Eq> PositionIndex<S> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            occupants: IndexMap::new(),
        }
    }

    /// Handle of the entry placed at `site`.
    pub fn occupant(&self, site: &S) -> Option<EntryHandle> {
        self.occupants.get(site).copied()
    }

    /// Whether some entry is placed at `site`.
    pub fn is_occupied(&self, site: &S) -> bool {
        self.occupants.contains_key(site)
    }

    /// Record `handle` at `site`.
    ///
    /// Returns `false`, leaving the index unchanged, if `site` is taken.
    pub fn insert(&mut self, site: S, handle: EntryHandle) -> bool {
        match self.occupants.entry(site) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(handle);
                true
            }
        }
    }

    /// Clear `site`, returning its former occupant.
    pub fn remove(&mut self, site: &S) -> Option<EntryHandle> {
        self.occupants.shift_remove(site)
    }

    /// Number of occupied sites.
    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    /// Whether no site is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Occupied sites with their occupants, in placement order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, EntryHandle)> {
        self.occupants.iter().map(|(site, &handle)| (site, handle))
    }
}

impl<S: Hash + Eq> Default for PositionIndex<S> {
    fn default() -> Self {
        Self::new()
    }
}
