//! The element pool: every element a board knows about, placed or not.

use crate::handle::EntryHandle;
use indexmap::IndexMap;
use std::hash::Hash;
use std::sync::Arc;

/// One element of the pool together with the sites it is placed on.
///
/// The element is shared behind an `Arc`: readers get a handle to the
/// value current at read time, and a later replacement never mutates what
/// they already hold.
#[derive(Clone, Debug)]
pub struct PoolEntry<K, T, S> {
    key: K,
    element: Arc<T>,
    sites: Vec<S>,
}

impl<K, T, S> PoolEntry<K, T, S> {
    /// The key this entry is registered under.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Shared handle to the stored element.
    pub fn element(&self) -> &Arc<T> {
        &self.element
    }

    /// Sites the element is placed on, oldest placement first.
    pub fn sites(&self) -> &[S] {
        &self.sites
    }

    /// Whether the element is placed anywhere.
    pub fn is_placed(&self) -> bool {
        !self.sites.is_empty()
    }

    /// Record a new placement at the end of the site list.
    pub fn push_site(&mut self, site: S) {
        self.sites.push(site);
    }

    /// Swap in a new element; placements are untouched.
    ///
    /// Returns the previous element.
    pub fn replace_element(&mut self, element: T) -> Arc<T> {
        std::mem::replace(&mut self.element, Arc::new(element))
    }
}

impl<K, T, S: PartialEq> PoolEntry<K, T, S> {
    /// Forget the placement at `site`.
    ///
    /// Returns `false` if the element was not placed there.
    pub fn remove_site(&mut self, site: &S) -> bool {
        match self.sites.iter().position(|s| s == site) {
            Some(at) => {
                self.sites.remove(at);
                true
            }
            None => false,
        }
    }
}

/// Arena of [`PoolEntry`] values addressed by [`EntryHandle`], with an
/// identity index from key to handle.
///
/// Keys are unique. Entries are never removed, so handles are stable and
/// iteration follows insertion order.
#[derive(Clone, Debug)]
pub struct ElementPool<K, T, S> {
    entries: Vec<PoolEntry<K, T, S>>,
    ids: IndexMap<K, EntryHandle>,
}

impl<K, T, S> ElementPool<K, T, S>
where
    K: Clone + Eq + Hash,
{
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            ids: IndexMap::new(),
        }
    }

    /// Store `element` under `key` with no placements.
    ///
    /// Returns `None`, leaving the pool unchanged, if `key` is taken.
    pub fn insert(&mut self, key: K, element: T) -> Option<EntryHandle> {
        if self.ids.contains_key(&key) {
            return None;
        }
        let handle = EntryHandle::new(self.entries.len());
        self.entries.push(PoolEntry {
            key: key.clone(),
            element: Arc::new(element),
            sites: Vec::new(),
        });
        self.ids.insert(key, handle);
        Some(handle)
    }

    /// Handle of the entry registered under `key`.
    pub fn lookup(&self, key: &K) -> Option<EntryHandle> {
        self.ids.get(key).copied()
    }

    /// Entry registered under `key`.
    pub fn get(&self, key: &K) -> Option<&PoolEntry<K, T, S>> {
        self.lookup(key).map(|handle| self.entry(handle))
    }

    /// Whether `key` is registered.
    pub fn contains(&self, key: &K) -> bool {
        self.ids.contains_key(key)
    }

    /// Entry at `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this pool.
    pub fn entry(&self, handle: EntryHandle) -> &PoolEntry<K, T, S> {
        &self.entries[handle.index()]
    }

    /// Mutable entry at `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this pool.
    pub fn entry_mut(&mut self, handle: EntryHandle) -> &mut PoolEntry<K, T, S> {
        &mut self.entries[handle.index()]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryHandle, &PoolEntry<K, T, S>)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (EntryHandle::new(index), entry))
    }
}

impl<K, T, S> Default for ElementPool<K, T, S>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
