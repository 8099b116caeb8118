//! The dual-indexed board.
//!
//! A [`Board`] keeps every element it was given in an identity-indexed
//! [`ElementPool`] and every placement in a [`PositionIndex`]. The two are
//! linked by pool handles and kept consistent by each public operation:
//!
//! 1. at most one pool entry per id;
//! 2. at most one occupant per site;
//! 3. a site is in an entry's placement list iff the index maps that site
//!    back to the same entry;
//! 4. every indexed site lies within the board's limits.
//!
//! # Failure model
//!
//! Each operation runs its checks in a fixed order and reports the first
//! that fails as a [`BoardError`]. Nothing is mutated until every check has
//! passed, so a failed call leaves the board exactly as it was.

use std::fmt::Debug;
use std::hash::Hash;

use boardkit_arena::{ElementPool, EntryHandle};
use boardkit_core::{BoardError, ErrorKind, Position};
use boardkit_space::{Limits, Site};
use tracing::{debug, trace};

use crate::config::BoardConfig;
use crate::index::PositionIndex;
use crate::view::ElementView;

// Compile-time assertion: a board of thread-safe parts can be moved and
// shared across threads; callers serialize mutation themselves.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<Board<u32, String>>();
    }
};

/// What a move does when its destination is already occupied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Displace {
    /// Fail with `PositionOccupied`.
    #[default]
    Reject,
    /// Clear the destination first. The evicted element stays in the pool.
    Evict,
}

/// An N-dimensional board of uniquely identified elements.
///
/// `K` is the element id, `T` the element type, and `S` the site type the
/// board places elements on ([`Position`] unless a wrapper needs more).
/// Elements may occupy zero, one, or (with [`set_multi`](Self::set_multi))
/// several sites. Once added, an element stays in the pool for the life of
/// the board.
///
/// # Examples
///
/// ```
/// use boardkit_board::{Board, BoardConfig};
/// use boardkit_core::{pos, ErrorTag};
/// use boardkit_space::Limits;
///
/// let config = BoardConfig::new(Limits::new(pos![4, 4]).unwrap()).with_name("demo");
/// let mut board: Board<u32, String> = Board::new(config);
///
/// board.add(1, "Hello").unwrap();
/// board.set(&1, pos![3, 2]).unwrap();
///
/// let view = board.get_at(&pos![3, 2]).unwrap();
/// assert_eq!(view.id, 1);
/// assert_eq!(*view.element, "Hello");
///
/// let err = board.set(&1, pos![1, 2]).unwrap_err();
/// assert_eq!(err.tag(), ErrorTag::IdMonoSet);
/// ```
#[derive(Clone, Debug)]
pub struct Board<K, T, S = Position>
where
    S: Site,
{
    name: String,
    limits: Limits,
    pool: ElementPool<K, T, S>,
    index: PositionIndex<S>,
}

impl<K, T, S> Board<K, T, S>
where
    K: Clone + Eq + Hash + Debug,
    S: Site,
{
    /// Create an empty board.
    pub fn new(config: BoardConfig) -> Self {
        debug!(board = %config.name, limits = ?config.limits, "board created");
        Self {
            name: config.name,
            limits: config.limits,
            pool: ElementPool::new(),
            index: PositionIndex::new(),
        }
    }

    /// Display name of the board.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The board's limits.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    // ── Pool ────────────────────────────────────────────────────

    /// Add an element to the pool, unplaced.
    ///
    /// # Errors
    ///
    /// `IdInUse` if `id` is already registered.
    pub fn add(&mut self, id: K, element: impl Into<T>) -> Result<(), BoardError<K, S>> {
        if self.pool.contains(&id) {
            return Err(self.reject(ErrorKind::IdInUse { id }));
        }
        debug!(board = %self.name, ?id, "element added");
        // The key was free a moment ago, so the pool accepts it.
        let _handle = self.pool.insert(id, element.into());
        Ok(())
    }

    /// Replace the element registered under `id`, keeping its placements.
    ///
    /// # Errors
    ///
    /// `IdNonExistent` if `id` is not registered.
    pub fn update(&mut self, id: &K, element: impl Into<T>) -> Result<(), BoardError<K, S>> {
        let handle = self.handle_of(id)?;
        self.pool.entry_mut(handle).replace_element(element.into());
        debug!(board = %self.name, ?id, "element updated");
        Ok(())
    }

    // ── Placement ───────────────────────────────────────────────

    /// Place an unplaced element at `site`.
    ///
    /// # Errors
    ///
    /// In check order: `IdNonExistent`, `IdMonoSet` if the element is
    /// already placed, `PositionOutLimits`, `PositionOccupied`.
    pub fn set(&mut self, id: &K, site: S) -> Result<(), BoardError<K, S>> {
        self.place(id, site, false)
    }

    /// Place an element at `site`, in addition to any sites it already
    /// occupies.
    ///
    /// # Errors
    ///
    /// In check order: `IdNonExistent`, `PositionOutLimits`,
    /// `PositionOccupied`.
    pub fn set_multi(&mut self, id: &K, site: S) -> Result<(), BoardError<K, S>> {
        self.place(id, site, true)
    }

    fn place(&mut self, id: &K, site: S, multiple: bool) -> Result<(), BoardError<K, S>> {
        let handle = self.handle_of(id)?;
        if !multiple && self.pool.entry(handle).is_placed() {
            return Err(self.reject(ErrorKind::IdMonoSet { id: id.clone() }));
        }
        self.check_within(&site)?;
        if self.index.is_occupied(&site) {
            return Err(self.reject(ErrorKind::PositionOccupied { position: site }));
        }
        debug!(board = %self.name, ?id, ?site, "element placed");
        self.put(handle, site);
        Ok(())
    }

    /// Remove the single placement of an element.
    ///
    /// # Errors
    ///
    /// In check order: `IdNonExistent`, `IdNotOnBoard`, `IdMultiSet` if
    /// the element occupies more than one site.
    pub fn unset(&mut self, id: &K) -> Result<(), BoardError<K, S>> {
        self.unplace(id, false)
    }

    /// Remove every placement of an element.
    ///
    /// # Errors
    ///
    /// In check order: `IdNonExistent`, `IdNotOnBoard`.
    pub fn unset_all(&mut self, id: &K) -> Result<(), BoardError<K, S>> {
        self.unplace(id, true)
    }

    fn unplace(&mut self, id: &K, all: bool) -> Result<(), BoardError<K, S>> {
        let handle = self.handle_of(id)?;
        let sites = self.single_or_all(id, handle, all)?;
        for site in &sites {
            self.unput(site);
        }
        debug!(board = %self.name, ?id, count = sites.len(), "element unplaced");
        Ok(())
    }

    /// Clear whatever is placed at `site`.
    ///
    /// # Errors
    ///
    /// In check order: `PositionOutLimits`, `PositionEmpty`.
    pub fn unset_at(&mut self, site: &S) -> Result<(), BoardError<K, S>> {
        let occupant = self.occupied(site)?;
        let cleared = self.unput(site);
        debug_assert_eq!(cleared, Some(occupant));
        debug!(board = %self.name, ?site, "site cleared");
        Ok(())
    }

    /// Move whatever is placed at `origin` to `destiny`.
    ///
    /// Other placements of the moved element are kept.
    ///
    /// # Errors
    ///
    /// In check order: `PositionOutLimits` (origin, then destiny),
    /// `PositionEmpty` for the origin, `PositionOccupied` for the destiny
    /// unless `displace` is [`Displace::Evict`].
    pub fn move_at(
        &mut self,
        origin: &S,
        destiny: S,
        displace: Displace,
    ) -> Result<(), BoardError<K, S>> {
        self.check_within(origin)?;
        self.check_within(&destiny)?;
        let handle = self.occupied(origin)?;
        self.clear_destiny(&destiny, displace)?;
        debug!(board = %self.name, ?origin, ?destiny, "element moved");
        self.unput(origin);
        self.put(handle, destiny);
        Ok(())
    }

    /// Move a singly placed element to `destiny`.
    ///
    /// # Errors
    ///
    /// In check order: `IdNonExistent`, `IdNotOnBoard`, `IdMultiSet`,
    /// `PositionOutLimits`, `PositionOccupied` unless `displace` is
    /// [`Displace::Evict`].
    pub fn move_id(
        &mut self,
        id: &K,
        destiny: S,
        displace: Displace,
    ) -> Result<(), BoardError<K, S>> {
        let handle = self.handle_of(id)?;
        let origin = match self.single_or_all(id, handle, false)?.pop() {
            Some(origin) => origin,
            None => return Err(self.reject(ErrorKind::IdNotOnBoard { id: id.clone() })),
        };
        self.check_within(&destiny)?;
        self.clear_destiny(&destiny, displace)?;
        debug!(board = %self.name, ?id, ?origin, ?destiny, "element moved");
        self.unput(&origin);
        self.put(handle, destiny);
        Ok(())
    }

    // ── Lookup ──────────────────────────────────────────────────

    /// Read the element registered under `id`.
    ///
    /// # Errors
    ///
    /// `IdNonExistent` if `id` is not registered.
    pub fn get(&self, id: &K) -> Result<ElementView<K, T, S>, BoardError<K, S>> {
        self.handle_of(id).map(|handle| self.view(handle))
    }

    /// Read the element placed at `site`.
    ///
    /// # Errors
    ///
    /// In check order: `PositionOutLimits`, `PositionEmpty`.
    pub fn get_at(&self, site: &S) -> Result<ElementView<K, T, S>, BoardError<K, S>> {
        self.occupied(site).map(|handle| self.view(handle))
    }

    /// Read the element placed at `site`, if any.
    ///
    /// Out-of-limits sites are simply empty.
    pub fn find_at(&self, site: &S) -> Option<ElementView<K, T, S>> {
        self.index.occupant(site).map(|handle| self.view(handle))
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &K) -> bool {
        self.pool.contains(id)
    }

    /// Whether some element is placed at `site`.
    pub fn is_occupied(&self, site: &S) -> bool {
        self.index.is_occupied(site)
    }

    /// Number of elements in the pool, placed or not.
    pub fn element_count(&self) -> usize {
        self.pool.len()
    }

    /// Number of occupied sites.
    pub fn placement_count(&self) -> usize {
        self.index.len()
    }

    /// Every element with its placements, in the order they were added.
    pub fn elements(&self) -> impl Iterator<Item = (&K, &T, &[S])> {
        self.pool
            .iter()
            .map(|(_, entry)| (entry.key(), entry.element().as_ref(), entry.sites()))
    }

    /// Every occupied site with the id of its occupant, in placement order.
    pub fn placements(&self) -> impl Iterator<Item = (&S, &K)> {
        self.index
            .iter()
            .map(|(site, handle)| (site, self.pool.entry(handle).key()))
    }

    // ── Internals ───────────────────────────────────────────────

    fn reject(&self, kind: ErrorKind<K, S>) -> BoardError<K, S> {
        trace!(board = %self.name, tag = ?kind.tag(), "operation rejected");
        BoardError::new(self.name.clone(), kind)
    }

    fn handle_of(&self, id: &K) -> Result<EntryHandle, BoardError<K, S>> {
        self.pool
            .lookup(id)
            .ok_or_else(|| self.reject(ErrorKind::IdNonExistent { id: id.clone() }))
    }

    fn check_within(&self, site: &S) -> Result<(), BoardError<K, S>> {
        if site.within(&self.limits) {
            Ok(())
        } else {
            Err(self.reject(ErrorKind::PositionOutLimits {
                position: site.clone(),
            }))
        }
    }

    /// Limits check followed by the occupant lookup.
    fn occupied(&self, site: &S) -> Result<EntryHandle, BoardError<K, S>> {
        self.check_within(site)?;
        self.index.occupant(site).ok_or_else(|| {
            self.reject(ErrorKind::PositionEmpty {
                position: site.clone(),
            })
        })
    }

    /// Sites an id-keyed unplacement would clear: all of them, or the only one.
    fn single_or_all(
        &self,
        id: &K,
        handle: EntryHandle,
        all: bool,
    ) -> Result<Vec<S>, BoardError<K, S>> {
        let sites = self.pool.entry(handle).sites();
        if sites.is_empty() {
            return Err(self.reject(ErrorKind::IdNotOnBoard { id: id.clone() }));
        }
        if !all && sites.len() > 1 {
            return Err(self.reject(ErrorKind::IdMultiSet { id: id.clone() }));
        }
        Ok(sites.to_vec())
    }

    /// Occupancy check for a move destination; evicts when allowed.
    fn clear_destiny(&mut self, destiny: &S, displace: Displace) -> Result<(), BoardError<K, S>> {
        if !self.index.is_occupied(destiny) {
            return Ok(());
        }
        match displace {
            Displace::Reject => Err(self.reject(ErrorKind::PositionOccupied {
                position: destiny.clone(),
            })),
            Displace::Evict => {
                if let Some(evicted) = self.unput(destiny) {
                    debug!(
                        board = %self.name,
                        id = ?self.pool.entry(evicted).key(),
                        site = ?destiny,
                        "element evicted"
                    );
                }
                Ok(())
            }
        }
    }

    fn put(&mut self, handle: EntryHandle, site: S) {
        let inserted = self.index.insert(site.clone(), handle);
        debug_assert!(inserted, "placement over an occupied site");
        self.pool.entry_mut(handle).push_site(site);
    }

    fn unput(&mut self, site: &S) -> Option<EntryHandle> {
        let handle = self.index.remove(site)?;
        self.pool.entry_mut(handle).remove_site(site);
        Some(handle)
    }

    fn view(&self, handle: EntryHandle) -> ElementView<K, T, S> {
        let entry = self.pool.entry(handle);
        ElementView {
            id: entry.key().clone(),
            element: entry.element().clone(),
            positions: entry.sites().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardkit_core::{pos, ErrorTag};
    use boardkit_test_utils::{limits, Marker, Piece, Token};

    fn board() -> Board<u32, String> {
        Board::new(BoardConfig::new(limits(&[4, 4])).with_name("test"))
    }

    fn tag<V>(result: Result<V, BoardError<u32>>) -> ErrorTag {
        match result {
            Ok(_) => panic!("expected an error"),
            Err(err) => err.tag(),
        }
    }

    // ── add / update ────────────────────────────────────────────

    #[test]
    fn add_then_get_is_unplaced() {
        let mut b = board();
        b.add(1, "Hello").unwrap();
        let view = b.get(&1).unwrap();
        assert_eq!(view.id, 1);
        assert_eq!(*view.element, "Hello");
        assert!(view.positions.is_empty());
        assert!(!view.is_placed());
    }

    #[test]
    fn add_twice_keeps_first_element() {
        let mut b = board();
        b.add(1, "first").unwrap();
        let err = b.add(1, "second").unwrap_err();
        assert_eq!(err.tag(), ErrorTag::IdInUse);
        assert_eq!(err.id(), Some(&1));
        assert_eq!(err.board(), "test");
        assert_eq!(*b.get(&1).unwrap().element, "first");
        assert_eq!(b.element_count(), 1);
    }

    #[test]
    fn update_replaces_element_and_keeps_placements() {
        let mut b = board();
        b.add(1, "pawn").unwrap();
        b.set(&1, pos![2, 2]).unwrap();
        let before = b.get(&1).unwrap();
        b.update(&1, "queen").unwrap();
        let after = b.get(&1).unwrap();
        assert_eq!(*after.element, "queen");
        assert_eq!(after.positions, vec![pos![2, 2]]);
        assert_eq!(*before.element, "pawn");
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut b = board();
        assert_eq!(tag(b.update(&9, "x")), ErrorTag::IdNonExistent);
    }

    #[test]
    fn closed_payload_accepts_each_variant_type() {
        let mut b: Board<u32, Token> = Board::new(BoardConfig::new(limits(&[8, 8])));
        b.add(1, Piece::new(1, "Rook", 2, 0)).unwrap();
        b.add(2, Marker::new("Wall")).unwrap();
        assert_eq!(b.get(&1).unwrap().element.label(), "Rook");
        assert!(matches!(*b.get(&2).unwrap().element, Token::Marker(_)));
    }

    // ── set ─────────────────────────────────────────────────────

    #[test]
    fn set_then_get_at_finds_element() {
        let mut b = board();
        b.add(1, "Hello").unwrap();
        b.set(&1, pos![3, 2]).unwrap();
        let view = b.get_at(&pos![3, 2]).unwrap();
        assert_eq!(view.id, 1);
        assert_eq!(*view.element, "Hello");
        assert_eq!(view.positions, vec![pos![3, 2]]);
    }

    #[test]
    fn second_set_without_multi_is_mono_set() {
        let mut b = board();
        b.add(1, "Hello").unwrap();
        b.set(&1, pos![3, 2]).unwrap();
        assert_eq!(tag(b.set(&1, pos![1, 2])), ErrorTag::IdMonoSet);
        assert_eq!(b.get(&1).unwrap().positions, vec![pos![3, 2]]);
    }

    #[test]
    fn set_checks_id_before_limits() {
        let mut b = board();
        assert_eq!(tag(b.set(&1, pos![9, 9])), ErrorTag::IdNonExistent);
    }

    #[test]
    fn set_checks_mono_set_before_limits() {
        let mut b = board();
        b.add(1, "a").unwrap();
        b.set(&1, pos![1, 1]).unwrap();
        assert_eq!(tag(b.set(&1, pos![9, 9])), ErrorTag::IdMonoSet);
    }

    #[test]
    fn set_rejects_out_of_limits_zero_and_wrong_arity() {
        let mut b = board();
        b.add(1, "a").unwrap();
        for p in [pos![5, 1], pos![1, 5], pos![0, 1], pos![1, 0], pos![1], pos![1, 1, 1]] {
            let err = b.set(&1, p.clone()).unwrap_err();
            assert_eq!(err.tag(), ErrorTag::PositionOutLimits);
            assert_eq!(err.position(), Some(&p));
        }
        assert_eq!(b.placement_count(), 0);
    }

    #[test]
    fn set_on_occupied_site_fails() {
        let mut b = board();
        b.add(1, "a").unwrap();
        b.add(2, "b").unwrap();
        b.set(&1, pos![1, 1]).unwrap();
        assert_eq!(tag(b.set(&2, pos![1, 1])), ErrorTag::PositionOccupied);
        assert_eq!(b.get_at(&pos![1, 1]).unwrap().id, 1);
        assert!(b.get(&2).unwrap().positions.is_empty());
    }

    #[test]
    fn set_multi_on_own_site_is_occupied() {
        let mut b = board();
        b.add(1, "a").unwrap();
        b.set_multi(&1, pos![1, 1]).unwrap();
        assert_eq!(tag(b.set_multi(&1, pos![1, 1])), ErrorTag::PositionOccupied);
    }

    #[test]
    fn unbounded_dimension_accepts_large_coordinates() {
        let mut b: Board<u32, String> = Board::new(BoardConfig::new(limits(&[0, 3])));
        b.add(1, "far").unwrap();
        b.set(&1, pos![1_000_000, 3]).unwrap();
        assert_eq!(b.get_at(&pos![1_000_000, 3]).unwrap().id, 1);
        assert_eq!(tag(b.get_at(&pos![1, 4])), ErrorTag::PositionOutLimits);
    }

    // ── unset ───────────────────────────────────────────────────

    #[test]
    fn unset_at_then_get_at_is_empty() {
        let mut b = board();
        b.add(1, "a").unwrap();
        b.set(&1, pos![2, 3]).unwrap();
        b.unset_at(&pos![2, 3]).unwrap();
        assert_eq!(tag(b.get_at(&pos![2, 3])), ErrorTag::PositionEmpty);
        assert!(b.get(&1).unwrap().positions.is_empty());
        assert!(b.contains(&1));
    }

    #[test]
    fn unset_at_clears_one_site_of_a_multi_set_element() {
        let mut b = board();
        b.add(1, "wall").unwrap();
        b.set_multi(&1, pos![1, 1]).unwrap();
        b.set_multi(&1, pos![1, 2]).unwrap();
        b.unset_at(&pos![1, 1]).unwrap();
        assert_eq!(b.get(&1).unwrap().positions, vec![pos![1, 2]]);
        assert_eq!(b.get_at(&pos![1, 2]).unwrap().id, 1);
        assert_eq!(b.placement_count(), 1);
    }

    #[test]
    fn unset_at_checks_limits_then_occupancy() {
        let mut b = board();
        assert_eq!(tag(b.unset_at(&pos![5, 5])), ErrorTag::PositionOutLimits);
        assert_eq!(tag(b.unset_at(&pos![1, 1])), ErrorTag::PositionEmpty);
    }

    #[test]
    fn unset_multi_set_needs_all() {
        let mut b = board();
        b.add(1, "wall").unwrap();
        b.set_multi(&1, pos![1, 1]).unwrap();
        b.set_multi(&1, pos![1, 2]).unwrap();
        assert_eq!(tag(b.unset(&1)), ErrorTag::IdMultiSet);
        assert_eq!(b.placement_count(), 2);

        b.unset_all(&1).unwrap();
        assert_eq!(tag(b.get_at(&pos![1, 1])), ErrorTag::PositionEmpty);
        assert_eq!(tag(b.get_at(&pos![1, 2])), ErrorTag::PositionEmpty);
        assert!(b.get(&1).unwrap().positions.is_empty());
    }

    #[test]
    fn unset_single_placement() {
        let mut b = board();
        b.add(1, "a").unwrap();
        b.set(&1, pos![4, 4]).unwrap();
        b.unset(&1).unwrap();
        assert_eq!(b.placement_count(), 0);
        assert_eq!(tag(b.unset(&1)), ErrorTag::IdNotOnBoard);
        assert_eq!(tag(b.unset_all(&1)), ErrorTag::IdNotOnBoard);
        assert_eq!(tag(b.unset(&2)), ErrorTag::IdNonExistent);
    }

    // ── move ────────────────────────────────────────────────────

    #[test]
    fn move_id_to_occupied_site_keeps_origin() {
        let mut b = board();
        b.add(1, "a").unwrap();
        b.add(2, "b").unwrap();
        b.set(&1, pos![1, 1]).unwrap();
        b.set(&2, pos![2, 2]).unwrap();
        assert_eq!(
            tag(b.move_id(&1, pos![2, 2], Displace::Reject)),
            ErrorTag::PositionOccupied
        );
        assert_eq!(b.get(&1).unwrap().positions, vec![pos![1, 1]]);
        assert_eq!(b.get_at(&pos![2, 2]).unwrap().id, 2);
    }

    #[test]
    fn move_id_evicting_keeps_evicted_in_pool() {
        let mut b = board();
        b.add(1, "a").unwrap();
        b.add(2, "b").unwrap();
        b.set(&1, pos![1, 1]).unwrap();
        b.set(&2, pos![2, 2]).unwrap();
        b.move_id(&1, pos![2, 2], Displace::Evict).unwrap();
        assert_eq!(b.get_at(&pos![2, 2]).unwrap().id, 1);
        assert_eq!(tag(b.get_at(&pos![1, 1])), ErrorTag::PositionEmpty);
        let evicted = b.get(&2).unwrap();
        assert!(evicted.positions.is_empty());
        assert_eq!(b.element_count(), 2);
    }

    #[test]
    fn move_id_check_order() {
        let mut b = board();
        assert_eq!(tag(b.move_id(&1, pos![9, 9], Displace::Reject)), ErrorTag::IdNonExistent);
        b.add(1, "a").unwrap();
        assert_eq!(tag(b.move_id(&1, pos![9, 9], Displace::Reject)), ErrorTag::IdNotOnBoard);
        b.set_multi(&1, pos![1, 1]).unwrap();
        b.set_multi(&1, pos![1, 2]).unwrap();
        assert_eq!(tag(b.move_id(&1, pos![9, 9], Displace::Reject)), ErrorTag::IdMultiSet);
        b.unset_all(&1).unwrap();
        b.set(&1, pos![1, 1]).unwrap();
        assert_eq!(tag(b.move_id(&1, pos![9, 9], Displace::Reject)), ErrorTag::PositionOutLimits);
    }

    #[test]
    fn move_id_onto_own_site() {
        let mut b = board();
        b.add(1, "a").unwrap();
        b.set(&1, pos![3, 3]).unwrap();
        assert_eq!(tag(b.move_id(&1, pos![3, 3], Displace::Reject)), ErrorTag::PositionOccupied);
        b.move_id(&1, pos![3, 3], Displace::Evict).unwrap();
        assert_eq!(b.get(&1).unwrap().positions, vec![pos![3, 3]]);
        assert_eq!(b.placement_count(), 1);
    }

    #[test]
    fn move_at_check_order() {
        let mut b = board();
        let err = b.move_at(&pos![9, 1], pos![9, 2], Displace::Reject).unwrap_err();
        assert_eq!(err.tag(), ErrorTag::PositionOutLimits);
        assert_eq!(err.position(), Some(&pos![9, 1]));

        let err = b.move_at(&pos![1, 1], pos![9, 2], Displace::Reject).unwrap_err();
        assert_eq!(err.tag(), ErrorTag::PositionOutLimits);
        assert_eq!(err.position(), Some(&pos![9, 2]));

        let err = b.move_at(&pos![1, 1], pos![2, 2], Displace::Reject).unwrap_err();
        assert_eq!(err.tag(), ErrorTag::PositionEmpty);
        assert_eq!(err.position(), Some(&pos![1, 1]));
    }

    #[test]
    fn move_at_keeps_other_placements_of_the_mover() {
        let mut b = board();
        b.add(1, "wall").unwrap();
        b.set_multi(&1, pos![1, 1]).unwrap();
        b.set_multi(&1, pos![1, 2]).unwrap();
        b.move_at(&pos![1, 1], pos![4, 4], Displace::Reject).unwrap();
        assert_eq!(b.get(&1).unwrap().positions, vec![pos![1, 2], pos![4, 4]]);
        assert!(!b.is_occupied(&pos![1, 1]));
    }

    #[test]
    fn move_at_evicting_over_occupied_site() {
        let mut b = board();
        b.add(1, "a").unwrap();
        b.add(2, "b").unwrap();
        b.set(&1, pos![1, 1]).unwrap();
        b.set(&2, pos![2, 2]).unwrap();
        assert_eq!(
            tag(b.move_at(&pos![1, 1], pos![2, 2], Displace::Reject)),
            ErrorTag::PositionOccupied
        );
        b.move_at(&pos![1, 1], pos![2, 2], Displace::Evict).unwrap();
        assert_eq!(b.get_at(&pos![2, 2]).unwrap().id, 1);
        assert!(b.get(&2).unwrap().positions.is_empty());
        assert_eq!(b.placement_count(), 1);
    }

    #[test]
    fn move_round_trip_restores_state() {
        let mut b = board();
        b.add(1, "a").unwrap();
        b.set(&1, pos![1, 1]).unwrap();
        let placements: Vec<_> = b.placements().map(|(s, k)| (s.clone(), *k)).collect();
        let view = b.get(&1).unwrap();

        b.move_id(&1, pos![3, 4], Displace::Reject).unwrap();
        b.move_id(&1, pos![1, 1], Displace::Reject).unwrap();

        let again: Vec<_> = b.placements().map(|(s, k)| (s.clone(), *k)).collect();
        assert_eq!(placements, again);
        assert_eq!(view, b.get(&1).unwrap());
    }

    // ── lookup ──────────────────────────────────────────────────

    #[test]
    fn get_at_checks_limits_then_occupancy() {
        let b = board();
        assert_eq!(tag(b.get_at(&pos![0, 0])), ErrorTag::PositionOutLimits);
        assert_eq!(tag(b.get_at(&pos![1, 1])), ErrorTag::PositionEmpty);
        assert!(b.find_at(&pos![1, 1]).is_none());
        assert_eq!(tag(b.get(&1)), ErrorTag::IdNonExistent);
    }

    #[test]
    fn iteration_reports_pool_and_index() {
        let mut b = board();
        b.add(2, "b").unwrap();
        b.add(1, "a").unwrap();
        b.set(&1, pos![1, 1]).unwrap();
        let elements: Vec<_> = b.elements().map(|(k, e, s)| (*k, e.clone(), s.len())).collect();
        assert_eq!(elements, vec![(2, "b".to_owned(), 0), (1, "a".to_owned(), 1)]);
        let placements: Vec<(Position, u32)> =
            b.placements().map(|(s, k)| (s.clone(), *k)).collect();
        assert_eq!(placements, vec![(pos![1, 1], 1)]);
    }

    #[test]
    fn accessors_expose_configuration() {
        let b = board();
        assert_eq!(b.name(), "test");
        assert_eq!(b.limits().as_position(), &pos![4, 4]);
    }
}
