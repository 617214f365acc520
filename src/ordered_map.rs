//! OrderedMap: insertion-ordered map over append-only slot arrays.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::slot_index::{HashIndex, Position, SlotIndex};
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::mem;
use core::ops::Index;

/// An insertion-ordered hash map with tombstone deletion and lazy compaction.
///
/// Entries live in two parallel append-only arrays (`keys`, `values`); the
/// slot index maps each key to the slot holding its current value. Updating
/// a present key writes in place. Removing a key overwrites its index entry
/// with a tombstone and leaves a dead slot behind; reinserting it later
/// appends a fresh slot, so the key moves to the end of iteration order.
///
/// Dead slots are reclaimed in batches: once the physical slot count exceeds
/// `(1 + θ) * len()` the map compacts, rewriting both arrays with only the
/// filled slots and renumbering them in the index. Each compaction costs
/// O(slots) and reclaims Θ(dead slots), which keeps insert and remove
/// amortized O(1).
///
/// A value cell is `None` exactly when its slot is not filled, which lets
/// `remove` move the value out without shifting. Debug builds cross-check
/// this against the index on every compaction.
#[derive(Clone)]
pub struct OrderedMap<K, V, I = HashIndex<K>> {
    keys: Vec<K>,
    values: Vec<Option<V>>,
    index: I,
    live: usize,
    config: Config,
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            index: HashIndex::with_capacity(capacity),
            live: 0,
            config: Config::default(),
        }
    }
}

impl<K, V, I> Default for OrderedMap<K, V, I>
where
    I: Default,
{
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            index: I::default(),
            live: 0,
            config: Config::default(),
        }
    }
}

impl<K, V, I> OrderedMap<K, V, I> {
    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Physical slots in use, counting dead slots awaiting compaction.
    pub fn slot_count(&self) -> usize {
        debug_assert_eq!(self.keys.len(), self.values.len());
        self.keys.len()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Iterator over `(&K, &V)` in slot order, skipping dead slots.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.keys.iter().zip(self.values.iter()),
            remaining: self.live,
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Oldest live entry.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.iter().next()
    }

    /// Most recently appended live entry.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.iter().next_back()
    }
}

impl<K, V, I> OrderedMap<K, V, I>
where
    K: Eq + Hash + Clone,
    I: SlotIndex<K>,
{
    /// Builds a map on a caller-supplied index. Any content already in
    /// `index` is discarded.
    pub fn with_index(mut index: I, config: Config) -> Self {
        index.clear();
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            index,
            live: 0,
            config,
        }
    }

    fn slot_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.position(key)?.slot()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.slot_of(key)?;
        self.values[slot].as_ref()
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.slot_of(key)?;
        self.values[slot].as_mut()
    }

    /// Like [`get`](Self::get), but a missing key is an error.
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Value for `key`, or `default`. Nothing is stored.
    pub fn get_or<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Value for `key`, or the result of `f`. Nothing is stored.
    pub fn get_or_else<Q, F>(&self, key: &Q, f: F) -> V
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
        F: FnOnce() -> V,
    {
        self.get(key).cloned().unwrap_or_else(f)
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.slot_of(key)?;
        self.values[slot].as_ref().map(|v| (&self.keys[slot], v))
    }

    /// The stored key equal to `key`, as it was last inserted.
    pub fn get_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_key_value(key).map(|(k, _)| k)
    }

    pub fn get_key_or<'a, Q>(&'a self, key: &Q, default: &'a K) -> &'a K
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_key(key).unwrap_or(default)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.slot_of(key).is_some()
    }

    /// Inserts or updates `key`.
    ///
    /// A present key keeps its slot and position; the replaced value is
    /// returned. An absent or removed key is appended at the end.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.position(&key) {
            Some(Position::Slot(slot)) => {
                let cell = &mut self.values[slot];
                debug_assert!(cell.is_some(), "indexed slot {slot} is empty");
                cell.replace(value)
            }
            known => {
                self.append(key, value, known);
                None
            }
        }
    }

    /// Returns the value for `key`, inserting `default` first if absent.
    pub fn get_or_insert(&mut self, key: K, default: V) -> &mut V {
        self.get_or_insert_with(key, || default)
    }

    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Returns the value for `key`; `f` only runs when the key is absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let slot = match self.index.position(&key) {
            Some(Position::Slot(slot)) => slot,
            known => self.append(key, f(), known),
        };
        self.values[slot]
            .as_mut()
            .expect("slot must be filled immediately after lookup or append")
    }

    /// Appends a new slot for `key`, whose current index state is `known`.
    /// Returns the slot id after any compaction this triggers.
    fn append(&mut self, key: K, value: V, known: Option<Position>) -> usize {
        let slot = self.keys.len();
        match known {
            None => {
                self.index.insert(key.clone(), Position::Slot(slot));
            }
            Some(prev) => {
                debug_assert_eq!(prev, Position::Tombstone);
                *self
                    .index
                    .position_mut(&key)
                    .expect("tombstoned key must stay indexed") = Position::Slot(slot);
            }
        }
        self.keys.push(key);
        self.values.push(Some(value));
        self.live += 1;
        self.compact_if_stale();
        // The new entry is the latest filled slot, before and after compaction.
        self.keys.len() - 1
    }

    /// Tombstones the filled `slot` and moves its value out.
    fn vacate(&mut self, slot: usize) -> V {
        let Self {
            keys,
            values,
            index,
            live,
            ..
        } = self;
        let position = index
            .position_mut(&keys[slot])
            .expect("filled slot's key must be indexed");
        debug_assert_eq!(*position, Position::Slot(slot));
        *position = Position::Tombstone;
        *live -= 1;
        values[slot].take().expect("filled slot must hold a value")
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.slot_of(key)?;
        let value = self.vacate(slot);
        self.compact_if_stale();
        Some(value)
    }

    /// Like [`remove`](Self::remove), but a missing key is an error.
    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove(key).ok_or(Error::KeyNotFound)
    }

    pub fn remove_or<Q>(&mut self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove(key).unwrap_or(default)
    }

    /// Removes `key` and returns the stored key alongside its value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.slot_of(key)?;
        let stored = self.keys[slot].clone();
        let value = self.vacate(slot);
        self.compact_if_stale();
        Some((stored, value))
    }

    fn last_filled(&self) -> Option<usize> {
        self.values.iter().rposition(Option::is_some)
    }

    /// Removes and returns the most recently appended live entry.
    pub fn pop(&mut self) -> Result<(K, V)> {
        if self.live == 0 {
            return Err(Error::EmptyCollection);
        }
        let slot = match self.last_filled() {
            Some(slot) => slot,
            // Not reached while `live > 0`: every filled slot holds `Some`.
            // Release builds recover by compacting and rescanning.
            None => {
                debug_assert!(false, "live entries but no filled slot");
                tracing::debug!(
                    slots = self.keys.len(),
                    live = self.live,
                    "backward scan found no filled slot, compacting"
                );
                self.compact();
                self.last_filled()
                    .expect("compaction must leave every live entry in a filled slot")
            }
        };
        let key = self.keys[slot].clone();
        let value = self.vacate(slot);
        // Everything from `slot` on is dead now and no index entry points there.
        self.keys.truncate(slot);
        self.values.truncate(slot);
        self.compact_if_stale();
        Ok((key, value))
    }

    /// Removes every entry, index included.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
        self.index.clear();
        self.live = 0;
    }

    /// Keeps only the entries for which `f` returns true, in order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        for slot in 0..self.keys.len() {
            let keep = match self.values[slot].as_mut() {
                Some(value) => f(&self.keys[slot], value),
                None => continue,
            };
            if !keep {
                self.vacate(slot);
            }
        }
        self.compact_if_stale();
    }

    /// Mutable iteration in slot order. Compacts first if the map is stale.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.compact_if_stale();
        IterMut {
            inner: self.keys.iter().zip(self.values.iter_mut()),
            remaining: self.live,
        }
    }

    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator + '_ {
        self.iter_mut().map(|(_, v)| v)
    }

    /// Removes every entry, yielding them in order.
    pub fn drain(&mut self) -> IntoIter<K, V> {
        let keys = mem::take(&mut self.keys);
        let values = mem::take(&mut self.values);
        let remaining = mem::replace(&mut self.live, 0);
        self.index.clear();
        IntoIter {
            inner: keys.into_iter().zip(values),
            remaining,
        }
    }

    /// Capacity hint for `n` total entries. Ignored unless `n` exceeds the
    /// slot budget of the current length.
    pub fn size_hint(&mut self, n: usize) {
        if n as f64 <= self.config.slot_budget(self.live) {
            return;
        }
        let slots = n.saturating_sub(self.keys.len());
        self.keys.reserve(slots);
        self.values.reserve(slots);
        self.index.reserve(n.saturating_sub(self.index.len()));
    }

    /// Reserves room for `additional` more insertions.
    pub fn reserve(&mut self, additional: usize) {
        self.keys.reserve(additional);
        self.values.reserve(additional);
        self.index.reserve(additional);
    }

    fn compact_if_stale(&mut self) -> bool {
        if self.config.is_stale(self.keys.len(), self.live) {
            self.compact();
            true
        } else {
            false
        }
    }

    /// Rewrites the slot arrays to hold only filled slots, in order, and
    /// renumbers them `0..len()` in the index. A no-op when no slot is dead.
    pub fn compact(&mut self) {
        let before = self.keys.len();
        if before == self.live {
            return;
        }

        let old_keys = mem::take(&mut self.keys);
        let old_values = mem::take(&mut self.values);
        let mut keys = Vec::with_capacity(self.live);
        let mut values = Vec::with_capacity(self.live);

        // Pass 1: keep slots the index still points at.
        for (slot, (key, value)) in old_keys.into_iter().zip(old_values).enumerate() {
            let filled = self.index.position(&key) == Some(Position::Slot(slot));
            debug_assert_eq!(filled, value.is_some(), "slot {slot} occupancy disagrees with index");
            if filled {
                keys.push(key);
                values.push(value);
            }
        }
        assert_eq!(
            keys.len(),
            self.live,
            "compaction found {} filled slots for {} live entries",
            keys.len(),
            self.live
        );

        // Pass 2: renumber survivors.
        for (slot, key) in keys.iter().enumerate() {
            *self
                .index
                .position_mut(key)
                .expect("surviving key must be indexed") = Position::Slot(slot);
        }

        self.keys = keys;
        self.values = values;
        tracing::trace!(
            slots_before = before,
            slots_after = self.live,
            indexed_keys = self.index.len(),
            "compacted ordered map"
        );
    }

    /// Stable sort of the live entries; renumbers every slot.
    ///
    /// `cmp` only orders slot ids, so if it panics every entry stays in its
    /// (compacted) slot.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&K, &V, &K, &V) -> Ordering,
    {
        self.compact();
        let mut order: Vec<usize> = (0..self.keys.len()).collect();
        {
            let keys = &self.keys;
            let values = &self.values;
            order.sort_by(|&a, &b| match (&values[a], &values[b]) {
                (Some(va), Some(vb)) => cmp(&keys[a], va, &keys[b], vb),
                _ => unreachable!("compacted slots are all filled"),
            });
        }

        let mut keys: Vec<Option<K>> = mem::take(&mut self.keys).into_iter().map(Some).collect();
        let mut values = mem::take(&mut self.values);
        let (sorted_keys, sorted_values): (Vec<K>, Vec<Option<V>>) = order
            .into_iter()
            .map(|old| {
                let key = keys[old].take().expect("each slot moves exactly once");
                (key, values[old].take())
            })
            .unzip();
        self.keys = sorted_keys;
        self.values = sorted_values;

        for (slot, key) in self.keys.iter().enumerate() {
            *self
                .index
                .position_mut(key)
                .expect("sorted key must be indexed") = Position::Slot(slot);
        }
    }

    pub fn sort_keys(&mut self)
    where
        K: Ord,
    {
        self.sort_by(|ka, _, kb, _| ka.cmp(kb));
    }

    /// Merges `other` into `self`. Keys already present keep their position
    /// and take `combine(current, incoming)`; new keys append in `other`'s order.
    ///
    /// If `combine` panics, the key it was combining is left removed.
    pub fn merge_with<T, F>(&mut self, other: T, mut combine: F)
    where
        T: IntoIterator<Item = (K, V)>,
        F: FnMut(V, V) -> V,
    {
        for (key, incoming) in other {
            match self.slot_of(&key) {
                Some(slot) => {
                    let current = self.vacate(slot);
                    let merged = combine(current, incoming);
                    self.refill(slot, merged);
                }
                None => {
                    self.insert(key, incoming);
                }
            }
        }
    }

    /// Restores a slot emptied by `vacate` with no intervening mutation.
    fn refill(&mut self, slot: usize, value: V) {
        *self
            .index
            .position_mut(&self.keys[slot])
            .expect("vacated key must stay indexed") = Position::Slot(slot);
        self.values[slot] = Some(value);
        self.live += 1;
    }

    /// Asserts the structural invariants of the slot arrays and index.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.keys.len(), self.values.len(), "parallel arrays differ in length");
        let mut filled = 0;
        for (slot, (key, value)) in self.keys.iter().zip(&self.values).enumerate() {
            let position = self.index.position(key);
            assert!(position.is_some(), "slot {slot} key missing from index");
            let is_filled = position == Some(Position::Slot(slot));
            assert_eq!(is_filled, value.is_some(), "slot {slot} occupancy disagrees with index");
            if is_filled {
                filled += 1;
            }
        }
        assert_eq!(filled, self.live, "live count disagrees with filled slots");
        assert!(self.index.len() >= self.live);
        assert!(
            !self.config.is_stale(self.keys.len(), self.live),
            "{} slots for {} live entries exceeds the staleness threshold",
            self.keys.len(),
            self.live
        );
    }

    #[cfg(test)]
    pub(crate) fn index(&self) -> &I {
        &self.index
    }
}

/// Iterator over `(&K, &V)` pairs in slot order.
pub struct Iter<'a, K, V> {
    inner: core::iter::Zip<core::slice::Iter<'a, K>, core::slice::Iter<'a, Option<V>>>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for (k, v) in self.inner.by_ref() {
            if let Some(v) = v {
                self.remaining -= 1;
                return Some((k, v));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((k, v)) = self.inner.next_back() {
            if let Some(v) = v {
                self.remaining -= 1;
                return Some((k, v));
            }
        }
        None
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over `(&K, &mut V)` pairs in slot order.
pub struct IterMut<'a, K, V> {
    inner: core::iter::Zip<core::slice::Iter<'a, K>, core::slice::IterMut<'a, Option<V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for (k, v) in self.inner.by_ref() {
            if let Some(v) = v {
                self.remaining -= 1;
                return Some((k, v));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((k, v)) = self.inner.next_back() {
            if let Some(v) = v {
                self.remaining -= 1;
                return Some((k, v));
            }
        }
        None
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning iterator over `(K, V)` pairs in slot order.
pub struct IntoIter<K, V> {
    inner: core::iter::Zip<std::vec::IntoIter<K>, std::vec::IntoIter<Option<V>>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for (k, v) in self.inner.by_ref() {
            if let Some(v) = v {
                self.remaining -= 1;
                return Some((k, v));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some((k, v)) = self.inner.next_back() {
            if let Some(v) = v {
                self.remaining -= 1;
                return Some((k, v));
            }
        }
        None
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V, I> IntoIterator for OrderedMap<K, V, I> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.keys.into_iter().zip(self.values),
            remaining: self.live,
        }
    }
}

impl<'a, K, V, I> IntoIterator for &'a OrderedMap<K, V, I> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, I> IntoIterator for &'a mut OrderedMap<K, V, I>
where
    K: Eq + Hash + Clone,
    I: SlotIndex<K>,
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, I> FromIterator<(K, V)> for OrderedMap<K, V, I>
where
    K: Eq + Hash + Clone,
    I: SlotIndex<K> + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, I> Extend<(K, V)> for OrderedMap<K, V, I>
where
    K: Eq + Hash + Clone,
    I: SlotIndex<K>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, I, Q> Index<&Q> for OrderedMap<K, V, I>
where
    K: Eq + Hash + Clone + Borrow<Q>,
    Q: ?Sized + Hash + Eq,
    I: SlotIndex<K>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found in OrderedMap")
    }
}

/// Order-sensitive: equal maps hold equal pairs in the same order.
impl<K, V, I> PartialEq for OrderedMap<K, V, I>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, I> Eq for OrderedMap<K, V, I> {}

impl<K, V, I> fmt::Debug for OrderedMap<K, V, I>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
