//! Slot index: the key -> slot-id table an `OrderedMap` is layered on.
//!
//! The ordered map only needs a narrow capability from its index: look a key
//! up, overwrite its position, insert a new key, and report how many keys it
//! holds. `SlotIndex` names that capability so any hash map can serve; the
//! crate ships `HashIndex` (the default) and an impl for `hashbrown::HashMap`.

use crate::reentrancy::ReentrancyCheck;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::mem;
use hashbrown::hash_table::Entry as TableEntry;
use hashbrown::HashTable;
use std::collections::hash_map::RandomState;

/// Where a key currently lives in the ordered map's slot arrays.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Position {
    /// The key's authoritative value is in this slot (0-based).
    Slot(usize),
    /// The key was removed and no slot represents it.
    Tombstone,
}

impl Position {
    #[inline]
    pub fn slot(self) -> Option<usize> {
        match self {
            Position::Slot(s) => Some(s),
            Position::Tombstone => None,
        }
    }
}

/// Capability an ordered map requires from its key index.
///
/// Removal is not part of the contract: deleting from an ordered map
/// overwrites the key's position with [`Position::Tombstone`], so `len()`
/// counts tombstoned keys too.
pub trait SlotIndex<K> {
    fn position<Q>(&self, key: &Q) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Mutable access to an existing key's position, without cloning the key.
    fn position_mut<Q>(&mut self, key: &Q) -> Option<&mut Position>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Inserts or overwrites; returns the previous position if the key was known.
    fn insert(&mut self, key: K, position: Position) -> Option<Position>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity hint; no semantic effect.
    fn reserve(&mut self, additional: usize);

    fn clear(&mut self);
}

#[derive(Clone, Debug)]
struct Entry<K> {
    key: K,
    hash: u64,
    position: Position,
}

/// Default slot index: a `hashbrown::HashTable` of `(key, hash, position)`.
///
/// Each entry stores its precomputed `u64` hash and growth always uses the
/// stored hash, so `K: Hash` never runs during a rehash. Every entry point
/// holds a debug-only reentrancy guard while `K: Eq`/`K: Hash` may run.
pub struct HashIndex<K, S = RandomState> {
    hasher: S,
    table: HashTable<Entry<K>>,
    reentrancy: ReentrancyCheck,
}

impl<K> HashIndex<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = Self::new();
        index.table.reserve(capacity, |e| e.hash);
        index
    }
}

impl<K> Default for HashIndex<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, S: Clone> Clone for HashIndex<K, S> {
    fn clone(&self) -> Self {
        Self {
            hasher: self.hasher.clone(),
            table: self.table.clone(),
            reentrancy: ReentrancyCheck::new(),
        }
    }
}

impl<K, S> HashIndex<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            table: HashTable::new(),
            reentrancy: ReentrancyCheck::new(),
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Number of keys currently positioned on a tombstone.
    pub fn tombstones(&self) -> usize {
        let _op = self.reentrancy.enter("tombstones");
        self.table
            .iter()
            .filter(|e| e.position == Position::Tombstone)
            .count()
    }
}

impl<K, S> SlotIndex<K> for HashIndex<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn position<Q>(&self, key: &Q) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _op = self.reentrancy.enter("position");
        let hash = self.make_hash(key);
        self.table
            .find(hash, |e| e.key.borrow() == key)
            .map(|e| e.position)
    }

    fn position_mut<Q>(&mut self, key: &Q) -> Option<&mut Position>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _op = self.reentrancy.enter("position_mut");
        let hash = self.make_hash(key);
        self.table
            .find_mut(hash, |e| e.key.borrow() == key)
            .map(|e| &mut e.position)
    }

    fn insert(&mut self, key: K, position: Position) -> Option<Position> {
        let _op = self.reentrancy.enter("insert");
        let hash = self.make_hash(&key);
        match self.table.entry(hash, |e| e.key == key, |e| e.hash) {
            TableEntry::Occupied(mut o) => {
                Some(mem::replace(&mut o.get_mut().position, position))
            }
            TableEntry::Vacant(v) => {
                v.insert(Entry {
                    key,
                    hash,
                    position,
                });
                None
            }
        }
    }

    fn len(&self) -> usize {
        self.table.len()
    }

    fn reserve(&mut self, additional: usize) {
        let _op = self.reentrancy.enter("reserve");
        self.table.reserve(additional, |e| e.hash);
    }

    fn clear(&mut self) {
        let _op = self.reentrancy.enter("clear");
        self.table.clear();
    }
}

impl<K, S> SlotIndex<K> for hashbrown::HashMap<K, Position, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn position<Q>(&self, key: &Q) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).copied()
    }

    fn position_mut<Q>(&mut self, key: &Q) -> Option<&mut Position>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_mut(key)
    }

    fn insert(&mut self, key: K, position: Position) -> Option<Position> {
        hashbrown::HashMap::insert(self, key, position)
    }

    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }

    fn reserve(&mut self, additional: usize) {
        hashbrown::HashMap::reserve(self, additional)
    }

    fn clear(&mut self) {
        hashbrown::HashMap::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::Hasher;

    /// Invariant: a tombstone overwrite keeps the key counted in `len()`.
    #[test]
    fn tombstone_is_an_overwrite_not_a_removal() {
        let mut idx: HashIndex<String> = HashIndex::new();
        assert_eq!(idx.insert("a".to_string(), Position::Slot(0)), None);
        assert_eq!(idx.len(), 1);

        *idx.position_mut("a").unwrap() = Position::Tombstone;
        assert_eq!(idx.position("a"), Some(Position::Tombstone));
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.tombstones(), 1);

        assert_eq!(
            idx.insert("a".to_string(), Position::Slot(4)),
            Some(Position::Tombstone)
        );
        assert_eq!(idx.position("a"), Some(Position::Slot(4)));
        assert_eq!(idx.tombstones(), 0);
    }

    /// Invariant: absent keys report `None`, distinct from a tombstone.
    #[test]
    fn absent_differs_from_tombstone() {
        let mut idx: HashIndex<&'static str> = HashIndex::new();
        idx.insert("gone", Position::Tombstone);
        assert_eq!(idx.position(&"gone"), Some(Position::Tombstone));
        assert_eq!(idx.position(&"never"), None);
        assert!(idx.position_mut(&"never").is_none());
    }

    /// Invariant: `reserve` and `clear` have no effect on lookups beyond emptying.
    #[test]
    fn reserve_then_clear() {
        let mut idx: HashIndex<u32> = HashIndex::with_capacity(4);
        for i in 0..100 {
            idx.insert(i, Position::Slot(i as usize));
        }
        idx.reserve(1_000);
        for i in 0..100 {
            assert_eq!(idx.position(&i), Some(Position::Slot(i as usize)));
        }
        idx.clear();
        assert!(idx.is_empty());
        assert_eq!(idx.position(&7u32), None);
    }

    /// Invariant: lookups resolve by equality under total hash collision.
    #[test]
    fn collision_handling_with_const_hasher() {
        #[derive(Clone, Default)]
        struct ConstBuildHasher;
        struct ConstHasher;
        impl BuildHasher for ConstBuildHasher {
            type Hasher = ConstHasher;
            fn build_hasher(&self) -> Self::Hasher {
                ConstHasher
            }
        }
        impl Hasher for ConstHasher {
            fn write(&mut self, _bytes: &[u8]) {}
            fn finish(&self) -> u64 {
                0
            }
        }

        let mut idx: HashIndex<String, ConstBuildHasher> =
            HashIndex::with_hasher(ConstBuildHasher);
        for (i, k) in ["a", "b", "c"].iter().enumerate() {
            idx.insert((*k).to_string(), Position::Slot(i));
        }
        assert_eq!(idx.position("a"), Some(Position::Slot(0)));
        assert_eq!(idx.position("b"), Some(Position::Slot(1)));
        assert_eq!(idx.position("c"), Some(Position::Slot(2)));
        assert_eq!(idx.position("d"), None);
    }

    /// Invariant: the hashbrown map satisfies the same contract.
    #[test]
    fn hashbrown_map_is_a_slot_index() {
        fn exercise<I: SlotIndex<String>>(idx: &mut I) {
            idx.insert("x".to_string(), Position::Slot(0));
            *idx.position_mut("x").unwrap() = Position::Tombstone;
            assert_eq!(idx.position("x"), Some(Position::Tombstone));
            assert_eq!(idx.len(), 1);
            idx.clear();
            assert!(idx.is_empty());
        }
        let mut m: hashbrown::HashMap<String, Position> = hashbrown::HashMap::new();
        exercise(&mut m);
        let mut h: HashIndex<String> = HashIndex::new();
        exercise(&mut h);
    }

    #[test]
    fn position_slot_accessor() {
        assert_eq!(Position::Slot(3).slot(), Some(3));
        assert_eq!(Position::Tombstone.slot(), None);
    }
}
