//! ClassifiedCollections: a key -> sub-collection map that creates each
//! sub-collection on first push.

use crate::error::{Error, Result};
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use hashbrown::{HashMap, HashSet};
use std::collections::hash_map::RandomState;

mod sealed {
    pub trait Sealed {}
}

/// Minimal capability a sub-collection offers: start empty, take one element.
///
/// Implemented for `Vec<E>` (sequence), `hashbrown::HashSet<E, S>` (set) and
/// [`Counter<E, S>`] (multiset). The set of kinds is closed.
pub trait Insertable<E>: Default + sealed::Sealed {
    fn insert_one(&mut self, element: E);
}

impl<E> sealed::Sealed for Vec<E> {}

impl<E> Insertable<E> for Vec<E> {
    #[inline]
    fn insert_one(&mut self, element: E) {
        self.push(element);
    }
}

impl<E, S> sealed::Sealed for HashSet<E, S> {}

impl<E, S> Insertable<E> for HashSet<E, S>
where
    E: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn insert_one(&mut self, element: E) {
        self.insert(element);
    }
}

/// Multiset counter: element -> number of times it was inserted.
#[derive(Clone, Debug)]
pub struct Counter<E, S = RandomState> {
    counts: HashMap<E, usize, S>,
    total: usize,
}

impl<E, S: Default> Default for Counter<E, S> {
    fn default() -> Self {
        Self {
            counts: HashMap::default(),
            total: 0,
        }
    }
}

impl<E> Counter<E>
where
    E: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E, S> Counter<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    /// How many times `element` was inserted; zero if never.
    pub fn count<Q>(&self, element: &Q) -> usize
    where
        E: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.counts.get(element).copied().unwrap_or(0)
    }

    /// Distinct elements.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Insertions across all elements.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&E, usize)> + '_ {
        self.counts.iter().map(|(e, &n)| (e, n))
    }
}

impl<E, S> sealed::Sealed for Counter<E, S> {}

impl<E, S> Insertable<E> for Counter<E, S>
where
    E: Eq + Hash,
    S: BuildHasher + Default,
{
    fn insert_one(&mut self, element: E) {
        *self.counts.entry(element).or_insert(0) += 1;
        self.total += 1;
    }
}

impl<E, S> PartialEq for Counter<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.counts == other.counts
    }
}

/// Map from `K` to a sub-collection `C`, created empty on the first push
/// for a key and never removed implicitly.
///
/// Iteration follows the outer hash map and carries no ordering guarantee.
///
/// `clone` is deep: each sub-collection is cloned, so pushes to the copy
/// never reach the original and vice versa.
pub struct ClassifiedCollections<K, C, S = RandomState> {
    map: HashMap<K, C, S>,
}

pub type ClassifiedLists<K, E> = ClassifiedCollections<K, Vec<E>>;
pub type ClassifiedSets<K, E> = ClassifiedCollections<K, HashSet<E, RandomState>>;
pub type ClassifiedCounters<K, E> = ClassifiedCollections<K, Counter<E>>;

impl<K, C> ClassifiedCollections<K, C>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, C, S: Default> Default for ClassifiedCollections<K, C, S> {
    fn default() -> Self {
        Self {
            map: HashMap::default(),
        }
    }
}

impl<K: Clone, C: Clone, S: Clone> Clone for ClassifiedCollections<K, C, S> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<K, C, S> ClassifiedCollections<K, C, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            map: HashMap::with_hasher(hasher),
        }
    }

    /// Adds `element` to `key`'s sub-collection, creating it if needed.
    pub fn push<E>(&mut self, key: K, element: E)
    where
        C: Insertable<E>,
    {
        self.map.entry(key).or_default().insert_one(element);
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&C>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut C>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get_mut(key)
    }

    pub fn try_get<Q>(&self, key: &Q) -> Result<&C>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<C>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove(key)
    }

    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<C>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove(key).ok_or(Error::KeyNotFound)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.map.keys()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> hashbrown::hash_map::Iter<'_, K, C> {
        self.map.iter()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K, C, S> IntoIterator for ClassifiedCollections<K, C, S> {
    type Item = (K, C);
    type IntoIter = hashbrown::hash_map::IntoIter<K, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K, C, S> IntoIterator for &'a ClassifiedCollections<K, C, S> {
    type Item = (&'a K, &'a C);
    type IntoIter = hashbrown::hash_map::Iter<'a, K, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K, C, S, E> Extend<(K, E)> for ClassifiedCollections<K, C, S>
where
    K: Eq + Hash,
    S: BuildHasher,
    C: Insertable<E>,
{
    fn extend<T: IntoIterator<Item = (K, E)>>(&mut self, iter: T) {
        for (k, e) in iter {
            self.push(k, e);
        }
    }
}

impl<K, C, S, E> FromIterator<(K, E)> for ClassifiedCollections<K, C, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
    C: Insertable<E>,
{
    fn from_iter<T: IntoIterator<Item = (K, E)>>(iter: T) -> Self {
        let mut cc = Self::default();
        cc.extend(iter);
        cc
    }
}

impl<K, C, S> core::fmt::Debug for ClassifiedCollections<K, C, S>
where
    K: core::fmt::Debug,
    C: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_keep_push_order_per_key() {
        let mut cc: ClassifiedLists<&'static str, i32> = ClassifiedCollections::new();
        cc.push("odd", 1);
        cc.push("even", 2);
        cc.push("odd", 3);
        assert_eq!(cc.len(), 2);
        assert_eq!(cc.get("odd"), Some(&vec![1, 3]));
        assert_eq!(cc.get("even"), Some(&vec![2]));
    }

    #[test]
    fn sets_deduplicate() {
        let mut cc: ClassifiedSets<u8, char> = ClassifiedCollections::new();
        for c in "hello".chars() {
            cc.push(0, c);
        }
        assert_eq!(cc.get(&0u8).map(|s| s.len()), Some(4));
    }

    #[test]
    fn counters_count() {
        let mut cc: ClassifiedCounters<&'static str, &'static str> = ClassifiedCollections::new();
        for w in ["a", "b", "a", "a"] {
            cc.push("words", w);
        }
        let c = cc.get("words").unwrap();
        assert_eq!(c.count("a"), 3);
        assert_eq!(c.count("b"), 1);
        assert_eq!(c.count("z"), 0);
        assert_eq!(c.len(), 2);
        assert_eq!(c.total(), 4);
    }

    #[test]
    fn strict_accessors_report_missing_keys() {
        let mut cc: ClassifiedLists<String, i32> = ClassifiedCollections::new();
        assert_eq!(cc.try_get("nope"), Err(Error::KeyNotFound));
        cc.push("k".to_string(), 1);
        assert_eq!(cc.try_remove("k"), Ok(vec![1]));
        assert_eq!(cc.try_remove("k"), Err(Error::KeyNotFound));
        assert!(cc.is_empty());
    }
}
