#![cfg(test)]

// Property tests for OrderedMap kept inside the crate so they can assert the
// slot-array invariants after every operation.

use crate::config::Config;
use crate::error::Error;
use crate::ordered_map::OrderedMap;
use crate::slot_index::{HashIndex, Position, SlotIndex};
use proptest::prelude::*;
use std::fmt;
use std::hash::{BuildHasher, Hasher};

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Pool-indexed operations to improve shrinking.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    GetOrInsert(usize, i32),
    Remove(usize),
    Pop,
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Compact,
    Iterate,
}

fn key_from(pool: &[String], i: usize) -> Key {
    Key(pool[i].clone())
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::GetOrInsert(i, v)),
            3 => idx.clone().prop_map(OpI::Remove),
            1 => Just(OpI::Pop),
            1 => idx.clone().prop_map(OpI::Get),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Compact),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

/// Ordered model: a vector of live pairs in iteration order.
#[derive(Default)]
struct Model(Vec<(Key, i32)>);

impl Model {
    fn position(&self, k: &Key) -> Option<usize> {
        self.0.iter().position(|(kk, _)| kk == k)
    }
    fn insert(&mut self, k: Key, v: i32) -> Option<i32> {
        match self.position(&k) {
            Some(p) => Some(std::mem::replace(&mut self.0[p].1, v)),
            None => {
                self.0.push((k, v));
                None
            }
        }
    }
    fn remove(&mut self, k: &Key) -> Option<i32> {
        self.position(k).map(|p| self.0.remove(p).1)
    }
    fn get(&self, k: &Key) -> Option<i32> {
        self.position(k).map(|p| self.0[p].1)
    }
}

fn run_scenario<I>(
    mut sut: OrderedMap<Key, i32, I>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError>
where
    I: SlotIndex<Key>,
{
    let mut model = Model::default();
    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = key_from(pool, i);
                prop_assert_eq!(sut.insert(k.clone(), v), model.insert(k.clone(), v));
                prop_assert_eq!(sut.get(&k).copied(), Some(v));
            }
            OpI::GetOrInsert(i, v) => {
                let k = key_from(pool, i);
                let got = *sut.get_or_insert(k.clone(), v);
                let expected = match model.get(&k) {
                    Some(existing) => existing,
                    None => {
                        model.insert(k, v);
                        v
                    }
                };
                prop_assert_eq!(got, expected);
            }
            OpI::Remove(i) => {
                let k = key_from(pool, i);
                prop_assert_eq!(sut.remove(&k), model.remove(&k));
                prop_assert!(!sut.contains_key(&k));
                if sut.index().position(&k).is_some() {
                    prop_assert_eq!(sut.index().position(&k), Some(Position::Tombstone));
                }
            }
            OpI::Pop => match model.0.pop() {
                Some(expected) => {
                    prop_assert_eq!(sut.pop(), Ok(expected));
                }
                None => {
                    prop_assert_eq!(sut.pop(), Err(Error::EmptyCollection));
                }
            },
            OpI::Get(i) => {
                let k = key_from(pool, i);
                prop_assert_eq!(sut.get(&k).copied(), model.get(&k));
                prop_assert_eq!(sut.get_key(k.0.as_str()), model.position(&k).map(|p| &model.0[p].0));
            }
            OpI::Contains(s) => {
                let has_model = model.0.iter().any(|(k, _)| k.0 == s);
                prop_assert_eq!(sut.contains_key(s.as_str()), has_model);
            }
            OpI::Mutate(i, d) => {
                let k = key_from(pool, i);
                if let Some(v) = sut.get_mut(&k) {
                    *v = v.saturating_add(d);
                    let p = model.position(&k).expect("model tracks live key");
                    model.0[p].1 = model.0[p].1.saturating_add(d);
                }
            }
            OpI::Compact => {
                let before: Vec<(Key, i32)> = sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                sut.compact();
                prop_assert_eq!(sut.slot_count(), sut.len());
                let after: Vec<(Key, i32)> = sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(before, after);
            }
            OpI::Iterate => {
                for (_, v) in sut.iter_mut() {
                    *v = v.wrapping_add(1);
                }
                for (_, v) in model.0.iter_mut() {
                    *v = v.wrapping_add(1);
                }
            }
        }

        // Post-conditions after each op
        sut.check_invariants();
        prop_assert_eq!(sut.len(), model.0.len());
        let got: Vec<(Key, i32)> = sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(&got, &model.0);
    }
    Ok(())
}

// Property: state-machine equivalence against an ordered Vec model.
// - Updates keep position; remove + reinsert moves a key to the end.
// - `pop` returns the last live pair, or EmptyCollection.
// - Compaction never changes iteration output.
// - Slot invariants and the staleness bound hold after every op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(OrderedMap::new(), &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_any_threshold(
        (pool, ops) in arb_scenario(),
        theta in 0.0f64..4.0,
    ) {
        let config = Config::new(theta).unwrap();
        run_scenario(OrderedMap::with_config(config), &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_hashbrown_index((pool, ops) in arb_scenario()) {
        let index: hashbrown::HashMap<Key, Position> = hashbrown::HashMap::new();
        run_scenario(OrderedMap::with_index(index, Config::default()), &pool, ops)?;
    }
}

// Collision variant using a constant hasher to stress equality resolution.
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

proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let index = HashIndex::with_hasher(ConstBuildHasher);
        run_scenario(OrderedMap::with_index(index, Config::default()), &pool, ops)?;
    }
}

// Property: `pop` terminates and stays correct when most slots behind the
// last live entry are dead (a lazy threshold keeps them around). Draining
// the map by `pop` alone must yield the live pairs in reverse order.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_pop_through_dead_tail(
        n in 1usize..200,
        removed in proptest::collection::vec(any::<bool>(), 200),
        theta in prop_oneof![Just(0.0f64), Just(0.25), Just(1_000.0)],
    ) {
        let mut m: OrderedMap<usize, usize> = OrderedMap::with_config(Config::new(theta).unwrap());
        for i in 0..n {
            m.insert(i, i * 2);
        }
        for i in 0..n {
            if removed[i] {
                m.remove(&i);
            }
        }
        m.check_invariants();

        let mut expected: Vec<(usize, usize)> =
            (0..n).filter(|&i| !removed[i]).map(|i| (i, i * 2)).collect();
        while let Some(pair) = expected.pop() {
            prop_assert_eq!(m.pop(), Ok(pair));
            m.check_invariants();
        }
        prop_assert!(m.is_empty());
        prop_assert_eq!(m.pop(), Err(Error::EmptyCollection));
        prop_assert_eq!(m.slot_count(), 0);
    }
}
