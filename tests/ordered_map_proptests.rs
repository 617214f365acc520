// OrderedMap property tests (public API).
//
// Property 1: insert-then-lookup round trip and size parity.
//  - Model: BTreeMap of live keys.
//  - Invariant: len() == number of live keys; get(k) == model[k].
//
// Property 2: order semantics.
//  - Update keeps relative position; remove + reinsert moves the key to
//    the end, after every other live key.
//
// Property 3: compaction is observationally a no-op.
//  - Iteration output before and after compact() is identical, and a
//    second compact() changes nothing, including the slot count.
use ordered_collections::OrderedMap;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(u8, u32),
    Remove(u8),
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        3 => (0u8..32, any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => (0u8..32).prop_map(Op::Remove),
    ];
    proptest::collection::vec(op, 0..300)
}

fn apply(m: &mut OrderedMap<u8, u32>, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                m.insert(k, v);
            }
            Op::Remove(k) => {
                m.remove(&k);
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_size_and_round_trip(ops in arb_ops()) {
        let mut m: OrderedMap<u8, u32> = OrderedMap::new();
        let mut model: BTreeMap<u8, u32> = BTreeMap::new();
        for op in &ops {
            match *op {
                Op::Insert(k, v) => {
                    m.insert(k, v);
                    model.insert(k, v);
                    prop_assert_eq!(m.get(&k), Some(&v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(m.remove(&k), model.remove(&k));
                }
            }
            prop_assert_eq!(m.len(), model.len());
            prop_assert!(m.slot_count() as f64 <= 1.25 * m.len() as f64);
        }
        for (k, v) in &model {
            prop_assert_eq!(m.get(k), Some(v));
        }
    }

    #[test]
    fn prop_update_keeps_position(ops in arb_ops(), pick in any::<prop::sample::Index>(), v in any::<u32>()) {
        let mut m: OrderedMap<u8, u32> = OrderedMap::new();
        apply(&mut m, &ops);
        prop_assume!(!m.is_empty());
        let before: Vec<u8> = m.keys().copied().collect();
        let k = before[pick.index(before.len())];
        m.insert(k, v);
        let after: Vec<u8> = m.keys().copied().collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(m.get(&k), Some(&v));
    }

    #[test]
    fn prop_reinsert_moves_to_end(ops in arb_ops(), pick in any::<prop::sample::Index>()) {
        let mut m: OrderedMap<u8, u32> = OrderedMap::new();
        apply(&mut m, &ops);
        prop_assume!(!m.is_empty());
        let keys: Vec<u8> = m.keys().copied().collect();
        let k = keys[pick.index(keys.len())];
        let v = m.remove(&k).unwrap();
        m.insert(k, v);

        let mut expected: Vec<u8> = keys.into_iter().filter(|&x| x != k).collect();
        expected.push(k);
        prop_assert_eq!(m.keys().copied().collect::<Vec<_>>(), expected);
        prop_assert_eq!(m.last(), Some((&k, &v)));
    }

    #[test]
    fn prop_compaction_is_invisible(ops in arb_ops()) {
        let mut m: OrderedMap<u8, u32> = OrderedMap::new();
        apply(&mut m, &ops);
        let before: Vec<(u8, u32)> = m.iter().map(|(k, v)| (*k, *v)).collect();
        m.compact();
        let once: Vec<(u8, u32)> = m.iter().map(|(k, v)| (*k, *v)).collect();
        let slots = m.slot_count();
        m.compact();
        let twice: Vec<(u8, u32)> = m.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(&before, &once);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(slots, m.len());
        prop_assert_eq!(m.slot_count(), slots);
    }
}
