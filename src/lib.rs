//! ordered-collections: an insertion-ordered hash map built as a layer over
//! an unordered key index, plus keyed "classified" collections.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: O(1) amortized insert, lookup, update and delete with iteration
//!   in slot order, on top of a hash index that has no order of its own.
//! - Layers:
//!   - SlotIndex<K>: narrow contract over a key -> `Position` table
//!     (`position`, `position_mut`, `insert`, `len`, `reserve`, `clear`).
//!     `HashIndex` is the default implementation; any `hashbrown::HashMap`
//!     works too.
//!   - OrderedMap<K, V, I>: two parallel append-only arrays (`keys`,
//!     `values`) plus the index. The index maps a live key to its slot id,
//!     or to `Position::Tombstone` once the key is removed.
//!   - ClassifiedCollections<K, C>: independent utility; a plain hash map
//!     from key to a sub-collection created on first push.
//!
//! Slot invariants (OrderedMap)
//! - `keys.len() == values.len()` always.
//! - Slot `i` is filled iff `index.position(keys[i]) == Slot(i)`. A value
//!   cell is `Some` exactly for filled slots.
//! - `len()` equals the number of filled slots, never the physical length.
//! - Iteration visits filled slots in ascending slot order. Updating a key
//!   keeps its slot; removing and reinserting appends a new slot.
//! - A key, once inserted, is never absent from the index: removal writes a
//!   tombstone.
//!
//! Compaction
//! - After each insert/remove, if `slots > (1 + θ) * len()` the map keeps
//!   only filled slots (relative order intact) and renumbers them `0..len()`
//!   in the index. θ comes from `Config` (default 0.25).
//! - Each pass is O(slots) and reclaims Θ(dead slots); dead slots accrue at
//!   most one per operation, which bounds the amortized overhead.
//! - A compaction that finds a filled-slot count different from `len()`
//!   asserts: that is a broken invariant, not a runtime condition.
//!
//! Reentrancy
//! - `HashIndex` guards each entry point with a debug-only reentrancy check,
//!   since `K: Eq`/`K: Hash` run while probing. Release builds compile the
//!   check away.
//!
//! Concurrency
//! - Single-threaded and synchronous. `OrderedMap` is `Send` when its parts
//!   are; the default index is `!Sync`. Iterators borrow the map, so mutation
//!   during iteration does not compile.
//!
//! Errors
//! - `Error::KeyNotFound` from strict lookups/removals (`try_get`,
//!   `try_remove`), `Error::EmptyCollection` from `pop` on an empty map,
//!   `Error::InvalidThreshold` from `Config::new`. Everything else returns
//!   `Option` or succeeds.
//!
//! Notes and non-goals
//! - The hash table's probing and growth policy belong to `hashbrown`.
//! - No bounded worst-case latency: a compaction is O(n) when it runs.
//! - Tombstoned keys stay in the index until `clear()`.

mod classified;
mod config;
mod error;
mod ordered_map;
mod ordered_map_proptest;
mod reentrancy;
pub mod slot_index;

// Public surface
pub use classified::{
    ClassifiedCollections, ClassifiedCounters, ClassifiedLists, ClassifiedSets, Counter,
    Insertable,
};
pub use config::{Config, DEFAULT_STALENESS_THRESHOLD};
pub use error::{Error, Result};
pub use ordered_map::{IntoIter, Iter, IterMut, OrderedMap};
pub use slot_index::{HashIndex, Position, SlotIndex};
