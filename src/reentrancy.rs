//! Catches a key's `Eq` or `Hash` calling back into the index probing for it.
//!
//! `HashIndex` runs user code (`K: Eq`, `K: Hash`) in the middle of a table
//! probe. If that code reaches the same index again, the table is observed
//! mid-operation. Debug builds record which index operation is running and
//! panic on a nested one, naming both. Release builds keep only the marker
//! type.

use core::cell::Cell;
use core::marker::PhantomData;

/// Tracks the index operation currently in progress on one `HashIndex`.
#[derive(Debug)]
pub(crate) struct ReentrancyCheck {
    #[cfg(debug_assertions)]
    active: Cell<Option<&'static str>>,
    // Send, never Sync, in every profile.
    _nosync: PhantomData<Cell<()>>,
}

impl ReentrancyCheck {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            active: Cell::new(None),
            _nosync: PhantomData,
        }
    }

    /// Marks `op` as running until the returned guard drops.
    #[inline]
    pub(crate) fn enter(&self, op: &'static str) -> ActiveOp<'_> {
        #[cfg(debug_assertions)]
        {
            if let Some(outer) = self.active.get() {
                panic!("slot index re-entered: `{op}` called from a key's Eq/Hash during `{outer}`");
            }
            self.active.set(Some(op));
            ActiveOp { owner: self }
        }

        #[cfg(not(debug_assertions))]
        {
            let _ = op;
            ActiveOp { _z: PhantomData }
        }
    }

    #[cfg(all(test, debug_assertions))]
    fn active(&self) -> Option<&'static str> {
        self.active.get()
    }
}

impl Default for ReentrancyCheck {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) struct ActiveOp<'a> {
    #[cfg(debug_assertions)]
    owner: &'a ReentrancyCheck,
    #[cfg(not(debug_assertions))]
    _z: PhantomData<&'a ()>,
}

impl Drop for ActiveOp<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.owner.active.set(None);
    }
}
