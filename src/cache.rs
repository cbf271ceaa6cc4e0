use crate::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Shared, immutable EV vector as stored in a [`Cache`].
pub type Equities = Arc<[Utility]>;

type Slot = Arc<OnceLock<Result<Equities, Invalid>>>;

/// Unbounded memo from [`Key`] to EV vector, computed at most once per key.
///
/// The map lock is held only long enough to find or insert a key's slot.
/// The computation itself runs inside the slot's `OnceLock`, so a second
/// thread asking for a key that is mid-computation blocks until the first
/// publishes, and the recursion can freely consult other slots meanwhile.
/// Failures are memoized too: evaluation is pure, so a key that failed once
/// fails identically forever.
///
/// Entries live as long as the cache and are never evicted.
#[derive(Debug, Default)]
pub struct Cache {
    slots: Mutex<HashMap<Key, Slot>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl Cache {
    /// Returns the memoized vector for `key`, running `compute` only if no
    /// thread has produced it yet.
    pub fn get_or_compute<F>(&self, key: Key, compute: F) -> Result<Equities, Invalid>
    where
        F: FnOnce() -> Result<Equities, Invalid>,
    {
        let slot = self.slot(key);
        let mut fresh = false;
        let result = slot.get_or_init(|| {
            fresh = true;
            compute()
        });
        match fresh {
            true => self.misses.fetch_add(1, Ordering::Relaxed),
            false => self.hits.fetch_add(1, Ordering::Relaxed),
        };
        result.clone()
    }
    /// Number of keys ever requested.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Lookups answered without computing.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }
    /// Lookups that ran the computation.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
    /// The map only ever gains fully-formed slots, so a poisoned lock
    /// still guards a consistent map.
    fn slot(&self, key: Key) -> Slot {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_default()
            .clone()
    }
}

impl std::fmt::Display for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<16}{:<16}{:<16}",
            format!("keys {}", self.len()),
            format!("hits {}", self.hits()),
            format!("miss {}", self.misses()),
        )
    }
}
