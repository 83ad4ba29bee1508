//! KeyedTable: open-addressing map with linear probing and doubling growth.
//!
//! Storage is a flat `Vec` of optional entries whose length is the
//! capacity. Two behaviors differ from a textbook table and are kept on
//! purpose:
//!
//! - Growth does not rehash. Doubling appends empty slots and every live
//!   entry keeps its absolute slot index. Probing is always relative to
//!   `hash % capacity`, and lookups sweep the whole array, so relocated
//!   entries stay reachable.
//! - Removal clears the slot outright (no tombstone). Lookups skip empty
//!   slots instead of stopping at them, so a cleared slot never hides a
//!   key that probed past it.
//!
//! Lookups walk up to `2 * capacity` probe steps; past the first
//! `capacity` steps the walk revisits slots already examined.

use crate::error::{CapacityError, InsertError};
use crate::reentrancy::ProbeCheck;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;
use tracing::{debug, trace};

/// Capacity used by `KeyedTable::new`.
pub const DEFAULT_CAPACITY: usize = 32;

// Load factor 0.7 as an integer ratio.
const LOAD_NUM: usize = 7;
const LOAD_DEN: usize = 10;

// Lookup probe bound, in multiples of the capacity.
const PROBE_ROUNDS: usize = 2;

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
}

#[derive(Debug, Clone)]
pub struct KeyedTable<K, V, S = RandomState> {
    hasher: S,
    slots: Vec<Option<Entry<K, V>>>, // len() is the capacity
    len: usize,
    reentrancy: ProbeCheck,
}

impl<K, V> KeyedTable<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        Self::try_with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V> Default for KeyedTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> KeyedTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Panics if `capacity` is zero.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        match Self::try_with_capacity_and_hasher(capacity, hasher) {
            Ok(table) => table,
            Err(e) => panic!("KeyedTable: {e}"),
        }
    }

    pub fn try_with_capacity_and_hasher(capacity: usize, hasher: S) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::Zero);
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self {
            hasher,
            slots,
            len: 0,
            reentrancy: ProbeCheck::new(),
        })
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Number of slots in the backing array.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slot indices visited for `hash`, starting at its home slot and
    /// wrapping, for `steps` steps.
    fn probe(&self, hash: u64, steps: usize) -> impl Iterator<Item = usize> {
        let capacity = self.slots.len();
        let home = (hash % capacity as u64) as usize;
        (0..steps).map(move |step| (home + step) % capacity)
    }

    fn find_slot<Q>(&self, hash: u64, q: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.probe(hash, PROBE_ROUNDS * self.capacity())
            .find(|&i| match &self.slots[i] {
                Some(e) => e.hash == hash && e.key.borrow() == q,
                None => false,
            })
    }

    pub fn search<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _busy = self.reentrancy.enter();
        let hash = self.make_hash(q);
        let slot = self.find_slot(hash, q)?;
        self.slots[slot].as_ref().map(|e| &e.value)
    }

    pub fn search_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _busy = self.reentrancy.enter();
        let hash = self.make_hash(q);
        let slot = self.find_slot(hash, q)?;
        self.slots[slot].as_mut().map(|e| &mut e.value)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _busy = self.reentrancy.enter();
        let hash = self.make_hash(q);
        self.find_slot(hash, q).is_some()
    }

    /// Inserts a new key. An existing key is never overwritten; use
    /// `modify` for that.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), InsertError> {
        let _busy = self.reentrancy.enter();
        let hash = self.make_hash(&key);
        if self.find_slot(hash, &key).is_some() {
            debug!(len = self.len, "keyed table: rejected duplicate key");
            return Err(InsertError::DuplicateKey);
        }

        // Growth runs before len reaches capacity, so a vacant slot exists.
        debug_assert!(self.len < self.capacity());
        let Some(slot) = self
            .probe(hash, self.capacity())
            .find(|&i| self.slots[i].is_none())
        else {
            unreachable!("load factor keeps at least one slot vacant");
        };
        self.slots[slot] = Some(Entry { key, value, hash });
        self.len += 1;

        let capacity = self.slots.len();
        if self.len * LOAD_DEN >= capacity * LOAD_NUM {
            // Existing entries stay at their absolute indices.
            self.slots.resize_with(capacity * 2, || None);
            trace!(
                len = self.len,
                from = capacity,
                to = capacity * 2,
                "keyed table: grew"
            );
        }
        Ok(())
    }

    /// Replaces the value stored under `q`, returning the previous one.
    /// Returns `None` and leaves the table untouched when `q` is absent.
    pub fn modify<Q>(&mut self, q: &Q, value: V) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.search_mut(q).map(|v| core::mem::replace(v, value))
    }

    /// Clears the slot holding `q` and returns the owned entry.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _busy = self.reentrancy.enter();
        let hash = self.make_hash(q);
        let slot = self.find_slot(hash, q)?;
        let entry = self.slots[slot].take()?;
        self.len -= 1;
        Some((entry.key, entry.value))
    }

    #[cfg(test)]
    pub(crate) fn slot_of<Q>(&self, q: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find_slot(self.make_hash(q), q)
    }
}
