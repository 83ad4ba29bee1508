//! adtkit: three small, independent generic data structures.
//!
//! - `KeyedTable<K, V, S>`: open-addressing map with linear probing and
//!   capacity doubling at a 0.7 load factor.
//! - `IndexGraph<W>` / `LabeledGraph<N, W, S>`: directed weighted graphs
//!   addressed by vertex index or by vertex name, with at most one edge per
//!   ordered vertex pair.
//! - `MinHeap<T>`: binary min-heap over any `Ord` element type.
//!
//! Internal Design:
//!
//! KeyedTable
//! - Storage is one `Vec<Option<Entry>>`; its length is the capacity.
//! - Growth appends empty slots and leaves every entry at its absolute
//!   index (no rehash). Lookups sweep the whole array from the key's home
//!   slot, so entries stay reachable after the modulus changes.
//! - Removal clears the slot without a tombstone. Since lookups skip
//!   empty slots instead of stopping at them, clearing never hides a key.
//! - Each entry stores its precomputed `u64` hash. The hash is compared
//!   before `K: Eq`, and `K: Hash` never runs after insertion.
//!
//! Graphs
//! - `IndexGraph` keeps one `Vec<(target, weight)>` per vertex. Duplicate
//!   detection is a linear scan of the source's out-list.
//! - `LabeledGraph` wraps an `IndexGraph` and adds a name <-> index
//!   bijection: a dense `Vec` of names plus a `hashbrown::HashTable` of
//!   positions.
//!
//! Error reporting
//! - Ordinary misuse (duplicate key, duplicate edge or name, unknown or
//!   out-of-range vertex) returns `Err` with a typed reason. Absence
//!   (missing key, empty heap, missing edge) is `None`.
//! - Only construction with capacity zero panics, and
//!   `KeyedTable::try_with_capacity` offers a fallible alternative.
//!
//! Constraints
//! - No internal locking. Mutation requires `&mut self`, and every type is
//!   `Send` when its parameters are. `KeyedTable` and `LabeledGraph` carry a
//!   debug-only reentrancy check that panics if user `Eq`/`Hash` re-enters
//!   the structure mid-probe; in debug builds this makes them `!Sync`.
//! - Logging goes through `tracing` (growth and vertex registration at
//!   `trace`, rejected duplicates at `debug`). No subscriber is installed.

mod error;
mod index_graph;
mod keyed_table;
mod keyed_table_proptest;
mod labeled_graph;
mod min_heap;
mod reentrancy;

// Public surface
pub use error::{CapacityError, EdgeError, InsertError, VertexError};
pub use index_graph::IndexGraph;
pub use keyed_table::{KeyedTable, DEFAULT_CAPACITY};
pub use labeled_graph::LabeledGraph;
pub use min_heap::MinHeap;
