//! LabeledGraph: directed weighted graph addressed by vertex name.
//!
//! A thin naming layer over `IndexGraph`. Names live in a dense `Vec`
//! whose positions are the vertex indices, and a `hashbrown::HashTable`
//! of positions resolves a name to its index. Together they form a
//! bijection between names and `0..num_vertices()`. Each name's hash is
//! stored alongside it, so `N: Hash` runs only on insert and lookup,
//! never when the index resizes.

use crate::error::{EdgeError, VertexError};
use crate::index_graph::IndexGraph;
use crate::reentrancy::ProbeCheck;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_table::Entry;
use hashbrown::HashTable;
use std::collections::hash_map::RandomState;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct LabeledGraph<N, W = i64, S = RandomState> {
    hasher: S,
    index: HashTable<usize>,
    names: Vec<N>,   // position == vertex index
    hashes: Vec<u64>, // parallel to `names`
    graph: IndexGraph<W>,
    reentrancy: ProbeCheck,
}

impl<N, W> LabeledGraph<N, W>
where
    N: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }

    /// Builds a graph whose vertices are `names`, indexed in iteration
    /// order. Fails on the first repeated name.
    pub fn from_names<I>(names: I) -> Result<Self, VertexError>
    where
        I: IntoIterator<Item = N>,
    {
        Self::from_names_with_hasher(names, Default::default())
    }
}

impl<N, W> Default for LabeledGraph<N, W>
where
    N: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W, S> LabeledGraph<N, W, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            index: HashTable::new(),
            names: Vec::new(),
            hashes: Vec::new(),
            graph: IndexGraph::default(),
            reentrancy: ProbeCheck::new(),
        }
    }

    pub fn from_names_with_hasher<I>(names: I, hasher: S) -> Result<Self, VertexError>
    where
        I: IntoIterator<Item = N>,
    {
        let mut g = Self::with_hasher(hasher);
        for name in names {
            g.add_vertex(name)?;
        }
        Ok(g)
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    // Callers hold the reentrancy guard.
    fn lookup<Q>(&self, q: &Q) -> Option<usize>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(q);
        self.index
            .find(hash, |&i| self.names[i].borrow() == q)
            .copied()
    }

    fn resolve<Q>(&self, from: &Q, to: &Q) -> Option<(usize, usize)>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _busy = self.reentrancy.enter();
        Some((self.lookup(from)?, self.lookup(to)?))
    }

    pub fn index_of<Q>(&self, q: &Q) -> Option<usize>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _busy = self.reentrancy.enter();
        self.lookup(q)
    }

    pub fn name_of(&self, index: usize) -> Option<&N> {
        self.names.get(index)
    }

    /// Registers `name` under the next free index and returns that index.
    pub fn add_vertex(&mut self, name: N) -> Result<usize, VertexError> {
        let _busy = self.reentrancy.enter();
        let hash = self.make_hash(&name);
        let names = &self.names;
        let hashes = &self.hashes;
        match self
            .index
            .entry(hash, |&i| names[i] == name, |&i| hashes[i])
        {
            Entry::Occupied(_) => {
                debug!("labeled graph: rejected duplicate vertex name");
                Err(VertexError::DuplicateName)
            }
            Entry::Vacant(slot) => {
                let idx = self.graph.add_vertex();
                let _ = slot.insert(idx);
                self.names.push(name);
                self.hashes.push(hash);
                trace!(index = idx, "labeled graph: added vertex");
                Ok(idx)
            }
        }
    }

    /// Adds `from -> to` with weight 1.
    pub fn add_edge<Q>(&mut self, from: &Q, to: &Q) -> Result<(), EdgeError>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        W: From<u8>,
    {
        self.add_weighted_edge(from, to, W::from(1))
    }

    pub fn add_weighted_edge<Q>(&mut self, from: &Q, to: &Q, weight: W) -> Result<(), EdgeError>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (from, to) = self.resolve(from, to).ok_or(EdgeError::UnknownVertex)?;
        self.graph.add_weighted_edge(from, to, weight)
    }

    pub fn has_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.edge_weight(from, to).is_some()
    }

    pub fn edge_weight<Q>(&self, from: &Q, to: &Q) -> Option<&W>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (from, to) = self.resolve(from, to)?;
        self.graph.edge_weight(from, to)
    }

    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    pub fn num_vertices(&self) -> usize {
        self.names.len()
    }

    /// All vertex names; position `i` holds the name of vertex `i`.
    pub fn vertices(&self) -> &[N] {
        &self.names
    }

    /// Outgoing edges of `name` as `(target name, weight)`, in insertion
    /// order; empty when `name` is unknown.
    pub fn connected<Q>(&self, name: &Q) -> Vec<(&N, &W)>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(from) = self.index_of(name) else {
            return Vec::new();
        };
        self.graph
            .connected(from)
            .iter()
            .map(|(target, w)| (&self.names[*target], w))
            .collect()
    }

    /// The underlying index-addressed graph.
    pub fn as_index_graph(&self) -> &IndexGraph<W> {
        &self.graph
    }
}
