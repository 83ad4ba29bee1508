//! IndexGraph: directed weighted graph addressed by vertex position.
//!
//! Each vertex owns a list of `(target, weight)` pairs. At most one edge
//! exists per ordered vertex pair; vertices are appended and never removed.

use crate::error::EdgeError;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct IndexGraph<W = i64> {
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> Default for IndexGraph<W> {
    fn default() -> Self {
        Self {
            adjacency: Vec::new(),
        }
    }
}

impl<W> IndexGraph<W> {
    /// Creates a graph with `vertices` isolated vertices `0..vertices`.
    pub fn new(vertices: usize) -> Self {
        Self {
            adjacency: (0..vertices).map(|_| Vec::new()).collect(),
        }
    }

    /// Appends an isolated vertex and returns its index. Never fails.
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Counts directed edges; `a -> b` and `b -> a` are two edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn check(&self, vertex: usize) -> Result<(), EdgeError> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(EdgeError::VertexOutOfRange {
                vertex,
                len: self.adjacency.len(),
            })
        }
    }

    /// Adds `from -> to` with weight 1.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), EdgeError>
    where
        W: From<u8>,
    {
        self.add_weighted_edge(from, to, W::from(1))
    }

    /// Adds `from -> to`. Fails without mutating when either endpoint is
    /// out of range or the edge already exists (whatever its weight).
    pub fn add_weighted_edge(&mut self, from: usize, to: usize, weight: W) -> Result<(), EdgeError> {
        self.check(from)?;
        self.check(to)?;
        let out = &mut self.adjacency[from];
        if out.iter().any(|&(target, _)| target == to) {
            debug!(from, to, "index graph: rejected duplicate edge");
            return Err(EdgeError::DuplicateEdge);
        }
        out.push((to, weight));
        Ok(())
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_weight(from, to).is_some()
    }

    pub fn edge_weight(&self, from: usize, to: usize) -> Option<&W> {
        if to >= self.adjacency.len() {
            return None;
        }
        self.adjacency
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, w)| w)
    }

    /// Outgoing `(target, weight)` pairs of `vertex` in insertion order;
    /// empty when `vertex` is out of range.
    pub fn connected(&self, vertex: usize) -> &[(usize, W)] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}
