//! Error types reported by the fallible operations of each structure.

use thiserror::Error;

/// Returned by `KeyedTable::insert` when the key is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError {
    #[error("key already present")]
    DuplicateKey,
}

/// Returned when a table is constructed with an unusable capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityError {
    #[error("capacity must be positive")]
    Zero,
}

/// Why an edge could not be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeError {
    #[error("vertex {vertex} out of range for graph with {len} vertices")]
    VertexOutOfRange { vertex: usize, len: usize },
    #[error("unknown vertex name")]
    UnknownVertex,
    #[error("edge already present")]
    DuplicateEdge,
}

/// Returned by `LabeledGraph::add_vertex` when the name is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VertexError {
    #[error("vertex name already present")]
    DuplicateName,
}
