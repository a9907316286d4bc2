//! Edge records and undirected edge handles
//!
//! The directed store keeps one `Edge` record per edge, with an ordered
//! `source -> target` pair. The undirected list hands out `UndirectedEdge`
//! handles, which pair that record's identity with the endpoint it was
//! reached from.

use super::types::{EdgeId, VertexId};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A directed edge record
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E> {
    /// Identifier of this edge
    pub id: EdgeId,

    /// Source vertex (edge goes FROM this vertex)
    pub source: VertexId,

    /// Target vertex (edge goes TO this vertex)
    pub target: VertexId,

    /// Value associated with this edge
    pub value: E,
}

impl<E> Edge<E> {
    pub fn new(id: EdgeId, source: VertexId, target: VertexId, value: E) -> Self {
        Edge {
            id,
            source,
            target,
            value,
        }
    }

    /// The endpoint opposite to `vertex`.
    ///
    /// If `vertex` is the stored source the target is returned, otherwise the
    /// source.
    pub fn opposite(&self, vertex: VertexId) -> VertexId {
        if self.source == vertex {
            self.target
        } else {
            self.source
        }
    }
}

/// Handle to an undirected edge
///
/// `source` is the viewpoint: the vertex the edge was obtained from.
/// `target` is the other endpoint of the same underlying record. The pair
/// `{source, target}` always equals the stored `{source, target}` of
/// `underlying`, in some order.
///
/// Equality, hashing and ordering only look at `underlying`, so the two
/// views of one edge compare equal.
#[derive(Debug, Clone, Copy)]
pub struct UndirectedEdge {
    /// Identity of the backing directed edge
    pub underlying: EdgeId,

    /// Viewpoint endpoint
    pub source: VertexId,

    /// Opposite endpoint
    pub target: VertexId,
}

impl UndirectedEdge {
    pub fn new(underlying: EdgeId, source: VertexId, target: VertexId) -> Self {
        UndirectedEdge {
            underlying,
            source,
            target,
        }
    }

    /// Wrap a directed record, viewed from its stored source
    pub fn from_directed<E>(edge: &Edge<E>) -> Self {
        Self::new(edge.id, edge.source, edge.target)
    }

    /// Wrap a directed record, viewed from `vertex`
    pub fn viewed_from<E>(edge: &Edge<E>, vertex: VertexId) -> Self {
        Self::new(edge.id, vertex, edge.opposite(vertex))
    }

    /// The same edge seen from the other endpoint
    pub fn reversed(self) -> Self {
        Self::new(self.underlying, self.target, self.source)
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Check if this edge joins `a` and `b`, in either order
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

impl PartialEq for UndirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.underlying == other.underlying
    }
}

impl Eq for UndirectedEdge {}

impl Hash for UndirectedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.underlying.hash(state);
    }
}

impl PartialOrd for UndirectedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UndirectedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.underlying.cmp(&other.underlying)
    }
}
