//! Vertex record stored by the directed adjacency list

use super::types::VertexId;

/// A vertex and its associated value
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<V> {
    /// Identifier of this vertex
    pub id: VertexId,

    /// Value associated with this vertex
    pub value: V,
}

impl<V> Vertex<V> {
    pub fn new(id: VertexId, value: V) -> Self {
        Vertex { id, value }
    }
}
