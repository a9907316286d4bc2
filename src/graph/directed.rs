//! Directed adjacency list
//!
//! The storage layer underneath the undirected list:
//! - vertices: VertexId -> Vertex (dense arena, insertion order)
//! - edges: EdgeId -> Edge (dense arena, insertion order)
//! - outgoing: VertexId -> Vec<EdgeId> (adjacency list for outgoing edges)
//! - incoming: VertexId -> Vec<EdgeId> (adjacency list for incoming edges)
//!
//! Identities are never reused; there is no removal.

use super::config::GraphConfig;
use super::edge::Edge;
use super::error::{Capacity, GraphError, GraphResult};
use super::iter::Vertices;
use super::types::{EdgeId, VertexId};
use super::vertex::Vertex;
use std::mem;
use std::ops::{Index, IndexMut};
use tracing::{debug, trace, warn};

/// Directed multigraph with per-vertex out-edge and in-edge indices
#[derive(Debug, Clone)]
pub struct DirectedAdjacencyList<V, E> {
    /// Vertex storage
    vertices: Vec<Vertex<V>>,

    /// Edge storage
    edges: Vec<Edge<E>>,

    /// Outgoing edges for each vertex, in insertion order
    outgoing: Vec<Vec<EdgeId>>,

    /// Incoming edges for each vertex, in insertion order
    incoming: Vec<Vec<EdgeId>>,

    config: GraphConfig,
}

impl<V, E> DirectedAdjacencyList<V, E> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::build(GraphConfig::default())
    }

    /// Create a new empty graph with the given ceilings and capacities
    pub fn with_config(config: GraphConfig) -> Self {
        debug!(
            max_order = ?config.max_order,
            max_size = ?config.max_size,
            "Creating directed adjacency list"
        );
        Self::build(config)
    }

    fn build(config: GraphConfig) -> Self {
        let vertex_capacity = config.initial_vertex_capacity();
        let edge_capacity = config.initial_edge_capacity();
        DirectedAdjacencyList {
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(vertex_capacity),
            incoming: Vec::with_capacity(vertex_capacity),
            config,
        }
    }

    /// Create a graph with one vertex per value, in iteration order
    pub fn from_vertices<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let values = values.into_iter();
        let config = GraphConfig::default().with_vertex_capacity(values.size_hint().0);
        let mut graph = Self::build(config);
        for value in values {
            graph.push_vertex(value);
        }
        debug!(order = graph.order(), "Created directed adjacency list from vertices");
        graph
    }

    // ============================================================
    // Graph properties
    // ============================================================

    /// Return the configuration this graph was created with
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Return the maximum number of vertices the graph can hold
    pub fn max_order(&self) -> usize {
        let bound = isize::MAX as usize / mem::size_of::<Vertex<V>>().max(1);
        self.config.max_order.map_or(bound, |max| max.min(bound))
    }

    /// Return the maximum number of edges the graph can hold
    pub fn max_size(&self) -> usize {
        let bound = isize::MAX as usize / mem::size_of::<Edge<E>>().max(1);
        self.config.max_size.map_or(bound, |max| max.min(bound))
    }

    /// Return true if the graph has no vertices
    pub fn null(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Return the number of vertices
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Return true if the graph has no edges
    pub fn empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Return the number of edges
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn has_vertex(&self, v: VertexId) -> bool {
        v.index().is_some_and(|i| i < self.vertices.len())
    }

    pub fn has_edge(&self, e: EdgeId) -> bool {
        e.index().is_some_and(|i| i < self.edges.len())
    }

    /// Number of edges leaving `v`
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.out_edges(v).len()
    }

    /// Number of edges entering `v`
    pub fn in_degree(&self, v: VertexId) -> usize {
        self.in_edges(v).len()
    }

    /// Out-degree plus in-degree. A self-loop counts twice.
    pub fn degree(&self, v: VertexId) -> usize {
        self.out_degree(v) + self.in_degree(v)
    }

    // ============================================================
    // Vertex and edge accessors
    // ============================================================

    pub fn vertex(&self, v: VertexId) -> Option<&Vertex<V>> {
        self.vertices.get(v.index()?)
    }

    pub fn edge(&self, e: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(e.index()?)
    }

    pub fn vertex_value(&self, v: VertexId) -> Option<&V> {
        self.vertices.get(v.index()?).map(|vertex| &vertex.value)
    }

    pub fn vertex_value_mut(&mut self, v: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(v.index()?).map(|vertex| &mut vertex.value)
    }

    pub fn edge_value(&self, e: EdgeId) -> Option<&E> {
        self.edges.get(e.index()?).map(|edge| &edge.value)
    }

    pub fn edge_value_mut(&mut self, e: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(e.index()?).map(|edge| &mut edge.value)
    }

    /// Return the source vertex of the edge `e`
    pub fn source(&self, e: EdgeId) -> Option<VertexId> {
        self.edge(e).map(|edge| edge.source)
    }

    /// Return the target vertex of the edge `e`
    pub fn target(&self, e: EdgeId) -> Option<VertexId> {
        self.edge(e).map(|edge| edge.target)
    }

    /// Outgoing edges of `v`, in insertion order
    pub fn out_edges(&self, v: VertexId) -> &[EdgeId] {
        v.index()
            .and_then(|i| self.outgoing.get(i))
            .map(Vec::as_slice).unwrap_or(&[])
    }

    /// Incoming edges of `v`, in insertion order
    pub fn in_edges(&self, v: VertexId) -> &[EdgeId] {
        v.index()
            .and_then(|i| self.incoming.get(i))
            .map(Vec::as_slice).unwrap_or(&[])
    }

    /// Return the nth outgoing edge of `v`
    pub fn get_out_edge(&self, v: VertexId, n: usize) -> Option<EdgeId> {
        self.out_edges(v).get(n).copied()
    }

    /// Return the nth incoming edge of `v`
    pub fn get_in_edge(&self, v: VertexId, n: usize) -> Option<EdgeId> {
        self.in_edges(v).get(n).copied()
    }

    /// Return the earliest inserted edge `u -> v`, if any.
    ///
    /// Only the shorter of `u`'s out-list and `v`'s in-list is scanned. Both
    /// lists are in insertion order, so the result does not depend on which
    /// one is chosen.
    pub fn get_edge(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        let out = self.out_edges(u);
        let inc = self.in_edges(v);
        if out.len() <= inc.len() {
            out.iter()
                .copied()
                .find(|&e| self.target(e) == Some(v))
        } else {
            inc.iter()
                .copied()
                .find(|&e| self.source(e) == Some(u))
        }
    }

    // ============================================================
    // Graph operations
    // ============================================================

    /// Add a vertex carrying `value`
    pub fn add_vertex(&mut self, value: V) -> GraphResult<VertexId> {
        let limit = self.max_order();
        if self.order() >= limit {
            warn!(limit, "Vertex capacity exceeded");
            return Err(GraphError::CapacityExceeded {
                kind: Capacity::Order,
                limit,
            });
        }
        Ok(self.push_vertex(value))
    }

    fn push_vertex(&mut self, value: V) -> VertexId {
        let id = VertexId::from(self.vertices.len());
        self.vertices.push(Vertex::new(id, value));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        trace!(vertex = id.as_u64(), "Added vertex");
        id
    }

    /// Add a directed edge `u -> v` carrying `value`.
    ///
    /// Parallel edges and self-loops are accepted.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, value: E) -> GraphResult<EdgeId> {
        let order = self.order();
        let Some(source) = u.index().filter(|&i| i < order) else {
            return Err(GraphError::InvalidEdgeSource(u));
        };
        let Some(target) = v.index().filter(|&i| i < order) else {
            return Err(GraphError::InvalidEdgeTarget(v));
        };
        let limit = self.max_size();
        if self.size() >= limit {
            warn!(limit, "Edge capacity exceeded");
            return Err(GraphError::CapacityExceeded {
                kind: Capacity::Size,
                limit,
            });
        }

        let id = EdgeId::from(self.edges.len());
        self.edges.push(Edge::new(id, u, v, value));

        // Update adjacency lists
        self.outgoing[source].push(id);
        self.incoming[target].push(id);

        trace!(
            edge = id.as_u64(),
            source = u.as_u64(),
            target = v.as_u64(),
            "Added edge"
        );
        Ok(id)
    }

    /// Edge records, in index order
    pub(crate) fn edge_records(&self) -> &[Edge<E>] {
        &self.edges
    }

    // ============================================================
    // Ranges
    // ============================================================

    /// All vertices, in index order
    pub fn vertices(&self) -> Vertices {
        Vertices::new(0..self.order())
    }
}

impl<V, E> DirectedAdjacencyList<V, E>
where
    V: Clone,
{
    /// Create a graph with `n` vertices, each carrying a copy of `value`
    pub fn with_vertices(n: usize, value: V) -> Self {
        Self::from_vertices(std::iter::repeat(value).take(n))
    }
}

impl<V, E> Default for DirectedAdjacencyList<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> FromIterator<V> for DirectedAdjacencyList<V, E> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}

impl<V, E> From<Vec<V>> for DirectedAdjacencyList<V, E> {
    fn from(values: Vec<V>) -> Self {
        Self::from_vertices(values)
    }
}

impl<V, E> Index<VertexId> for DirectedAdjacencyList<V, E> {
    type Output = V;

    fn index(&self, v: VertexId) -> &V {
        match self.vertex_value(v) {
            Some(value) => value,
            None => panic!("{} out of range for graph of order {}", v, self.order()),
        }
    }
}

impl<V, E> IndexMut<VertexId> for DirectedAdjacencyList<V, E> {
    fn index_mut(&mut self, v: VertexId) -> &mut V {
        let order = self.order();
        match self.vertex_value_mut(v) {
            Some(value) => value,
            None => panic!("{} out of range for graph of order {}", v, order),
        }
    }
}

impl<V, E> Index<EdgeId> for DirectedAdjacencyList<V, E> {
    type Output = E;

    fn index(&self, e: EdgeId) -> &E {
        match self.edge_value(e) {
            Some(value) => value,
            None => panic!("{} out of range for graph of size {}", e, self.size()),
        }
    }
}

impl<V, E> IndexMut<EdgeId> for DirectedAdjacencyList<V, E> {
    fn index_mut(&mut self, e: EdgeId) -> &mut E {
        let size = self.size();
        match self.edge_value_mut(e) {
            Some(value) => value,
            None => panic!("{} out of range for graph of size {}", e, size),
        }
    }
}
