//! Undirected adjacency list
//!
//! An undirected multigraph stored as a directed one: each undirected edge is
//! a single directed record, and the in-edges of a vertex count as incident
//! alongside its out-edges. Edges handed to callers are `UndirectedEdge`
//! handles, oriented from the vertex they were reached through.

use super::config::GraphConfig;
use super::directed::DirectedAdjacencyList;
use super::edge::UndirectedEdge;
use super::error::GraphResult;
use super::iter::{Edges, IncidentEdges, Neighbors, Vertices};
use super::types::{EdgeId, VertexId};
use std::ops::{Index, IndexMut};
use tracing::debug;

/// Undirected multigraph over a directed adjacency list
///
/// Parallel edges and self-loops are allowed. A self-loop adds 2 to the
/// degree of its vertex.
#[derive(Debug, Clone)]
pub struct UndirectedAdjacencyList<V, E> {
    base: DirectedAdjacencyList<V, E>,
}

impl<V, E> UndirectedAdjacencyList<V, E> {
    // ============================================================
    // Initialization
    // ============================================================

    /// Create an empty graph
    pub fn new() -> Self {
        UndirectedAdjacencyList {
            base: DirectedAdjacencyList::new(),
        }
    }

    /// Create an empty graph with the given ceilings and capacities
    pub fn with_config(config: GraphConfig) -> Self {
        UndirectedAdjacencyList {
            base: DirectedAdjacencyList::with_config(config),
        }
    }

    /// Create a graph with one vertex per value, in iteration order.
    /// No edges are created.
    pub fn from_vertices<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        UndirectedAdjacencyList {
            base: DirectedAdjacencyList::from_vertices(values),
        }
    }

    // ============================================================
    // Object properties
    // ============================================================

    /// Return the maximum number of vertices possible for the graph
    pub fn max_order(&self) -> usize {
        self.base.max_order()
    }

    /// Return the maximum number of edges possible for the graph
    pub fn max_size(&self) -> usize {
        self.base.max_size()
    }

    pub fn config(&self) -> &GraphConfig {
        self.base.config()
    }

    /// Return the underlying directed graph
    pub fn as_directed(&self) -> &DirectedAdjacencyList<V, E> {
        &self.base
    }

    /// Give up the undirected view and return the underlying directed graph
    pub fn into_directed(self) -> DirectedAdjacencyList<V, E> {
        self.base
    }

    // ============================================================
    // Graph properties
    // ============================================================

    /// Return true if the graph has no vertices
    pub fn null(&self) -> bool {
        self.base.null()
    }

    /// Return the number of vertices in the graph
    pub fn order(&self) -> usize {
        self.base.order()
    }

    /// Return true if the graph has no edges
    pub fn empty(&self) -> bool {
        self.base.empty()
    }

    /// Return the number of edges in the graph
    pub fn size(&self) -> usize {
        self.base.size()
    }

    /// Return the number of edges incident to `v`.
    ///
    /// A self-loop counts twice. An unknown vertex has degree 0.
    pub fn degree(&self, v: VertexId) -> usize {
        self.base.out_degree(v) + self.base.in_degree(v)
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.base.has_vertex(v)
    }

    pub fn contains_edge(&self, e: UndirectedEdge) -> bool {
        self.base.has_edge(e.underlying)
    }

    // ============================================================
    // Data accessors
    // ============================================================

    /// Return the value associated with the vertex `v`
    pub fn vertex_value(&self, v: VertexId) -> Option<&V> {
        self.base.vertex_value(v)
    }

    pub fn vertex_value_mut(&mut self, v: VertexId) -> Option<&mut V> {
        self.base.vertex_value_mut(v)
    }

    /// Return the value associated with the edge `e`.
    ///
    /// Both orientations of an edge share one value.
    pub fn edge_value(&self, e: UndirectedEdge) -> Option<&E> {
        self.base.edge_value(e.underlying)
    }

    pub fn edge_value_mut(&mut self, e: UndirectedEdge) -> Option<&mut E> {
        self.base.edge_value_mut(e.underlying)
    }

    // ============================================================
    // Vertex and edge accessors
    // ============================================================

    /// Return the nth vertex in the graph
    pub fn get_vertex(&self, n: usize) -> Option<VertexId> {
        (n < self.order()).then_some(VertexId::from(n))
    }

    /// Return the nth edge in the graph, viewed from its stored source
    pub fn get_edge(&self, n: usize) -> Option<UndirectedEdge> {
        self.base
            .edge(EdgeId::from(n))
            .map(UndirectedEdge::from_directed)
    }

    /// Return an edge connecting `u` and `v`.
    ///
    /// The directed store is asked for `u -> v` first, in which case the edge
    /// is viewed from `u`; failing that, for `v -> u`, viewed from `v`.
    pub fn get_edge_between(&self, u: VertexId, v: VertexId) -> Option<UndirectedEdge> {
        if let Some(e) = self.base.get_edge(u, v) {
            return self.view_from(e, u);
        }
        self.base.get_edge(v, u).and_then(|e| self.view_from(e, v))
    }

    /// Return the nth edge incident to `v`, viewed from `v`.
    ///
    /// Indices `0..out_degree(v)` are the out-edges of `v` in the directed
    /// store, the rest are its in-edges.
    pub fn get_incident_edge(&self, v: VertexId, n: usize) -> Option<UndirectedEdge> {
        let d = self.base.out_degree(v);
        let e = if n < d {
            self.base.get_out_edge(v, n)
        } else {
            self.base.get_in_edge(v, n - d)
        }?;
        self.view_from(e, v)
    }

    /// Return the source vertex of the edge `e`
    pub fn source(&self, e: UndirectedEdge) -> VertexId {
        e.source
    }

    /// Return the target vertex of the edge `e`
    pub fn target(&self, e: UndirectedEdge) -> VertexId {
        e.target
    }

    // ============================================================
    // Graph operations
    // ============================================================

    /// Add a vertex to the graph
    pub fn add_vertex(&mut self, value: V) -> GraphResult<VertexId> {
        self.base.add_vertex(value)
    }

    /// Add an edge connecting the vertices `u` and `v`, viewed from `u`.
    ///
    /// No check for an existing edge is made; use `get_edge_between` first
    /// for simple-graph semantics.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, value: E) -> GraphResult<UndirectedEdge> {
        let e = self.base.add_edge(u, v, value)?;
        Ok(UndirectedEdge::new(e, u, v))
    }

    // ============================================================
    // Ranges
    // ============================================================

    /// Return the vertices of the graph, in index order
    pub fn vertices(&self) -> Vertices {
        self.base.vertices()
    }

    /// Return every edge of the graph, in index order, each viewed from its
    /// stored source
    pub fn edges(&self) -> Edges<'_, E> {
        Edges::new(self.base.edge_records())
    }

    /// Return the edges incident to `v`, in `get_incident_edge` order, each
    /// viewed from `v`
    pub fn edges_of(&self, v: VertexId) -> IncidentEdges<'_, E> {
        IncidentEdges::new(
            v,
            self.base.out_edges(v),
            self.base.in_edges(v),
            self.base.edge_records(),
        )
    }

    /// Return the vertex across each edge incident to `v`
    pub fn neighbors(&self, v: VertexId) -> Neighbors<'_, E> {
        Neighbors::new(self.edges_of(v))
    }

    /// Wrap `e` with `v`, one of its stored endpoints, as the viewpoint
    fn view_from(&self, e: EdgeId, v: VertexId) -> Option<UndirectedEdge> {
        self.base
            .edge(e)
            .map(|edge| UndirectedEdge::viewed_from(edge, v))
    }
}

impl<V, E> UndirectedAdjacencyList<V, E>
where
    V: Clone,
{
    /// Create a graph with `n` vertices, each carrying a copy of `value`.
    /// No edges are created.
    pub fn with_vertices(n: usize, value: V) -> Self {
        UndirectedAdjacencyList {
            base: DirectedAdjacencyList::with_vertices(n, value),
        }
    }
}

impl<V, E> UndirectedAdjacencyList<V, E>
where
    V: Default + Clone,
{
    /// Create a graph with `n` default-valued vertices
    pub fn with_order(n: usize) -> Self {
        Self::with_vertices(n, V::default())
    }
}

impl<V, E> UndirectedAdjacencyList<V, E>
where
    V: Default,
{
    /// Add a vertex carrying `V::default()`
    pub fn add_default_vertex(&mut self) -> GraphResult<VertexId> {
        self.add_vertex(V::default())
    }
}

impl<V, E> UndirectedAdjacencyList<V, E>
where
    E: Default,
{
    /// Add an edge connecting `u` and `v` carrying `E::default()`, viewed
    /// from `u`
    pub fn add_default_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<UndirectedEdge> {
        self.add_edge(u, v, E::default())
    }
}

impl<V, E> Default for UndirectedAdjacencyList<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> FromIterator<V> for UndirectedAdjacencyList<V, E> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}

impl<V, E> From<Vec<V>> for UndirectedAdjacencyList<V, E> {
    fn from(values: Vec<V>) -> Self {
        Self::from_vertices(values)
    }
}

impl<V, E, const N: usize> From<[V; N]> for UndirectedAdjacencyList<V, E> {
    fn from(values: [V; N]) -> Self {
        Self::from_vertices(values)
    }
}

impl<V, E> From<DirectedAdjacencyList<V, E>> for UndirectedAdjacencyList<V, E> {
    /// Treat every directed edge of `base` as one undirected edge
    fn from(base: DirectedAdjacencyList<V, E>) -> Self {
        debug!(order = base.order(), size = base.size(), "Wrapping directed adjacency list");
        UndirectedAdjacencyList { base }
    }
}

impl<V, E> Extend<V> for UndirectedAdjacencyList<V, E> {
    /// Append one vertex per value.
    ///
    /// Panics if the configured vertex ceiling is reached; use `add_vertex`
    /// to handle that case.
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.base.add_vertex(value) {
                panic!("extend failed: {}", err);
            }
        }
    }
}

impl<V, E> Index<VertexId> for UndirectedAdjacencyList<V, E> {
    type Output = V;

    fn index(&self, v: VertexId) -> &V {
        &self.base[v]
    }
}

impl<V, E> IndexMut<VertexId> for UndirectedAdjacencyList<V, E> {
    fn index_mut(&mut self, v: VertexId) -> &mut V {
        &mut self.base[v]
    }
}

impl<V, E> Index<UndirectedEdge> for UndirectedAdjacencyList<V, E> {
    type Output = E;

    fn index(&self, e: UndirectedEdge) -> &E {
        &self.base[e.underlying]
    }
}

impl<V, E> IndexMut<UndirectedEdge> for UndirectedAdjacencyList<V, E> {
    fn index_mut(&mut self, e: UndirectedEdge) -> &mut E {
        &mut self.base[e.underlying]
    }
}
