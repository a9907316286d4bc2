//! Undirected Adjacency Lists
//!
//! An undirected multigraph container that stores each undirected edge as a
//! single directed edge, so incidence is the union of a vertex's out-edges and
//! in-edges in the underlying directed adjacency list.
//!
//! # Data model
//!
//! - Vertices and edges are identified by dense indices assigned in insertion
//!   order. Nothing is ever removed, so identities stay valid for the lifetime
//!   of the graph.
//! - An `UndirectedEdge` carries the identity of its directed record plus the
//!   endpoint it was reached from (`source`) and the opposite one (`target`).
//!   Two handles are equal when they refer to the same record, whichever way
//!   round they are oriented.
//! - Parallel edges and self-loops are allowed. A self-loop contributes 2 to
//!   the degree of its vertex.
//! - Lookups that may find nothing return `Option`. Mutations return
//!   `GraphResult` and reject unknown vertices and configured capacity
//!   ceilings. Indexing with a handle from elsewhere panics.
//!
//! ## Example Usage
//!
//! ```rust
//! use undirected_adjacency::graph::{UndirectedAdjacencyList, VertexId};
//!
//! // Three vertices, no edges
//! let mut graph: UndirectedAdjacencyList<&str, u32> =
//!     UndirectedAdjacencyList::from(["a", "b", "c"]);
//! let a = VertexId::new(0);
//! let b = VertexId::new(1);
//! let c = VertexId::new(2);
//!
//! graph.add_edge(a, b, 10).unwrap();
//! graph.add_edge(b, c, 20).unwrap();
//!
//! assert_eq!(graph.order(), 3);
//! assert_eq!(graph.size(), 2);
//! assert_eq!(graph.degree(b), 2);
//!
//! // Edges are found from either endpoint
//! let cb = graph.get_edge_between(c, b).unwrap();
//! assert_eq!(graph[cb], 20);
//! assert!(graph.get_edge_between(a, c).is_none());
//!
//! // Incident edges are oriented from the vertex asked about
//! for e in graph.edges_of(b) {
//!     assert_eq!(graph.source(e), b);
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    DirectedAdjacencyList, EdgeId, GraphConfig, GraphError, GraphResult, UndirectedAdjacencyList,
    UndirectedEdge, VertexId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
