//! Adjacency-list graph containers
//!
//! This module implements:
//! - A directed multigraph with per-vertex out-edge and in-edge indices
//! - An undirected multigraph layered on it, storing one directed record per
//!   undirected edge
//! - Edge handles whose identity does not depend on the endpoint they were
//!   reached from

pub mod config;
pub mod directed;
pub mod edge;
pub mod error;
pub mod iter;
pub mod types;
pub mod undirected;
pub mod vertex;

// Re-export main types
pub use config::GraphConfig;
pub use directed::DirectedAdjacencyList;
pub use edge::{Edge, UndirectedEdge};
pub use error::{Capacity, GraphError, GraphResult};
pub use iter::{Edges, IncidentEdges, Neighbors, Vertices};
pub use types::{EdgeId, VertexId};
pub use undirected::UndirectedAdjacencyList;
pub use vertex::Vertex;
