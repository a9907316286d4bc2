//! Errors raised by graph mutations

use super::types::VertexId;
use std::fmt;
use thiserror::Error;

/// Which capacity ceiling rejected an insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// Vertex count (`max_order`)
    Order,
    /// Edge count (`max_size`)
    Size,
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Order => write!(f, "vertex"),
            Capacity::Size => write!(f, "edge"),
        }
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid edge: source vertex {0} does not exist")]
    InvalidEdgeSource(VertexId),

    #[error("Invalid edge: target vertex {0} does not exist")]
    InvalidEdgeTarget(VertexId),

    #[error("{kind} capacity exceeded (limit {limit})")]
    CapacityExceeded { kind: Capacity, limit: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;
