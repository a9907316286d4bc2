//! Graph configuration
//!
//! Capacity ceilings and initial allocation sizes for an adjacency list.

/// Configuration for a graph store
///
/// A ceiling of `None` means only the address-space bound applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Maximum number of vertices
    pub max_order: Option<usize>,
    /// Maximum number of edges
    pub max_size: Option<usize>,
    /// Vertex slots reserved up front
    pub vertex_capacity: usize,
    /// Edge slots reserved up front
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_order: None,
            max_size: None,
            vertex_capacity: 0,
            edge_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// No ceilings and no up-front allocation
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Reserve room for a bulk load of 1024 vertices and 4096 edges
    pub fn preallocated() -> Self {
        Self::default()
            .with_vertex_capacity(1024)
            .with_edge_capacity(4096)
    }

    pub fn with_max_order(mut self, max_order: usize) -> Self {
        self.max_order = Some(max_order);
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    pub fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }

    /// Reserved capacities never exceed the ceilings
    pub(crate) fn initial_vertex_capacity(&self) -> usize {
        self.max_order
            .map_or(self.vertex_capacity, |max| self.vertex_capacity.min(max))
    }

    pub(crate) fn initial_edge_capacity(&self) -> usize {
        self.max_size
            .map_or(self.edge_capacity, |max| self.edge_capacity.min(max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert_eq!(config.max_order, None);
        assert_eq!(config.max_size, None);
        assert_eq!(config.vertex_capacity, 0);
        assert_eq!(config.edge_capacity, 0);
        assert_eq!(config, GraphConfig::unlimited());

        let config = GraphConfig::preallocated();
        assert_eq!(config.initial_vertex_capacity(), 1024);
        assert_eq!(config.initial_edge_capacity(), 4096);
    }

    #[test]
    fn test_builder() {
        let config = GraphConfig::unlimited()
            .with_max_order(10)
            .with_max_size(20)
            .with_vertex_capacity(64)
            .with_edge_capacity(8);

        assert_eq!(config.max_order, Some(10));
        assert_eq!(config.max_size, Some(20));
        assert_eq!(config.initial_vertex_capacity(), 10);
        assert_eq!(config.initial_edge_capacity(), 8);
    }
}
