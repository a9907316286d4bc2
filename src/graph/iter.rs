//! Iterators over vertices and edges
//!
//! All ranges borrow the graph, are cheap to clone (a clone restarts from the
//! clone point) and know their exact length.

use super::edge::{Edge, UndirectedEdge};
use super::types::{EdgeId, VertexId};
use std::iter::FusedIterator;
use std::ops::Range;
use std::slice;

/// Vertex handles in index order
#[derive(Debug, Clone)]
pub struct Vertices {
    range: Range<usize>,
}

impl Vertices {
    pub(crate) fn new(range: Range<usize>) -> Self {
        Vertices { range }
    }
}

impl Iterator for Vertices {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.range.next().map(VertexId::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<VertexId> {
        self.range.nth(n).map(VertexId::from)
    }
}

impl DoubleEndedIterator for Vertices {
    fn next_back(&mut self) -> Option<VertexId> {
        self.range.next_back().map(VertexId::from)
    }
}

impl ExactSizeIterator for Vertices {}
impl FusedIterator for Vertices {}

/// Every undirected edge, viewed from its stored source
#[derive(Debug)]
pub struct Edges<'a, E> {
    records: slice::Iter<'a, Edge<E>>,
}

impl<'a, E> Edges<'a, E> {
    pub(crate) fn new(records: &'a [Edge<E>]) -> Self {
        Edges {
            records: records.iter(),
        }
    }
}

// Derived Clone would require `E: Clone`
impl<E> Clone for Edges<'_, E> {
    fn clone(&self) -> Self {
        Edges {
            records: self.records.clone(),
        }
    }
}

impl<E> Iterator for Edges<'_, E> {
    type Item = UndirectedEdge;

    fn next(&mut self) -> Option<UndirectedEdge> {
        self.records.next().map(UndirectedEdge::from_directed)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<UndirectedEdge> {
        self.records.nth(n).map(UndirectedEdge::from_directed)
    }
}

impl<E> DoubleEndedIterator for Edges<'_, E> {
    fn next_back(&mut self) -> Option<UndirectedEdge> {
        self.records.next_back().map(UndirectedEdge::from_directed)
    }
}

impl<E> ExactSizeIterator for Edges<'_, E> {}
impl<E> FusedIterator for Edges<'_, E> {}

/// The edges incident to one vertex, viewed from that vertex.
///
/// Out-edges come first, then in-edges; position `n` maps to
/// `outgoing[n]` when `n < out_degree` and to `incoming[n - out_degree]`
/// otherwise.
#[derive(Debug)]
pub struct IncidentEdges<'a, E> {
    vertex: VertexId,
    outgoing: &'a [EdgeId],
    incoming: &'a [EdgeId],
    records: &'a [Edge<E>],
    range: Range<usize>,
}

impl<'a, E> IncidentEdges<'a, E> {
    pub(crate) fn new(
        vertex: VertexId,
        outgoing: &'a [EdgeId],
        incoming: &'a [EdgeId],
        records: &'a [Edge<E>],
    ) -> Self {
        IncidentEdges {
            vertex,
            outgoing,
            incoming,
            records,
            range: 0..outgoing.len() + incoming.len(),
        }
    }

    /// The vertex these edges are viewed from
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// Resolve incidence position `n`
    pub(crate) fn get(&self, n: usize) -> Option<UndirectedEdge> {
        let d = self.outgoing.len();
        let id = if n < d {
            self.outgoing[n]
        } else {
            *self.incoming.get(n - d)?
        };
        self.records
            .get(id.index()?)
            .map(|edge| UndirectedEdge::viewed_from(edge, self.vertex))
    }
}

impl<E> Clone for IncidentEdges<'_, E> {
    fn clone(&self) -> Self {
        IncidentEdges {
            vertex: self.vertex,
            outgoing: self.outgoing,
            incoming: self.incoming,
            records: self.records,
            range: self.range.clone(),
        }
    }
}

impl<E> Iterator for IncidentEdges<'_, E> {
    type Item = UndirectedEdge;

    fn next(&mut self) -> Option<UndirectedEdge> {
        let n = self.range.next()?;
        self.get(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<UndirectedEdge> {
        let n = self.range.nth(n)?;
        self.get(n)
    }
}

impl<E> DoubleEndedIterator for IncidentEdges<'_, E> {
    fn next_back(&mut self) -> Option<UndirectedEdge> {
        let n = self.range.next_back()?;
        self.get(n)
    }
}

impl<E> ExactSizeIterator for IncidentEdges<'_, E> {}
impl<E> FusedIterator for IncidentEdges<'_, E> {}

/// The opposite endpoint of each incident edge, in incidence order.
///
/// A vertex joined by several parallel edges appears once per edge.
#[derive(Debug)]
pub struct Neighbors<'a, E> {
    edges: IncidentEdges<'a, E>,
}

impl<'a, E> Neighbors<'a, E> {
    pub(crate) fn new(edges: IncidentEdges<'a, E>) -> Self {
        Neighbors { edges }
    }
}

impl<E> Clone for Neighbors<'_, E> {
    fn clone(&self) -> Self {
        Neighbors {
            edges: self.edges.clone(),
        }
    }
}

impl<E> Iterator for Neighbors<'_, E> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.edges.next().map(|e| e.target)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl<E> DoubleEndedIterator for Neighbors<'_, E> {
    fn next_back(&mut self) -> Option<VertexId> {
        self.edges.next_back().map(|e| e.target)
    }
}

impl<E> ExactSizeIterator for Neighbors<'_, E> {}
impl<E> FusedIterator for Neighbors<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Edge<()>> {
        // 0 -> 1, 2 -> 0, 0 -> 0
        vec![
            Edge::new(EdgeId::new(0), VertexId::new(0), VertexId::new(1), ()),
            Edge::new(EdgeId::new(1), VertexId::new(2), VertexId::new(0), ()),
            Edge::new(EdgeId::new(2), VertexId::new(0), VertexId::new(0), ()),
        ]
    }

    #[test]
    fn test_vertices_range() {
        let mut vertices = Vertices::new(0..3);
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices.next_back(), Some(VertexId::new(2)));
        assert_eq!(vertices.next(), Some(VertexId::new(0)));
        assert_eq!(vertices.next(), Some(VertexId::new(1)));
        assert_eq!(vertices.next(), None);
        assert_eq!(vertices.next(), None);
    }

    #[test]
    fn test_edges_use_stored_source() {
        let records = records();
        let edges: Vec<_> = Edges::new(&records).collect();

        assert_eq!(edges.len(), 3);
        assert_eq!(edges[1].source, VertexId::new(2));
        assert_eq!(edges[1].target, VertexId::new(0));
    }

    #[test]
    fn test_incident_edges_order_and_viewpoint() {
        let records = records();
        let outgoing = [EdgeId::new(0), EdgeId::new(2)];
        let incoming = [EdgeId::new(1), EdgeId::new(2)];
        let incident = IncidentEdges::new(VertexId::new(0), &outgoing, &incoming, &records);

        assert_eq!(incident.len(), 4);
        let ids: Vec<_> = incident.clone().map(|e| e.underlying.as_u64()).collect();
        assert_eq!(ids, vec![0, 2, 1, 2]);

        for e in incident.clone() {
            assert_eq!(e.source, VertexId::new(0));
        }

        let targets: Vec<_> = Neighbors::new(incident).map(|v| v.as_u64()).collect();
        assert_eq!(targets, vec![1, 0, 2, 0]);
    }

    #[test]
    fn test_incident_edges_restart() {
        let records = records();
        let outgoing = [EdgeId::new(0)];
        let incoming = [EdgeId::new(1)];
        let mut incident = IncidentEdges::new(VertexId::new(0), &outgoing, &incoming, &records);

        let snapshot = incident.clone();
        incident.next();
        assert_eq!(incident.len(), 1);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(incident.next_back(), snapshot.clone().last());
    }
}
