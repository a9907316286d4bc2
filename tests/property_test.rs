//! Property-based checks of the undirected adjacency list.
//!
//! Random multigraphs (self-loops and parallel edges included) are built
//! through the public API and checked against a plain edge list.

use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};
use undirected_adjacency::graph::{UndirectedAdjacencyList, VertexId};

const MAX_ORDER: usize = 12;

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=MAX_ORDER).prop_flat_map(|order| {
        (
            proptest::strategy::Just(order),
            vec((0..order, 0..order), 0..40),
        )
    })
}

fn build(order: usize, pairs: &[(usize, usize)]) -> UndirectedAdjacencyList<usize, usize> {
    let mut graph = UndirectedAdjacencyList::from_vertices(0..order);
    for (i, &(u, v)) in pairs.iter().enumerate() {
        graph
            .add_edge(VertexId::from(u), VertexId::from(v), i)
            .unwrap();
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn counts_follow_insertions((order, pairs) in graph_strategy()) {
        let graph = build(order, &pairs);
        prop_assert_eq!(graph.order(), order);
        prop_assert_eq!(graph.size(), pairs.len());
        prop_assert_eq!(graph.empty(), pairs.is_empty());
    }

    #[test]
    fn every_edge_found_from_both_ends((order, pairs) in graph_strategy()) {
        let graph = build(order, &pairs);
        for &(u, v) in &pairs {
            let (u, v) = (VertexId::from(u), VertexId::from(v));
            let forward = graph.get_edge_between(u, v);
            let backward = graph.get_edge_between(v, u);
            prop_assert!(forward.is_some());
            prop_assert!(backward.is_some());
            for e in [forward.unwrap(), backward.unwrap()] {
                prop_assert!(e.connects(u, v));
            }
        }
    }

    #[test]
    fn degree_equals_endpoint_count((order, pairs) in graph_strategy()) {
        let graph = build(order, &pairs);
        for v in graph.vertices() {
            let expected: usize = pairs
                .iter()
                .map(|&(a, b)| (v.index() == Some(a)) as usize + (v.index() == Some(b)) as usize)
                .sum();
            prop_assert_eq!(graph.degree(v), expected);
            prop_assert_eq!(graph.edges_of(v).count(), expected);
            for e in graph.edges_of(v) {
                prop_assert_eq!(graph.source(e), v);
                prop_assert_eq!(e.underlying.index(), Some(graph[e]));
            }
        }
    }

    #[test]
    fn edges_are_viewed_from_stored_source((order, pairs) in graph_strategy()) {
        let graph = build(order, &pairs);
        let edges: Vec<_> = graph.edges().collect();
        prop_assert_eq!(edges.len(), pairs.len());
        for (n, (e, &(u, v))) in edges.iter().zip(&pairs).enumerate() {
            prop_assert_eq!(e.source.index(), Some(u));
            prop_assert_eq!(e.target.index(), Some(v));
            prop_assert_eq!(graph.get_edge(n), Some(*e));
        }
    }
}
