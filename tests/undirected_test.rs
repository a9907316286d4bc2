use std::collections::HashSet;

use undirected_adjacency::graph::{GraphConfig, GraphError, UndirectedAdjacencyList, VertexId};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_path_of_three() -> anyhow::Result<()> {
    init_tracing();

    // a - b - c
    let mut graph: UndirectedAdjacencyList<(), i32> = UndirectedAdjacencyList::with_vertices(3, ());
    let a = graph.get_vertex(0).unwrap();
    let b = graph.get_vertex(1).unwrap();
    let c = graph.get_vertex(2).unwrap();

    graph.add_edge(a, b, 10)?;
    graph.add_edge(b, c, 20)?;

    assert_eq!(graph.order(), 3);
    assert_eq!(graph.size(), 2);
    assert_eq!(graph.degree(a), 1);
    assert_eq!(graph.degree(b), 2);
    assert_eq!(graph.degree(c), 1);

    let ab = graph.get_edge_between(a, b).unwrap();
    assert_eq!(graph[ab], 10);
    let cb = graph.get_edge_between(c, b).unwrap();
    assert_eq!(graph[cb], 20);
    assert!(graph.get_edge_between(a, c).is_none());

    Ok(())
}

#[test]
fn test_empty_graph_has_no_edges() {
    let graph: UndirectedAdjacencyList<(), ()> = UndirectedAdjacencyList::new();
    let v = VertexId::new(0);

    assert!(graph.empty());
    assert!(graph.null());
    assert!(graph.get_edge_between(v, v).is_none());
    assert!(graph.get_edge_between(v, VertexId::new(1)).is_none());
    assert_eq!(graph.vertices().count(), 0);
    assert_eq!(graph.edges().count(), 0);
}

#[test]
fn test_lookup_from_both_endpoints() -> anyhow::Result<()> {
    let mut graph: UndirectedAdjacencyList<u8, &str> = UndirectedAdjacencyList::from(vec![0, 1, 2, 3]);
    let pairs = [(0usize, 1usize), (2, 1), (3, 0), (2, 2)];

    for &(u, v) in &pairs {
        let u = VertexId::from(u);
        let v = VertexId::from(v);
        let inserted = graph.add_edge(u, v, "edge")?;

        for found in [graph.get_edge_between(u, v), graph.get_edge_between(v, u)] {
            let found = found.unwrap();
            assert_eq!(found.underlying, inserted.underlying);
            let endpoints: HashSet<_> = [graph.source(found), graph.target(found)].into();
            let expected: HashSet<_> = [u, v].into();
            assert_eq!(endpoints, expected);
        }
    }
    Ok(())
}

#[test]
fn test_degree_matches_incidence() -> anyhow::Result<()> {
    let mut graph: UndirectedAdjacencyList<(), u32> = UndirectedAdjacencyList::with_order(5);
    let v: Vec<_> = graph.vertices().collect();

    graph.add_edge(v[0], v[1], 1)?;
    graph.add_edge(v[1], v[0], 2)?;
    graph.add_edge(v[1], v[2], 3)?;
    graph.add_edge(v[3], v[3], 4)?;
    graph.add_edge(v[4], v[1], 5)?;

    for &x in &v {
        let touching = graph
            .edges()
            .map(|e| (e.source == x) as usize + (e.target == x) as usize)
            .sum::<usize>();
        assert_eq!(graph.degree(x), touching);
        assert_eq!(graph.edges_of(x).len(), graph.degree(x));
        assert!(graph.edges_of(x).all(|e| graph.source(e) == x));

        for (n, e) in graph.edges_of(x).enumerate() {
            let indexed = graph.get_incident_edge(x, n).unwrap();
            assert_eq!(indexed, e);
            assert_eq!(indexed.target, e.target);
        }
    }

    assert_eq!(graph.degree(v[1]), 4);
    assert_eq!(graph.degree(v[3]), 2);
    Ok(())
}

#[test]
fn test_parallel_edges_are_distinct() -> anyhow::Result<()> {
    let mut graph: UndirectedAdjacencyList<(), char> = UndirectedAdjacencyList::with_order(2);
    let a = VertexId::new(0);
    let b = VertexId::new(1);

    let first = graph.add_edge(a, b, 'x')?;
    let second = graph.add_edge(b, a, 'y')?;

    assert_ne!(first, second);
    assert_eq!(graph.size(), 2);
    assert_eq!(graph.degree(a), 2);
    // Earliest a -> b record wins
    assert_eq!(graph.get_edge_between(a, b), Some(first));
    // b -> a was stored directly
    assert_eq!(graph.get_edge_between(b, a), Some(second));

    let neighbors: Vec<_> = graph.neighbors(a).collect();
    assert_eq!(neighbors, vec![b, b]);
    Ok(())
}

#[test]
fn test_read_queries_are_stable() -> anyhow::Result<()> {
    let mut graph: UndirectedAdjacencyList<(), ()> = UndirectedAdjacencyList::with_order(3);
    let a = VertexId::new(0);
    let b = VertexId::new(1);
    graph.add_edge(a, b, ())?;

    let edges: Vec<_> = graph.edges().collect();
    let vertices: Vec<_> = graph.vertices().collect();
    for _ in 0..3 {
        assert_eq!(graph.get_edge_between(b, a), graph.get_edge_between(b, a));
        assert_eq!(graph.degree(a), 1);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vertices);
        assert_eq!(graph.edges().collect::<Vec<_>>(), edges);
    }

    // New vertices appear at the end
    let d = graph.add_vertex(())?;
    assert_eq!(graph.vertices().last(), Some(d));
    Ok(())
}

#[test]
fn test_vertex_ceiling() {
    let config = GraphConfig::default().with_max_order(2);
    let mut graph: UndirectedAdjacencyList<u8, ()> = UndirectedAdjacencyList::with_config(config);

    assert!(graph.add_vertex(1).is_ok());
    assert!(graph.add_vertex(2).is_ok());
    let err = graph.add_vertex(3).unwrap_err();
    assert!(matches!(err, GraphError::CapacityExceeded { limit: 2, .. }));
    assert_eq!(graph.order(), 2);
}

#[test]
fn test_directed_view() -> anyhow::Result<()> {
    let mut graph: UndirectedAdjacencyList<(), ()> = UndirectedAdjacencyList::with_order(2);
    let a = VertexId::new(0);
    let b = VertexId::new(1);
    let e = graph.add_edge(b, a, ())?;

    let base = graph.as_directed();
    assert_eq!(base.out_degree(b), 1);
    assert_eq!(base.in_degree(a), 1);
    assert_eq!(base.get_edge(b, a), Some(e.underlying));
    assert_eq!(base.get_edge(a, b), None);

    let base = graph.into_directed();
    assert_eq!(base.size(), 1);
    Ok(())
}
