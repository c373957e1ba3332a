use classic_algorithms::AlgoError;
use classic_algorithms::graph::{AdjList, Graph, bfs::bfs, dfs::dfs};

fn sample(directed: bool) -> Graph<char> {
    let mut g = if directed {
        Graph::directed()
    } else {
        Graph::undirected()
    };
    for (a, b) in [('A', 'B'), ('A', 'C'), ('B', 'D'), ('C', 'D')] {
        g.add_edge(a, b);
    }
    g
}

#[test]
fn bfs_visits_each_vertex_once_in_distance_order() {
    let g = sample(true);
    let order = g.bfs(&'A').expect("start exists");
    assert_eq!(order, vec![&'A', &'B', &'C', &'D']);
}

#[test]
fn dfs_starts_at_root_and_covers_component() {
    for directed in [true, false] {
        let g = sample(directed);
        let order = g.dfs(&'A').expect("start exists");
        assert_eq!(order[0], &'A');
        assert_eq!(order.len(), 4);
        assert_eq!(order, vec![&'A', &'B', &'D', &'C']);
    }
}

#[test]
fn undirected_adjacency_is_symmetric() {
    let g = sample(false);
    for v in g.vertices() {
        for n in g.neighbors(v).expect("vertex exists") {
            assert!(g.has_edge(n, v), "{n} -> {v} missing");
        }
    }
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn directed_graph_keeps_one_way_edges() {
    let mut g = Graph::directed();
    g.add_edge('A', 'B');
    assert!(g.has_vertex(&'B'));
    assert!(g.has_edge(&'A', &'B'));
    assert!(!g.has_edge(&'B', &'A'));
    assert!(g.is_directed());
}

#[test]
fn unknown_start_vertex() {
    let g = sample(false);
    let err = g.bfs(&'Q').unwrap_err();
    assert_eq!(err, AlgoError::VertexNotFound("'Q'".into()));
    assert_eq!(err.to_string(), "vertex `'Q'` is not in the graph");
}

#[test]
fn index_level_traversals_share_semantics() {
    let mut adj = AdjList::new(5);
    for (u, v) in [(0, 1), (0, 2), (1, 3), (2, 4)] {
        assert_eq!(adj.add_edge(u, v), Ok(true));
    }
    assert_eq!(bfs(adj.as_slice(), 0).unwrap(), vec![0, 1, 2, 3, 4]);
    assert_eq!(dfs(adj.as_slice(), 0).unwrap(), vec![0, 1, 3, 2, 4]);
    assert!(bfs(adj.as_slice(), 5).is_err());
}

#[test]
fn malformed_index_adjacency_is_an_error() {
    let adj = vec![vec![5]];
    assert!(matches!(bfs(&adj, 0), Err(AlgoError::InvalidInput(_))));
    assert!(matches!(dfs(&adj, 0), Err(AlgoError::InvalidInput(_))));

    let mut list = AdjList::new(1);
    assert_eq!(list.add_edge(0, 5), Err(AlgoError::VertexNotFound("5".into())));
    assert!(bfs(list.as_slice(), 0).is_ok());
}
