use graphwalk::{
    AdjacencyListGraph, BoundedQueue, LinkedList, Limits, MatrixGraph, TraversalError,
    breadth_first_search, depth_first_search, tracing_support::init_tracing,
};

#[test]
fn bfs_six_vertex_graph() {
    init_tracing();
    let mut graph = AdjacencyListGraph::new(6).unwrap();
    for (src, dest) in [(0, 1), (0, 2), (1, 2), (1, 4), (1, 3), (2, 4), (3, 4)] {
        graph.add_edge(src, dest).unwrap();
    }
    for (u, v) in [(0, 1), (1, 3), (3, 4)] {
        assert!(graph.neighbors(u).unwrap().any(|n| n == v));
        assert!(graph.neighbors(v).unwrap().any(|n| n == u));
    }
    assert_eq!(breadth_first_search(&mut graph, 0), Ok(vec![0, 2, 1, 4, 3]));
    assert_eq!(graph.is_visited(5), Ok(false));
}

#[test]
fn bfs_rejects_graph_sizes() {
    assert!(matches!(
        AdjacencyListGraph::new(0),
        Err(TraversalError::InvalidVertexCount { requested: 0, .. })
    ));
    let limits = Limits::default().with_max_list_vertices(3);
    assert!(matches!(
        AdjacencyListGraph::with_limits(4, &limits),
        Err(TraversalError::InvalidVertexCount { requested: 4, max: 3 })
    ));
}

#[test]
fn dfs_five_vertex_graph() {
    init_tracing();
    let mut graph = MatrixGraph::new();
    for _ in 0..5 {
        graph.add_vertex().unwrap();
    }
    for (start, end) in [(0, 1), (0, 2), (0, 3), (1, 4), (2, 4), (3, 4)] {
        graph.add_edge(start, end).unwrap();
        assert_eq!(graph.has_edge(end, start), Ok(true));
    }

    let first = depth_first_search(&mut graph).unwrap();
    assert_eq!(first, vec![0, 1, 4, 2, 3]);
    for vertex in 0..5 {
        assert_eq!(graph.is_visited(vertex), Ok(false));
    }

    let second = depth_first_search(&mut graph).unwrap();
    assert_eq!(second, first);
}

#[test]
fn queue_overflow_and_underflow() {
    let mut queue = BoundedQueue::new();
    for i in 0..queue.capacity() {
        queue.enqueue(i).unwrap();
    }
    assert_eq!(queue.enqueue(99), Err(TraversalError::Overflow { capacity: 40 }));
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), (0..40).collect::<Vec<_>>());
    for i in 0..40 {
        assert_eq!(queue.dequeue(), Ok(i));
    }
    assert_eq!(queue.dequeue(), Err(TraversalError::Underflow));
}

#[test]
fn sort_prepended_list() {
    let mut list: LinkedList<i32> = [12, 56, 2, 11, 1, 90].into_iter().collect();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![90, 1, 11, 2, 56, 12]);
    list.sort();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 11, 12, 56, 90]);
    list.sort();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 11, 12, 56, 90]);
}
