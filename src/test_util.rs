#![cfg(test)]

use quickcheck::{Arbitrary, Gen};

use crate::{
    VertexId, adjacency_list::AdjacencyListGraph, adjacency_matrix::MatrixGraph, config::Limits,
};

const MAX_ARB_VERTICES: usize = 12;
const MAX_ARB_EDGES: usize = 30;

/// A random undirected edge list over `num_vertices` vertices.  May contain
/// self-loops and repeated edges.
#[derive(Clone, Debug)]
pub struct ArbEdges {
    pub num_vertices: usize,
    pub edges: Vec<(VertexId, VertexId)>,
}

impl Arbitrary for ArbEdges {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = 1 + usize::arbitrary(g) % MAX_ARB_VERTICES;
        let num_edges = usize::arbitrary(g) % MAX_ARB_EDGES;
        let edges = (0..num_edges)
            .map(|_| {
                (
                    usize::arbitrary(g) % num_vertices,
                    usize::arbitrary(g) % num_vertices,
                )
            })
            .collect();
        ArbEdges {
            num_vertices,
            edges,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let num_vertices = self.num_vertices;
        Box::new(self.edges.shrink().map(move |edges| ArbEdges {
            num_vertices,
            edges,
        }))
    }
}

impl ArbEdges {
    /// Limits just large enough for a graph of `num_vertices` vertices.
    pub fn limits(num_vertices: usize) -> Limits {
        Limits::default()
            .with_max_list_vertices(num_vertices)
            .with_queue_capacity(num_vertices)
            .with_max_matrix_vertices(num_vertices)
            .with_stack_capacity(num_vertices)
    }

    pub fn list_graph(num_vertices: usize, edges: &[(VertexId, VertexId)]) -> AdjacencyListGraph {
        let mut graph =
            AdjacencyListGraph::with_limits(num_vertices, &Self::limits(num_vertices)).unwrap();
        for &(src, dest) in edges {
            graph.add_edge(src, dest).unwrap();
        }
        graph
    }

    pub fn matrix_graph(num_vertices: usize, edges: &[(VertexId, VertexId)]) -> MatrixGraph {
        let mut graph = MatrixGraph::with_limits(&Self::limits(num_vertices));
        for _ in 0..num_vertices {
            graph.add_vertex().unwrap();
        }
        for &(start, end) in edges {
            graph.add_edge(start, end).unwrap();
        }
        graph
    }

    /// Neighbors of `vertex` straight from the edge list.
    pub fn neighbors(edges: &[(VertexId, VertexId)], vertex: VertexId) -> Vec<VertexId> {
        edges
            .iter()
            .filter_map(|&(u, v)| {
                if u == vertex {
                    Some(v)
                } else if v == vertex {
                    Some(u)
                } else {
                    None
                }
            })
            .collect()
    }
}
