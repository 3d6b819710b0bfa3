use std::fmt::Debug;

use bitvec::{slice::BitSlice, vec::BitVec};

use crate::{
    VertexId,
    config::Limits,
    error::{Result, TraversalError, check_vertex},
    search::Bfs,
    tracing_support::debug_span,
};

/// One entry in a vertex's neighbor chain.  Each record owns the next.
struct Neighbor {
    vertex: VertexId,
    next: Option<Box<Neighbor>>,
}

/// An undirected graph stored as one singly-linked neighbor chain per vertex.
///
/// New neighbors are prepended, so [`neighbors`](Self::neighbors) yields the
/// most recently added edge first, and breadth-first search breaks ties in
/// that order.  Parallel edges are kept; a self-loop appears twice in its
/// vertex's chain.
///
/// The graph also carries one visited mark per vertex.  A breadth-first
/// search leaves every vertex it reached marked; call
/// [`reset_visited`](Self::reset_visited) before searching the same graph
/// again.
pub struct AdjacencyListGraph {
    heads: Vec<Option<Box<Neighbor>>>,
    visited: BitVec,
    num_edges: usize,
    queue_capacity: usize,
}

impl AdjacencyListGraph {
    /// Creates a graph of `num_vertices` isolated vertices using the default
    /// [`Limits`].
    pub fn new(num_vertices: usize) -> Result<Self> {
        Self::with_limits(num_vertices, &Limits::default())
    }

    /// Creates a graph of `num_vertices` isolated vertices.  Fails unless
    /// `1 <= num_vertices <= limits.max_list_vertices`.
    pub fn with_limits(num_vertices: usize, limits: &Limits) -> Result<Self> {
        if num_vertices == 0 || num_vertices > limits.max_list_vertices {
            return Err(TraversalError::InvalidVertexCount {
                requested: num_vertices,
                max: limits.max_list_vertices,
            });
        }
        let mut heads = Vec::with_capacity(num_vertices);
        heads.resize_with(num_vertices, || None);
        let mut visited = BitVec::with_capacity(num_vertices);
        visited.resize(num_vertices, false);
        Ok(Self {
            heads,
            visited,
            num_edges: 0,
            queue_capacity: limits.queue_capacity,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.heads.len()
    }

    /// Returns the number of edges added so far, counting duplicates.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Capacity of the queue each breadth-first search allocates.
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// Adds the undirected edge `{src, dest}`.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId) -> Result<()> {
        check_vertex(src, self.num_vertices())?;
        check_vertex(dest, self.num_vertices())?;
        self.prepend(src, dest);
        self.prepend(dest, src);
        self.num_edges += 1;
        Ok(())
    }

    fn prepend(&mut self, vertex: VertexId, neighbor: VertexId) {
        let head = &mut self.heads[vertex];
        *head = Some(Box::new(Neighbor {
            vertex: neighbor,
            next: head.take(),
        }));
    }

    /// Iterates over the neighbors of `vertex`, newest edge first.
    pub fn neighbors(&self, vertex: VertexId) -> Result<Neighbors<'_>> {
        check_vertex(vertex, self.num_vertices())?;
        Ok(Neighbors {
            next: self.heads[vertex].as_deref(),
        })
    }

    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.neighbors(vertex)?.count())
    }

    pub fn is_visited(&self, vertex: VertexId) -> Result<bool> {
        check_vertex(vertex, self.num_vertices())?;
        Ok(self.visited[vertex])
    }

    /// Marks `vertex` visited.  The caller has already range-checked it.
    pub(crate) fn mark_visited(&mut self, vertex: VertexId) {
        self.visited.set(vertex, true);
    }

    pub(crate) fn unmark_visited(&mut self, vertex: VertexId) {
        self.visited.set(vertex, false);
    }

    /// Borrows the neighbor chain of `vertex` alongside the visited marks, so
    /// a search can mark neighbors while walking the chain.
    pub(crate) fn frontier(&mut self, vertex: VertexId) -> (Neighbors<'_>, &mut BitSlice) {
        (
            Neighbors {
                next: self.heads[vertex].as_deref(),
            },
            self.visited.as_mut_bitslice(),
        )
    }

    /// Clears every visited mark.
    pub fn reset_visited(&mut self) {
        self.visited.fill(false);
    }

    /// Runs a breadth-first search from `start` and returns the vertices in
    /// the order they were visited.
    pub fn bfs(&mut self, start: VertexId) -> Result<Vec<VertexId>> {
        let _span = debug_span!("bfs", start).entered();
        Bfs::new(self, start)?.collect()
    }
}

impl Drop for AdjacencyListGraph {
    fn drop(&mut self) {
        for head in &mut self.heads {
            let mut link = head.take();
            while let Some(mut node) = link {
                link = node.next.take();
            }
        }
    }
}

impl Debug for AdjacencyListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for vertex in 0..self.num_vertices() {
            let chain = Neighbors {
                next: self.heads[vertex].as_deref(),
            };
            map.entry(&vertex, &chain.collect::<Vec<_>>());
        }
        map.finish()
    }
}

/// Iterator over one vertex's neighbor chain.
pub struct Neighbors<'g> {
    next: Option<&'g Neighbor>,
}

impl Iterator for Neighbors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.vertex)
    }
}
