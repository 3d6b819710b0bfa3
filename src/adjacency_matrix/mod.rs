//! Undirected graph backed by a fixed-size symmetric bit matrix.

mod indexing;

use std::fmt::Debug;

use bitvec::vec::BitVec;

use crate::{
    VertexId,
    config::Limits,
    error::{Result, TraversalError, check_vertex},
    search::Dfs,
    tracing_support::{debug_span, trace},
};

use indexing::TriangularIndexing;

/// A vertex of a [`MatrixGraph`].  Carries the visited flag that depth-first
/// search sets while it runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vertex {
    visited: bool,
}

impl Vertex {
    pub fn visited(&self) -> bool {
        self.visited
    }
}

/// An undirected graph whose edges live in a symmetric boolean matrix.
///
/// The matrix is allocated once for `capacity` vertices; vertices are then
/// registered one at a time with [`add_vertex`](Self::add_vertex), up to
/// that capacity.  Only the lower triangle is stored, so `has_edge(i, j)`
/// and `has_edge(j, i)` always agree.
pub struct MatrixGraph {
    vertices: Vec<Vertex>,
    edges: BitVec,
    indexing: TriangularIndexing,
    stack_capacity: usize,
}

impl MatrixGraph {
    /// Creates an empty graph using the default [`Limits`].
    pub fn new() -> Self {
        Self::with_limits(&Limits::default())
    }

    /// Creates an empty graph with room for `limits.max_matrix_vertices`
    /// vertices, whose depth-first searches use a stack of
    /// `limits.stack_capacity` entries.
    pub fn with_limits(limits: &Limits) -> Self {
        let indexing = TriangularIndexing::new(limits.max_matrix_vertices);
        let storage_size = indexing.storage_size();
        let mut edges = BitVec::with_capacity(storage_size);
        edges.resize(storage_size, false);
        Self {
            vertices: Vec::with_capacity(limits.max_matrix_vertices),
            edges,
            indexing,
            stack_capacity: limits.stack_capacity,
        }
    }

    /// Maximum number of vertices the graph can hold.
    pub fn capacity(&self) -> usize {
        self.indexing.size()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.count_ones()
    }

    /// Capacity of the stack each depth-first search allocates.
    pub fn stack_capacity(&self) -> usize {
        self.stack_capacity
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Registers a new unvisited vertex and returns its identifier.
    pub fn add_vertex(&mut self) -> Result<VertexId> {
        let id = self.vertices.len();
        if id == self.capacity() {
            return Err(TraversalError::InvalidVertexCount {
                requested: id + 1,
                max: self.capacity(),
            });
        }
        self.vertices.push(Vertex::default());
        Ok(id)
    }

    /// Adds the undirected edge `{start, end}`.  Adding an existing edge
    /// again has no further effect.
    pub fn add_edge(&mut self, start: VertexId, end: VertexId) -> Result<()> {
        check_vertex(start, self.num_vertices())?;
        check_vertex(end, self.num_vertices())?;
        let index = self.indexing.unchecked_index(start, end);
        self.edges.set(index, true);
        Ok(())
    }

    pub fn has_edge(&self, start: VertexId, end: VertexId) -> Result<bool> {
        check_vertex(start, self.num_vertices())?;
        check_vertex(end, self.num_vertices())?;
        Ok(self.edges[self.indexing.unchecked_index(start, end)])
    }

    /// Iterates over the neighbors of `vertex` in ascending order.
    pub fn neighbors(&self, vertex: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        check_vertex(vertex, self.num_vertices())?;
        Ok(self
            .indexing
            .row(vertex, 0..self.num_vertices())
            .filter_map(|(col, index)| self.edges[index].then_some(col)))
    }

    /// Returns the lowest-numbered neighbor of `vertex` that is not yet
    /// visited.
    pub fn first_unvisited_neighbor(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        Ok(self
            .neighbors(vertex)?
            .find(|&neighbor| !self.vertices[neighbor].visited))
    }

    pub fn is_visited(&self, vertex: VertexId) -> Result<bool> {
        check_vertex(vertex, self.num_vertices())?;
        Ok(self.vertices[vertex].visited)
    }

    /// Marks `vertex` visited.  The caller has already range-checked it.
    pub(crate) fn mark_visited(&mut self, vertex: VertexId) {
        self.vertices[vertex].visited = true;
    }

    /// Clears the visited flag of every vertex.
    pub fn reset_visited(&mut self) {
        trace!(num_vertices = self.vertices.len(), "resetting visited flags");
        for vertex in &mut self.vertices {
            vertex.visited = false;
        }
    }

    /// Runs a depth-first search from vertex 0 and returns the vertices in
    /// the order they were visited.  Every visited flag is false again when
    /// this returns, whether or not the search succeeded.  An empty graph
    /// yields an empty order.
    pub fn depth_first_search(&mut self) -> Result<Vec<VertexId>> {
        let _span = debug_span!("depth_first_search", start = 0).entered();
        Dfs::new(self).collect()
    }

    /// Like [`depth_first_search`](Self::depth_first_search), starting from
    /// `start`.
    pub fn depth_first_search_from(&mut self, start: VertexId) -> Result<Vec<VertexId>> {
        let _span = debug_span!("depth_first_search", start).entered();
        Dfs::starting_at(self, start)?.collect()
    }
}

impl Default for MatrixGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for MatrixGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MatrixGraph {{")?;
        let n = self.num_vertices();
        if f.alternate() {
            writeln!(f)?;
            for i in 0..n {
                write!(f, "    ")?;
                for (_, index) in self.indexing.row(i, 0..n) {
                    write!(f, "{}", if self.edges[index] { '1' } else { '0' })?;
                }
                if self.vertices[i].visited {
                    write!(f, " *")?;
                }
                writeln!(f)?;
            }
        } else {
            for i in 0..n {
                write!(f, " ")?;
                for (_, index) in self.indexing.row(i, 0..n) {
                    write!(f, "{}", if self.edges[index] { '1' } else { '0' })?;
                }
            }
            write!(f, " ")?;
        }
        write!(f, "}}")
    }
}
