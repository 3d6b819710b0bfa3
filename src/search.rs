use std::iter::FusedIterator;

use crate::{
    VertexId,
    adjacency_list::AdjacencyListGraph,
    adjacency_matrix::MatrixGraph,
    bounded::{BoundedQueue, BoundedStack},
    error::{Result, TraversalError, check_vertex},
    tracing_support::{debug, trace},
};

/// Breadth-first search over an [`AdjacencyListGraph`].
///
/// Yields vertices in visitation order.  Neighbors are discovered in the
/// order the graph stores them, newest edge first.  Visited marks are left on
/// the graph when the search ends.
///
/// A neighbor is marked only once it is actually queued.  If the frontier
/// outgrows the queue, the vertex being expanded is still yielded; the next
/// item is the overflow error, after which the iterator stops.  Vertices left
/// waiting in the queue at that point are unmarked, so the marks on the graph
/// are exactly the vertices that were yielded.
pub struct Bfs<'g> {
    graph: &'g mut AdjacencyListGraph,
    queue: BoundedQueue<VertexId>,
    overflow: Option<TraversalError>,
    failed: bool,
}

impl<'g> Bfs<'g> {
    pub fn new(graph: &'g mut AdjacencyListGraph, start: VertexId) -> Result<Self> {
        check_vertex(start, graph.num_vertices()).inspect_err(|_| {
            debug!(start, "rejected start vertex");
        })?;
        let mut queue = BoundedQueue::with_capacity(graph.queue_capacity());
        queue.enqueue(start)?;
        graph.mark_visited(start);
        Ok(Self {
            graph,
            queue,
            overflow: None,
            failed: false,
        })
    }
}

impl Iterator for Bfs<'_> {
    type Item = Result<VertexId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Some(err) = self.overflow.take() {
            self.failed = true;
            for &pending in self.queue.iter() {
                self.graph.unmark_visited(pending);
            }
            self.queue.clear();
            return Some(Err(err));
        }
        let vertex = self.queue.dequeue().ok()?;
        let (neighbors, visited) = self.graph.frontier(vertex);
        for neighbor in neighbors {
            if visited[neighbor] {
                continue;
            }
            if let Err(err) = self.queue.enqueue(neighbor) {
                self.overflow = Some(err);
                break;
            }
            visited.set(neighbor, true);
        }
        trace!(vertex, "visited");
        Some(Ok(vertex))
    }
}

impl FusedIterator for Bfs<'_> {}

/// Depth-first search over a [`MatrixGraph`].
///
/// The vertex on top of the stack is inspected without popping it; its
/// lowest-numbered unvisited neighbor is marked and pushed, and when it has
/// none it is popped.  Yields vertices in visitation order.
///
/// When the search finishes, fails, or is dropped early, every visited flag
/// on the graph is cleared, so the same graph can be searched again.
pub struct Dfs<'g> {
    graph: &'g mut MatrixGraph,
    stack: BoundedStack<VertexId>,
    start: Option<VertexId>,
    done: bool,
}

impl<'g> Dfs<'g> {
    /// Searches from vertex 0.  A graph with no vertices yields nothing.
    pub fn new(graph: &'g mut MatrixGraph) -> Self {
        let start = (graph.num_vertices() > 0).then_some(0);
        Self::with_start(graph, start)
    }

    /// Searches from `start`, which must be a registered vertex.
    pub fn starting_at(graph: &'g mut MatrixGraph, start: VertexId) -> Result<Self> {
        check_vertex(start, graph.num_vertices()).inspect_err(|_| {
            debug!(start, "rejected start vertex");
        })?;
        Ok(Self::with_start(graph, Some(start)))
    }

    fn with_start(graph: &'g mut MatrixGraph, start: Option<VertexId>) -> Self {
        let stack = BoundedStack::with_capacity(graph.stack_capacity());
        Self {
            graph,
            stack,
            start,
            done: false,
        }
    }

    fn visit(&mut self, vertex: VertexId) -> Result<VertexId> {
        self.graph.mark_visited(vertex);
        self.stack.push(vertex)?;
        trace!(vertex, depth = self.stack.len(), "visited");
        Ok(vertex)
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            self.graph.reset_visited();
        }
    }

    fn step(&mut self) -> Option<Result<VertexId>> {
        if let Some(start) = self.start.take() {
            return Some(self.visit(start));
        }
        while let Ok(&top) = self.stack.peek() {
            match self.graph.first_unvisited_neighbor(top) {
                Ok(Some(neighbor)) => return Some(self.visit(neighbor)),
                Ok(None) => {
                    self.stack.pop().ok();
                }
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}

impl Iterator for Dfs<'_> {
    type Item = Result<VertexId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.step();
        if !matches!(item, Some(Ok(_))) {
            self.finish();
        }
        item
    }
}

impl FusedIterator for Dfs<'_> {}

impl Drop for Dfs<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Convenience wrapper for [`AdjacencyListGraph::bfs`].
pub fn breadth_first_search(
    graph: &mut AdjacencyListGraph,
    start: VertexId,
) -> Result<Vec<VertexId>> {
    graph.bfs(start)
}

/// Convenience wrapper for [`MatrixGraph::depth_first_search`].
pub fn depth_first_search(graph: &mut MatrixGraph) -> Result<Vec<VertexId>> {
    graph.depth_first_search()
}
