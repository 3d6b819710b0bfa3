use crate::VertexId;

/// Errors reported by the bounded containers, the graphs, and the traversal
/// engines.  All of them are recoverable; a failed call leaves the structure
/// it was made on unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    /// A push or enqueue on a container already holding `capacity` items.
    #[error("capacity of {capacity} exceeded")]
    Overflow { capacity: usize },
    /// A pop, dequeue, or peek on an empty container.
    #[error("container is empty")]
    Underflow,
    /// A vertex identifier outside `0..num_vertices`.
    #[error("vertex {vertex} is out of range for a graph of {num_vertices} vertices")]
    InvalidVertex {
        vertex: VertexId,
        num_vertices: usize,
    },
    /// A graph size outside `1..=max`, or a vertex added past capacity.
    #[error("vertex count {requested} is outside the supported range 1..={max}")]
    InvalidVertexCount { requested: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, TraversalError>;

/// Checks that `vertex` names one of the first `num_vertices` vertices.
pub(crate) fn check_vertex(vertex: VertexId, num_vertices: usize) -> Result<()> {
    if vertex < num_vertices {
        Ok(())
    } else {
        Err(TraversalError::InvalidVertex {
            vertex,
            num_vertices,
        })
    }
}
