pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod bounded;
pub mod config;
pub mod error;
pub mod linked_list;
pub mod search;
pub mod tracing_support;

mod test_util;

/// Identifier of a vertex: a dense, zero-based index.
pub type VertexId = usize;

pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_matrix::{MatrixGraph, Vertex};
pub use bounded::{BoundedQueue, BoundedStack};
pub use config::Limits;
pub use error::{Result, TraversalError};
pub use linked_list::LinkedList;
pub use search::{Bfs, Dfs, breadth_first_search, depth_first_search};
