//! Capacity limits for graphs and the containers their traversals use.

/// Default upper bound on the vertex count of an adjacency-list graph.
pub const DEFAULT_MAX_LIST_VERTICES: usize = 40;
/// Default capacity of the queue used by breadth-first search.
pub const DEFAULT_QUEUE_CAPACITY: usize = DEFAULT_MAX_LIST_VERTICES;
/// Default upper bound on the vertex count of an adjacency-matrix graph.
pub const DEFAULT_MAX_MATRIX_VERTICES: usize = 5;
/// Default capacity of the stack used by depth-first search.
pub const DEFAULT_STACK_CAPACITY: usize = DEFAULT_MAX_MATRIX_VERTICES;

/// Capacities fixed when a graph is built.
///
/// A breadth-first search enqueues each vertex at most once, so a queue at
/// least as large as the vertex count never overflows; the same holds for
/// the depth-first stack.  The defaults keep that relationship.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_list_vertices: usize,
    pub queue_capacity: usize,
    pub max_matrix_vertices: usize,
    pub stack_capacity: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_list_vertices: DEFAULT_MAX_LIST_VERTICES,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            max_matrix_vertices: DEFAULT_MAX_MATRIX_VERTICES,
            stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}

impl Limits {
    pub fn with_max_list_vertices(mut self, max: usize) -> Self {
        self.max_list_vertices = max;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_max_matrix_vertices(mut self, max: usize) -> Self {
        self.max_matrix_vertices = max;
        self
    }

    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }
}
