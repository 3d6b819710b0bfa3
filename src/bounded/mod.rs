//! Fixed-capacity containers used as traversal frontiers.

mod queue;
mod stack;

pub use queue::BoundedQueue;
pub use stack::BoundedStack;
