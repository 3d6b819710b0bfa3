use std::fmt::Debug;

use crate::{
    config::DEFAULT_STACK_CAPACITY,
    error::{Result, TraversalError},
    tracing_support::debug,
};

/// A LIFO stack that holds at most `capacity` items.
///
/// Pushing onto a full stack fails with [`TraversalError::Overflow`] and
/// leaves the contents untouched; popping or peeking an empty stack fails
/// with [`TraversalError::Underflow`].
#[derive(Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack of [`DEFAULT_STACK_CAPACITY`] items.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STACK_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            debug!(capacity = self.capacity, "stack is full");
            return Err(TraversalError::Overflow {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or_else(|| {
            debug!("stack is empty");
            TraversalError::Underflow
        })
    }

    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(TraversalError::Underflow)
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundedStack({}/{}) ", self.len(), self.capacity)?;
        f.debug_list().entries(self.items.iter()).finish()
    }
}
