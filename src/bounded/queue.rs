use std::collections::VecDeque;
use std::fmt::Debug;

use crate::{
    config::DEFAULT_QUEUE_CAPACITY,
    error::{Result, TraversalError},
    tracing_support::debug,
};

/// A FIFO queue that holds at most `capacity` items.
///
/// Enqueueing into a full queue fails with [`TraversalError::Overflow`] and
/// leaves the contents untouched; dequeueing from an empty queue fails with
/// [`TraversalError::Underflow`].  Slots freed by dequeueing are reused, so
/// the bound applies to the number of items currently held.
#[derive(Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue of [`DEFAULT_QUEUE_CAPACITY`] items.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
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

    /// Appends `item` at the rear.
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            debug!(capacity = self.capacity, "queue is full");
            return Err(TraversalError::Overflow {
                capacity: self.capacity,
            });
        }
        self.items.push_back(item);
        Ok(())
    }

    /// Removes and returns the item at the front.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or_else(|| {
            debug!("queue is empty");
            TraversalError::Underflow
        })
    }

    /// Returns the item at the front without removing it.
    pub fn front(&self) -> Result<&T> {
        self.items.front().ok_or(TraversalError::Underflow)
    }

    /// Iterates over the queued items from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundedQueue({}/{}) ", self.len(), self.capacity)?;
        f.debug_list().entries(self.items.iter()).finish()
    }
}
