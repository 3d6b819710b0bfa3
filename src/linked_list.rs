use std::fmt::Debug;
use std::mem;

use derivative::Derivative;

use crate::tracing_support::trace;

/// A node of a [`LinkedList`].  Owns the rest of the chain.
pub struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

/// A singly-linked list that grows at the front.
///
/// [`sort`](Self::sort) reorders values in place by exchanging them between
/// nodes; the nodes themselves never move, so node `k` of the chain is the
/// same allocation before and after sorting.
#[derive(Derivative)]
#[derivative(Default(bound = ""))]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Inserts `value` before the current head.
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Iterates over the nodes from the head.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            next: self.head.as_deref(),
        }
    }

    /// Iterates over the values from the head.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes().map(Node::value)
    }

    /// Sorts the values into non-decreasing order with a bubble sort.
    ///
    /// Each pass swaps adjacent out-of-order values and remembers where the
    /// last swap happened; everything from there on is already in place, so
    /// the next pass stops short of it.  Sorting ends after a pass with no
    /// swaps.  Equal values are never exchanged, which makes the sort
    /// stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        let mut bound = self.len;
        while bound > 1 {
            let mut last_swap = 0;
            let mut cursor = self.head.as_deref_mut();
            for position in 1..bound {
                let Some(node) = cursor else { break };
                let Some(next) = node.next.as_deref_mut() else {
                    break;
                };
                if node.value > next.value {
                    mem::swap(&mut node.value, &mut next.value);
                    last_swap = position;
                }
                cursor = Some(next);
            }
            trace!(bound, last_swap, "sort pass");
            bound = last_swap;
        }
        trace!(len = self.len, "sorted list");
    }

    pub fn is_sorted(&self) -> bool
    where
        T: Ord,
    {
        self.nodes()
            .all(|node| node.next().is_none_or(|next| node.value <= next.value))
    }
}

/// Builds a list by pushing each item at the front, so the list holds the
/// items in reverse.
impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter {
            list.push_front(value);
        }
        list
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the nodes of a [`LinkedList`].
pub struct Nodes<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}
