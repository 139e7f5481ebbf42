use std::fmt;

use log::{debug, trace};

use crate::error::{EmptyQueueError, Operation};


type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A queue backed by a singly-linked chain of owned nodes.
///
/// Both `push` and `pop` work on the head of the chain, so elements come back out
/// in last-in-first-out order: pushing `1, 2, 3` and then popping yields `3, 2, 1`.
///
/// Every node is owned by exactly one predecessor (the head by the queue itself), so
/// there is no aliasing and no cycles. Cloning, clearing and dropping all walk the
/// chain in a loop and never recurse, so arbitrarily long queues are fine.
pub struct LinkedQueue<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Complexity: O(1)
    pub fn len(&self) -> usize {
        self.len
    }

    /// Complexity: O(1)
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Links `value` in as the new head. The old head becomes its successor.
    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Unlinks the head node and hands its value back.
    ///
    /// Fails without touching the queue if it is empty.
    pub fn pop(&mut self) -> Result<T, EmptyQueueError> {
        let Some(node) = self.head.take() else {
            return Err(empty(Operation::Pop))
        };
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    /// Borrows the value at the head of the queue.
    pub fn peek(&self) -> Result<&T, EmptyQueueError> {
        match &self.head {
            Some(node) => Ok(&node.value),
            None => Err(empty(Operation::Peek)),
        }
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyQueueError> {
        match &mut self.head {
            Some(node) => Ok(&mut node.value),
            None => Err(empty(Operation::Peek)),
        }
    }

    /// Drops every node and resets to the empty state. A no-op on an empty queue.
    ///
    /// Complexity: O(n)
    pub fn clear(&mut self) {
        if self.head.is_some() {
            trace!("Releasing {} queue nodes", self.len);
        }
        self.len = 0;

        // unlink one node at a time so dropping a node never drops its successor
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    /// Moves the whole chain out into a new queue, leaving `self` empty.
    ///
    /// Complexity: O(1)
    pub fn take(&mut self) -> Self {
        trace!("Moving a chain of {} queue nodes", self.len);
        std::mem::take(self)
    }

    /// Releases the chain currently held by `self`, then takes ownership of `source`'s chain.
    /// `source` is left empty.
    ///
    /// Complexity: O(n) in the length of the released chain, O(1) in the length of `source`.
    pub fn move_from(&mut self, source: &mut Self) {
        self.clear();
        *self = source.take();
    }

    fn links(&self) -> Links<'_, T> {
        Links { next: self.head.as_deref() }
    }
}

impl<T: Clone> LinkedQueue<T> {
    /// Returns a copy of the value at the head of the queue.
    pub fn front(&self) -> Result<T, EmptyQueueError> {
        match &self.head {
            Some(node) => Ok(node.value.clone()),
            None => Err(empty(Operation::Front)),
        }
    }
}

fn empty(operation: Operation) -> EmptyQueueError {
    debug!("{operation:?} on an empty queue");
    EmptyQueueError::new(operation)
}

// Walks the chain front to back. Kept private: the queue exposes no traversal API.
struct Links<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Links<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    /// Deep copy: a new chain of equal length with equal values in equal order.
    ///
    /// Complexity: O(n)
    fn clone(&self) -> Self {
        trace!("Cloning a chain of {} queue nodes", self.len);
        let mut queue = Self::new();
        // NOTE: `queue` owns the partial chain the whole time, so a panicking `T::clone`
        //       still releases it through `Drop` rather than a recursive `Box` drop.
        let mut tail = &mut queue.head;
        for value in self.links() {
            let node = tail.insert(Box::new(Node { value: value.clone(), next: None }));
            tail = &mut node.next;
            queue.len += 1;
        }
        queue
    }

    /// Overwrites `self` with a deep copy of `source`, reusing `self`'s existing nodes.
    ///
    /// The result is the same as dropping `self`'s chain and cloning `source`.
    fn clone_from(&mut self, source: &Self) {
        trace!("Cloning a chain of {} queue nodes over {} existing ones", source.len, self.len);
        // the old chain becomes a pool of nodes to overwrite; whatever is left over drops with it
        let mut spare = Self { head: self.head.take(), len: std::mem::take(&mut self.len) };
        let mut tail = &mut self.head;
        for value in source.links() {
            let node = match spare.head.take() {
                Some(mut node) => {
                    spare.head = node.next.take();
                    spare.len -= 1;
                    node.value.clone_from(value);
                    node
                }
                None => Box::new(Node { value: value.clone(), next: None }),
            };
            tail = &mut tail.insert(node).next;
            self.len += 1;
        }
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    /// Pushes every item in order, so the last item ends up at the front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.links()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.links().eq(other.links())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}
