use std::fmt;

use thiserror::Error;


/// The queue operation that observed an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Pop,
    Front,
    Peek,
}

/// Returned by [`LinkedQueue::pop`](crate::LinkedQueue::pop) and the front
/// accessors when the queue holds no elements.
///
/// The queue is never modified by the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue is empty, could not {operation}")]
pub struct EmptyQueueError {
    pub operation: Operation,
}

impl EmptyQueueError {
    pub const fn new(operation: Operation) -> Self {
        Self { operation }
    }
}

// reads as the tail of "could not ..."
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Pop => "remove the first element",
            Operation::Front | Operation::Peek => "give the first element",
        })
    }
}
