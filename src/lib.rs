#![deny(unsafe_op_in_unsafe_fn)]

// error taxonomy
pub mod error;

// logging setup (simplelog backend for the `log` facade)
pub mod logging;

// not concurrent
pub mod non_concurrent;

pub use error::{EmptyQueueError, Operation};
pub use non_concurrent::LinkedQueue;
