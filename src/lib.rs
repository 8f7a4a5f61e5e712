//! # laney
//!
//! Small, thread-safe container types for sharing work between threads.
//!
//! ## Containers
//!
//! - **BoundedDeque**: doubly linked double-ended queue with an optional hard capacity
//! - **PriorityQueue**: binary heap over integer priorities, max- or min-ordered
//! - **Stack**: LIFO view over a deque
//! - **Queue**: FIFO view over a deque
//!
//! ## Quick Start
//!
//! ```rust
//! use laney::{BoundedDeque, HeapOrder, PriorityQueue};
//!
//! let deque = BoundedDeque::with_capacity(2);
//! assert!(deque.append("a"));
//! assert!(deque.prepend("b"));
//! assert!(!deque.append("c")); // full
//! assert_eq!(deque.shift(), Some("b"));
//!
//! let pq = PriorityQueue::new(HeapOrder::Min);
//! pq.push("later", 5);
//! pq.push("sooner", 1);
//! assert_eq!(pq.pop(), Some(("sooner", 1)));
//! ```
//!
//! ## Thread Safety
//!
//! Each container guards its whole state with one reader/writer lock. Mutations
//! take the lock exclusively; peeks and size queries share it. No operation
//! waits for space or content: inserting into a full deque returns `false`,
//! removing from an empty container returns `None`.
//!
//! ## Empty results
//!
//! Removal and peek operations return `Option`. Callers that want the
//! zero-value behaviour (`T::default()` on empty, priority `0` for the heap)
//! can use the `*_or_default` variants, at the cost of not being able to tell
//! an empty container from a stored default value.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod deque;
pub mod metrics;
pub mod pqueue;
pub mod queue;
pub mod stack;

pub use crate::deque::{BoundedDeque, Capacity};
pub use crate::metrics::{MetricsCollector, PerformanceMetrics};
pub use crate::pqueue::{HeapOrder, PriorityQueue};
pub use crate::queue::Queue;
pub use crate::stack::Stack;

/// Locking helpers shared by the containers
pub(crate) mod util {
    use crate::metrics::AtomicMetrics;
    use parking_lot::{RwLock, RwLockWriteGuard};

    /// Take the write lock, counting a contended acquisition when another
    /// thread already holds it.
    #[inline]
    pub(crate) fn write_tracked<'a, S>(
        lock: &'a RwLock<S>,
        metrics: &AtomicMetrics,
    ) -> RwLockWriteGuard<'a, S> {
        match lock.try_write() {
            Some(guard) => guard,
            None => {
                metrics.record_contention();
                lock.write()
            }
        }
    }
}

/// Error types for laney operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Insert rejected because a bounded container is full
    CapacityExceeded,
    /// Nothing to remove
    Empty,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::CapacityExceeded => write!(f, "Container is at capacity"),
            Error::Empty => write!(f, "Container is empty"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for laney operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::CapacityExceeded.to_string(),
            "Container is at capacity"
        );
        assert_eq!(Error::Empty.to_string(), "Container is empty");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::Empty);
        assert_eq!(err.to_string(), "Container is empty");
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn test_write_tracked_records_contention() {
        use parking_lot::RwLock;
        use std::sync::Arc;
        use std::thread;

        let lock = Arc::new(RwLock::new(0u32));
        let metrics = Arc::new(metrics::AtomicMetrics::default());

        let reader = lock.read();
        let handle = {
            let lock = Arc::clone(&lock);
            let metrics = Arc::clone(&metrics);
            thread::spawn(move || {
                *util::write_tracked(&lock, &metrics) += 1;
            })
        };

        // The writer cannot get in while the read guard is alive.
        while metrics.snapshot().contended_operations == 0 {
            thread::yield_now();
        }
        drop(reader);
        handle.join().unwrap();

        assert_eq!(*lock.read(), 1);
        assert_eq!(metrics.snapshot().contended_operations, 1);
    }
}
