//! FIFO Queue
//!
//! A queue is a [`BoundedDeque`] fed at the front and drained from the back:
//! `enqueue` prepends, `dequeue` pops and `head` peeks the last element, which
//! is always the oldest item.

use crate::deque::{BoundedDeque, Capacity};
use crate::metrics::{MetricsCollector, PerformanceMetrics};

/// A thread-safe first-in, first-out queue
///
/// # Examples
///
/// ```rust
/// use laney::Queue;
///
/// let queue = Queue::new();
/// queue.enqueue("first");
/// queue.enqueue("second");
///
/// assert_eq!(queue.head(), Some("first"));
/// assert_eq!(queue.dequeue(), Some("first"));
/// assert_eq!(queue.dequeue(), Some("second"));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug)]
pub struct Queue<T> {
    deque: BoundedDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue without a capacity limit
    pub fn new() -> Self {
        Self {
            deque: BoundedDeque::new(),
        }
    }

    /// Create an empty queue holding at most `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            deque: BoundedDeque::with_capacity(capacity),
        }
    }

    /// Add `item` behind every queued item; `false` when the queue is full
    pub fn enqueue(&self, item: T) -> bool {
        self.deque.prepend(item)
    }

    /// Take the oldest item
    pub fn dequeue(&self) -> Option<T> {
        self.deque.pop()
    }

    /// Number of items
    pub fn size(&self) -> usize {
        self.deque.size()
    }

    /// Whether the queue has no items
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Whether a bounded queue has reached its limit
    pub fn is_full(&self) -> bool {
        self.deque.is_full()
    }

    /// The capacity limit, or `None` when unbounded
    pub fn capacity(&self) -> Option<usize> {
        self.deque.capacity()
    }

    /// Remove every item
    pub fn clear(&self) {
        self.deque.clear();
    }

    /// The underlying deque; its back is the head of the queue
    pub fn as_deque(&self) -> &BoundedDeque<T> {
        &self.deque
    }
}

impl<T: Clone> Queue<T> {
    /// Clone of the oldest item
    pub fn head(&self) -> Option<T> {
        self.deque.last()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<BoundedDeque<T>> for Queue<T> {
    fn from(deque: BoundedDeque<T>) -> Self {
        Self { deque }
    }
}

impl<T> From<Capacity> for Queue<T> {
    fn from(limit: Capacity) -> Self {
        Self {
            deque: BoundedDeque::with_limit(limit),
        }
    }
}

impl<T> MetricsCollector for Queue<T> {
    fn metrics(&self) -> PerformanceMetrics {
        self.deque.metrics()
    }

    fn reset_metrics(&self) {
        self.deque.reset_metrics();
    }

    fn set_metrics_enabled(&self, enabled: bool) {
        self.deque.set_metrics_enabled(enabled);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.deque.is_metrics_enabled()
    }
}
