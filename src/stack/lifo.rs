//! LIFO Stack
//!
//! A stack is a [`BoundedDeque`] used from the front only: `push` prepends,
//! `pop` shifts and `head` peeks the first element. It carries no state of
//! its own, so it inherits the deque's locking and capacity behaviour.

use crate::deque::{BoundedDeque, Capacity};
use crate::metrics::{MetricsCollector, PerformanceMetrics};

/// A thread-safe last-in, first-out stack
///
/// # Examples
///
/// ```rust
/// use laney::Stack;
///
/// let stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.head(), Some(3));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug)]
pub struct Stack<T> {
    deque: BoundedDeque<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack without a capacity limit
    pub fn new() -> Self {
        Self {
            deque: BoundedDeque::new(),
        }
    }

    /// Create an empty stack holding at most `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            deque: BoundedDeque::with_capacity(capacity),
        }
    }

    /// Put `item` on top; `false` when the stack is full
    pub fn push(&self, item: T) -> bool {
        self.deque.prepend(item)
    }

    /// Take the top item
    pub fn pop(&self) -> Option<T> {
        self.deque.shift()
    }

    /// Number of items
    pub fn size(&self) -> usize {
        self.deque.size()
    }

    /// Whether the stack has no items
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Whether a bounded stack has reached its limit
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

    /// The underlying deque; its front is the top of the stack
    pub fn as_deque(&self) -> &BoundedDeque<T> {
        &self.deque
    }
}

impl<T: Clone> Stack<T> {
    /// Clone of the top item
    pub fn head(&self) -> Option<T> {
        self.deque.first()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<BoundedDeque<T>> for Stack<T> {
    fn from(deque: BoundedDeque<T>) -> Self {
        Self { deque }
    }
}

impl<T> From<Capacity> for Stack<T> {
    fn from(limit: Capacity) -> Self {
        Self {
            deque: BoundedDeque::with_limit(limit),
        }
    }
}

impl<T> MetricsCollector for Stack<T> {
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
