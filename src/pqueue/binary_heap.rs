//! Binary Heap Priority Queue Implementation
//!
//! Entries live in a contiguous array that encodes a complete binary tree:
//! the children of index `k` are `2k + 1` and `2k + 2`, its parent is
//! `(k - 1) / 2`. The root always holds the entry the configured
//! [`HeapOrder`] ranks highest.
//!
//! ## Heap repair
//!
//! - `push` appends at the end and swims the new entry up while it dominates
//!   its parent.
//! - `pop` swaps the root with the last entry, removes it, and sinks the new
//!   root towards the leaves, each step swapping with whichever child the
//!   ordering favours as long as that child dominates.
//!
//! Both walks consult [`HeapOrder::dominates`] and nothing else, so max and
//! min heaps share every line of the algorithm. Equal priorities never swap.
//!
//! ## Example
//!
//! ```rust
//! use laney::{HeapOrder, PriorityQueue};
//!
//! let pq = PriorityQueue::new(HeapOrder::Min);
//! pq.push("abc", 1);
//! pq.push("do re mi", 4);
//! pq.push("123", 2);
//! pq.push("easy as", 3);
//!
//! assert_eq!(pq.pop(), Some(("abc", 1)));
//! assert_eq!(pq.pop(), Some(("123", 2)));
//! assert_eq!(pq.pop(), Some(("easy as", 3)));
//! assert_eq!(pq.pop(), Some(("do re mi", 4)));
//! assert_eq!(pq.pop(), None);
//! ```

use crate::metrics::{AtomicMetrics, MetricsCollector, PerformanceMetrics};
use crate::util::write_tracked;
use crate::{Error, Result};
use core::fmt;
use log::{debug, trace};
use parking_lot::RwLock;
use std::time::Instant;

/// Which end of the priority range surfaces first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapOrder {
    /// Highest priority first
    Max,
    /// Lowest priority first
    Min,
}

impl HeapOrder {
    /// Whether priority `a` belongs strictly above priority `b`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laney::HeapOrder;
    ///
    /// assert!(HeapOrder::Max.dominates(5, 1));
    /// assert!(HeapOrder::Min.dominates(1, 5));
    /// assert!(!HeapOrder::Max.dominates(3, 3));
    /// ```
    #[inline]
    pub const fn dominates(self, a: i64, b: i64) -> bool {
        match self {
            HeapOrder::Max => a > b,
            HeapOrder::Min => a < b,
        }
    }
}

#[derive(Debug)]
struct Entry<T> {
    value: T,
    priority: i64,
}

impl<T> Entry<T> {
    fn into_pair(self) -> (T, i64) {
        (self.value, self.priority)
    }
}

/// Unsynchronized heap; [`PriorityQueue`] owns it behind its lock.
struct Heap<T> {
    entries: Vec<Entry<T>>,
    order: HeapOrder,
}

impl<T> Heap<T> {
    const fn new(order: HeapOrder) -> Self {
        Self {
            entries: Vec::new(),
            order,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn dominates(&self, i: usize, j: usize) -> bool {
        self.order
            .dominates(self.entries[i].priority, self.entries[j].priority)
    }

    fn push(&mut self, value: T, priority: i64) {
        self.entries.push(Entry { value, priority });
        self.swim(self.entries.len() - 1);
    }

    fn pop(&mut self) -> Option<Entry<T>> {
        let last = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, last);
        let top = self.entries.pop();
        self.sink(0);
        top
    }

    fn peek(&self) -> Option<&Entry<T>> {
        self.entries.first()
    }

    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.dominates(k, parent) {
                break;
            }
            self.entries.swap(k, parent);
            k = parent;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * k + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.dominates(right, left) {
                right
            } else {
                left
            };
            if !self.dominates(child, k) {
                break;
            }
            self.entries.swap(k, child);
            k = child;
        }
    }

    /// No child dominates its parent.
    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.entries.len()).all(|k| !self.dominates(k, (k - 1) / 2))
    }
}

/// A thread-safe binary-heap priority queue over `i64` priorities
///
/// # Type Parameters
///
/// * `T` - The type of values stored alongside their priorities
///
/// # Examples
///
/// ```rust
/// use laney::PriorityQueue;
///
/// let pq = PriorityQueue::max();
/// pq.push("low", 1);
/// pq.push("high", 10);
///
/// assert_eq!(pq.head(), Some(("high", 10)));
/// assert_eq!(pq.size(), 2);
/// ```
pub struct PriorityQueue<T> {
    heap: RwLock<Heap<T>>,
    metrics: AtomicMetrics,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue with the given ordering
    pub fn new(order: HeapOrder) -> Self {
        trace!("creating priority queue, order {:?}", order);
        Self {
            heap: RwLock::new(Heap::new(order)),
            metrics: AtomicMetrics::default(),
        }
    }

    /// Create an empty queue that surfaces the highest priority first
    pub fn max() -> Self {
        Self::new(HeapOrder::Max)
    }

    /// Create an empty queue that surfaces the lowest priority first
    pub fn min() -> Self {
        Self::new(HeapOrder::Min)
    }

    /// The ordering fixed at construction
    pub fn order(&self) -> HeapOrder {
        self.heap.read().order
    }

    /// Insert `value` with `priority`
    pub fn push(&self, value: T, priority: i64) {
        let start = Instant::now();
        let mut heap = write_tracked(&self.heap, &self.metrics);
        heap.push(value, priority);
        self.metrics.record_success(start.elapsed(), heap.len());
    }

    /// Insert every `(value, priority)` pair under a single write lock
    ///
    /// The iterator runs while the lock is held and must not touch this queue.
    /// Returns how many entries were inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laney::PriorityQueue;
    ///
    /// let pq = PriorityQueue::min();
    /// assert_eq!(pq.push_batch(vec![("b", 2), ("a", 1)]), 2);
    /// assert_eq!(pq.pop(), Some(("a", 1)));
    /// ```
    pub fn push_batch<I>(&self, entries: I) -> usize
    where
        I: IntoIterator<Item = (T, i64)>,
    {
        let start = Instant::now();
        let mut heap = write_tracked(&self.heap, &self.metrics);
        let mut pushed = 0;
        for (value, priority) in entries {
            heap.push(value, priority);
            pushed += 1;
        }
        if pushed > 0 {
            self.metrics.record_success(start.elapsed(), heap.len());
        }
        pushed
    }

    /// Remove and return the entry at the top of the heap
    pub fn pop(&self) -> Option<(T, i64)> {
        let start = Instant::now();
        let mut heap = write_tracked(&self.heap, &self.metrics);
        match heap.pop() {
            Some(entry) => {
                self.metrics.record_success(start.elapsed(), heap.len());
                Some(entry.into_pair())
            }
            None => {
                drop(heap);
                self.metrics.record_failure();
                None
            }
        }
    }

    /// Like [`pop`](Self::pop), reporting an empty queue as an error
    pub fn try_pop(&self) -> Result<(T, i64)> {
        self.pop().ok_or(Error::Empty)
    }

    /// Priority of the top entry, without cloning its value
    pub fn head_priority(&self) -> Option<i64> {
        self.heap.read().peek().map(|entry| entry.priority)
    }

    /// Number of entries
    pub fn size(&self) -> usize {
        self.heap.read().len()
    }

    /// Whether the queue has no entries
    pub fn is_empty(&self) -> bool {
        self.heap.read().len() == 0
    }

    /// Remove every entry
    ///
    /// Entries are dropped after the lock is released.
    pub fn clear(&self) {
        let discarded = {
            let mut heap = write_tracked(&self.heap, &self.metrics);
            self.metrics.record_len(0);
            core::mem::take(&mut heap.entries)
        };
        debug!("cleared priority queue, discarded {} entries", discarded.len());
    }

    /// Consume the queue, returning its entries in pop order
    pub fn into_sorted_vec(self) -> Vec<(T, i64)> {
        let mut heap = self.heap.into_inner();
        let mut sorted = Vec::with_capacity(heap.len());
        while let Some(entry) = heap.pop() {
            sorted.push(entry.into_pair());
        }
        sorted
    }

    #[cfg(test)]
    pub(crate) fn is_valid_heap(&self) -> bool {
        self.heap.read().is_valid()
    }
}

impl<T: Clone> PriorityQueue<T> {
    /// Clone of the top entry
    pub fn head(&self) -> Option<(T, i64)> {
        self.heap
            .read()
            .peek()
            .map(|entry| (entry.value.clone(), entry.priority))
    }
}

/// Zero-value accessors: `(T::default(), 0)` stands in for "empty"
impl<T: Default> PriorityQueue<T> {
    /// [`pop`](Self::pop), or `(T::default(), 0)` when empty
    pub fn pop_or_default(&self) -> (T, i64) {
        self.pop().unwrap_or_default()
    }
}

impl<T: Clone + Default> PriorityQueue<T> {
    /// [`head`](Self::head), or `(T::default(), 0)` when empty
    pub fn head_or_default(&self) -> (T, i64) {
        self.head().unwrap_or_default()
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heap = self.heap.read();
        f.debug_struct("PriorityQueue")
            .field("order", &heap.order)
            .field("len", &heap.len())
            .field("head", &heap.peek())
            .finish()
    }
}

impl<T> MetricsCollector for PriorityQueue<T> {
    fn metrics(&self) -> PerformanceMetrics {
        self.metrics.snapshot()
    }

    fn reset_metrics(&self) {
        self.metrics.reset();
    }

    fn set_metrics_enabled(&self, enabled: bool) {
        self.metrics.set_enabled(enabled);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics.is_enabled()
    }
}
