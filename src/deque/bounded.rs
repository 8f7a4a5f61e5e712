//! Bounded Deque Implementation
//!
//! A double-ended queue backed by a doubly linked chain and guarded by a
//! single [`parking_lot::RwLock`]. Every insert and removal at either end is
//! O(1) and never moves the other elements.
//!
//! ## Capacity
//!
//! A deque is either [`Capacity::Unbounded`] or [`Capacity::Bounded`] with a
//! fixed maximum length chosen at construction. A full bounded deque rejects
//! `append` and `prepend` immediately by returning `false`; nothing waits for
//! space to become available.
//!
//! ## Locking
//!
//! Mutations take the write lock; peeks and size queries take the read lock, so
//! readers never block each other. Methods never re-acquire the lock while
//! holding it.
//!
//! ## Example
//!
//! ```rust
//! use laney::BoundedDeque;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let deque = Arc::new(BoundedDeque::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let deque = Arc::clone(&deque);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 deque.append(t * 100 + i);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(deque.size(), 400);
//! ```

use super::chain::Chain;
use crate::metrics::{AtomicMetrics, MetricsCollector, PerformanceMetrics};
use crate::util::write_tracked;
use crate::{Error, Result};
use core::fmt;
use log::{debug, trace};
use parking_lot::RwLock;
use std::time::Instant;

/// Maximum length of a [`BoundedDeque`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capacity {
    /// At most this many elements. `Bounded(0)` is permanently full.
    Bounded(usize),
    /// No limit
    #[default]
    Unbounded,
}

impl Capacity {
    /// The limit, or `None` when unbounded
    #[inline]
    pub const fn max_len(self) -> Option<usize> {
        match self {
            Capacity::Bounded(max) => Some(max),
            Capacity::Unbounded => None,
        }
    }

    /// Whether a limit applies
    #[inline]
    pub const fn is_bounded(self) -> bool {
        matches!(self, Capacity::Bounded(_))
    }

    /// Whether a container currently holding `len` elements can take one more
    #[inline]
    pub const fn admits(self, len: usize) -> bool {
        match self {
            Capacity::Bounded(max) => len < max,
            Capacity::Unbounded => true,
        }
    }
}

impl From<Option<usize>> for Capacity {
    fn from(max_len: Option<usize>) -> Self {
        match max_len {
            Some(max) => Capacity::Bounded(max),
            None => Capacity::Unbounded,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum End {
    Front,
    Back,
}

/// A thread-safe double-ended queue with an optional capacity limit
///
/// # Type Parameters
///
/// * `T` - The type of elements stored in the deque
///
/// # Examples
///
/// ```rust
/// use laney::BoundedDeque;
///
/// let deque = BoundedDeque::with_capacity(4);
/// for name in ["John", "Paul", "George", "Ringo"] {
///     assert!(deque.append(name));
/// }
/// assert!(!deque.append("Stuart"));
/// assert_eq!(deque.size(), 4);
/// assert_eq!(deque.first(), Some("John"));
/// assert_eq!(deque.last(), Some("Ringo"));
/// ```
pub struct BoundedDeque<T> {
    chain: RwLock<Chain<T>>,
    limit: Capacity,
    metrics: AtomicMetrics,
}

impl<T> BoundedDeque<T> {
    /// Create an empty deque without a capacity limit
    pub fn new() -> Self {
        Self::with_limit(Capacity::Unbounded)
    }

    /// Create an empty deque holding at most `capacity` elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laney::BoundedDeque;
    ///
    /// let deque: BoundedDeque<u8> = BoundedDeque::with_capacity(8);
    /// assert_eq!(deque.capacity(), Some(8));
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_limit(Capacity::Bounded(capacity))
    }

    /// Create an empty deque with the given limit
    pub fn with_limit(limit: Capacity) -> Self {
        trace!("creating deque, limit {:?}", limit);
        Self {
            chain: RwLock::new(Chain::new()),
            limit,
            metrics: AtomicMetrics::default(),
        }
    }

    /// Insert `item` at the back
    ///
    /// Returns `false` and leaves the deque untouched when it is full.
    pub fn append(&self, item: T) -> bool {
        self.insert(End::Back, item)
    }

    /// Insert `item` at the front
    ///
    /// Returns `false` and leaves the deque untouched when it is full.
    pub fn prepend(&self, item: T) -> bool {
        self.insert(End::Front, item)
    }

    /// Like [`append`](Self::append), reporting a full deque as an error
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laney::{BoundedDeque, Error};
    ///
    /// let deque = BoundedDeque::with_capacity(1);
    /// deque.try_append(1)?;
    /// assert_eq!(deque.try_append(2), Err(Error::CapacityExceeded));
    /// # Ok::<(), laney::Error>(())
    /// ```
    pub fn try_append(&self, item: T) -> Result<()> {
        if self.append(item) {
            Ok(())
        } else {
            Err(Error::CapacityExceeded)
        }
    }

    /// Like [`prepend`](Self::prepend), reporting a full deque as an error
    pub fn try_prepend(&self, item: T) -> Result<()> {
        if self.prepend(item) {
            Ok(())
        } else {
            Err(Error::CapacityExceeded)
        }
    }

    /// Remove and return the back element
    pub fn pop(&self) -> Option<T> {
        self.remove(End::Back)
    }

    /// Remove and return the front element
    pub fn shift(&self) -> Option<T> {
        self.remove(End::Front)
    }

    /// Like [`pop`](Self::pop), reporting an empty deque as an error
    pub fn try_pop(&self) -> Result<T> {
        self.pop().ok_or(Error::Empty)
    }

    /// Like [`shift`](Self::shift), reporting an empty deque as an error
    pub fn try_shift(&self) -> Result<T> {
        self.shift().ok_or(Error::Empty)
    }

    /// Append items in order under a single write lock
    ///
    /// Stops when the deque fills up; the iterator is not advanced past that
    /// point, so passing `iter.by_ref()` leaves the rest for the caller.
    /// Returns how many items were appended.
    ///
    /// Stopping at capacity while the iterator's size hint still allows more
    /// items counts as one rejected insert.
    ///
    /// The iterator runs while the lock is held and must not touch this deque.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laney::BoundedDeque;
    ///
    /// let deque = BoundedDeque::with_capacity(3);
    /// let mut items = 1..=5;
    /// assert_eq!(deque.append_batch(items.by_ref()), 3);
    /// assert_eq!(items.next(), Some(4));
    /// ```
    pub fn append_batch<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let start = Instant::now();
        let mut chain = write_tracked(&self.chain, &self.metrics);
        let mut items = items.into_iter();
        let mut appended = 0;

        while self.limit.admits(chain.len()) {
            match items.next() {
                Some(item) => {
                    chain.push_back(item);
                    appended += 1;
                }
                None => break,
            }
        }

        if appended > 0 {
            self.metrics.record_success(start.elapsed(), chain.len());
        }
        if !self.limit.admits(chain.len()) && items.size_hint().1 != Some(0) {
            drop(chain);
            self.metrics.record_failure();
            trace!(
                "deque full at {:?}, batch stopped after {} items",
                self.limit,
                appended
            );
        }
        appended
    }

    /// Remove up to `max` elements from the front, in order, under a single write lock
    pub fn shift_batch(&self, max: usize) -> Vec<T> {
        let start = Instant::now();
        let mut chain = write_tracked(&self.chain, &self.metrics);
        let take = max.min(chain.len());
        let mut taken = Vec::with_capacity(take);

        while taken.len() < take {
            match chain.pop_front() {
                Some(item) => taken.push(item),
                None => break,
            }
        }

        if taken.is_empty() {
            if max > 0 {
                self.metrics.record_failure();
            }
        } else {
            self.metrics.record_success(start.elapsed(), chain.len());
        }
        taken
    }

    /// Remove every element
    ///
    /// Elements are dropped after the lock is released.
    pub fn clear(&self) {
        let discarded = {
            let mut chain = write_tracked(&self.chain, &self.metrics);
            self.metrics.record_len(0);
            core::mem::replace(&mut *chain, Chain::new())
        };
        debug!("cleared deque, discarded {} elements", discarded.len());
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.chain.read().len()
    }

    /// The capacity limit, or `None` when unbounded
    pub fn capacity(&self) -> Option<usize> {
        self.limit.max_len()
    }

    /// The capacity limit
    pub fn limit(&self) -> Capacity {
        self.limit
    }

    /// Whether the deque has no elements
    pub fn is_empty(&self) -> bool {
        self.chain.read().len() == 0
    }

    /// Whether a bounded deque has reached its limit; always `false` when unbounded
    pub fn is_full(&self) -> bool {
        !self.limit.admits(self.chain.read().len())
    }

    fn insert(&self, end: End, item: T) -> bool {
        let start = Instant::now();
        let mut chain = write_tracked(&self.chain, &self.metrics);

        if !self.limit.admits(chain.len()) {
            drop(chain);
            self.metrics.record_failure();
            trace!("deque full at {:?}, rejected {:?} insert", self.limit, end);
            return false;
        }

        match end {
            End::Front => chain.push_front(item),
            End::Back => chain.push_back(item),
        }
        self.metrics.record_success(start.elapsed(), chain.len());
        true
    }

    fn remove(&self, end: End) -> Option<T> {
        let start = Instant::now();
        let mut chain = write_tracked(&self.chain, &self.metrics);

        let item = match end {
            End::Front => chain.pop_front(),
            End::Back => chain.pop_back(),
        };
        match item {
            Some(_) => self.metrics.record_success(start.elapsed(), chain.len()),
            None => self.metrics.record_failure(),
        }
        item
    }

    #[cfg(test)]
    pub(crate) fn links_consistent(&self) -> bool {
        self.chain.read().links_consistent()
    }
}

impl<T: Clone> BoundedDeque<T> {
    /// Clone of the front element
    pub fn first(&self) -> Option<T> {
        self.chain.read().front().cloned()
    }

    /// Clone of the back element
    pub fn last(&self) -> Option<T> {
        self.chain.read().back().cloned()
    }

    /// Front-to-back copy of the contents
    pub fn to_vec(&self) -> Vec<T> {
        self.chain.read().iter().cloned().collect()
    }
}

/// Zero-value accessors: `T::default()` stands in for "empty"
impl<T: Default> BoundedDeque<T> {
    /// [`pop`](Self::pop), or `T::default()` when empty
    pub fn pop_or_default(&self) -> T {
        self.pop().unwrap_or_default()
    }

    /// [`shift`](Self::shift), or `T::default()` when empty
    pub fn shift_or_default(&self) -> T {
        self.shift().unwrap_or_default()
    }
}

impl<T: Clone + Default> BoundedDeque<T> {
    /// [`first`](Self::first), or `T::default()` when empty
    pub fn first_or_default(&self) -> T {
        self.first().unwrap_or_default()
    }

    /// [`last`](Self::last), or `T::default()` when empty
    pub fn last_or_default(&self) -> T {
        self.last().unwrap_or_default()
    }
}

impl<T> Default for BoundedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self.chain.read();
        f.debug_struct("BoundedDeque")
            .field("items", &chain.iter().collect::<Vec<_>>())
            .field("len", &chain.len())
            .field("limit", &self.limit)
            .finish()
    }
}

impl<T> MetricsCollector for BoundedDeque<T> {
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
